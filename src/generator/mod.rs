//! Triggers remote OpenAPI generation and checks the Apex outcome.

use tracing::{debug, info};

use crate::{
    error::GenerateError,
    execute::ExecuteAnonymousResult,
    project::ProjectConfig,
    tooling::ToolingClient,
};

pub const DEFAULT_VERSION: &str = "1.0.0";

/// Apex run on the org. Takes no arguments, so the resolved version never leaves this process.
pub const PARSE_CLASSES_APEX: &str = "OpenAPIParser.parseClasses();";

/// Task options as supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct SpecOptions {
    pub version: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Option first, then project package version, then `1.0.0`. Blank values count as unset.
pub fn resolve_version(option: Option<&str>, project_version: Option<&str>) -> String {
    [option, project_version]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or(DEFAULT_VERSION)
        .to_string()
}

pub struct SpecGenerator<'a> {
    client: &'a ToolingClient,
    project: &'a ProjectConfig,
}

impl<'a> SpecGenerator<'a> {
    pub fn new(client: &'a ToolingClient, project: &'a ProjectConfig) -> Self {
        Self { client, project }
    }

    pub async fn generate(&self, opts: &SpecOptions) -> Result<(), GenerateError> {
        let project_version = self.project.package_version();
        let version = resolve_version(opts.version.as_deref(), project_version.as_deref());

        // title/description are accepted but the Apex entry point has no parameters for them
        if opts.title.is_some() || opts.description.is_some() {
            debug!(title = ?opts.title, description = ?opts.description, "ignoring unused options");
        }

        info!("Generating OpenAPI spec with version {}", version);
        let body = self.client.execute_anonymous(PARSE_CLASSES_APEX).await?;

        ExecuteAnonymousResult::from_json(&body)?.classify()?;

        info!("OpenAPI spec generated successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_version_defaults() {
        assert_eq!(resolve_version(None, None), "1.0.0");
        assert_eq!(resolve_version(Some(""), None), "1.0.0");
        assert_eq!(resolve_version(Some("  "), Some("")), "1.0.0");
    }

    #[test]
    fn test_resolve_version_option_wins() {
        assert_eq!(resolve_version(Some("3.0.1"), Some("2.0")), "3.0.1");
        assert_eq!(resolve_version(Some("3.0.1"), None), "3.0.1");
    }

    #[test]
    fn test_resolve_version_falls_back_to_project() {
        assert_eq!(resolve_version(None, Some("2.0")), "2.0");
        assert_eq!(resolve_version(Some(" "), Some("2.0")), "2.0");
    }
}
