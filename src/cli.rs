use std::path::PathBuf;

use clap::Parser;

use openapi_spec::{config::Config, SpecOptions};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "openapi-spec",
    about = "Generate the org's OpenAPI spec by running OpenAPIParser in anonymous Apex",
    disable_version_flag = true
)]
pub struct Cli {
    /// Version number for the OpenAPI spec (falls back to project.package.version, then 1.0.0).
    #[arg(long)]
    pub version: Option<String>,

    /// Title for the OpenAPI spec (accepted, currently unused).
    #[arg(long)]
    pub title: Option<String>,

    /// Description for the OpenAPI spec (accepted, currently unused).
    #[arg(long)]
    pub description: Option<String>,

    /// Project file holding project.package.version.
    #[arg(long = "project-config", value_name = "PATH")]
    pub project_config: Option<PathBuf>,

    /// Org instance URL, e.g. https://acme.my.salesforce.com.
    #[arg(long = "instance-url", value_name = "URL")]
    pub instance_url: Option<String>,

    /// OAuth access token for the org.
    #[arg(long = "access-token", value_name = "TOKEN")]
    pub access_token: Option<String>,

    /// Salesforce API version, e.g. 62.0.
    #[arg(long = "api-version")]
    pub api_version: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Log request details.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Writes connection flags over the loaded config.
    pub fn apply(&self, cfg: &mut Config) {
        if let Some(v) = &self.instance_url {
            cfg.set("SF_INSTANCE_URL", v.as_str());
        }
        if let Some(v) = &self.access_token {
            cfg.set("SF_ACCESS_TOKEN", v.as_str());
        }
        if let Some(v) = &self.api_version {
            cfg.set("SF_API_VERSION", v.as_str());
        }
        if let Some(secs) = self.timeout {
            cfg.set("REQUEST_TIMEOUT", secs.to_string());
        }
        if let Some(path) = &self.project_config {
            cfg.set("PROJECT_CONFIG_PATH", path.to_string_lossy());
        }
        if self.verbose {
            cfg.set("VERBOSE", "true");
        }
    }

    pub fn spec_options(&self) -> SpecOptions {
        SpecOptions {
            version: self.version.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_version_is_a_task_option() {
        let cli = Cli::try_parse_from(["openapi-spec", "--version", "2.0.0", "--title", "Orders"]).unwrap();
        assert_eq!(cli.version.as_deref(), Some("2.0.0"));
        assert_eq!(cli.spec_options().title.as_deref(), Some("Orders"));
        assert!(cli.spec_options().description.is_none());
    }

    #[test]
    fn test_apply_overrides_config() {
        let cli = Cli::try_parse_from([
            "openapi-spec",
            "--instance-url",
            "https://acme.my.salesforce.com",
            "--timeout",
            "9",
            "-v",
        ])
        .unwrap();
        let mut cfg = Config::load_from(Path::new("/nonexistent"));
        cli.apply(&mut cfg);
        assert_eq!(cfg.get("SF_INSTANCE_URL").as_deref(), Some("https://acme.my.salesforce.com"));
        assert_eq!(cfg.request_timeout().as_secs(), 9);
        assert!(cfg.get_bool("VERBOSE"));
        assert!(cfg.get("SF_ACCESS_TOKEN").is_none());
    }
}
