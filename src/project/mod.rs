//! Project settings read from `cumulusci.yml`.

use std::{fs, io, path::{Path, PathBuf}};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("failed to read project config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse project config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    project: Option<ProjectSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ProjectSection {
    #[serde(default)]
    package: Option<PackageSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PackageSection {
    #[serde(default)]
    version: Option<serde_yaml::Value>,
}

impl ProjectConfig {
    /// A missing file is an empty project, not an error.
    pub fn load(path: &Path) -> Result<Self, ProjectError> {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ProjectError::Read { path: path.to_path_buf(), source });
            }
        };
        Self::from_yaml(&text).map_err(|source| ProjectError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// `project.package.version`; numeric scalars are rendered via the YAML number, so `1.10` becomes `1.1`.
    pub fn package_version(&self) -> Option<String> {
        let value = self.project.as_ref()?.package.as_ref()?.version.as_ref()?;
        let version = match value {
            serde_yaml::Value::String(s) => s.trim().to_string(),
            serde_yaml::Value::Number(n) => n.to_string(),
            _ => return None,
        };
        (!version.is_empty()).then_some(version)
    }
}
