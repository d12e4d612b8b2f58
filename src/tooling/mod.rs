//! Authenticated client for the Salesforce Tooling REST API.

use reqwest::{Client, Method};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

const DEFAULT_API_VERSION: &str = "62.0";

#[derive(Debug, Error)]
pub enum ToolingError {
    #[error("missing {0}; set it in the environment, the rc file, or on the command line")]
    MissingSetting(&'static str),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Tooling API request failed: {status} - {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Debug, Clone)]
pub struct ToolingClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl ToolingClient {
    pub fn from_config(cfg: &Config) -> Result<Self, ToolingError> {
        let instance_url = cfg
            .get("SF_INSTANCE_URL")
            .ok_or(ToolingError::MissingSetting("SF_INSTANCE_URL"))?;
        let access_token = cfg
            .get("SF_ACCESS_TOKEN")
            .ok_or(ToolingError::MissingSetting("SF_ACCESS_TOKEN"))?;
        let api_version = cfg
            .get("SF_API_VERSION")
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let client = Client::builder().timeout(cfg.request_timeout()).build()?;

        Ok(Self {
            client,
            base_url: tooling_base_url(&instance_url, &api_version),
            access_token,
        })
    }

    /// Always ends with `/`, so paths are appended directly.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one request and returns the body text of a 2xx response.
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<String, ToolingError> {
        let url = format!("{}{}", self.base_url, path.trim_start_matches('/'));
        debug!(%method, %url, "tooling request");

        let resp = self
            .client
            .request(method, &url)
            .bearer_auth(&self.access_token)
            .query(params)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(ToolingError::Status { status, body });
        }
        Ok(body)
    }

    pub async fn execute_anonymous(&self, apex: &str) -> Result<String, ToolingError> {
        self.call(Method::GET, "executeAnonymous", &[("anonymousBody", apex)])
            .await
    }
}

fn tooling_base_url(instance_url: &str, api_version: &str) -> String {
    let version = api_version.trim().trim_start_matches(['v', 'V']);
    format!(
        "{}/services/data/v{}/tooling/",
        instance_url.trim().trim_end_matches('/'),
        version
    )
}
