//! Scaffolder configuration
//!
//! Loaded from a YAML file shaped like the `integrations` section of an
//! app-config:
//!
//! ```yaml
//! integrations:
//!   github:
//!     - host: github.com
//!       token: ghp_...
//!     - host: ghe.example.com
//!       apiBaseUrl: https://ghe.example.com/api/v3
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Public GitHub host, always usable even when not listed in the config.
pub const DEFAULT_GITHUB_HOST: &str = "github.com";

/// REST API root of the public GitHub host.
pub const DEFAULT_GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Top-level scaffolder configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScaffolderConfig {
    #[serde(default)]
    pub integrations: IntegrationsConfig,
}

/// Source-control integrations keyed by provider
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntegrationsConfig {
    #[serde(default)]
    pub github: Vec<GitHubIntegrationConfig>,
}

/// One GitHub (or GitHub Enterprise) host
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubIntegrationConfig {
    pub host: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub api_base_url: Option<String>,
}

impl GitHubIntegrationConfig {
    /// Integration for `host` with no explicit settings.
    pub fn for_host(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            token: None,
            api_base_url: None,
        }
    }

    /// REST API root for this host.
    ///
    /// Enterprise hosts serve the API under `/api/v3` unless configured otherwise.
    #[must_use]
    pub fn api_base_url(&self) -> String {
        match &self.api_base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None if self.host == DEFAULT_GITHUB_HOST => DEFAULT_GITHUB_API_BASE_URL.to_string(),
            None => format!("https://{}/api/v3", self.host),
        }
    }
}

impl ScaffolderConfig {
    /// Read and parse a YAML config file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_yaml_str(&raw)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        // An empty document is a valid, empty config.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Integration settings for `host`.
    ///
    /// `github.com` is always available; other hosts must be configured.
    #[must_use]
    pub fn github_integration(&self, host: &str) -> Option<GitHubIntegrationConfig> {
        self.integrations
            .github
            .iter()
            .find(|integration| integration.host.eq_ignore_ascii_case(host))
            .cloned()
            .or_else(|| {
                (host.eq_ignore_ascii_case(DEFAULT_GITHUB_HOST))
                    .then(|| GitHubIntegrationConfig::for_host(DEFAULT_GITHUB_HOST))
            })
    }
}
