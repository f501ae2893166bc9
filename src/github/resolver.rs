//! Credential and client resolution for scaffolder repository locations.
//!
//! A repository location has the form `<host>?owner=<owner>&repo=<repo>`,
//! e.g. `github.com?owner=octo-org&repo=widgets`.

use crate::config::ScaffolderConfig;
use crate::github::{client::GitHubClient, error::GitHubError};
use log::debug;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable consulted when neither the action input nor the
/// integration config carries a token.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Errors raised while turning a repository location into a client
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Invalid repo URL '{0}': expected <host>?owner=<owner>&repo=<repo>")]
    InvalidRepoUrl(String),

    #[error("Invalid repo URL '{repo_url}': missing {param}")]
    MissingParameter {
        param: &'static str,
        repo_url: String,
    },

    #[error("No GitHub integration configured for host {0}")]
    UnknownHost(String),

    #[error("No token available for host {0}")]
    MissingCredentials(String),

    #[error(transparent)]
    Client(#[from] GitHubError),
}

/// Parsed repository location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLocation {
    pub host: String,
    pub owner: String,
    pub repo: String,
}

impl FromStr for RepoLocation {
    type Err = ResolveError;

    fn from_str(repo_url: &str) -> Result<Self, Self::Err> {
        let invalid = || ResolveError::InvalidRepoUrl(repo_url.to_string());

        let (host, query) = repo_url.split_once('?').ok_or_else(invalid)?;
        if host.is_empty() || host.contains('/') {
            return Err(invalid());
        }

        let mut owner = None;
        let mut repo = None;
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = urlencoding::decode(value).map_err(|_| invalid())?;
            match key {
                "owner" => owner = Some(value.into_owned()),
                "repo" => repo = Some(value.into_owned()),
                _ => {}
            }
        }

        let missing = |param| ResolveError::MissingParameter {
            param,
            repo_url: repo_url.to_string(),
        };
        let owner = owner.filter(|o| !o.is_empty()).ok_or_else(|| missing("owner"))?;
        let repo = repo.filter(|r| !r.is_empty()).ok_or_else(|| missing("repo"))?;

        Ok(Self {
            host: host.to_string(),
            owner,
            repo,
        })
    }
}

/// An authenticated client bound to one target repository
#[derive(Debug, Clone)]
pub struct ResolvedRepository {
    pub client: GitHubClient,
    pub owner: String,
    pub repo: String,
}

/// Resolves repository locations into authenticated clients
#[derive(Debug, Clone)]
pub struct ClientResolver {
    config: ScaffolderConfig,
    env_token: Option<String>,
}

impl ClientResolver {
    /// Resolver over `config`, falling back to `GITHUB_TOKEN` from the environment
    #[must_use]
    pub fn new(config: ScaffolderConfig) -> Self {
        let env_token = std::env::var(GITHUB_TOKEN_ENV)
            .ok()
            .filter(|token| !token.is_empty());
        Self { config, env_token }
    }

    /// Override the environment fallback token
    #[must_use]
    pub fn with_env_token(mut self, token: Option<String>) -> Self {
        self.env_token = token;
        self
    }

    /// Pick the token for `location`.
    ///
    /// Precedence: explicit token, integration token, environment.
    pub fn token_for(
        &self,
        location: &RepoLocation,
        explicit: Option<&str>,
    ) -> Result<String, ResolveError> {
        let integration = self
            .config
            .github_integration(&location.host)
            .ok_or_else(|| ResolveError::UnknownHost(location.host.clone()))?;

        explicit
            .map(str::to_string)
            .or(integration.token)
            .or_else(|| self.env_token.clone())
            .ok_or_else(|| ResolveError::MissingCredentials(location.host.clone()))
    }

    /// Turn `repo_url` into a client plus the owner/repo pair it targets
    pub fn resolve(
        &self,
        repo_url: &str,
        token: Option<&str>,
    ) -> Result<ResolvedRepository, ResolveError> {
        let location: RepoLocation = repo_url.parse()?;
        let token = self.token_for(&location, token)?;
        let integration = self
            .config
            .github_integration(&location.host)
            .ok_or_else(|| ResolveError::UnknownHost(location.host.clone()))?;

        let api_base_url = integration.api_base_url();
        debug!(
            "Resolved {}/{} on {} via {api_base_url}",
            location.owner, location.repo, location.host
        );

        let client = GitHubClient::builder()
            .personal_token(token)
            .base_uri(api_base_url)
            .build()?;

        Ok(ResolvedRepository {
            client,
            owner: location.owner,
            repo: location.repo,
        })
    }
}
