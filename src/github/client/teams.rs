//! Teams API methods

use super::GitHubClient;
use crate::github::{error::GitHubError, types::Permission};

impl GitHubClient {
    /// Grant a team `permission` on a repository
    pub fn add_or_update_team_repo_permission(
        &self,
        org: impl Into<String>,
        team_slug: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        permission: Permission,
    ) -> crate::runtime::AsyncTask<Result<(), GitHubError>> {
        crate::github::team_permission::add_or_update_team_repo_permission(
            self.inner.clone(),
            org,
            team_slug,
            owner,
            repo,
            permission,
        )
    }
}
