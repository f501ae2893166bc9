//! GitHub repository collaborator operation.

use crate::github::{
    error::GitHubError,
    types::Permission,
    util::{path_segment, spawn_task},
};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Invite a user as collaborator, or update an existing collaborator's permission.
pub(crate) fn add_collaborator(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    username: impl Into<String>,
    permission: Permission,
) -> AsyncTask<Result<(), GitHubError>> {
    let (owner, repo, username) = (owner.into(), repo.into(), username.into());
    spawn_task(async move {
        // 201 carries an invitation body, 204 means the user already had access.
        let route = format!(
            "/repos/{}/{}/collaborators/{}",
            path_segment(&owner),
            path_segment(&repo),
            path_segment(&username),
        );
        let body = serde_json::json!({ "permission": permission.as_str() });

        let response = inner._put(route, Some(&body)).await?;
        octocrab::map_github_error(response)
            .await
            .map(drop)
            .map_err(GitHubError::from)
    })
}
