//! GitHub team repository permission operation.

use crate::github::{
    error::GitHubError,
    types::Permission,
    util::{path_segment, spawn_task},
};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Add a repository to a team, or update the team's permission on it.
///
/// # Arguments
/// * `inner` - Octocrab client instance
/// * `org` - Organization that owns the team
/// * `team_slug` - Team slug within `org`
/// * `owner` - Repository owner
/// * `repo` - Repository name
/// * `permission` - Level granted to the team
///
/// # Notes
/// - GitHub answers `204 No Content`, so the raw response is only checked
///   for an error status
/// - Requires admin access to the repository and membership of `org`
pub(crate) fn add_or_update_team_repo_permission(
    inner: Arc<Octocrab>,
    org: impl Into<String>,
    team_slug: impl Into<String>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    permission: Permission,
) -> AsyncTask<Result<(), GitHubError>> {
    let (org, team_slug, owner, repo) = (org.into(), team_slug.into(), owner.into(), repo.into());
    spawn_task(async move {
        let route = format!(
            "/orgs/{}/teams/{}/repos/{}/{}",
            path_segment(&org),
            path_segment(&team_slug),
            path_segment(&owner),
            path_segment(&repo),
        );
        let body = serde_json::json!({ "permission": permission.as_str() });

        let response = inner._put(route, Some(&body)).await?;
        octocrab::map_github_error(response)
            .await
            .map(drop)
            .map_err(GitHubError::from)
    })
}
