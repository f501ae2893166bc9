//! GitHub branch protection operation.

use crate::github::{
    error::GitHubError,
    types::BranchProtectionRules,
    util::{path_segment, spawn_task},
};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Replace the protection rules of a branch.
///
/// The branch must already exist; GitHub answers `404 Branch not found`
/// otherwise.
pub(crate) fn update_branch_protection(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    branch: impl Into<String>,
    rules: BranchProtectionRules,
) -> AsyncTask<Result<(), GitHubError>> {
    let (owner, repo, branch) = (owner.into(), repo.into(), branch.into());
    spawn_task(async move {
        let route = format!(
            "/repos/{}/{}/branches/{}/protection",
            path_segment(&owner),
            path_segment(&repo),
            path_segment(&branch),
        );

        let response = inner._put(route, Some(&rules.payload())).await?;
        octocrab::map_github_error(response)
            .await
            .map(drop)
            .map_err(GitHubError::from)
    })
}
