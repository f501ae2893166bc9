//! GitHub Repository creation operations.

use crate::github::{
    error::GitHubError,
    types::{CreatedRepository, NewRepository},
    util::{path_segment, spawn_task},
};
use crate::runtime::AsyncTask;
use octocrab::{Octocrab, models::Repository};
use std::sync::Arc;

/// Create a repository owned by an organization.
pub(crate) fn create_org_repository(
    inner: Arc<Octocrab>,
    org: impl Into<String>,
    repository: NewRepository,
) -> AsyncTask<Result<CreatedRepository, GitHubError>> {
    let org = org.into();
    spawn_task(async move {
        let route = format!("/orgs/{}/repos", path_segment(&org));
        let created: Repository = inner
            .post(route, Some(&repository.org_payload()))
            .await
            .map_err(GitHubError::from)?;
        Ok(CreatedRepository::from(created))
    })
}

/// Create a repository for the authenticated user (user scope).
pub(crate) fn create_user_repository(
    inner: Arc<Octocrab>,
    repository: NewRepository,
) -> AsyncTask<Result<CreatedRepository, GitHubError>> {
    spawn_task(async move {
        let created: Repository = inner
            .post("/user/repos", Some(&repository.user_payload()))
            .await
            .map_err(GitHubError::from)?;
        Ok(CreatedRepository::from(created))
    })
}
