//! GitHub repository topics operation.

use crate::github::{
    error::GitHubError,
    util::{path_segment, spawn_task},
};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct Topics {
    names: Vec<String>,
}

/// Replace every topic of a repository with `names`.
///
/// Returns the topic set GitHub stored.
pub(crate) fn replace_all_topics(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    names: Vec<String>,
) -> AsyncTask<Result<Vec<String>, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        let route = format!(
            "/repos/{}/{}/topics",
            path_segment(&owner),
            path_segment(&repo)
        );
        let body = serde_json::json!({ "names": names });

        let stored: Topics = inner
            .put(route, Some(&body))
            .await
            .map_err(GitHubError::from)?;
        Ok(stored.names)
    })
}
