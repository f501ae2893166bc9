//! GitHub account lookup operation.

use crate::github::{
    error::GitHubError,
    types::AccountKind,
    util::{path_segment, spawn_task},
};
use crate::runtime::AsyncTask;
use log::debug;
use octocrab::Octocrab;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct AccountProfile {
    login: String,
    #[serde(rename = "type")]
    account_type: String,
}

/// Determine whether `login` is an organization or a personal account.
///
/// Calls `GET /users/{login}`, which answers for both kinds of account.
pub(crate) fn get_account_kind(
    inner: Arc<Octocrab>,
    login: impl Into<String>,
) -> AsyncTask<Result<AccountKind, GitHubError>> {
    let login = login.into();
    spawn_task(async move {
        let route = format!("/users/{}", path_segment(&login));
        let profile: AccountProfile = inner
            .get(route, None::<&()>)
            .await
            .map_err(GitHubError::from)?;

        let kind = AccountKind::from_account_type(&profile.account_type);
        debug!("Account {} resolved as {kind:?}", profile.login);
        Ok(kind)
    })
}
