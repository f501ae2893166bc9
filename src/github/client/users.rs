//! Users API methods

use super::GitHubClient;
use crate::github::{error::GitHubError, types::AccountKind};

impl GitHubClient {
    /// Look up whether `login` is an organization or a personal account
    pub fn get_account_kind(
        &self,
        login: impl Into<String>,
    ) -> crate::runtime::AsyncTask<Result<AccountKind, GitHubError>> {
        crate::github::get_account::get_account_kind(self.inner.clone(), login)
    }
}
