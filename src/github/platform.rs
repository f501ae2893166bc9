//! The set of platform operations repository provisioning depends on.
//!
//! `GitHubClient` is the production implementation; anything else that can
//! answer these calls (an Enterprise proxy, a recording double) can drive the
//! same provisioning logic.

use crate::github::{
    client::GitHubClient,
    error::GitHubResult,
    types::{AccountKind, BranchProtectionRules, CreatedRepository, NewRepository, Permission},
};

/// Repository, team, collaborator and topic endpoints of a hosted platform.
#[allow(async_fn_in_trait)]
pub trait RepoPlatform {
    /// Organization or personal account behind `login`.
    async fn account_kind(&self, login: &str) -> GitHubResult<AccountKind>;

    async fn create_org_repository(
        &self,
        org: &str,
        repository: &NewRepository,
    ) -> GitHubResult<CreatedRepository>;

    async fn create_user_repository(
        &self,
        repository: &NewRepository,
    ) -> GitHubResult<CreatedRepository>;

    async fn add_team_repo_permission(
        &self,
        org: &str,
        team_slug: &str,
        owner: &str,
        repo: &str,
        permission: Permission,
    ) -> GitHubResult<()>;

    async fn add_collaborator(
        &self,
        owner: &str,
        repo: &str,
        username: &str,
        permission: Permission,
    ) -> GitHubResult<()>;

    /// Replaces the whole topic set; returns what the platform stored.
    async fn replace_topics(
        &self,
        owner: &str,
        repo: &str,
        topics: &[String],
    ) -> GitHubResult<Vec<String>>;

    async fn update_branch_protection(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        rules: &BranchProtectionRules,
    ) -> GitHubResult<()>;
}

impl RepoPlatform for GitHubClient {
    async fn account_kind(&self, login: &str) -> GitHubResult<AccountKind> {
        self.get_account_kind(login).await?
    }

    async fn create_org_repository(
        &self,
        org: &str,
        repository: &NewRepository,
    ) -> GitHubResult<CreatedRepository> {
        GitHubClient::create_org_repository(self, org, repository.clone()).await?
    }

    async fn create_user_repository(
        &self,
        repository: &NewRepository,
    ) -> GitHubResult<CreatedRepository> {
        GitHubClient::create_user_repository(self, repository.clone()).await?
    }

    async fn add_team_repo_permission(
        &self,
        org: &str,
        team_slug: &str,
        owner: &str,
        repo: &str,
        permission: Permission,
    ) -> GitHubResult<()> {
        self.add_or_update_team_repo_permission(org, team_slug, owner, repo, permission)
            .await?
    }

    async fn add_collaborator(
        &self,
        owner: &str,
        repo: &str,
        username: &str,
        permission: Permission,
    ) -> GitHubResult<()> {
        GitHubClient::add_collaborator(self, owner, repo, username, permission).await?
    }

    async fn replace_topics(
        &self,
        owner: &str,
        repo: &str,
        topics: &[String],
    ) -> GitHubResult<Vec<String>> {
        self.replace_all_topics(owner, repo, topics.to_vec()).await?
    }

    async fn update_branch_protection(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        rules: &BranchProtectionRules,
    ) -> GitHubResult<()> {
        GitHubClient::update_branch_protection(self, owner, repo, branch, *rules).await?
    }
}
