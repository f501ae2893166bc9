//! Repositories API methods

use super::GitHubClient;
use crate::github::{
    error::GitHubError,
    types::{BranchProtectionRules, CreatedRepository, NewRepository, Permission},
};

impl GitHubClient {
    /// Create a repository inside an organization
    pub fn create_org_repository(
        &self,
        org: impl Into<String>,
        repository: NewRepository,
    ) -> crate::runtime::AsyncTask<Result<CreatedRepository, GitHubError>> {
        crate::github::create_repository::create_org_repository(self.inner.clone(), org, repository)
    }

    /// Create a repository for the authenticated user
    pub fn create_user_repository(
        &self,
        repository: NewRepository,
    ) -> crate::runtime::AsyncTask<Result<CreatedRepository, GitHubError>> {
        crate::github::create_repository::create_user_repository(self.inner.clone(), repository)
    }

    /// Add a collaborator with `permission`
    pub fn add_collaborator(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        username: impl Into<String>,
        permission: Permission,
    ) -> crate::runtime::AsyncTask<Result<(), GitHubError>> {
        crate::github::add_collaborator::add_collaborator(
            self.inner.clone(),
            owner,
            repo,
            username,
            permission,
        )
    }

    /// Replace all topics of a repository
    pub fn replace_all_topics(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        names: Vec<String>,
    ) -> crate::runtime::AsyncTask<Result<Vec<String>, GitHubError>> {
        crate::github::replace_topics::replace_all_topics(self.inner.clone(), owner, repo, names)
    }

    /// Replace the protection rules of a branch
    pub fn update_branch_protection(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
        rules: BranchProtectionRules,
    ) -> crate::runtime::AsyncTask<Result<(), GitHubError>> {
        crate::github::branch_protection::update_branch_protection(
            self.inner.clone(),
            owner,
            repo,
            branch,
            rules,
        )
    }
}
