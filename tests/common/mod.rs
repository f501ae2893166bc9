//! Recording `RepoPlatform` double used by action tests.

#![allow(dead_code)]

use scaffolder_github::{
    AccountKind, BranchProtectionRules, CreatedRepository, GitHubError, GitHubResult,
    NewRepository, Permission, RepoPlatform,
};
use std::collections::HashSet;
use std::sync::Mutex;

/// One platform call, in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    AccountKind(String),
    CreateOrgRepository {
        org: String,
        repository: NewRepository,
    },
    CreateUserRepository {
        repository: NewRepository,
    },
    TeamPermission {
        org: String,
        team_slug: String,
        owner: String,
        repo: String,
        permission: Permission,
    },
    Collaborator {
        owner: String,
        repo: String,
        username: String,
        permission: Permission,
    },
    ReplaceTopics {
        owner: String,
        repo: String,
        topics: Vec<String>,
    },
    BranchProtection {
        owner: String,
        repo: String,
        branch: String,
        rules: BranchProtectionRules,
    },
}

/// Error shaped the way a non-success GitHub answer is reported
pub fn api_error(status: u16, message: impl Into<String>) -> GitHubError {
    GitHubError::Api {
        status,
        message: message.into(),
    }
}

pub struct MockPlatform {
    kind: AccountKind,
    html_url: String,
    clone_url: String,
    fail_create: bool,
    fail_access_grant: bool,
    failing_teams: HashSet<String>,
    fail_topics: bool,
    protection_error: Option<String>,
    calls: Mutex<Vec<Call>>,
}

impl MockPlatform {
    pub fn new(kind: AccountKind) -> Self {
        Self {
            kind,
            html_url: "https://github.com/acme/widgets".to_string(),
            clone_url: "https://github.com/acme/widgets.git".to_string(),
            fail_create: false,
            fail_access_grant: false,
            failing_teams: HashSet::new(),
            fail_topics: false,
            protection_error: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn organization() -> Self {
        Self::new(AccountKind::Organization)
    }

    pub fn personal() -> Self {
        Self::new(AccountKind::PersonalAccount)
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn failing_access_grant(mut self) -> Self {
        self.fail_access_grant = true;
        self
    }

    pub fn failing_team(mut self, slug: &str) -> Self {
        self.failing_teams.insert(slug.to_string());
        self
    }

    pub fn failing_topics(mut self) -> Self {
        self.fail_topics = true;
        self
    }

    pub fn failing_protection(mut self, message: &str) -> Self {
        self.protection_error = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn created(&self, repository: &NewRepository) -> CreatedRepository {
        CreatedRepository {
            name: repository.name.clone(),
            full_name: format!("acme/{}", repository.name),
            html_url: self.html_url.clone(),
            clone_url: self.clone_url.clone(),
        }
    }
}

impl RepoPlatform for MockPlatform {
    async fn account_kind(&self, login: &str) -> GitHubResult<AccountKind> {
        self.record(Call::AccountKind(login.to_string()));
        Ok(self.kind)
    }

    async fn create_org_repository(
        &self,
        org: &str,
        repository: &NewRepository,
    ) -> GitHubResult<CreatedRepository> {
        self.record(Call::CreateOrgRepository {
            org: org.to_string(),
            repository: repository.clone(),
        });
        if self.fail_create {
            return Err(api_error(422, "name already exists on this account"));
        }
        Ok(self.created(repository))
    }

    async fn create_user_repository(
        &self,
        repository: &NewRepository,
    ) -> GitHubResult<CreatedRepository> {
        self.record(Call::CreateUserRepository {
            repository: repository.clone(),
        });
        if self.fail_create {
            return Err(api_error(422, "name already exists on this account"));
        }
        Ok(self.created(repository))
    }

    async fn add_team_repo_permission(
        &self,
        org: &str,
        team_slug: &str,
        owner: &str,
        repo: &str,
        permission: Permission,
    ) -> GitHubResult<()> {
        self.record(Call::TeamPermission {
            org: org.to_string(),
            team_slug: team_slug.to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            permission,
        });
        if self.failing_teams.contains(team_slug) {
            return Err(api_error(404, format!("team {team_slug} not found")));
        }
        if self.fail_access_grant && permission == Permission::Admin {
            return Err(api_error(403, "must have admin rights"));
        }
        Ok(())
    }

    async fn add_collaborator(
        &self,
        owner: &str,
        repo: &str,
        username: &str,
        permission: Permission,
    ) -> GitHubResult<()> {
        self.record(Call::Collaborator {
            owner: owner.to_string(),
            repo: repo.to_string(),
            username: username.to_string(),
            permission,
        });
        if self.fail_access_grant {
            return Err(api_error(404, format!("user {username} not found")));
        }
        Ok(())
    }

    async fn replace_topics(
        &self,
        owner: &str,
        repo: &str,
        topics: &[String],
    ) -> GitHubResult<Vec<String>> {
        self.record(Call::ReplaceTopics {
            owner: owner.to_string(),
            repo: repo.to_string(),
            topics: topics.to_vec(),
        });
        if self.fail_topics {
            return Err(api_error(422, "Invalid topic name"));
        }
        Ok(topics.to_vec())
    }

    async fn update_branch_protection(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        rules: &BranchProtectionRules,
    ) -> GitHubResult<()> {
        self.record(Call::BranchProtection {
            owner: owner.to_string(),
            repo: repo.to_string(),
            branch: branch.to_string(),
            rules: *rules,
        });
        match &self.protection_error {
            Some(message) => Err(api_error(403, message.clone())),
            None => Ok(()),
        }
    }
}
