//! Value types exchanged with the repository endpoints.

use octocrab::models::Repository;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Repository visibility as understood by GitHub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RepoVisibility {
    /// Only the owner and explicit collaborators can see it
    #[default]
    Private,
    /// Visible to every member of the enterprise
    Internal,
    /// Visible to everyone
    Public,
}

impl RepoVisibility {
    /// Returns the GitHub API string representation of this visibility.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Internal => "internal",
            Self::Public => "public",
        }
    }

    /// The boolean `private` flag GitHub still expects next to `visibility`.
    #[inline]
    #[must_use]
    pub const fn is_private(&self) -> bool {
        matches!(self, Self::Private)
    }
}

/// Permission level granted to a user or team on a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Pull,
    Push,
    Admin,
    Maintain,
    Triage,
}

impl Permission {
    /// Returns the GitHub API string representation of this permission.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pull => "pull",
            Self::Push => "push",
            Self::Admin => "admin",
            Self::Maintain => "maintain",
            Self::Triage => "triage",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of account that owns a repository.
///
/// Decides which creation endpoint is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Organization,
    PersonalAccount,
}

impl AccountKind {
    /// Map the `type` field of a `/users/{login}` response.
    ///
    /// Anything other than `Organization` is treated as a personal account.
    #[must_use]
    pub fn from_account_type(account_type: &str) -> Self {
        match account_type {
            "Organization" => Self::Organization,
            _ => Self::PersonalAccount,
        }
    }
}

/// Parameters for a repository creation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRepository {
    pub name: String,
    pub description: Option<String>,
    pub visibility: RepoVisibility,
}

impl NewRepository {
    pub fn new(name: impl Into<String>, visibility: RepoVisibility) -> Self {
        Self {
            name: name.into(),
            description: None,
            visibility,
        }
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Request body for `POST /orgs/{org}/repos`.
    #[must_use]
    pub fn org_payload(&self) -> Value {
        let mut body = self.user_payload();
        body["visibility"] = json!(self.visibility.as_str());
        body
    }

    /// Request body for `POST /user/repos`.
    ///
    /// Personal accounts only understand the `private` flag.
    #[must_use]
    pub fn user_payload(&self) -> Value {
        let mut body = json!({
            "name": self.name,
            "private": self.visibility.is_private(),
        });

        if let Some(desc) = &self.description {
            body["description"] = json!(desc);
        }
        body
    }
}

/// The subset of a created repository the scaffolder needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedRepository {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub clone_url: String,
}

impl From<Repository> for CreatedRepository {
    fn from(repository: Repository) -> Self {
        let full_name = repository
            .full_name
            .clone()
            .unwrap_or_else(|| repository.name.clone());

        let html_url = repository
            .html_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_default();

        let clone_url = repository
            .clone_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_default();

        Self {
            name: repository.name,
            full_name,
            html_url,
            clone_url,
        }
    }
}

/// Protection rules applied to a freshly created default branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BranchProtectionRules {
    require_code_owner_reviews: bool,
}

impl BranchProtectionRules {
    #[must_use]
    pub const fn new(require_code_owner_reviews: bool) -> Self {
        Self {
            require_code_owner_reviews,
        }
    }

    /// Request body for `PUT /repos/{owner}/{repo}/branches/{branch}/protection`.
    #[must_use]
    pub fn payload(&self) -> Value {
        json!({
            "required_status_checks": {
                "strict": true,
                "contexts": [],
            },
            "restrictions": null,
            "enforce_admins": true,
            "required_pull_request_reviews": {
                "required_approving_review_count": 1,
                "require_code_owner_reviews": self.require_code_owner_reviews,
            },
        })
    }
}
