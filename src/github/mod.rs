//! GitHub API operations module
//!
//! Provides the repository provisioning endpoints using the octocrab library.

pub mod client;
pub mod error;
pub mod platform;
pub mod resolver;
pub mod types;
pub mod util;

// Re-export client types
pub use client::{GitHubClient, GitHubClientBuilder};

// Re-export error types
pub use error::{GitHubError, GitHubResult};
pub use util::spawn_task;

pub use platform::RepoPlatform;
pub use resolver::{ClientResolver, RepoLocation, ResolveError, ResolvedRepository};
pub use types::{
    AccountKind, BranchProtectionRules, CreatedRepository, NewRepository, Permission,
    RepoVisibility,
};

// GitHub API operations - Users (internal)
pub(crate) mod get_account;

// GitHub API operations - Repositories (internal)
pub(crate) mod add_collaborator;
pub(crate) mod branch_protection;
pub(crate) mod create_repository;
pub(crate) mod replace_topics;

// GitHub API operations - Teams (internal)
pub(crate) mod team_permission;
