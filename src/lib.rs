//! `scaffolder_github` - GitHub repository provisioning for template runs
//!
//! This library provides the `github:repo:create` scaffolder action: it creates
//! a repository on GitHub (or GitHub Enterprise) through the octocrab crate,
//! grants admin and collaborator access, sets topics and protects the default
//! branch. Each GitHub endpoint is implemented in its own module and driven
//! through [`GitHubClient`].

// Module declarations
pub mod action;
pub mod config;
pub mod github;
pub mod runtime;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export GitHub client types
pub use github::{GitHubClient, GitHubClientBuilder};

// Re-export GitHub error types
pub use github::{GitHubError, GitHubResult};

// Re-export platform and resolution types
pub use github::{
    AccountKind, BranchProtectionRules, ClientResolver, CreatedRepository, NewRepository,
    Permission, RepoLocation, RepoPlatform, RepoVisibility, ResolveError, ResolvedRepository,
};

pub use config::{ConfigError, GitHubIntegrationConfig, ScaffolderConfig};

// Re-export the action surface
pub use action::{
    Action, ActionContext, ActionDescriptor, ActionError, ActionLogger, ActionRegistry,
    ActionReport, ActionResult, BestEffortStep, CreateRepositoryAction, GITHUB_REPO_CREATE,
    StepWarning,
};
pub use action::branch_protection::enable_branch_protection_on_default_branch;
pub use action::create_repository::{
    AccessGrant, Collaborator, CreateRepositoryInput, CreateRepositoryOutput, ProvisionOutput,
    ProvisionRequest, provision_repository,
};

/// Registry holding every action this crate provides
#[must_use]
pub fn default_registry(config: ScaffolderConfig) -> ActionRegistry {
    let mut registry = ActionRegistry::new();
    registry.register(CreateRepositoryAction::new(ClientResolver::new(config)));
    registry
}
