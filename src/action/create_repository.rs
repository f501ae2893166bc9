//! `github:repo:create`: create a GitHub repository and configure access,
//! topics and default-branch protection.
//!
//! Creation and the single elevated access grant are fatal when they fail.
//! Collaborator grants, topics and branch protection are best-effort: a
//! failure is recorded as a [`StepWarning`] and the run carries on, so a
//! successful run can still leave a bare repository behind.

use super::branch_protection::enable_branch_protection_on_default_branch;
use super::context::{ActionContext, BestEffortStep, StepWarning};
use super::error::ActionResult;
use super::Action;
use crate::github::{
    AccountKind, ClientResolver, CreatedRepository, GitHubResult, NewRepository, Permission,
    RepoPlatform, RepoVisibility,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Action identifier
pub const GITHUB_REPO_CREATE: &str = "github:repo:create";

/// Branch used when the input names none
pub const DEFAULT_BRANCH: &str = "main";

/// Output holding the clone URL of the new repository
pub const OUTPUT_REMOTE_URL: &str = "remoteUrl";

/// Output holding the browse URL of the default branch
pub const OUTPUT_REPO_CONTENTS_URL: &str = "repoContentsUrl";

/// A user or team granted a permission level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Collaborator {
    /// The username or team slug to add
    pub username: String,
    /// The type of access for the user
    pub access: Permission,
}

/// Input accepted by `github:repo:create`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRepositoryInput {
    /// Repository location, e.g. `github.com?owner=octo-org&repo=widgets`
    pub repo_url: String,
    /// Repository description
    #[serde(default)]
    pub description: Option<String>,
    /// User or team (`<owner>/<team-slug>`) granted admin access
    #[serde(default)]
    pub access: Option<String>,
    /// Require a code owner review before merging to the default branch
    #[serde(default)]
    pub require_code_owner_reviews: Option<bool>,
    /// Visibility of the new repository
    pub repo_visibility: RepoVisibility,
    /// Default branch name, `main` when omitted
    #[serde(default)]
    pub default_branch: Option<String>,
    /// Additional users or teams and their access levels
    #[serde(default)]
    pub collaborators: Option<Vec<Collaborator>>,
    /// Repository topics
    #[serde(default)]
    pub topics: Option<Vec<String>>,
    /// Token used instead of the configured integration credentials
    #[serde(default)]
    pub token: Option<String>,
}

/// Output written by `github:repo:create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRepositoryOutput {
    /// A URL to the repository with the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,
    /// A URL to the root of the repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_contents_url: Option<String>,
}

/// Fully defaulted provisioning request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionRequest {
    pub repo_url: String,
    pub description: Option<String>,
    pub access: Option<String>,
    pub require_code_owner_reviews: bool,
    pub visibility: RepoVisibility,
    pub default_branch: String,
    pub collaborators: Vec<Collaborator>,
    pub topics: Option<Vec<String>>,
    pub token: Option<String>,
}

impl ProvisionRequest {
    /// Request for `repo_url` with every optional setting at its default.
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
            description: None,
            access: None,
            require_code_owner_reviews: false,
            visibility: RepoVisibility::default(),
            default_branch: DEFAULT_BRANCH.to_string(),
            collaborators: Vec::new(),
            topics: None,
            token: None,
        }
    }
}

impl From<CreateRepositoryInput> for ProvisionRequest {
    fn from(input: CreateRepositoryInput) -> Self {
        Self {
            repo_url: input.repo_url,
            description: input.description,
            access: input.access,
            require_code_owner_reviews: input.require_code_owner_reviews.unwrap_or(false),
            visibility: input.repo_visibility,
            default_branch: input
                .default_branch
                .unwrap_or_else(|| DEFAULT_BRANCH.to_string()),
            collaborators: input.collaborators.unwrap_or_default(),
            topics: input.topics,
            token: input.token,
        }
    }
}

/// Who receives admin access right after creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessGrant {
    /// Team slug within the owning organization
    Team(String),
    /// Individual user login
    User(String),
    /// The owner already has full access
    Owner,
}

impl AccessGrant {
    /// Classify `access` relative to `owner`.
    ///
    /// Only an `<owner>/` prefix selects a team; any other value that differs
    /// from the owner is taken as a username verbatim.
    #[must_use]
    pub fn for_principal(owner: &str, access: Option<&str>) -> Self {
        let Some(access) = access else {
            return Self::Owner;
        };

        if let Some(team_slug) = access
            .strip_prefix(owner)
            .and_then(|rest| rest.strip_prefix('/'))
        {
            Self::Team(team_slug.to_string())
        } else if access != owner {
            Self::User(access.to_string())
        } else {
            Self::Owner
        }
    }
}

/// URL browsing the default branch of `repository`.
///
/// Composed from the requested branch name; whether GitHub actually created
/// that branch is not checked.
#[must_use]
pub fn repo_contents_url(repository: &CreatedRepository, default_branch: &str) -> String {
    format!("{}/blob/{default_branch}", repository.html_url)
}

/// Values emitted by a successful provisioning run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionOutput {
    pub remote_url: String,
    pub repo_contents_url: String,
}

/// Run a best-effort step, turning its failure into a recorded warning.
async fn best_effort<T, F>(
    ctx: &mut ActionContext,
    step: BestEffortStep,
    target: impl Into<String>,
    work: F,
) -> Option<T>
where
    F: Future<Output = GitHubResult<T>>,
{
    match work.await {
        Ok(value) => Some(value),
        Err(e) => {
            ctx.record_warning(StepWarning {
                step,
                target: target.into(),
                message: e.to_string(),
            });
            None
        }
    }
}

/// Create `owner/repo` and apply the configuration in `request`.
///
/// Outputs are written to `ctx` only after every step has run; an error
/// from creation or from the admin access grant returns before any output
/// exists.
pub async fn provision_repository<P: RepoPlatform>(
    client: &P,
    owner: &str,
    repo: &str,
    request: &ProvisionRequest,
    ctx: &mut ActionContext,
) -> GitHubResult<ProvisionOutput> {
    let logger = ctx.logger();

    let new_repository =
        NewRepository::new(repo, request.visibility).description(request.description.clone());

    let created = match client.account_kind(owner).await? {
        AccountKind::Organization => {
            client
                .create_org_repository(owner, &new_repository)
                .await?
        }
        AccountKind::PersonalAccount => client.create_user_repository(&new_repository).await?,
    };
    logger.info(format_args!("Created repository {}", created.full_name));

    match AccessGrant::for_principal(owner, request.access.as_deref()) {
        AccessGrant::Team(team_slug) => {
            logger.debug(format_args!("Granting team {team_slug} admin access"));
            client
                .add_team_repo_permission(owner, &team_slug, owner, repo, Permission::Admin)
                .await?;
        }
        AccessGrant::User(username) => {
            logger.debug(format_args!("Granting {username} admin access"));
            client
                .add_collaborator(owner, repo, &username, Permission::Admin)
                .await?;
        }
        AccessGrant::Owner => {}
    }

    for collaborator in &request.collaborators {
        let Collaborator { username, access } = collaborator;
        best_effort(
            ctx,
            BestEffortStep::Collaborator,
            format!("{access} access for {username}"),
            client.add_team_repo_permission(owner, username, owner, repo, *access),
        )
        .await;
    }

    if let Some(topics) = request.topics.as_ref().filter(|topics| !topics.is_empty()) {
        let topics: Vec<String> = topics.iter().map(|topic| topic.to_lowercase()).collect();
        best_effort(
            ctx,
            BestEffortStep::Topics,
            topics.join(" "),
            client.replace_topics(owner, repo, &topics),
        )
        .await;
    }

    let output = ProvisionOutput {
        remote_url: created.clone_url.clone(),
        repo_contents_url: repo_contents_url(&created, &request.default_branch),
    };

    best_effort(
        ctx,
        BestEffortStep::BranchProtection,
        format!("{owner}/{repo}"),
        enable_branch_protection_on_default_branch(
            owner,
            client,
            repo,
            &logger,
            &request.default_branch,
            request.require_code_owner_reviews,
        ),
    )
    .await;

    ctx.output(OUTPUT_REMOTE_URL, output.remote_url.clone());
    ctx.output(OUTPUT_REPO_CONTENTS_URL, output.repo_contents_url.clone());
    Ok(output)
}

/// Creates a GitHub repository and configures it for a template run
#[derive(Debug, Clone)]
pub struct CreateRepositoryAction {
    resolver: ClientResolver,
}

impl CreateRepositoryAction {
    #[must_use]
    pub fn new(resolver: ClientResolver) -> Self {
        Self { resolver }
    }
}

impl Action for CreateRepositoryAction {
    type Input = CreateRepositoryInput;
    type Output = CreateRepositoryOutput;

    fn id() -> &'static str {
        GITHUB_REPO_CREATE
    }

    fn description() -> &'static str {
        "Creates a GitHub repository, grants access, sets topics and protects the default branch"
    }

    async fn execute(&self, input: Self::Input, ctx: &mut ActionContext) -> ActionResult<()> {
        let request = ProvisionRequest::from(input);
        let resolved = self
            .resolver
            .resolve(&request.repo_url, request.token.as_deref())?;

        provision_repository(
            &resolved.client,
            &resolved.owner,
            &resolved.repo,
            &request,
            ctx,
        )
        .await?;
        Ok(())
    }
}
