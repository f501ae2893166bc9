//! Scaffolder actions
//!
//! An action is a named step of a template run. It declares JSON schemas for
//! its input and output, receives input already validated against them, and
//! writes its outputs into an [`ActionContext`].

pub mod branch_protection;
pub mod context;
pub mod create_repository;
pub mod error;

pub use context::{ActionContext, ActionLogger, ActionReport, BestEffortStep, StepWarning};
pub use create_repository::{CreateRepositoryAction, GITHUB_REPO_CREATE};
pub use error::{ActionError, ActionResult};

use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

/// A scaffolder action
#[allow(async_fn_in_trait)]
pub trait Action {
    type Input: DeserializeOwned + JsonSchema;
    type Output: JsonSchema;

    /// Identifier templates use to invoke the action
    fn id() -> &'static str;

    fn description() -> &'static str;

    fn input_schema() -> Value {
        serde_json::to_value(schemars::schema_for!(Self::Input)).unwrap_or_default()
    }

    fn output_schema() -> Value {
        serde_json::to_value(schemars::schema_for!(Self::Output)).unwrap_or_default()
    }

    async fn execute(&self, input: Self::Input, ctx: &mut ActionContext) -> ActionResult<()>;
}

/// Public description of a registered action
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDescriptor {
    pub id: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
    pub output_schema: Value,
}

type BoxedRun<'a> = Pin<Box<dyn Future<Output = ActionResult<()>> + 'a>>;

/// Object-safe view of an [`Action`] working on raw JSON input
trait RegisteredAction {
    fn describe(&self) -> ActionDescriptor;
    fn run<'a>(&'a self, input: Value, ctx: &'a mut ActionContext) -> BoxedRun<'a>;
}

impl<A: Action> RegisteredAction for A {
    fn describe(&self) -> ActionDescriptor {
        ActionDescriptor {
            id: A::id(),
            description: A::description(),
            input_schema: A::input_schema(),
            output_schema: A::output_schema(),
        }
    }

    fn run<'a>(&'a self, input: Value, ctx: &'a mut ActionContext) -> BoxedRun<'a> {
        Box::pin(async move {
            let input = serde_json::from_value::<A::Input>(input).map_err(|source| {
                ActionError::InvalidInput {
                    action: A::id(),
                    source,
                }
            })?;
            self.execute(input, ctx).await
        })
    }
}

/// Actions available to a template run, keyed by id
#[derive(Default)]
pub struct ActionRegistry {
    actions: BTreeMap<&'static str, Box<dyn RegisteredAction>>,
}

impl ActionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `action`, replacing any action with the same id
    pub fn register<A: Action + 'static>(&mut self, action: A) -> &mut Self {
        self.actions.insert(A::id(), Box::new(action));
        self
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.actions.keys().copied()
    }

    #[must_use]
    pub fn describe(&self, id: &str) -> Option<ActionDescriptor> {
        self.actions.get(id).map(|action| action.describe())
    }

    /// Validate `input` and run the action registered under `id`
    pub async fn run(&self, id: &str, input: Value) -> ActionResult<ActionReport> {
        let (&action_id, action) = self
            .actions
            .get_key_value(id)
            .ok_or_else(|| ActionError::UnknownAction(id.to_string()))?;

        let mut ctx = ActionContext::new(action_id);
        ctx.logger().debug(format_args!("Running action {action_id}"));
        action.run(input, &mut ctx).await?;
        Ok(ctx.into_report())
    }
}
