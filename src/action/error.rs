//! Action error types

use crate::github::{GitHubError, ResolveError};
use thiserror::Error;

/// Errors that fail an action run
#[derive(Debug, Error)]
pub enum ActionError {
    /// Input did not match the action's schema
    #[error("Invalid input for {action}: {source}")]
    InvalidInput {
        action: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    GitHub(#[from] GitHubError),
}

/// Convenience result alias for action runs
pub type ActionResult<T> = Result<T, ActionError>;
