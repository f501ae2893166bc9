//! GitHub API error types

use thiserror::Error;

/// Error types for GitHub API operations
#[derive(Debug, Error)]
pub enum GitHubError {
    /// GitHub answered with a non-success status
    #[error("GitHub API error: {message} ({status})")]
    Api { status: u16, message: String },

    /// Octocrab failed before GitHub answered (transport, decoding, URI)
    #[error("Octocrab error: {message}")]
    Octocrab {
        message: String,
        #[source]
        source: octocrab::Error,
    },

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),

    /// The background task driving a request went away before answering
    #[error("Task channel error: {0}")]
    TaskChannel(#[from] tokio::sync::oneshot::error::RecvError),
}

/// Convenience result alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;

impl GitHubError {
    /// The message GitHub sent with a non-success answer
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// HTTP status of a non-success answer
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<octocrab::Error> for GitHubError {
    fn from(error: octocrab::Error) -> Self {
        match error {
            octocrab::Error::GitHub { source, .. } => {
                let mut message = source.message.clone();
                // Validation failures carry the useful part in `errors`
                let details: Vec<String> = source
                    .errors
                    .iter()
                    .flatten()
                    .map(|detail| match detail.get("message").and_then(|m| m.as_str()) {
                        Some(text) => text.to_string(),
                        None => detail.to_string(),
                    })
                    .collect();
                if !details.is_empty() {
                    message = format!("{message}: {}", details.join("; "));
                }
                GitHubError::Api {
                    status: source.status_code.as_u16(),
                    message,
                }
            }
            other => GitHubError::Octocrab {
                message: error_chain(&other),
                source: other,
            },
        }
    }
}

/// Render an error with all of its causes.
///
/// Snafu variants without a display attribute only print their name, so the
/// causes carry the actual reason.
pub(crate) fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut cause = error.source();
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = inner.source();
    }
    message
}
