//! Client error types.

use finquest_core::budget::BudgetError;
use thiserror::Error;

/// Blocking notification shown when a budget save fails.
pub const SAVE_FAILED_ALERT: &str = "Error saving budget constraints. Please try again.";

/// Message for any request that got no usable response.
pub const CONNECT_FAILED: &str = "Failed to connect to server";

/// Result type alias using `ClientError`.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors from talking to the backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No response, or a response body that could not be read.
    #[error("{}", CONNECT_FAILED)]
    Transport(#[from] reqwest::Error),

    /// A success response whose body is not the expected JSON.
    #[error("Unexpected response from server: {0}")]
    Decode(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Human-readable message for the view.
        message: String,
    },
}

impl ClientError {
    /// HTTP status, if the backend answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(_) | Self::Decode(_) => None,
            Self::Status { status, .. } => Some(*status),
        }
    }
}

/// Why a budget submission did not go through.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The form refused to submit (empty budget or a save already running).
    #[error(transparent)]
    Blocked(#[from] BudgetError),

    /// The request failed; the form values were left untouched.
    #[error("{}", SAVE_FAILED_ALERT)]
    Failed(#[source] ClientError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_displays_message() {
        let err = ClientError::Status {
            status: 404,
            message: "missing".into(),
        };
        assert_eq!(err.to_string(), "missing");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_submit_failure_uses_alert_text() {
        let err = SubmitError::Failed(ClientError::Status {
            status: 500,
            message: "boom".into(),
        });
        assert_eq!(err.to_string(), SAVE_FAILED_ALERT);

        let blocked = SubmitError::from(BudgetError::EmptyBudget);
        assert_eq!(blocked.to_string(), "Budget total is zero");
    }
}
