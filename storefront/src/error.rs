//! Storefront error types
//!
//! Every failure the storefront can report is recoverable: the view keeps
//! its last catalog and selection, and the user decides what to do next.

use foodie_client::ClientError;
use thiserror::Error;

/// Catalog fetch failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Backend answered but reported failure
    #[error("catalog unavailable: {}", .reason.as_deref().unwrap_or("no reason given"))]
    Rejected { reason: Option<String> },

    /// No usable answer from the backend
    #[error("catalog fetch failed: {0}")]
    Transport(String),

    /// Answer could not be parsed into menu items
    #[error("malformed catalog response: {0}")]
    InvalidResponse(String),
}

impl LoadError {
    pub const USER_MESSAGE: &'static str = "Failed to load meals. Please check API connection.";

    pub fn user_message(&self) -> &'static str {
        Self::USER_MESSAGE
    }
}

impl From<ClientError> for LoadError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) => Self::Transport(e.to_string()),
            ClientError::InvalidResponse(msg) => Self::InvalidResponse(msg),
            ClientError::Serialization(e) => Self::InvalidResponse(e.to_string()),
            ClientError::Config(msg) => Self::Transport(msg),
            ClientError::Api { reason, .. } | ClientError::Rejected { reason } => {
                Self::Rejected { reason }
            }
        }
    }
}

/// Order creation call failed
///
/// Validation and transport failures are reported through the same type;
/// the service decides which one it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("order rejected: {}", .reason.as_deref().unwrap_or("no reason given"))]
    Rejected {
        status: Option<u16>,
        reason: Option<String>,
    },

    #[error("order submission failed: {0}")]
    Transport(String),
}

impl SubmissionError {
    pub const GENERIC_MESSAGE: &'static str = "Failed to place order. Please try again.";

    /// Reason supplied by the server, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Rejected { reason, .. } => reason.as_deref(),
            Self::Transport(_) => None,
        }
    }

    /// Message for the notification surface
    pub fn user_message(&self) -> String {
        self.reason()
            .map(str::to_string)
            .unwrap_or_else(|| Self::GENERIC_MESSAGE.to_string())
    }
}

impl From<ClientError> for SubmissionError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Api { status, reason } => Self::Rejected {
                status: Some(status),
                reason,
            },
            ClientError::Rejected { reason } => Self::Rejected {
                status: None,
                reason,
            },
            other => Self::Transport(other.to_string()),
        }
    }
}

/// Order flow error returned by the controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("sign in required")]
    NotAuthenticated,

    #[error("no menu item selected")]
    NothingSelected,

    /// A submission from this controller is still pending
    #[error("an order submission is already in flight")]
    SubmissionInFlight,

    /// The view owning the controller has been torn down
    #[error("order view is closed")]
    Closed,

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}
