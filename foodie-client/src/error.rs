//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("Request failed with status {status}: {}", .reason.as_deref().unwrap_or("no reason given"))]
    Api { status: u16, reason: Option<String> },

    /// 2xx response whose envelope reported `success: false`
    #[error("Request rejected: {}", .reason.as_deref().unwrap_or("no reason given"))]
    Rejected { reason: Option<String> },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Human-readable reason supplied by the server, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Api { reason, .. } | Self::Rejected { reason } => reason.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of a non-2xx response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Transport-level failure (no usable response from the server)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_and_status() {
        let err = ClientError::Api {
            status: 422,
            reason: Some("Item out of stock".into()),
        };
        assert_eq!(err.reason(), Some("Item out of stock"));
        assert_eq!(err.status(), Some(422));
        assert!(!err.is_unauthorized());
        assert_eq!(
            err.to_string(),
            "Request failed with status 422: Item out of stock"
        );
    }

    #[test]
    fn test_rejected_without_reason() {
        let err = ClientError::Rejected { reason: None };
        assert_eq!(err.reason(), None);
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Request rejected: no reason given");
    }

    #[test]
    fn test_status_helpers() {
        let unauthorized = ClientError::Api { status: 401, reason: None };
        assert!(unauthorized.is_unauthorized());

        let missing = ClientError::Api { status: 404, reason: None };
        assert!(missing.is_not_found());
        assert!(!missing.is_transport());
    }
}
