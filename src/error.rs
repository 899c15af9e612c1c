//! Error types for the acquiring client

use thiserror::Error;

/// Result type alias for acquiring operations
pub type Result<T> = std::result::Result<T, AcquiringError>;

/// Main error type for acquiring operations
///
/// Transport, status, API and decode failures are separate variants so a
/// caller can tell a dropped connection from a rejected payment.
#[derive(Error, Debug)]
pub enum AcquiringError {
    /// Network or connection failure before any HTTP status was received
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The caller's deadline elapsed before a response arrived
    #[error("Request timeout")]
    Timeout,

    /// The gateway answered with a non-success HTTP status
    #[error("error code: {code} message: {body}")]
    Status { code: u16, body: String },

    /// The gateway answered 2xx but reported a business failure
    #[error("API error {code}: {message}")]
    Api {
        code: String,
        message: String,
        details: String,
    },

    /// Response body is not valid JSON or does not match the expected shape
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// Request could not be serialized
    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl AcquiringError {
    /// Create a status error
    pub fn status(code: u16, body: impl Into<String>) -> Self {
        Self::Status {
            code,
            body: body.into(),
        }
    }

    /// Create an API (domain) error
    pub fn api(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self::Api {
            code: code.into(),
            message: message.into(),
            details: details.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether the failure happened before any HTTP status was observed
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout)
    }

    /// HTTP status code carried by a status error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Gateway error code carried by an API error
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = AcquiringError::status(500, "internal error");
        assert_eq!(err.to_string(), "error code: 500 message: internal error");
        assert_eq!(err.status_code(), Some(500));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_api_error_accessors() {
        let err = AcquiringError::api("204", "bad terminal", "");
        assert_eq!(err.api_code(), Some("204"));
        assert_eq!(err.status_code(), None);
        assert!(err.to_string().contains("bad terminal"));
    }

    #[test]
    fn test_timeout_is_transport() {
        assert!(AcquiringError::Timeout.is_transport());
        assert!(!AcquiringError::config("x").is_transport());
    }
}
