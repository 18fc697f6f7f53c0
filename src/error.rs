//! Error taxonomy for the client.
//!
//! Every error is caught where it occurs and turned into either a message for
//! the user or a log line:
//!
//! - [`ValidationError`] - shown inline next to the URL input
//! - [`SubmitError`] - outcome of a failed submission (inline, error panel or busy)
//! - [`GatewayError`] - raw failure reported by a [`crate::domain::gateway::ShortenerGateway`]
//! - [`PersistenceError`] - history storage failure, logged only
//! - [`ClipboardError`] - clipboard failure, logged only
//! - [`HistoryError`] - invalid history operation requested by the caller

use thiserror::Error;

/// Message shown when the backend rejects a request without a usable message.
pub const DEFAULT_REQUEST_ERROR: &str = "Failed to shorten URL";

/// Message shown when a 2xx response cannot be understood.
pub const INVALID_RESPONSE_ERROR: &str = "Unexpected response from the shortening service";

/// A URL that must not be submitted, either caught locally or reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("URL cannot be blank")]
    BlankUrl,

    #[error("URL cannot exceed 255 characters")]
    TooLong,

    #[error("URL must start with http:// or https://")]
    InvalidScheme,

    /// Field-level error for `url` returned by the backend.
    #[error("{0}")]
    Rejected(String),
}

/// Why a submission did not produce a short URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Non-2xx response carrying a general message.
    #[error("{0}")]
    Request(String),

    /// No response was obtained. `reason` is kept for logs only.
    #[error("Network error. Please check if the backend is running.")]
    Transport { reason: String },

    #[error("A submission is already in progress")]
    Busy,
}

/// Failure reported by the shortening backend or the transport in front of it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("request rejected ({status}): {field}: {message}")]
    FieldRejected {
        status: u16,
        field: String,
        message: String,
    },

    #[error("request failed ({status}): {}", message.as_deref().unwrap_or("<no message>"))]
    Failed {
        status: u16,
        message: Option<String>,
    },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid response body: {0}")]
    InvalidResponse(String),
}

/// History storage could not be read or written.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("history storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("history storage unavailable: {0}")]
    Unavailable(String),
}

/// Clipboard could not be accessed.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write to clipboard: {0}")]
    Write(String),
}

/// Invalid operation on the history list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("history index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::BlankUrl.to_string(), "URL cannot be blank");
        assert_eq!(
            ValidationError::TooLong.to_string(),
            "URL cannot exceed 255 characters"
        );
        assert_eq!(
            ValidationError::InvalidScheme.to_string(),
            "URL must start with http:// or https://"
        );
        assert_eq!(
            ValidationError::Rejected("already taken".to_string()).to_string(),
            "already taken"
        );
    }

    #[test]
    fn test_transport_error_hides_reason() {
        let err = SubmitError::Transport {
            reason: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Network error. Please check if the backend is running."
        );
    }

    #[test]
    fn test_invalid_submit_error_is_transparent() {
        let err: SubmitError = ValidationError::BlankUrl.into();
        assert_eq!(err.to_string(), "URL cannot be blank");
    }

    #[test]
    fn test_gateway_failed_without_message() {
        let err = GatewayError::Failed {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "request failed (500): <no message>");
    }
}
