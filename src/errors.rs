// errors.rs
use thiserror::Error;

use crate::transport::TransportError;

/// Errors returned by the request builder, the normalizer or the client
/// that composes them.
#[derive(Debug, Error)]
pub enum ZooplaError {
    #[error("invalid resource path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },

    #[error(transparent)]
    Coercion(#[from] CoercionError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("listings API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// A numeric field held something that could not be read as a number.
///
/// `raw_value` is the offending value rendered as JSON, so a string shows
/// up quoted and an object shows up as an object.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("listing {listing_index}: field `{field}` is not numeric (got {raw_value})")]
pub struct CoercionError {
    pub field: String,
    pub listing_index: usize,
    pub raw_value: String,
}

impl ZooplaError {
    /// Path and coercion errors come from the caller or the data, so a
    /// retry cannot fix them.
    pub fn is_retryable(&self) -> bool {
        match self {
            ZooplaError::Transport(_) => true,
            ZooplaError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coercion_error_message_names_field_and_position() {
        let err = CoercionError {
            field: "price".to_string(),
            listing_index: 3,
            raw_value: "{}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "listing 3: field `price` is not numeric (got {})"
        );
    }

    #[test]
    fn only_transport_and_server_errors_are_retryable() {
        let server = ZooplaError::Status {
            status: 503,
            body: String::new(),
        };
        let client = ZooplaError::Status {
            status: 403,
            body: String::new(),
        };
        let path = ZooplaError::InvalidPath {
            path: "//".to_string(),
            reason: "empty host".to_string(),
        };
        assert!(server.is_retryable());
        assert!(!client.is_retryable());
        assert!(!path.is_retryable());
    }
}
