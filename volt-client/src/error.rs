//! Client error types

use shared::models::BookingStatus;
use thiserror::Error;

/// Client error type
///
/// Validation and invalid-transition failures are detected before any
/// network traffic; remote failures leave local state untouched (all
/// transitions are confirm-after-success). No variant is ever retried
/// automatically.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Client-detected precondition failure, never sent to the network
    #[error("Validation error: {0}")]
    Validation(String),

    /// Attempted lifecycle transition from a state that no longer
    /// permits it, usually due to staleness. Refresh the entity and
    /// re-present the authoritative status instead of retrying.
    #[error("Cannot {action} a booking in status {status}")]
    InvalidTransition {
        action: &'static str,
        status: BookingStatus,
    },

    /// HTTP request failed (network failure, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend rejected the request with a non-2xx response
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether the correct reaction is to refresh the affected entity
    /// and show the current authoritative state (stale client data or
    /// a concurrent edit won on the backend).
    pub fn should_refresh(&self) -> bool {
        matches!(
            self,
            Self::InvalidTransition { .. } | Self::Api { status: 409, .. }
        )
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
