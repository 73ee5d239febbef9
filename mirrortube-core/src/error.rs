//! Core error types for mirrortube.

use thiserror::Error;

/// Core error type for mirrortube operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Endpoint pool configured with zero endpoints.
    #[error("Endpoint pool cannot be empty")]
    EmptyEndpointPool,

    /// Invalid data from an API response.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
