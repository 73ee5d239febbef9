//! Fetch error types.

use thiserror::Error;

/// Error type for fetch operations.
///
/// Only [`FetchError::AllEndpointsUnavailable`] ever reaches callers of the
/// failover fetcher; the other variants describe single-endpoint failures
/// and are consumed inside the failover loop, where they mean "try the next
/// mirror".
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed (transport error, connection refused, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("Unexpected status code: {status}")]
    Status {
        /// The HTTP status code returned.
        status: u16,
    },

    /// Response body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Every pool member failed for one logical fetch.
    #[error("All {attempted} endpoints unavailable")]
    AllEndpointsUnavailable {
        /// Number of endpoints attempted before giving up.
        attempted: usize,
    },

    /// Core error.
    #[error("Core error: {0}")]
    Core(#[from] mirrortube_core::CoreError),
}
