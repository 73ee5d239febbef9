//! API error types.

use thiserror::Error;

/// Error type for high-level mirror API operations.
///
/// Only two terminal conditions ever reach callers: every mirror failing
/// for one logical fetch (inside [`ApiError::Fetch`]) and a video with no
/// usable stream tier. Everything upstream of those is retried
/// transparently by the failover loop.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Fetch error; after failover this is `AllEndpointsUnavailable`.
    #[error("Fetch error: {0}")]
    Fetch(#[from] mirrortube_fetch::FetchError),

    /// A specific video has no stream tier this client can play. Callers
    /// should treat this as "skip this video", never as a session failure.
    #[error("No playable stream for video {video_id}")]
    NoPlayableStream {
        /// The video that could not be negotiated.
        video_id: String,
    },

    /// Core error.
    #[error("Core error: {0}")]
    Core(#[from] mirrortube_core::CoreError),
}

impl ApiError {
    /// Returns true when the failure is total mirror exhaustion, the case
    /// where callers are expected to offer a retry or fall back to sample
    /// content.
    pub fn is_all_endpoints_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Fetch(mirrortube_fetch::FetchError::AllEndpointsUnavailable { .. })
        )
    }
}
