//! High-level mirror client.
//!
//! Bundles the endpoint pool, the failover fetcher, and the probe selector
//! into the operations the rest of the application calls: trending,
//! search, and per-video stream lookup.

use std::sync::Arc;

use mirrortube_core::{StreamDescriptor, VideoSummary};
use mirrortube_fetch::{
    Endpoint, EndpointPool, FetchSettings, HttpClient, ProbeReport, ProbeSelector,
    ResilientFetcher,
};
use tracing::{debug, instrument};
use url::Url;

use crate::error::ApiError;
use crate::negotiate::select_stream;
use crate::normalize::{normalize_search_results, normalize_video_details, normalize_video_list};
use crate::paths;

// ============================================================================
// Mirror Client
// ============================================================================

/// High-level client for the mirror API.
///
/// The pool is shared: a settings surface may call
/// [`EndpointPool::configure`] on the same `Arc` at runtime and subsequent
/// requests pick up the new list.
pub struct MirrorClient {
    pool: Arc<EndpointPool>,
    fetcher: ResilientFetcher,
    selector: ProbeSelector,
}

impl MirrorClient {
    /// Creates a client over the given pool.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Fetch`] if the HTTP client cannot be built.
    pub fn new(pool: Arc<EndpointPool>, settings: FetchSettings) -> Result<Self, ApiError> {
        let client = HttpClient::new(settings)?;
        Ok(Self {
            fetcher: ResilientFetcher::new(client.clone()),
            selector: ProbeSelector::new(client),
            pool,
        })
    }

    /// Returns the shared endpoint pool.
    pub fn pool(&self) -> &Arc<EndpointPool> {
        &self.pool
    }

    /// Runs the startup probe over the pool and returns the selected
    /// endpoint. Cheap, sequential, and never an error: a total probe miss
    /// leaves the preferred endpoint where it was.
    pub async fn select_initial_endpoint(&self) -> Endpoint {
        self.selector
            .select_initial(&self.pool, paths::DEFAULT_PROBE_PATH)
            .await
    }

    /// Probes every mirror and returns a health report per endpoint.
    pub async fn probe_all(&self) -> Vec<ProbeReport> {
        self.selector
            .probe_all(&self.pool, paths::DEFAULT_PROBE_PATH)
            .await
    }

    /// Fetches the trending listing for a region.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Fetch`] when every mirror fails.
    #[instrument(skip(self))]
    pub async fn trending(&self, region: &str) -> Result<Vec<VideoSummary>, ApiError> {
        let body = self.fetcher.fetch(&self.pool, &paths::trending(region)).await?;
        Ok(normalize_video_list(&body))
    }

    /// Searches for videos.
    ///
    /// A query shaped like a YouTube URL is resolved to its video id and
    /// looked up directly, yielding a single-entry listing; if that lookup
    /// fails the id is searched as plain text instead.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Fetch`] when every mirror fails.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<VideoSummary>, ApiError> {
        if let Some(video_id) = video_id_from_query(query) {
            match self.video_details(&video_id).await {
                Ok(Some(summary)) => return Ok(vec![summary]),
                Ok(None) | Err(_) => {
                    debug!(video_id, "Direct lookup failed, searching the id as text");
                    let body = self
                        .fetcher
                        .fetch(&self.pool, &paths::search(&video_id))
                        .await?;
                    return Ok(normalize_search_results(&body));
                }
            }
        }

        let body = self.fetcher.fetch(&self.pool, &paths::search(query)).await?;
        Ok(normalize_search_results(&body))
    }

    /// Looks up one video's metadata via its stream listing.
    ///
    /// Returns `Ok(None)` when the body has no usable shape, matching the
    /// normalizer's degrade-over-fail policy.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Fetch`] when every mirror fails.
    pub async fn video_details(&self, video_id: &str) -> Result<Option<VideoSummary>, ApiError> {
        let body = self.fetcher.fetch(&self.pool, &paths::streams(video_id)).await?;
        Ok(normalize_video_details(video_id, &body))
    }

    /// Negotiates the single best playable stream for one video.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Fetch`] when every mirror fails
    /// - [`ApiError::NoPlayableStream`] when no tier matches
    #[instrument(skip(self))]
    pub async fn stream(&self, video_id: &str) -> Result<StreamDescriptor, ApiError> {
        let body = self.fetcher.fetch(&self.pool, &paths::streams(video_id)).await?;
        select_stream(video_id, &body)
    }
}

// ============================================================================
// Watch-URL resolution
// ============================================================================

/// Resolves a YouTube-shaped query (`youtu.be/<id>`, `watch?v=<id>`,
/// `/shorts/<id>`) to its video id. Plain search terms return `None`.
pub fn video_id_from_query(query: &str) -> Option<String> {
    if !query.contains("youtu.be") && !query.contains("youtube.com") {
        return None;
    }

    let candidate = if query.starts_with("http://") || query.starts_with("https://") {
        query.to_string()
    } else {
        format!("https://{query}")
    };
    let url = Url::parse(&candidate).ok()?;

    if url.host_str()?.contains("youtu.be") {
        let id = url.path().trim_matches('/');
        return (!id.is_empty()).then(|| id.to_string());
    }

    if let Some((_, id)) = url.query_pairs().find(|(key, _)| key == "v") {
        return (!id.is_empty()).then(|| id.into_owned());
    }

    if let Some(rest) = url.path().split("/shorts/").nth(1) {
        let id = rest.split('/').next().unwrap_or_default();
        return (!id.is_empty()).then(|| id.to_string());
    }

    None
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_terms_are_not_urls() {
        assert_eq!(video_id_from_query("lofi hip hop"), None);
        assert_eq!(video_id_from_query("best of youtube drama"), None);
    }

    #[test]
    fn test_short_link() {
        assert_eq!(
            video_id_from_query("https://youtu.be/jfKfPfyJRdk"),
            Some("jfKfPfyJRdk".to_string())
        );
        assert_eq!(
            video_id_from_query("youtu.be/jfKfPfyJRdk"),
            Some("jfKfPfyJRdk".to_string())
        );
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            video_id_from_query("https://www.youtube.com/watch?v=jfKfPfyJRdk&t=10"),
            Some("jfKfPfyJRdk".to_string())
        );
    }

    #[test]
    fn test_shorts_url() {
        assert_eq!(
            video_id_from_query("https://www.youtube.com/shorts/abc123"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_channel_url_has_no_video_id() {
        assert_eq!(video_id_from_query("https://www.youtube.com/@somechannel"), None);
    }
}
