//! Relative request paths for the mirror API.
//!
//! Every mirror implements the same unauthenticated GET contract; these
//! builders produce the relative paths appended to whichever base-URL the
//! pool currently prefers.

/// Lightweight probe path used to seed the preferred endpoint. A HEAD
/// request here is a status-only existence check.
pub const DEFAULT_PROBE_PATH: &str = "/trending?region=US";

/// Trending listing for a region.
pub fn trending(region: &str) -> String {
    format!("/trending?region={}", urlencoding::encode(region))
}

/// Video search, filtered to plain videos.
pub fn search(query: &str) -> String {
    format!("/search?q={}&filter=videos", urlencoding::encode(query))
}

/// Per-video stream listing.
pub fn streams(video_id: &str) -> String {
    format!("/streams/{}", urlencoding::encode(video_id))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_path() {
        assert_eq!(trending("US"), "/trending?region=US");
    }

    #[test]
    fn test_search_query_is_encoded() {
        assert_eq!(
            search("lofi hip hop & chill"),
            "/search?q=lofi%20hip%20hop%20%26%20chill&filter=videos"
        );
    }

    #[test]
    fn test_streams_path() {
        assert_eq!(streams("jfKfPfyJRdk"), "/streams/jfKfPfyJRdk");
    }
}
