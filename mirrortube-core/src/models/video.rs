//! Listing entry types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Video Summary
// ============================================================================

/// One video as it appears in a listing (trending feed, search results).
///
/// Summaries are immutable value objects produced from backend JSON. There
/// is no identity beyond `id`; the same video appearing in two listings
/// yields two equal summaries, and deduplication is a caller concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    /// Backend video identifier (the `v=` segment of a watch URL).
    pub id: String,
    /// Video title.
    pub title: String,
    /// Name of the uploading channel.
    pub channel_title: String,
    /// Thumbnail image URL.
    pub thumbnail_url: String,
    /// Duration in seconds. Absent for live content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u64>,
    /// View count as reported by the backend, kept as text since some
    /// backends return pre-formatted values ("9M", "LIVE").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count_text: Option<String>,
}

impl VideoSummary {
    /// Creates a summary with the required fields; optional fields start
    /// empty and can be filled by the builder-style setters.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        channel_title: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            channel_title: channel_title.into(),
            thumbnail_url: thumbnail_url.into(),
            duration_seconds: None,
            view_count_text: None,
        }
    }

    /// Sets the duration.
    pub fn with_duration(mut self, seconds: u64) -> Self {
        self.duration_seconds = Some(seconds);
        self
    }

    /// Sets the view-count text.
    pub fn with_view_count(mut self, text: impl Into<String>) -> Self {
        self.view_count_text = Some(text.into());
        self
    }

    /// Returns true if the backend reported no duration, which usually
    /// means a live stream.
    pub fn is_live(&self) -> bool {
        self.duration_seconds.is_none()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_setters() {
        let summary = VideoSummary::new("abc123", "Title", "Channel", "https://t.example/x.jpg")
            .with_duration(120)
            .with_view_count("1234");

        assert_eq!(summary.duration_seconds, Some(120));
        assert_eq!(summary.view_count_text.as_deref(), Some("1234"));
        assert!(!summary.is_live());
    }

    #[test]
    fn test_live_without_duration() {
        let summary = VideoSummary::new("abc123", "Title", "Channel", "https://t.example/x.jpg");
        assert!(summary.is_live());
    }
}
