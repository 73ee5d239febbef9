//! Stream format negotiation.
//!
//! Given one video's raw stream listing, pick exactly one playable
//! descriptor. The preference order is an ordered rule table rather than
//! branching logic, so adding a tier is a data change:
//!
//! 1. Adaptive manifest (HLS) - tolerates variable network conditions best
//! 2. First progressive MP4 carrying both video and audio
//! 3. First broadly-compatible audio-only stream

use crate::error::ApiError;
use mirrortube_core::StreamDescriptor;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

// ============================================================================
// Raw wire shapes
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStreamsResponse {
    #[serde(default)]
    hls: Option<String>,
    #[serde(default)]
    video_streams: Vec<RawStream>,
    #[serde(default)]
    audio_streams: Vec<RawStream>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStream {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    format: Option<String>,
    #[serde(default)]
    quality: Option<String>,
    #[serde(default)]
    video_only: bool,
}

// ============================================================================
// Rule table
// ============================================================================

type StreamRule = fn(&RawStreamsResponse) -> Option<StreamDescriptor>;

/// Preference-ordered negotiation tiers; the first rule that produces a
/// descriptor wins.
const RULES: &[(&str, StreamRule)] = &[
    ("adaptive-manifest", adaptive_manifest),
    ("progressive-mp4", progressive_mp4),
    ("audio-only", audio_only),
];

fn adaptive_manifest(response: &RawStreamsResponse) -> Option<StreamDescriptor> {
    response
        .hls
        .as_deref()
        .filter(|url| !url.is_empty())
        .map(StreamDescriptor::adaptive)
}

fn progressive_mp4(response: &RawStreamsResponse) -> Option<StreamDescriptor> {
    response
        .video_streams
        .iter()
        .find(|stream| {
            stream.format.as_deref() == Some("MPEG-4")
                && !stream.video_only
                && stream.url.is_some()
        })
        .and_then(|stream| {
            let url = stream.url.as_deref()?;
            let quality = stream.quality.as_deref().unwrap_or("Unknown");
            Some(StreamDescriptor::progressive(url, quality))
        })
}

fn audio_only(response: &RawStreamsResponse) -> Option<StreamDescriptor> {
    response
        .audio_streams
        .iter()
        .find(|stream| {
            matches!(stream.format.as_deref(), Some("MPEG-4" | "WEBM")) && stream.url.is_some()
        })
        .and_then(|stream| stream.url.as_deref().map(StreamDescriptor::audio_only))
}

// ============================================================================
// Negotiation
// ============================================================================

/// Selects the single best playable descriptor from one video's raw
/// stream-listing response.
///
/// # Errors
///
/// Returns [`ApiError::NoPlayableStream`] when no tier matches. Callers
/// should treat that as "skip this video", not a session failure.
pub fn select_stream(video_id: &str, value: &Value) -> Result<StreamDescriptor, ApiError> {
    // A body that is not even an object has no tiers to offer; the rule
    // walk below then falls through to NoPlayableStream.
    let response: RawStreamsResponse =
        serde_json::from_value(value.clone()).unwrap_or_default();

    for (tier, rule) in RULES {
        if let Some(descriptor) = rule(&response) {
            debug!(video_id, tier, quality = %descriptor.quality_label, "Stream negotiated");
            return Ok(descriptor);
        }
    }

    Err(ApiError::NoPlayableStream {
        video_id: video_id.to_string(),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mirrortube_core::StreamSource;
    use serde_json::json;

    #[test]
    fn test_hls_only_yields_automatic_quality() {
        let value = json!({ "hls": "https://m.example/master.m3u8" });
        let descriptor = select_stream("abc", &value).unwrap();

        assert_eq!(descriptor.source, StreamSource::AdaptiveManifest);
        assert_eq!(descriptor.quality_label, "Auto");
        assert!(!descriptor.is_audio_only);
    }

    #[test]
    fn test_hls_wins_over_progressive() {
        let value = json!({
            "hls": "https://m.example/master.m3u8",
            "videoStreams": [
                { "url": "https://m.example/v.mp4", "format": "MPEG-4", "quality": "720p", "videoOnly": false }
            ]
        });
        let descriptor = select_stream("abc", &value).unwrap();
        assert_eq!(descriptor.source, StreamSource::AdaptiveManifest);
    }

    #[test]
    fn test_progressive_skips_video_only_entries() {
        let value = json!({
            "videoStreams": [
                { "url": "https://m.example/vo.mp4", "format": "MPEG-4", "quality": "1080p", "videoOnly": true },
                { "url": "https://m.example/v.mp4", "format": "MPEG-4", "quality": "720p", "videoOnly": false }
            ]
        });
        let descriptor = select_stream("abc", &value).unwrap();

        assert_eq!(descriptor.source, StreamSource::Progressive);
        assert_eq!(descriptor.url, "https://m.example/v.mp4");
        assert_eq!(descriptor.quality_label, "720p");
    }

    #[test]
    fn test_progressive_skips_foreign_containers() {
        let value = json!({
            "videoStreams": [
                { "url": "https://m.example/v.webm", "format": "WEBM", "quality": "720p", "videoOnly": false }
            ],
            "audioStreams": [
                { "url": "https://m.example/a.m4a", "format": "MPEG-4" }
            ]
        });
        let descriptor = select_stream("abc", &value).unwrap();
        assert_eq!(descriptor.source, StreamSource::AudioOnly);
    }

    #[test]
    fn test_audio_only_tier_is_marked() {
        let value = json!({
            "audioStreams": [
                { "url": "https://m.example/a.webm", "format": "WEBM" }
            ]
        });
        let descriptor = select_stream("abc", &value).unwrap();

        assert!(descriptor.is_audio_only);
        assert_eq!(descriptor.quality_label, "Audio Only");
    }

    #[test]
    fn test_no_tier_matches_is_no_playable_stream() {
        let value = json!({ "videoStreams": [], "audioStreams": [] });
        let error = select_stream("abc", &value).unwrap_err();

        match error {
            ApiError::NoPlayableStream { video_id } => assert_eq!(video_id, "abc"),
            other => panic!("expected NoPlayableStream, got {other:?}"),
        }
    }

    #[test]
    fn test_non_object_body_is_no_playable_stream() {
        let error = select_stream("abc", &json!("garbage")).unwrap_err();
        assert!(matches!(error, ApiError::NoPlayableStream { .. }));
    }

    #[test]
    fn test_empty_hls_field_is_ignored() {
        let value = json!({
            "hls": "",
            "audioStreams": [
                { "url": "https://m.example/a.m4a", "format": "MPEG-4" }
            ]
        });
        let descriptor = select_stream("abc", &value).unwrap();
        assert_eq!(descriptor.source, StreamSource::AudioOnly);
    }
}
