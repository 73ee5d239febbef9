//! Serde serialization/deserialization tests for core types.
//!
//! These tests verify that the domain models serialize to the camelCase
//! wire shape and deserialize back without losing data.

use crate::{StreamDescriptor, StreamSource, VideoSummary};

// ============================================================================
// VideoSummary Serde Tests
// ============================================================================

#[test]
fn test_video_summary_roundtrip() {
    let summary = VideoSummary::new("jfKfPfyJRdk", "lofi radio", "Lofi Girl", "https://t.example/hq.jpg")
        .with_duration(10540)
        .with_view_count("9M");

    let json = serde_json::to_string(&summary).unwrap();
    let deserialized: VideoSummary = serde_json::from_str(&json).unwrap();

    assert_eq!(summary, deserialized);
}

#[test]
fn test_video_summary_camel_case_fields() {
    let summary = VideoSummary::new("abc", "Title", "Channel", "https://t.example/x.jpg")
        .with_view_count("LIVE");

    let value = serde_json::to_value(&summary).unwrap();
    assert!(value.get("channelTitle").is_some());
    assert!(value.get("thumbnailUrl").is_some());
    assert!(value.get("viewCountText").is_some());
    // Absent optionals are omitted, not serialized as null
    assert!(value.get("durationSeconds").is_none());
}

#[test]
fn test_video_summary_deserialize_without_optionals() {
    let json = r#"{
        "id": "abc",
        "title": "Title",
        "channelTitle": "Channel",
        "thumbnailUrl": "https://t.example/x.jpg"
    }"#;
    let summary: VideoSummary = serde_json::from_str(json).unwrap();
    assert!(summary.duration_seconds.is_none());
    assert!(summary.view_count_text.is_none());
}

// ============================================================================
// StreamDescriptor Serde Tests
// ============================================================================

#[test]
fn test_stream_descriptor_roundtrip_all_sources() {
    let descriptors = vec![
        StreamDescriptor::adaptive("https://m.example/master.m3u8"),
        StreamDescriptor::progressive("https://m.example/v.mp4", "720p"),
        StreamDescriptor::audio_only("https://m.example/a.m4a"),
    ];

    for descriptor in descriptors {
        let json = serde_json::to_string(&descriptor).unwrap();
        let deserialized: StreamDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(descriptor, deserialized);
    }
}

#[test]
fn test_stream_descriptor_audio_only_defaults_false() {
    let json = r#"{
        "url": "https://m.example/v.mp4",
        "mimeType": "video/mp4",
        "qualityLabel": "480p",
        "source": "progressive"
    }"#;
    let descriptor: StreamDescriptor = serde_json::from_str(json).unwrap();
    assert!(!descriptor.is_audio_only);
    assert_eq!(descriptor.source, StreamSource::Progressive);
}

#[test]
fn test_stream_source_snake_case() {
    let json = serde_json::to_string(&StreamSource::AdaptiveManifest).unwrap();
    assert_eq!(json, r#""adaptive_manifest""#);
}
