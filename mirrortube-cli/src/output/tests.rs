//! Formatter tests.

use super::text::format_duration;
use super::{JsonFormatter, TextFormatter};
use mirrortube_core::{StreamDescriptor, VideoSummary};

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(59), "0:59");
    assert_eq!(format_duration(75), "1:15");
    assert_eq!(format_duration(3661), "1:01:01");
    assert_eq!(format_duration(10540), "2:55:40");
}

#[test]
fn test_listing_plain_text_has_no_ansi() {
    let formatter = TextFormatter::new(false);
    let summaries = vec![
        VideoSummary::new("abc", "Title", "Channel", "https://t.example/x.jpg").with_duration(75),
    ];
    let output = formatter.format_listing(&summaries);

    assert!(output.contains("Title"));
    assert!(output.contains("[1:15]"));
    assert!(!output.contains("\x1b["));
}

#[test]
fn test_listing_marks_live_entries() {
    let formatter = TextFormatter::new(false);
    let summaries =
        vec![VideoSummary::new("abc", "Radio", "Channel", "https://t.example/x.jpg")];
    let output = formatter.format_listing(&summaries);
    assert!(output.contains("[LIVE]"));
}

#[test]
fn test_empty_listing() {
    let formatter = TextFormatter::new(false);
    assert_eq!(formatter.format_listing(&[]), "No videos found.");
}

#[test]
fn test_stream_output_mentions_audio_only() {
    let formatter = TextFormatter::new(false);
    let output = formatter.format_stream(&StreamDescriptor::audio_only("https://m.example/a.m4a"));
    assert!(output.contains("Audio only"));
}

#[test]
fn test_json_pretty_vs_compact() {
    let data = serde_json::json!({"key": "value"});

    let pretty = JsonFormatter::new(true).format(&data).unwrap();
    assert!(pretty.contains('\n'));

    let compact = JsonFormatter::new(false).format(&data).unwrap();
    assert!(!compact.contains('\n'));
}
