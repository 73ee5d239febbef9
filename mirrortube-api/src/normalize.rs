//! Response normalization.
//!
//! Mirrors disagree about envelope shapes across versions: a listing may
//! arrive as a bare JSON array or wrapped in an `items` object. Everything
//! here degrades instead of failing - an unrecognized top-level shape is an
//! empty result, and a malformed entry is dropped rather than aborting the
//! batch. A partial listing beats no listing.

use mirrortube_core::VideoSummary;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Marker separating a watch URL's path from the video identifier.
const WATCH_MARKER: &str = "/watch?v=";

// ============================================================================
// Raw wire shapes
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawListEntry {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    uploader_name: Option<String>,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    duration: Option<i64>,
    #[serde(default)]
    views: Option<i64>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVideoDetails {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    uploader: Option<String>,
    #[serde(default)]
    thumbnail_url: Option<String>,
    #[serde(default)]
    duration: Option<i64>,
    #[serde(default)]
    views: Option<i64>,
}

// ============================================================================
// Listing normalization
// ============================================================================

/// Normalizes a listing response (trending) into video summaries.
///
/// Accepts a bare array or an `{ "items": [...] }` envelope; any other
/// shape yields an empty list.
pub fn normalize_video_list(value: &Value) -> Vec<VideoSummary> {
    normalize_entries(value, false)
}

/// Normalizes a search response, keeping only entries tagged as plain
/// videos (search envelopes interleave channels and playlists).
pub fn normalize_search_results(value: &Value) -> Vec<VideoSummary> {
    normalize_entries(value, true)
}

fn normalize_entries(value: &Value, videos_only: bool) -> Vec<VideoSummary> {
    let entries = match entries_of(value) {
        Some(entries) => entries,
        None => {
            debug!("Unrecognized listing shape, returning empty result");
            return Vec::new();
        }
    };

    entries
        .iter()
        .filter_map(|entry| summarize_entry(entry, videos_only))
        .collect()
}

/// Finds the entry array inside whichever envelope the mirror used.
fn entries_of(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(entries) => Some(entries),
        Value::Object(map) => map.get("items").and_then(Value::as_array),
        _ => None,
    }
}

fn summarize_entry(entry: &Value, videos_only: bool) -> Option<VideoSummary> {
    let raw: RawListEntry = serde_json::from_value(entry.clone()).ok()?;

    if videos_only && raw.kind.as_deref().is_some_and(|kind| kind != "video") {
        return None;
    }

    // Entries without a resolvable identifier or title are dropped silently.
    let id = raw.url.as_deref().and_then(video_id_from_watch_url)?;
    let title = raw.title.filter(|t| !t.is_empty())?;

    let mut summary = VideoSummary::new(
        id,
        title,
        raw.uploader_name.unwrap_or_default(),
        raw.thumbnail.unwrap_or_default(),
    );
    summary.duration_seconds = coerce_duration(raw.duration);
    summary.view_count_text = raw.views.map(|views| views.to_string());

    Some(summary)
}

/// Normalizes one `/streams/{id}` body into a single summary, for direct
/// video lookups. Returns `None` when the body has no usable title.
pub fn normalize_video_details(video_id: &str, value: &Value) -> Option<VideoSummary> {
    let raw: RawVideoDetails = serde_json::from_value(value.clone()).ok()?;
    let title = raw.title.filter(|t| !t.is_empty())?;

    let mut summary = VideoSummary::new(
        video_id,
        title,
        raw.uploader.unwrap_or_default(),
        raw.thumbnail_url.unwrap_or_default(),
    );
    summary.duration_seconds = coerce_duration(raw.duration);
    summary.view_count_text = raw.views.map(|views| views.to_string());

    Some(summary)
}

/// Extracts the identifier segment from a watch-URL-shaped field. Bare
/// values pass through unchanged, matching how mirrors sometimes return
/// the id directly.
pub fn video_id_from_watch_url(url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }
    match url.split_once(WATCH_MARKER) {
        Some((_, id)) if !id.is_empty() => Some(id.to_string()),
        Some(_) => None,
        None => Some(url.to_string()),
    }
}

/// Absent or non-positive durations are omitted, not zeroed; mirrors use
/// `-1` and `0` for live content.
#[allow(clippy::cast_sign_loss)]
fn coerce_duration(duration: Option<i64>) -> Option<u64> {
    duration.filter(|&d| d > 0).map(|d| d as u64)
}

// ============================================================================
// Tests
// ============================================================================
