//! Playback descriptor types.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Stream Source
// ============================================================================

/// Which negotiation tier produced a [`StreamDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamSource {
    /// Adaptive manifest (HLS); quality is chosen by the player.
    AdaptiveManifest,
    /// Progressive stream with combined video and audio.
    Progressive,
    /// Audio-only stream.
    AudioOnly,
}

impl StreamSource {
    /// Returns the display name for this source.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::AdaptiveManifest => "Adaptive (HLS)",
            Self::Progressive => "Progressive",
            Self::AudioOnly => "Audio Only",
        }
    }
}

impl fmt::Display for StreamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Stream Descriptor
// ============================================================================

/// The resolved locator and format metadata needed to begin playback of
/// one video.
///
/// Descriptors have no lifecycle beyond the request that produced them:
/// the `url` is backend-issued and potentially time-limited, so callers
/// should start playback promptly rather than storing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamDescriptor {
    /// Direct media locator (manifest URL or progressive stream URL).
    pub url: String,
    /// MIME type of the stream (`application/x-mpegURL`, `video/mp4`,
    /// `audio/mp4`).
    pub mime_type: String,
    /// Quality label passed through from the matched tier; adaptive
    /// manifests report the synthetic label `"Auto"`.
    pub quality_label: String,
    /// True when the descriptor carries no video track.
    #[serde(default)]
    pub is_audio_only: bool,
    /// The negotiation tier that produced this descriptor.
    pub source: StreamSource,
}

impl StreamDescriptor {
    /// Creates a descriptor for an adaptive (HLS) manifest.
    pub fn adaptive(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mime_type: "application/x-mpegURL".to_string(),
            quality_label: "Auto".to_string(),
            is_audio_only: false,
            source: StreamSource::AdaptiveManifest,
        }
    }

    /// Creates a descriptor for a progressive video+audio stream.
    pub fn progressive(url: impl Into<String>, quality_label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mime_type: "video/mp4".to_string(),
            quality_label: quality_label.into(),
            is_audio_only: false,
            source: StreamSource::Progressive,
        }
    }

    /// Creates a descriptor for an audio-only stream.
    pub fn audio_only(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mime_type: "audio/mp4".to_string(),
            quality_label: "Audio Only".to_string(),
            is_audio_only: true,
            source: StreamSource::AudioOnly,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adaptive_constructor() {
        let descriptor = StreamDescriptor::adaptive("https://m.example/master.m3u8");
        assert_eq!(descriptor.mime_type, "application/x-mpegURL");
        assert_eq!(descriptor.quality_label, "Auto");
        assert!(!descriptor.is_audio_only);
        assert_eq!(descriptor.source, StreamSource::AdaptiveManifest);
    }

    #[test]
    fn test_audio_only_constructor() {
        let descriptor = StreamDescriptor::audio_only("https://m.example/a.m4a");
        assert!(descriptor.is_audio_only);
        assert_eq!(descriptor.source, StreamSource::AudioOnly);
    }
}
