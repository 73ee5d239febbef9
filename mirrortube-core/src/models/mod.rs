//! Domain models for mirrortube.
//!
//! ## Submodules
//!
//! - [`video`] - Listing entries ([`VideoSummary`])
//! - [`stream`] - Playback descriptors ([`StreamDescriptor`], [`StreamSource`])

mod stream;
mod video;

// Re-export everything at the models level
pub use stream::{StreamDescriptor, StreamSource};
pub use video::VideoSummary;

#[cfg(test)]
mod serde_tests;
