// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # mirrortube Core
//!
//! Core types and models for the mirrortube client.
//!
//! This crate provides the foundational abstractions used across all other
//! mirrortube crates:
//!
//! - Domain models (video summaries, stream descriptors)
//! - Error types
//!
//! ## Key Types
//!
//! - [`VideoSummary`] - One video as it appears in a listing (trending,
//!   search results)
//! - [`StreamDescriptor`] - The resolved locator and format metadata needed
//!   to begin playback of one video
//! - [`StreamSource`] - Which negotiation tier produced a descriptor
//!
//! All models are immutable value objects produced from backend JSON; the
//! crates above this one decide how that JSON is obtained and normalized.

pub mod error;
pub mod models;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{StreamDescriptor, StreamSource, VideoSummary};
