// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # mirrortube API
//!
//! Piped-compatible API surface for the mirrortube client.
//!
//! This crate turns raw mirror JSON into the domain model:
//!
//! - [`client::MirrorClient`] - High-level operations (trending, search,
//!   stream lookup) running through the failover fetcher
//! - [`normalize`] - Maps heterogeneous backend envelopes into
//!   [`mirrortube_core::VideoSummary`] lists, degrading to empty results
//!   instead of failing on shapes it does not recognize
//! - [`negotiate`] - Picks the single best playable
//!   [`mirrortube_core::StreamDescriptor`] for one video
//! - [`paths`] - Relative request paths for the mirror API

pub mod client;
pub mod error;
pub mod negotiate;
pub mod normalize;
pub mod paths;

// Re-export key types at crate root
pub use client::{video_id_from_query, MirrorClient};
pub use error::ApiError;
pub use negotiate::select_stream;
pub use normalize::{normalize_search_results, normalize_video_details, normalize_video_list};
