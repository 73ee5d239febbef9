// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # mirrortube Fetch
//!
//! Endpoint selection and failover fetching for the mirrortube client.
//!
//! The backend is a pool of interchangeable, independently-operated mirrors.
//! Any one of them may be down at any moment; this crate keeps requests
//! flowing through whichever mirror currently responds:
//!
//! - [`pool::EndpointPool`] - Ordered mirror list plus the currently
//!   preferred member
//! - [`probe::ProbeSelector`] - Cheap startup probe to seed the preferred
//!   endpoint without waiting out full request timeouts on dead mirrors
//! - [`fetcher::ResilientFetcher`] - One logical request with automatic
//!   failover across the pool, promoting whichever mirror answers
//! - [`client::HttpClient`] - Thin reqwest wrapper with the timeouts from
//!   [`settings::FetchSettings`]
//!
//! ## Example
//!
//! ```ignore
//! use mirrortube_fetch::{EndpointPool, FetchSettings, HttpClient, ResilientFetcher};
//!
//! let pool = EndpointPool::from_urls(["https://mirror-a.example", "https://mirror-b.example"])?;
//! let client = HttpClient::new(FetchSettings::default())?;
//! let fetcher = ResilientFetcher::new(client);
//!
//! let body = fetcher.fetch(&pool, "/trending?region=US").await?;
//! ```

// Core modules
pub mod client;
pub mod error;
pub mod fetcher;
pub mod pool;
pub mod probe;
pub mod settings;

// Re-export key types at crate root
pub use client::HttpClient;
pub use error::FetchError;
pub use fetcher::ResilientFetcher;
pub use pool::{Endpoint, EndpointPool};
pub use probe::{ProbeReport, ProbeSelector};
pub use settings::FetchSettings;
