//! CLI command implementations.

pub mod mirrors;
pub mod search;
pub mod stream;
pub mod trending;
