//! Browser adapters.
//!
//! Provides:
//! - [`dom`] - thin wrappers over window/document APIs
//! - [`fetch`] - torrent page fetching with timeout, as a [`DocumentFetcher`](leetx_core::link::DocumentFetcher)
//! - [`page`] - live-page implementations of the core ports
//! - [`table`] - the injected magnet/download column

pub mod dom;
pub mod fetch;
pub mod page;
pub mod table;
