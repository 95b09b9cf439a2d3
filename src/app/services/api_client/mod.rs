//! EXFOR Web API client
//!
//! Retrieval layer for the IAEA EXFOR Web API. The parsing core never
//! touches the network; this module hands it raw text blobs.
//!
//! - [`params`] - Pure request-parameter construction for the x4list,
//!   x4get, and x4dat endpoints
//! - [`client`] - HTTP GET with retry and linear backoff

pub mod client;
pub mod params;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use client::ExforClient;
pub use params::{BulkOp, CsvVariant, DatasetOp, SearchOutput, SearchQuery};
