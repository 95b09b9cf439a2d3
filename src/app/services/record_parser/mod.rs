//! C5M record parser for EXFOR experiment data
//!
//! This module provides a streamlined parser for the C5M text format focused
//! on robust extraction of experiment metadata and reconstruction of the
//! embedded covariance block into numerically usable matrices.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Orchestration of one full record parse
//! - [`metadata`] - Marker-prefixed metadata extraction with continuations
//! - [`covariance`] - Covariance block location and tolerant row tokenizing
//! - [`matrix`] - Triangular-to-full symmetric matrix reconstruction
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use exfor_processor::app::services::record_parser::parse_record;
//!
//! let text = "#TITLE  Neutron capture on Pb-204\n#YEAR   1998\n";
//! let result = parse_record(text);
//!
//! assert_eq!(result.metadata.get("YEAR"), Some("1998"));
//! assert!(result.covariance.is_none());
//! ```

pub mod covariance;
pub mod matrix;
pub mod metadata;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use covariance::parse_covariance_block;
pub use matrix::reconstruct;
pub use metadata::parse_metadata;
pub use parser::parse_record;
pub use stats::{ParseStats, RecordParseResult};
