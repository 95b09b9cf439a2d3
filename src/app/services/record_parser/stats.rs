//! Parsing statistics and result structures for C5M record processing
//!
//! This module provides types for tracking parsing tolerance decisions
//! (skipped rows, dropped tokens) and organizing parsed results for
//! downstream use.

use crate::app::models::{CovarianceData, MetadataRecord};

/// Result of parsing one C5M record
#[derive(Debug, Clone)]
pub struct RecordParseResult {
    /// Extracted experiment metadata
    pub metadata: MetadataRecord,

    /// Reconstructed covariance structures; None when the record carries
    /// no covariance block at all
    pub covariance: Option<CovarianceData>,

    /// Parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ParseStats {
    /// Total number of data rows encountered inside the covariance block
    pub total_rows: usize,

    /// Number of covariance rows successfully parsed
    pub rows_parsed: usize,

    /// Number of rows skipped (too few tokens or unparseable leading fields)
    pub rows_skipped: usize,

    /// Number of correlation tokens dropped as unparseable
    pub tokens_dropped: usize,

    /// Number of correlation entries ignored because they referenced a
    /// column beyond the row's diagonal
    pub tokens_out_of_range: usize,

    /// Number of metadata fields extracted
    pub metadata_fields: usize,

    /// List of parsing errors for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate row-level success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.rows_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }
}
