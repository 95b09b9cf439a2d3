//! Orchestration of one full C5M record parse
//!
//! Combines metadata extraction and the covariance pipeline (locate,
//! tokenize, reconstruct) over a single text blob. Both halves operate
//! independently on the same input; neither failure mode affects the other.

use super::covariance::parse_covariance_block;
use super::matrix::reconstruct;
use super::metadata::parse_metadata;
use super::stats::{ParseStats, RecordParseResult};
use tracing::{debug, info};

/// Parse one C5M record into metadata and covariance structures.
///
/// Never fails: an absent covariance block yields `covariance: None`, a
/// block with no usable rows yields an empty [`CovarianceData`], and
/// malformed content is skipped with the decisions recorded in
/// [`ParseStats`].
///
/// [`CovarianceData`]: crate::app::models::CovarianceData
pub fn parse_record(text: &str) -> RecordParseResult {
    let mut stats = ParseStats::new();

    let metadata = parse_metadata(text);
    stats.metadata_fields = metadata.len();
    debug!("Extracted {} metadata fields", stats.metadata_fields);

    let covariance = parse_covariance_block(text, &mut stats)
        .map(|points| reconstruct(&points, &mut stats));

    match &covariance {
        Some(data) => info!(
            "Parsed record: {} metadata fields, {} covariance points ({} rows skipped)",
            stats.metadata_fields,
            data.len(),
            stats.rows_skipped
        ),
        None => info!(
            "Parsed record: {} metadata fields, no covariance block",
            stats.metadata_fields
        ),
    }

    RecordParseResult {
        metadata,
        covariance,
        stats,
    }
}
