//! Covariance block location and row tokenizing
//!
//! Finds the `#COVARDATA` .. `#/COVARDATA` block inside a C5M record and
//! tokenizes its data lines into [`CovariancePoint`]s with tolerant numeric
//! parsing: malformed rows are skipped and unparseable correlation tokens
//! are dropped, never aborting the parse.

use super::stats::ParseStats;
use crate::app::models::CovariancePoint;
use crate::constants::{
    COVARIANCE_END_MARKER, COVARIANCE_ROW_MIN_TOKENS, COVARIANCE_START_MARKER, METADATA_MARKER,
};
use tracing::debug;

/// Locate and parse the covariance block of a C5M record.
///
/// Returns None when no block is present (missing start or end marker);
/// a present block with no parseable rows yields Some(empty vec). Both are
/// valid outcomes, not errors. Row order is preserved because it determines
/// matrix indexing downstream.
pub fn parse_covariance_block(text: &str, stats: &mut ParseStats) -> Option<Vec<CovariancePoint>> {
    let lines: Vec<&str> = text.lines().collect();

    let start = lines
        .iter()
        .position(|line| line.starts_with(COVARIANCE_START_MARKER))?;
    let end = lines[start + 1..]
        .iter()
        .position(|line| line.starts_with(COVARIANCE_END_MARKER))
        .map(|offset| start + 1 + offset)?;

    let mut points = Vec::new();

    // The first line after the marker is a header; it and any other
    // marker-prefixed or blank lines inside the block are skipped.
    for line in &lines[start + 1..end] {
        if line.trim().is_empty() || line.starts_with(METADATA_MARKER) {
            continue;
        }

        stats.total_rows += 1;
        match parse_row(line, stats) {
            Some(point) => {
                points.push(point);
                stats.rows_parsed += 1;
            }
            None => {
                stats.rows_skipped += 1;
                stats
                    .errors
                    .push(format!("Row {}: malformed covariance row", stats.total_rows));
                debug!("Skipped malformed covariance row: {}", line.trim());
            }
        }
    }

    Some(points)
}

/// Tokenize one data line into a covariance point.
///
/// The first four whitespace-separated tokens must parse as floats
/// (E_min, E_max, value, std_pct); failure on any of them rejects the row.
/// Remaining tokens are parsed independently and unparseable ones are
/// dropped so partial correlation data is preserved.
fn parse_row(line: &str, stats: &mut ParseStats) -> Option<CovariancePoint> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < COVARIANCE_ROW_MIN_TOKENS {
        return None;
    }

    let e_min = tokens[0].parse::<f64>().ok()?;
    let e_max = tokens[1].parse::<f64>().ok()?;
    let value = tokens[2].parse::<f64>().ok()?;
    let std_pct = tokens[3].parse::<f64>().ok()?;

    let mut correlations = Vec::with_capacity(tokens.len() - COVARIANCE_ROW_MIN_TOKENS);
    for token in &tokens[COVARIANCE_ROW_MIN_TOKENS..] {
        match token.parse::<f64>() {
            Ok(v) => correlations.push(v),
            Err(_) => {
                stats.tokens_dropped += 1;
                debug!("Dropped unparseable correlation token '{}'", token);
            }
        }
    }

    Some(CovariancePoint {
        e_min,
        e_max,
        value,
        std_pct,
        correlations,
    })
}
