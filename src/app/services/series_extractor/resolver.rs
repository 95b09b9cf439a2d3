//! Column resolution and numeric series extraction
//!
//! Maps the heterogeneous header names of the two EXFOR CSV export
//! conventions onto a canonical (energy, value, uncertainty) triple and
//! extracts three parallel numeric sequences.

use crate::app::models::{ResolvedSeries, TabularRow};
use crate::constants::{columns, is_energy_like_header, is_value_like_header};
use crate::{Error, Result};
use std::collections::BTreeSet;
use tracing::debug;

/// Headers chosen for the (energy, value, uncertainty) triple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection {
    /// Independent variable column
    pub energy: String,

    /// Dependent value column
    pub value: String,

    /// Uncertainty column when one was identified
    pub uncertainty: Option<String>,
}

/// Resolve the series columns and extract parallel numeric sequences.
///
/// Empty input yields an empty series. Rows where either the energy or
/// value field is non-numeric are excluded silently; a missing or
/// non-numeric uncertainty is recorded as None without excluding the row.
/// Fails with [`Error::ColumnResolution`] when no acceptable energy or
/// value column exists, carrying the sorted header union for diagnostics.
pub fn resolve_series(rows: &[TabularRow]) -> Result<ResolvedSeries> {
    if rows.is_empty() {
        return Ok(ResolvedSeries::default());
    }

    let selection = select_columns(rows)?;
    debug!(
        "Resolved columns: energy='{}', value='{}', uncertainty={:?}",
        selection.energy, selection.value, selection.uncertainty
    );

    let mut series = ResolvedSeries::default();
    for row in rows {
        let energy = row.get(&selection.energy).and_then(|v| v.as_f64());
        let value = row.get(&selection.value).and_then(|v| v.as_f64());

        // Both the independent variable and the value must be numeric for
        // the row to contribute a point
        let (Some(energy), Some(value)) = (energy, value) else {
            continue;
        };

        let uncertainty = selection
            .uncertainty
            .as_ref()
            .and_then(|col| row.get(col))
            .and_then(|v| v.as_f64());

        series.energies.push(energy);
        series.values.push(value);
        series.uncertainties.push(uncertainty);
    }

    Ok(series)
}

/// Choose the series columns from the union of header names.
///
/// Each column is resolved by an ordered selector list: the well-known
/// spellings first, then (for energy and value only) a structural predicate
/// over the header text. The first selector that matches wins, so new
/// export conventions extend the lists without touching this logic.
pub fn select_columns(rows: &[TabularRow]) -> Result<ColumnSelection> {
    // Sorted union keeps the fallback scan deterministic and doubles as the
    // diagnostic payload on failure
    let headers: BTreeSet<&str> = rows
        .iter()
        .flat_map(|row| row.keys().map(String::as_str))
        .collect();

    let energy = first_present(columns::ENERGY_PRIORITY, &headers)
        .or_else(|| first_matching(&headers, is_energy_like_header));
    let value = first_present(columns::VALUE_PRIORITY, &headers)
        .or_else(|| first_matching(&headers, is_value_like_header));
    let uncertainty = first_present(columns::UNCERTAINTY_PRIORITY, &headers);

    match (energy, value) {
        (Some(energy), Some(value)) => Ok(ColumnSelection {
            energy: energy.to_string(),
            value: value.to_string(),
            uncertainty: uncertainty.map(str::to_string),
        }),
        _ => Err(Error::column_resolution(
            headers.into_iter().map(str::to_string).collect(),
        )),
    }
}

/// First candidate spelling present in the header union
fn first_present<'a>(candidates: &[&'a str], headers: &BTreeSet<&str>) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .find(|candidate| headers.contains(*candidate))
}

/// First header (in sorted order) satisfying the structural predicate
fn first_matching<'a>(headers: &BTreeSet<&'a str>, predicate: fn(&str) -> bool) -> Option<&'a str> {
    headers.iter().copied().find(|h| predicate(h))
}
