//! Data models for EXFOR processing
//!
//! This module contains the core data structures for representing EXFOR
//! experiment metadata, the reconstructed covariance structures, and the
//! numeric series extracted from tabular CSV exports.

use serde::Serialize;
use std::collections::HashMap;

// =============================================================================
// Experiment Metadata
// =============================================================================

/// Flat key/value metadata record extracted from a C5M header
///
/// Holds free-text values for the recognized metadata keys (TITLE, AUTHORS,
/// YEAR, REACTION, MF, MT, ...). Order-insensitive; a later occurrence of a
/// key overwrites the earlier one, and continuation lines are space-joined
/// onto the most recently set field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetadataRecord {
    fields: HashMap<String, String>,
}

impl MetadataRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value for a metadata key, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Check whether a key has been set
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of fields present
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no fields have been extracted
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over (key, value) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Set a field, overwriting any prior value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Space-join additional text onto an existing field
    ///
    /// No-op when the key has not been set; orphan continuations are dropped.
    pub fn append(&mut self, key: &str, continuation: &str) {
        if let Some(value) = self.fields.get_mut(key) {
            if !continuation.is_empty() {
                if !value.is_empty() {
                    value.push(' ');
                }
                value.push_str(continuation);
            }
        }
    }
}

// =============================================================================
// Covariance Structures
// =============================================================================

/// One data row of a C5M covariance block
///
/// Carries the energy bin bounds, the measured value, the standard deviation
/// as a percentage of the value, and the raw lower-triangular correlation
/// listing (in percent) recorded for this row.
#[derive(Debug, Clone, PartialEq)]
pub struct CovariancePoint {
    /// Lower energy bound of the bin
    pub e_min: f64,

    /// Upper energy bound of the bin
    pub e_max: f64,

    /// Measured value for this bin
    pub value: f64,

    /// Standard deviation as a percentage of the value
    pub std_pct: f64,

    /// Raw correlation percentages in order of appearance; entry j is the
    /// correlation with point j, valid only for j <= row index
    pub correlations: Vec<f64>,
}

/// Reconstructed covariance structures for one dataset
///
/// `corr` and `cov` are always square N x N matrices, symmetric by
/// construction; N = 0 is the valid "no usable covariance rows" outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CovarianceData {
    /// (E_min, E_max) bounds per point, in row order
    pub energy_bounds: Vec<(f64, f64)>,

    /// Measured values per point
    pub values: Vec<f64>,

    /// Standard deviations as percentages, per point
    pub std_pct: Vec<f64>,

    /// Absolute standard deviations: sigma[i] = (std_pct[i] / 100) * values[i]
    pub sigma: Vec<f64>,

    /// Full symmetric correlation matrix with unit diagonal
    pub corr: Vec<Vec<f64>>,

    /// Full covariance matrix: cov[i][j] = corr[i][j] * sigma[i] * sigma[j]
    pub cov: Vec<Vec<f64>>,
}

impl CovarianceData {
    /// Number of points (matrix dimension)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the block yielded no usable rows
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// =============================================================================
// Tabular Data
// =============================================================================

/// A single field value from a CSV export
///
/// Fields are classified once at read time so that null/non-numeric
/// semantics are consistent across the whole pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum TableValue {
    /// Field parsed as a finite float
    Number(f64),

    /// Non-numeric field preserved verbatim
    Text(String),

    /// Empty field or explicit missing-value marker
    Missing,
}

impl TableValue {
    /// Numeric view of the value, None for text and missing fields
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TableValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// True for the explicit absence marker
    pub fn is_missing(&self) -> bool {
        matches!(self, TableValue::Missing)
    }
}

/// One header-labeled row of a CSV export
pub type TabularRow = HashMap<String, TableValue>;

/// Resolved (energy, value, uncertainty) series from a tabular dataset
///
/// The three sequences are always the same length: a row is included only
/// when both its energy and value fields are numeric, and a missing or
/// non-numeric uncertainty is recorded as None rather than excluding the row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedSeries {
    /// Independent variable values (incident energy)
    pub energies: Vec<f64>,

    /// Dependent values
    pub values: Vec<f64>,

    /// Per-point uncertainties where available
    pub uncertainties: Vec<Option<f64>>,
}

impl ResolvedSeries {
    /// Number of points in the series
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no rows survived numeric filtering
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_record_overwrite_and_append() {
        let mut record = MetadataRecord::new();
        record.set("TITLE", "First");
        record.set("TITLE", "Second");
        assert_eq!(record.get("TITLE"), Some("Second"));

        record.append("TITLE", "continued");
        assert_eq!(record.get("TITLE"), Some("Second continued"));

        // Orphan continuation is dropped
        record.append("AUTHORS", "nobody");
        assert!(!record.contains("AUTHORS"));
    }

    #[test]
    fn test_table_value_views() {
        assert_eq!(TableValue::Number(2.5).as_f64(), Some(2.5));
        assert_eq!(TableValue::Text("NA".to_string()).as_f64(), None);
        assert_eq!(TableValue::Missing.as_f64(), None);
        assert!(TableValue::Missing.is_missing());
        assert!(!TableValue::Number(0.0).is_missing());
    }

    #[test]
    fn test_covariance_data_empty() {
        let data = CovarianceData::default();
        assert!(data.is_empty());
        assert_eq!(data.len(), 0);
    }
}
