//! Field parsing utilities for tabular EXFOR exports
//!
//! A single classification helper guarantees consistent null/non-numeric
//! semantics everywhere a raw field is converted.

use crate::app::models::TableValue;
use crate::constants::CSV_MISSING_VALUE;

/// Classify one raw CSV field.
///
/// Empty fields and the case-insensitive `null` marker become
/// [`TableValue::Missing`]; fields that parse as finite floats become
/// [`TableValue::Number`]; everything else is preserved verbatim as
/// [`TableValue::Text`].
pub fn parse_table_value(raw: &str) -> TableValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(CSV_MISSING_VALUE) {
        return TableValue::Missing;
    }

    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => TableValue::Number(v),
        _ => TableValue::Text(trimmed.to_string()),
    }
}
