//! CSV text to header-labeled rows
//!
//! Reads an in-memory CSV payload (header row plus records) into
//! [`TabularRow`]s, classifying every field through the shared helper so
//! numeric and missing-value semantics match the rest of the pipeline.

use super::field_parsers::parse_table_value;
use crate::app::models::TabularRow;
use crate::{Error, Result};
use tracing::debug;

/// Parse CSV text into header-labeled rows.
///
/// Ragged records are tolerated: fields beyond the header width are
/// dropped and absent trailing fields are simply not present in the row.
pub fn read_tabular_rows(text: &str) -> Result<Vec<TabularRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| Error::csv_parsing("Failed to read CSV headers", Some(e)))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| Error::csv_parsing("Failed to read CSV record", Some(e)))?;

        let mut row = TabularRow::new();
        for (header, field) in headers.iter().zip(record.iter()) {
            row.insert(header.clone(), parse_table_value(field));
        }
        rows.push(row);
    }

    debug!("Read {} rows with {} columns", rows.len(), headers.len());
    Ok(rows)
}
