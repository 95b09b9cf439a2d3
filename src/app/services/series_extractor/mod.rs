//! Numeric series extraction from EXFOR CSV exports
//!
//! The Web API exports tabular data under two header conventions: the
//! computational CSV (plus=1) with EN/DATA field prefixes and unit suffixes,
//! and the universal CSV (plus=2) with short symbolic names (y, dy, x2(eV)).
//! This module reads either into header-labeled rows and resolves which
//! columns hold the (energy, value, uncertainty) triple.
//!
//! ## Architecture
//!
//! - [`field_parsers`] - Shared numeric/missing/text field classification
//! - [`reader`] - CSV text to header-labeled rows
//! - [`resolver`] - Column resolution and numeric series extraction

pub mod field_parsers;
pub mod reader;
pub mod resolver;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use field_parsers::parse_table_value;
pub use reader::read_tabular_rows;
pub use resolver::{resolve_series, select_columns, ColumnSelection};
