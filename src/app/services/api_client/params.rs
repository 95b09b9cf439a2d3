//! Request-parameter construction for the EXFOR Web API
//!
//! Pure, unit-testable vocabulary for the three endpoints: dataset search
//! (x4list), single dataset/entry retrieval (x4get), and one-step bulk
//! retrieval (x4dat).

use crate::constants::{BULK_OPS, DATASET_OPS, SEARCH_OUTPUTS};
use crate::{Error, Result};
use std::str::FromStr;

/// Search criteria for x4list and x4dat
///
/// `extra` carries arbitrary additional filters (e.g. Author1=Michel,
/// Accnum=23114) passed through verbatim.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Target nuclide code, e.g. "PB-204" or "PB-*"
    pub target: Option<String>,

    /// Reaction code, e.g. "n,g" or "n,*"
    pub reaction: Option<String>,

    /// Quantity code, e.g. "SIG", "DA", "NU"
    pub quantity: Option<String>,

    /// Additional filters as key/value pairs
    pub extra: Vec<(String, String)>,
}

impl SearchQuery {
    /// Render the query as request parameters
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(target) = &self.target {
            params.push(("Target".to_string(), target.clone()));
        }
        if let Some(reaction) = &self.reaction {
            params.push(("Reaction".to_string(), reaction.clone()));
        }
        if let Some(quantity) = &self.quantity {
            params.push(("Quantity".to_string(), quantity.clone()));
        }
        params.extend(self.extra.iter().cloned());
        params
    }

    /// Parse `key=value` filter strings into the extra filter list
    pub fn parse_extra(filters: &[String]) -> Result<Vec<(String, String)>> {
        filters
            .iter()
            .map(|kv| {
                kv.split_once('=')
                    .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
                    .ok_or_else(|| {
                        Error::data_validation(format!(
                            "Extra filter must be key=value, got: '{}'",
                            kv
                        ))
                    })
            })
            .collect()
    }
}

/// Output format flag for dataset search (x4list)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutput {
    /// Structured JSON (default)
    Json,
    /// XML document
    Xml,
    /// Delimited rows
    Csv,
    /// Plain text listing
    Txt,
}

impl SearchOutput {
    /// The bare flag parameter selecting this output format
    pub fn as_param(&self) -> (String, String) {
        let flag = match self {
            SearchOutput::Json => "json",
            SearchOutput::Xml => "xml",
            SearchOutput::Csv => "csv",
            SearchOutput::Txt => "txt",
        };
        (flag.to_string(), String::new())
    }
}

impl FromStr for SearchOutput {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(SearchOutput::Json),
            "xml" => Ok(SearchOutput::Xml),
            "csv" => Ok(SearchOutput::Csv),
            "txt" => Ok(SearchOutput::Txt),
            other => Err(Error::unknown_format(other, SEARCH_OUTPUTS.join(", "))),
        }
    }
}

/// CSV export convention for x4get&op=csv
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvVariant {
    /// plus=1: computational CSV with EN/DATA field prefixes
    Computational,
    /// plus=2: universal CSV with labeled axes (y, dy, x2(eV), ...)
    Universal,
}

impl CsvVariant {
    /// The `plus` parameter value for this variant
    pub fn plus(&self) -> &'static str {
        match self {
            CsvVariant::Computational => "1",
            CsvVariant::Universal => "2",
        }
    }

    /// Build from the numeric `--plus` CLI value
    pub fn from_plus(plus: u8) -> Result<Self> {
        match plus {
            1 => Ok(CsvVariant::Computational),
            2 => Ok(CsvVariant::Universal),
            other => Err(Error::data_validation(format!(
                "CSV plus mode must be 1 (computational) or 2 (universal), got {}",
                other
            ))),
        }
    }
}

/// Retrieval operation for a single dataset (x4get)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetOp {
    /// Parsed tabular export
    Csv(CsvVariant),
    /// C4 text
    C4,
    /// C5 text
    C5,
    /// C5 auto-renormalized
    C5a,
    /// C5 with generated correlation matrix
    C5m,
    /// C5 auto-renormalized with correlation matrix
    C5ma,
}

impl DatasetOp {
    /// Build from the CLI format string and plus mode
    pub fn parse(format: &str, plus: u8) -> Result<Self> {
        match format.to_lowercase().as_str() {
            "csv" => Ok(DatasetOp::Csv(CsvVariant::from_plus(plus)?)),
            "c4" => Ok(DatasetOp::C4),
            "c5" => Ok(DatasetOp::C5),
            "c5a" => Ok(DatasetOp::C5a),
            "c5m" => Ok(DatasetOp::C5m),
            "c5ma" => Ok(DatasetOp::C5ma),
            other => Err(Error::unknown_format(other, DATASET_OPS.join(", "))),
        }
    }

    /// The `op` code sent to the server
    pub fn op_code(&self) -> &'static str {
        match self {
            DatasetOp::Csv(_) => "csv",
            DatasetOp::C4 => "c4",
            DatasetOp::C5 => "c5",
            DatasetOp::C5a => "c5a",
            DatasetOp::C5m => "c5m",
            DatasetOp::C5ma => "c5ma",
        }
    }

    /// True when the payload carries a covariance block worth parsing
    pub fn has_covariance(&self) -> bool {
        matches!(self, DatasetOp::C5m | DatasetOp::C5ma)
    }

    /// Render the retrieval parameters for a dataset
    pub fn to_params(&self, dataset_id: &str) -> Vec<(String, String)> {
        let mut params = vec![
            ("DatasetID".to_string(), dataset_id.to_string()),
            ("op".to_string(), self.op_code().to_string()),
        ];
        if let DatasetOp::Csv(variant) = self {
            params.push(("plus".to_string(), variant.plus().to_string()));
        }
        params
    }
}

/// Retrieval operation for bulk search-and-download (x4dat)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkOp {
    C4,
    C5,
    C5a,
    C5m,
    C5ma,
}

impl BulkOp {
    /// The `op` code sent to the server
    pub fn op_code(&self) -> &'static str {
        match self {
            BulkOp::C4 => "c4",
            BulkOp::C5 => "c5",
            BulkOp::C5a => "c5a",
            BulkOp::C5m => "c5m",
            BulkOp::C5ma => "c5ma",
        }
    }
}

impl FromStr for BulkOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "c4" => Ok(BulkOp::C4),
            "c5" => Ok(BulkOp::C5),
            "c5a" => Ok(BulkOp::C5a),
            "c5m" => Ok(BulkOp::C5m),
            "c5ma" => Ok(BulkOp::C5ma),
            other => Err(Error::unknown_format(other, BULK_OPS.join(", "))),
        }
    }
}

/// Parameters for entry/subentry retrieval (x4get?sub=...)
///
/// `sub` is an Entry ("A1495"), Subentry ("A1495003"), or a historical
/// version with ":YYYYMMDD". `plus` selects an alternate representation
/// (5 = X5 JSON, 6 = CSV).
pub fn entry_params(sub: &str, plus: Option<u8>) -> Vec<(String, String)> {
    let mut params = vec![("sub".to_string(), sub.to_string())];
    if let Some(plus) = plus {
        params.push(("plus".to_string(), plus.to_string()));
    }
    params
}
