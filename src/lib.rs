//! EXFOR Processor Library
//!
//! A Rust library for retrieving and parsing nuclear reaction data from the
//! IAEA EXFOR Web API.
//!
//! This library provides tools for:
//! - Parsing C5M experiment records with marker-prefixed metadata headers
//! - Reconstructing full symmetric correlation and covariance matrices from
//!   the triangular covariance block embedded in C5M output
//! - Extracting (energy, value, uncertainty) numeric series from the two
//!   EXFOR CSV export conventions
//! - Querying the x4list/x4get/x4dat endpoints with retry and backoff
//! - Comprehensive error handling and recovery

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod api_client;
        pub mod record_parser;
        pub mod series_extractor;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CovarianceData, MetadataRecord, ResolvedSeries, TableValue};
pub use config::Config;

/// Result type alias for the EXFOR processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for EXFOR processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed after exhausting retries
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// CSV parsing error
    #[error("CSV parsing error: {message}")]
    CsvParsing {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// No acceptable energy/value column could be identified in the header set
    #[error("Could not resolve energy/value columns from headers: {headers:?}")]
    ColumnResolution { headers: Vec<String> },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Unsupported retrieval format or operation code
    #[error("Unknown format '{format}': expected one of {expected}")]
    UnknownFormat { format: String, expected: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an HTTP error with context
    pub fn http(message: impl Into<String>, source: Option<reqwest::Error>) -> Self {
        Self::Http {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::CsvParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a column resolution error from the available header set
    pub fn column_resolution(headers: Vec<String>) -> Self {
        Self::ColumnResolution { headers }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an unknown format error
    pub fn unknown_format(format: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::UnknownFormat {
            format: format.into(),
            expected: expected.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Http {
            message: "HTTP request failed".to_string(),
            source: Some(error),
        }
    }
}
