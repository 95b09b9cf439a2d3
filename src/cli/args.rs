//! Command-line argument definitions for the EXFOR processor
//!
//! This module defines the complete CLI interface using the clap derive API.
//! Subcommands map one-to-one onto the Web API endpoints: search (x4list),
//! download (x4get), bulk (x4dat), and entry (x4get?sub=...).

use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the EXFOR processor
///
/// Retrieves nuclear reaction data from the IAEA EXFOR Web API and parses
/// C5M records and CSV exports into numerically usable structures.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "exfor-processor",
    version,
    about = "Retrieve and parse nuclear reaction data from the IAEA EXFOR Web API",
    long_about = "A tool for querying the IAEA EXFOR Web API and converting its text \
                  exports into structured data: experiment metadata records, reconstructed \
                  correlation/covariance matrices from C5M covariance blocks, and \
                  (energy, value, uncertainty) numeric series from CSV exports."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the EXFOR processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Search datasets by Target/Reaction/Quantity (x4list)
    Search(SearchArgs),
    /// Download one dataset (x4get)
    Download(DownloadArgs),
    /// One-step retrieval across many datasets (x4dat)
    Bulk(BulkArgs),
    /// Retrieve an Entry or Subentry (x4get?sub=...)
    Entry(EntryArgs),
}

/// Arguments for the search command
#[derive(Debug, Clone, Parser)]
pub struct SearchArgs {
    /// Target nuclide code
    ///
    /// EXFOR target code, wildcards allowed (e.g. PB-204 or PB-*).
    #[arg(long = "target", value_name = "CODE", help = "Target, e.g. PB-204 or PB-*")]
    pub target: Option<String>,

    /// Reaction code
    #[arg(long = "reaction", value_name = "CODE", help = "Reaction, e.g. n,g or n,*")]
    pub reaction: Option<String>,

    /// Quantity code
    #[arg(
        long = "quantity",
        value_name = "CODE",
        help = "Quantity, e.g. SIG, DA, DE, NU, FY"
    )]
    pub quantity: Option<String>,

    /// Additional filters as key=value pairs
    ///
    /// Passed through verbatim to the endpoint, e.g. Author1=Michel Accnum=23114.
    #[arg(
        long = "extra",
        value_name = "KEY=VALUE",
        num_args = 1..,
        help = "Additional filters as key=value pairs"
    )]
    pub extra: Vec<String>,

    /// Output format requested from the server
    #[arg(
        long = "output",
        value_name = "FORMAT",
        default_value = "json",
        help = "Server output format: json, xml, csv, or txt"
    )]
    pub output: crate::app::services::api_client::SearchOutput,

    /// Output file (stdout if omitted)
    #[arg(short = 'o', long = "out", value_name = "FILE", help = "Output file path")]
    pub out: Option<PathBuf>,

    /// Path to configuration file (TOML format)
    #[arg(short = 'c', long = "config", value_name = "FILE", help = "Path to configuration file")]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the download command
#[derive(Debug, Clone, Parser)]
pub struct DownloadArgs {
    /// EXFOR DatasetID to retrieve
    #[arg(long = "dataset", value_name = "ID", help = "EXFOR DatasetID")]
    pub dataset: String,

    /// Retrieval format
    ///
    /// csv fetches a tabular export; the c5m/c5ma formats carry a generated
    /// correlation matrix in the covariance block.
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "csv",
        help = "Retrieval format: csv, c4, c5, c5a, c5m, or c5ma"
    )]
    pub format: String,

    /// CSV export convention
    #[arg(
        long = "plus",
        value_name = "MODE",
        default_value_t = 1,
        help = "CSV mode: 1=computational, 2=universal"
    )]
    pub plus: u8,

    /// Parse the payload and print a structured summary
    ///
    /// For csv this resolves the (energy, value, uncertainty) series; for
    /// c5m/c5ma it extracts metadata and reconstructs the covariance matrix.
    #[arg(long = "parse", help = "Parse the payload and print a structured summary")]
    pub parse: bool,

    /// Output file for the raw payload (stdout/summary if omitted)
    #[arg(short = 'o', long = "out", value_name = "FILE", help = "Output file path")]
    pub out: Option<PathBuf>,

    /// Path to configuration file (TOML format)
    #[arg(short = 'c', long = "config", value_name = "FILE", help = "Path to configuration file")]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the bulk command
#[derive(Debug, Clone, Parser)]
pub struct BulkArgs {
    /// Target nuclide code
    #[arg(long = "target", value_name = "CODE", help = "Target, e.g. PB-204 or PB-*")]
    pub target: Option<String>,

    /// Reaction code
    #[arg(long = "reaction", value_name = "CODE", help = "Reaction, e.g. n,g or n,*")]
    pub reaction: Option<String>,

    /// Quantity code
    #[arg(long = "quantity", value_name = "CODE", help = "Quantity, e.g. SIG, DA, NU")]
    pub quantity: Option<String>,

    /// Additional filters as key=value pairs
    #[arg(
        long = "extra",
        value_name = "KEY=VALUE",
        num_args = 1..,
        help = "Additional filters as key=value pairs"
    )]
    pub extra: Vec<String>,

    /// Retrieval operation for the combined output
    #[arg(
        long = "op",
        value_name = "OP",
        default_value = "c4",
        help = "Retrieval op: c4, c5, c5a, c5m, or c5ma"
    )]
    pub op: crate::app::services::api_client::BulkOp,

    /// Output file (stdout if omitted)
    #[arg(short = 'o', long = "out", value_name = "FILE", help = "Output file path")]
    pub out: Option<PathBuf>,

    /// Path to configuration file (TOML format)
    #[arg(short = 'c', long = "config", value_name = "FILE", help = "Path to configuration file")]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the entry command
#[derive(Debug, Clone, Parser)]
pub struct EntryArgs {
    /// Entry or Subentry accession
    ///
    /// Entry (A1495), Subentry (A1495003), or a historical version with
    /// a :YYYYMMDD suffix.
    #[arg(long = "sub", value_name = "ACCESSION", help = "Entry (A1495) or Subentry (A1495003)")]
    pub sub: String,

    /// Optional representation selector
    #[arg(
        long = "plus",
        value_name = "MODE",
        help = "Optional plus mode (e.g. 5 for X5 JSON, 6 for CSV)"
    )]
    pub plus: Option<u8>,

    /// Output file (stdout if omitted)
    #[arg(short = 'o', long = "out", value_name = "FILE", help = "Output file path")]
    pub out: Option<PathBuf>,

    /// Path to configuration file (TOML format)
    #[arg(short = 'c', long = "config", value_name = "FILE", help = "Path to configuration file")]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

/// Map a -v count onto a tracing filter level
fn log_level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Check that an output file's parent directory exists
fn validate_out_path(out: &Option<PathBuf>) -> Result<()> {
    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(Error::configuration(format!(
                    "Output file directory does not exist: {}",
                    parent.display()
                )));
            }
        }
    }
    Ok(())
}

impl SearchArgs {
    /// Validate the search command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_out_path(&self.out)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level_for(self.verbose)
    }
}

impl DownloadArgs {
    /// Validate the download command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Also checks the format/plus vocabulary before any network traffic
        crate::app::services::api_client::DatasetOp::parse(&self.format, self.plus)?;

        if self.dataset.trim().is_empty() {
            return Err(Error::configuration("DatasetID cannot be empty"));
        }

        validate_out_path(&self.out)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level_for(self.verbose)
    }
}

impl BulkArgs {
    /// Validate the bulk command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_out_path(&self.out)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level_for(self.verbose)
    }
}

impl EntryArgs {
    /// Validate the entry command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.sub.trim().is_empty() {
            return Err(Error::configuration("Accession cannot be empty"));
        }

        validate_out_path(&self.out)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level_for(self.verbose)
    }
}
