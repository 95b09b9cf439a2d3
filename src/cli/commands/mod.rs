//! Command implementations for the EXFOR processor CLI
//!
//! This module contains the main command execution logic, progress reporting,
//! and error handling for the CLI interface. Each command is implemented in
//! its own module for better organization and maintainability.

pub mod bulk;
pub mod download;
pub mod entry;
pub mod search;
pub mod shared;

// Re-export the main types and functions for backward compatibility
pub use shared::RetrievalStats;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner for the EXFOR processor
///
/// This function dispatches to the appropriate subcommand handler based on CLI args.
/// Each command is implemented in its own module:
/// - `search`: dataset search against x4list
/// - `download`: single dataset retrieval against x4get
/// - `bulk`: one-step search-and-download against x4dat
/// - `entry`: Entry/Subentry retrieval against x4get?sub=...
pub async fn run(args: Args) -> Result<RetrievalStats> {
    match args.get_command() {
        Commands::Search(search_args) => search::run_search(search_args).await,
        Commands::Download(download_args) => download::run_download(download_args).await,
        Commands::Bulk(bulk_args) => bulk::run_bulk(bulk_args).await,
        Commands::Entry(entry_args) => entry::run_entry(entry_args).await,
    }
}
