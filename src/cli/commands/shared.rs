//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::config::Config;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Retrieval statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct RetrievalStats {
    /// Number of bytes received from the server
    pub bytes_fetched: usize,
    /// Number of tabular rows parsed from the payload
    pub rows_parsed: usize,
    /// Number of metadata fields extracted from the payload
    pub metadata_fields: usize,
    /// Total retrieval time
    pub elapsed: Duration,
    /// Output file and size, when the payload was saved
    pub output_file: Option<(PathBuf, u64)>,
}

impl RetrievalStats {
    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("exfor_processor={}", log_level)));

    // Standard logging with timestamps, kept off stdout so piped payloads stay clean
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration (explicit file -> default location -> defaults)
pub fn load_configuration(config_file: &Option<PathBuf>) -> Result<Config> {
    info!("Loading configuration");

    if let Some(path) = config_file {
        info!("Using config file: {}", path.display());
    } else if let Some(default_path) = Config::default_config_path().filter(|p| p.exists()) {
        info!("Using config file: {}", default_path.display());
    } else {
        info!("No config file found, using defaults");
    }

    Config::load(config_file.as_deref())
}

/// Write a payload to a file, or to stdout when no path is given.
///
/// Returns the file path and its size on disk when a file was written.
pub fn write_output(payload: &str, out: &Option<PathBuf>) -> Result<Option<(PathBuf, u64)>> {
    match out {
        Some(path) => {
            std::fs::write(path, payload).map_err(|e| {
                Error::io(format!("Failed to write output file {}", path.display()), e)
            })?;
            let size = file_size(path)?;
            info!(
                "Wrote {} ({})",
                path.display(),
                RetrievalStats::format_size(size)
            );
            Ok(Some((path.clone(), size)))
        }
        None => {
            println!("{}", payload);
            Ok(None)
        }
    }
}

fn file_size(path: &Path) -> Result<u64> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| Error::io(format!("Failed to stat output file {}", path.display()), e))?;
    Ok(metadata.len())
}

/// Create a spinner for an in-flight request
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_retrieval_stats_default() {
        let stats = RetrievalStats::default();
        assert_eq!(stats.bytes_fetched, 0);
        assert_eq!(stats.rows_parsed, 0);
        assert!(stats.output_file.is_none());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(RetrievalStats::format_size(500), "500 B");
        assert_eq!(RetrievalStats::format_size(1536), "1.50 KB");
        assert_eq!(RetrievalStats::format_size(1048576), "1.00 MB");
        assert_eq!(RetrievalStats::format_size(1073741824), "1.00 GB");
    }

    #[test]
    fn test_write_output_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("payload.csv");

        let written = write_output("a,b\n1,2\n", &Some(path.clone())).unwrap();
        let (written_path, size) = written.expect("file output expected");
        assert_eq!(written_path, path);
        assert_eq!(size, 8);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\n1,2\n");
    }

    #[test]
    fn test_write_output_rejects_missing_directory() {
        let out = Some(PathBuf::from("/nonexistent/dir/payload.csv"));
        assert!(write_output("x", &out).is_err());
    }

    #[test]
    fn test_load_configuration_defaults() {
        let config = load_configuration(&None).unwrap();
        assert!(config.validate().is_ok());
    }
}
