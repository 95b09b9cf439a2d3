//! Entry command implementation for the EXFOR processor CLI
//!
//! Retrieves a whole Entry or a single Subentry through x4get's `sub`
//! parameter, optionally in an alternate representation via `plus`.

use super::shared::{create_spinner, load_configuration, setup_logging, write_output, RetrievalStats};
use crate::app::services::api_client::ExforClient;
use crate::cli::args::EntryArgs;
use crate::Result;
use colored::Colorize;
use std::time::Instant;
use tracing::{debug, info};

/// Entry command runner for the EXFOR processor
pub async fn run_entry(args: EntryArgs) -> Result<RetrievalStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;

    info!("Starting EXFOR entry retrieval");
    debug!("Entry arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args.config_file)?;
    let client = ExforClient::new(config)?;

    let spinner = create_spinner(&format!("Fetching entry {}...", args.sub));
    let payload = client.fetch_entry(&args.sub, args.plus).await?;
    spinner.finish_and_clear();

    let mut stats = RetrievalStats {
        bytes_fetched: payload.len(),
        elapsed: start_time.elapsed(),
        ..Default::default()
    };

    stats.output_file = write_output(&payload, &args.out)?;

    if let Some((path, size)) = &stats.output_file {
        println!(
            "{} Entry {} written to {} ({})",
            "Done:".green().bold(),
            args.sub,
            path.display(),
            RetrievalStats::format_size(*size)
        );
    }

    info!(
        "Entry retrieval completed in {:.2}s ({} bytes)",
        stats.elapsed.as_secs_f64(),
        stats.bytes_fetched
    );

    Ok(stats)
}
