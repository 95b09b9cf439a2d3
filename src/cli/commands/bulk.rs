//! Bulk command implementation for the EXFOR processor CLI
//!
//! One-step retrieval against the x4dat endpoint: the search criteria and
//! the retrieval op travel in a single request, and the server returns the
//! combined output for every matching dataset.

use super::shared::{create_spinner, load_configuration, setup_logging, write_output, RetrievalStats};
use crate::app::services::api_client::{ExforClient, SearchQuery};
use crate::cli::args::BulkArgs;
use crate::Result;
use colored::Colorize;
use std::time::Instant;
use tracing::{debug, info};

/// Bulk command runner for the EXFOR processor
pub async fn run_bulk(args: BulkArgs) -> Result<RetrievalStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;

    info!("Starting EXFOR bulk retrieval");
    debug!("Bulk arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args.config_file)?;
    let client = ExforClient::new(config)?;

    let query = SearchQuery {
        target: args.target.clone(),
        reaction: args.reaction.clone(),
        quantity: args.quantity.clone(),
        extra: SearchQuery::parse_extra(&args.extra)?,
    };

    let spinner = create_spinner(&format!(
        "Bulk fetching matching datasets ({})...",
        args.op.op_code()
    ));
    let payload = client.bulk_fetch(&query, args.op).await?;
    spinner.finish_and_clear();

    let mut stats = RetrievalStats {
        bytes_fetched: payload.len(),
        elapsed: start_time.elapsed(),
        ..Default::default()
    };

    stats.output_file = write_output(&payload, &args.out)?;

    if let Some((path, size)) = &stats.output_file {
        println!(
            "{} Bulk {} output written to {} ({})",
            "Done:".green().bold(),
            args.op.op_code(),
            path.display(),
            RetrievalStats::format_size(*size)
        );
    }

    info!(
        "Bulk retrieval completed in {:.2}s ({} bytes)",
        stats.elapsed.as_secs_f64(),
        stats.bytes_fetched
    );

    Ok(stats)
}
