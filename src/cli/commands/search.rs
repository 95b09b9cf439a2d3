//! Search command implementation for the EXFOR processor CLI
//!
//! Queries the x4list endpoint with Target/Reaction/Quantity criteria and
//! prints or saves the dataset listing in the requested server format.

use super::shared::{create_spinner, load_configuration, setup_logging, write_output, RetrievalStats};
use crate::app::services::api_client::{ExforClient, SearchOutput, SearchQuery};
use crate::cli::args::SearchArgs;
use crate::Result;
use colored::Colorize;
use std::time::Instant;
use tracing::{debug, info};

/// Search command runner for the EXFOR processor
pub async fn run_search(args: SearchArgs) -> Result<RetrievalStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;

    info!("Starting EXFOR dataset search");
    debug!("Search arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args.config_file)?;
    let client = ExforClient::new(config)?;

    let query = SearchQuery {
        target: args.target.clone(),
        reaction: args.reaction.clone(),
        quantity: args.quantity.clone(),
        extra: SearchQuery::parse_extra(&args.extra)?,
    };

    let spinner = create_spinner("Searching EXFOR datasets...");
    let payload = client.search_datasets(&query, args.output).await?;
    spinner.finish_and_clear();

    let mut stats = RetrievalStats {
        bytes_fetched: payload.len(),
        elapsed: start_time.elapsed(),
        ..Default::default()
    };

    // Pretty-print JSON listings going to stdout; saved files keep the
    // server's exact bytes.
    let display = if args.out.is_none() && args.output == SearchOutput::Json {
        pretty_json(&payload)
    } else {
        payload.clone()
    };

    stats.output_file = write_output(&display, &args.out)?;

    if let Some((path, size)) = &stats.output_file {
        println!(
            "{} Search results written to {} ({})",
            "Done:".green().bold(),
            path.display(),
            RetrievalStats::format_size(*size)
        );
    }

    info!(
        "Search completed in {:.2}s ({} bytes)",
        stats.elapsed.as_secs_f64(),
        stats.bytes_fetched
    );

    Ok(stats)
}

/// Re-indent a JSON payload for terminal display, falling back to the raw
/// text when it does not parse.
fn pretty_json(payload: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(payload) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| payload.to_string()),
        Err(_) => payload.to_string(),
    }
}
