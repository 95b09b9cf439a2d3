use clap::Parser;
use exfor_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_stats) => {
            // Success - results have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("EXFOR Processor - IAEA Nuclear Reaction Data Client");
    println!("===================================================");
    println!();
    println!("Retrieve nuclear reaction data from the IAEA EXFOR Web API and parse");
    println!("C5M records and CSV exports into structured, numerically usable data.");
    println!();
    println!("USAGE:");
    println!("    exfor-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    search      Search datasets by Target/Reaction/Quantity");
    println!("    download    Download one dataset, optionally parsing it");
    println!("    bulk        One-step retrieval across all matching datasets");
    println!("    entry       Retrieve a whole Entry or a single Subentry");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # List Pb-204 (n,g) cross-section datasets:");
    println!("    exfor-processor search --target PB-204 --reaction n,g --quantity SIG");
    println!();
    println!("    # Download a dataset as CSV and preview the numeric series:");
    println!("    exfor-processor download --dataset 13756.002 --format csv --parse");
    println!();
    println!("    # Download a C5M record with its correlation matrix:");
    println!("    exfor-processor download --dataset 13756.002 --format c5m --parse");
    println!();
    println!("    # Bulk C4 retrieval for every matching dataset:");
    println!("    exfor-processor bulk --target PB-* --reaction n,g --op c4 --out pb.c4");
    println!();
    println!("For detailed help on any command, use:");
    println!("    exfor-processor <COMMAND> --help");
}
