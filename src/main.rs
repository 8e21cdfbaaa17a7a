use anyhow::Context;
use clap::Parser;
use route_sheet::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args).context("route-sheet command failed") {
        Ok(_stats) => {
            // Success - output has already been written by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Route Sheet Parser - Courier Route Sheet OCR Cleanup");
    println!("====================================================");
    println!();
    println!("Turn the OCR text of a photographed route sheet, or a pasted CSV export,");
    println!("into normalized delivery stops (address, status, notes).");
    println!();
    println!("USAGE:");
    println!("    route-sheet <COMMAND> [OPTIONS] [INPUT]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse a route sheet into stop records (main command)");
    println!("    inspect     Show how each line is split and which columns are used");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Parse an OCR dump with status validation:");
    println!("    route-sheet parse ocr.txt --strict-status");
    println!();
    println!("    # Parse a CSV export with a header row into CSV:");
    println!("    route-sheet parse export.csv --has-header --format csv -o stops.csv");
    println!();
    println!("    # Read from stdin and show per-line diagnostics:");
    println!("    pbpaste | route-sheet parse --debug -v");
    println!();
    println!("    # See how lines are split:");
    println!("    route-sheet inspect ocr.txt");
    println!();
    println!("For detailed help on any command, use:");
    println!("    route-sheet <COMMAND> --help");
}
