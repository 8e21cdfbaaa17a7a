//! Command implementations for the route sheet CLI
//!
//! Each command is implemented in its own module:
//! - `parse`: turn a route sheet into stop records (human, JSON or CSV output)
//! - `inspect`: show how each line is split and which columns are used

pub mod inspect;
pub mod parse;
pub mod shared;

pub use shared::CommandStats;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub fn run(args: Args) -> Result<CommandStats> {
    match args.command {
        Some(Commands::Parse(parse_args)) => parse::run_parse(parse_args),
        Some(Commands::Inspect(inspect_args)) => inspect::run_inspect(inspect_args),
        None => Err(Error::configuration("No command given")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn sheet_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_run_without_command() {
        let args = Args::try_parse_from(["route-sheet"]).unwrap();
        assert!(matches!(run(args), Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_run_parse_to_csv_file() {
        let input = sheet_file("# shift 2\n12 Main St\tCancelled\tRing twice\n\tactive\n");
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("stops.csv");

        let args = Args::try_parse_from([
            "route-sheet",
            "parse",
            input.path().to_str().unwrap(),
            "--strict-status",
            "--format",
            "csv",
            "-o",
            output.to_str().unwrap(),
            "-q",
        ])
        .unwrap();

        let stats = run(args).unwrap();
        assert_eq!(stats.stops_parsed, 1);
        assert_eq!(stats.lines_read, 2);
        assert_eq!(stats.lines_skipped, 1);
        assert_eq!(stats.output_path.as_deref(), Some(output.as_path()));

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, "address,status,notes\n12 main st,canceled,Ring twice\n");
    }

    #[test]
    fn test_run_parse_missing_input() {
        let args = Args::try_parse_from(["route-sheet", "parse", "/nonexistent/sheet.txt", "-q"])
            .unwrap();
        assert!(matches!(run(args), Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_run_inspect_rejects_binary_input() {
        let mut input = NamedTempFile::new().unwrap();
        input.write_all(&[0xff, 0xfe, 0x00, 0x41]).unwrap();

        let args = Args::try_parse_from([
            "route-sheet",
            "inspect",
            input.path().to_str().unwrap(),
            "-q",
        ])
        .unwrap();

        assert!(matches!(run(args), Err(Error::DataValidation { .. })));
    }
}
