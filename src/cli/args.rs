//! Command-line argument definitions for the route sheet parser
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::ParseOptions;
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// CLI arguments for the route sheet parser
///
/// Turns OCR text or pasted CSV from a photographed courier route sheet into
/// normalized stop records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "route-sheet",
    version,
    about = "Parse OCR or CSV route sheets into normalized delivery stops",
    long_about = "Reads the raw text recognized from a photographed courier route sheet (or a \
                  pasted CSV export) and produces one stop record per line: a normalized \
                  address, a status and a free-text note. Tolerates mixed delimiters, quoted \
                  fields, comment lines and OCR noise."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the route sheet parser
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a route sheet into stop records
    Parse(ParseArgs),
    /// Show how each line of a route sheet is split
    Inspect(InspectArgs),
}

/// Input and parse option flags shared by every command
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct SheetArgs {
    /// Route sheet text file
    ///
    /// Reads standard input when omitted or given as "-".
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Validate statuses against the canonical vocabulary
    ///
    /// Folds synonyms (cancelled, cancel, canc -> canceled) and labels anything
    /// unrecognized as unknown.
    #[arg(long = "strict-status", help = "Validate statuses against the canonical set")]
    pub strict_status: bool,

    /// Treat the first line as a header naming the columns
    #[arg(long = "has-header", help = "Treat the first line as a column header")]
    pub has_header: bool,

    /// Emit per-line diagnostic trace events
    #[arg(long = "debug", help = "Log per-line parse diagnostics")]
    pub debug: bool,

    /// Parse lines starting with '#' or '//' instead of skipping them
    #[arg(long = "keep-comments", help = "Do not skip '#' and '//' comment lines")]
    pub keep_comments: bool,

    /// Path to configuration file
    ///
    /// TOML configuration file with [parsing] defaults and [statuses.synonyms].
    /// If not specified, looks for <config dir>/route-sheet/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    #[command(flatten)]
    pub sheet: SheetArgs,

    /// Output format for the parsed stops
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for parsed stops"
    )]
    pub output_format: OutputFormat,

    /// Output file for the parsed stops
    ///
    /// If not specified, writes to stdout
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for parsed stops"
    )]
    pub output_file: Option<PathBuf>,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    #[command(flatten)]
    pub sheet: SheetArgs,

    /// Emit the inspection as JSON instead of a readable listing
    #[arg(long = "json", help = "Emit the inspection as JSON")]
    pub json: bool,
}

/// Output format options for parsed stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    Human,
    /// JSON document with stops and statistics
    Json,
    /// CSV with address, status and notes columns
    Csv,
}

impl SheetArgs {
    /// Validate input and config paths
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = self.input_path() {
            if !input.exists() {
                return Err(Error::file_not_found(input.display().to_string()));
            }

            if !input.is_file() {
                return Err(Error::configuration(format!(
                    "Input path is not a file: {}",
                    input.display()
                )));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Input file path, or `None` when reading standard input
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Apply flags on top of configured parse options
    ///
    /// Flags only ever switch behavior on (or, for comments, off); absent flags
    /// leave the configured value alone.
    pub fn apply_to(&self, mut options: ParseOptions) -> ParseOptions {
        if self.strict_status {
            options.strict_status = true;
        }
        if self.has_header {
            options.has_header = true;
        }
        if self.debug {
            options.debug = true;
        }
        if self.keep_comments {
            options.skip_comments = false;
        }
        options
    }

    /// Determine the appropriate log level based on verbosity flags
    ///
    /// `--debug` raises the level far enough for per-line trace events.
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match (self.verbose, self.debug) {
                (0, false) => "warn",
                (1, false) => "info",
                (0..=2, _) => "debug",
                _ => "trace",
            }
        }
    }
}

impl ParseArgs {
    /// Validate the parse command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        self.sheet.validate()?;

        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
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
}
