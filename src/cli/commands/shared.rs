//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::app::services::route_sheet_parser::ParseStats;
use crate::cli::args::SheetArgs;
use crate::config::Config;
use crate::constants::LOG_TARGET;
use crate::{Error, Result};
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Command statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct CommandStats {
    /// Data lines examined after cleaning
    pub lines_read: usize,
    /// Stop records produced
    pub stops_parsed: usize,
    /// Lines dropped for a missing address
    pub lines_skipped: usize,
    /// Strict-mode statuses outside the vocabulary
    pub unknown_statuses: usize,
    /// Bytes of raw input consumed
    pub input_bytes: usize,
    /// Where results were written, if not stdout
    pub output_path: Option<PathBuf>,
    /// Total command time
    pub processing_time: Duration,
}

impl CommandStats {
    /// Build command stats from parser statistics
    pub fn from_parse_stats(stats: &ParseStats, input_bytes: usize) -> Self {
        Self {
            lines_read: stats.total_lines,
            stops_parsed: stats.stops_parsed,
            lines_skipped: stats.lines_skipped,
            unknown_statuses: stats.unknown_statuses,
            input_bytes,
            ..Self::default()
        }
    }

    /// One-line summary for log output
    pub fn summary(&self) -> String {
        format!(
            "{} stops from {} lines ({} skipped, {} unknown statuses) in {:.2?}",
            self.stops_parsed,
            self.lines_read,
            self.lines_skipped,
            self.unknown_statuses,
            self.processing_time
        )
    }
}

/// Set up structured logging on stderr
///
/// Stdout is reserved for command output. A subscriber installed earlier in
/// the process is left in place.
pub fn setup_logging(args: &SheetArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let installed = if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    match installed {
        Ok(()) => debug!("Logging initialized at level: {}", log_level),
        Err(e) => debug!("Logging already initialized: {}", e),
    }
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &SheetArgs) -> Result<Config> {
    match &args.config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => debug!("No config file given, checking default location"),
    }

    let mut config = Config::load_layered(args.config_file.as_deref())?;

    // Apply CLI argument overrides
    config.parsing = args.apply_to(config.parsing);

    debug!("Effective parse options: {:?}", config.parsing);
    Ok(config)
}

/// Read the raw route sheet from the input file or standard input
pub fn read_input(args: &SheetArgs) -> Result<Vec<u8>> {
    match args.input_path() {
        Some(path) => {
            info!("Reading route sheet from {}", path.display());
            std::fs::read(path)
                .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))
        }
        None => {
            info!("Reading route sheet from standard input");
            let mut raw = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut raw)
                .map_err(|e| Error::io("Failed to read standard input", e))?;
            Ok(raw)
        }
    }
}
