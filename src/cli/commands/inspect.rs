//! Inspect command implementation
//!
//! Shows the delimiter chosen for each line, the fields it produced and the
//! column mapping in effect, without building stop records.

use super::shared::{CommandStats, load_configuration, read_input, setup_logging};
use crate::app::models::CanonicalStatus;
use crate::app::services::route_sheet_parser::{RouteSheetParser, SheetInspection};
use crate::cli::args::InspectArgs;
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

/// Inspection output, with the status vocabulary when strict mode is on
#[derive(Debug, Serialize)]
pub struct InspectionReport<'a> {
    #[serde(flatten)]
    pub inspection: &'a SheetInspection,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub statuses: Option<Vec<(&'a str, CanonicalStatus)>>,
}

impl<'a> InspectionReport<'a> {
    pub fn new(inspection: &'a SheetInspection, parser: &'a RouteSheetParser) -> Self {
        let statuses = parser
            .options()
            .strict_status
            .then(|| parser.status_table().entries());
        Self {
            inspection,
            statuses,
        }
    }
}

/// Inspect command runner
pub fn run_inspect(args: InspectArgs) -> Result<CommandStats> {
    let start_time = Instant::now();

    setup_logging(&args.sheet)?;
    debug!("Inspect arguments: {:?}", args);

    args.sheet.validate()?;

    let config = load_configuration(&args.sheet)?;
    let parser = RouteSheetParser::from_config(&config);

    let raw = read_input(&args.sheet)?;
    let text = std::str::from_utf8(&raw)
        .map_err(|e| Error::data_validation(format!("Input is not valid UTF-8 text: {}", e)))?;

    let inspection = parser.inspect(text);
    let report = InspectionReport::new(&inspection, &parser);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &report)
            .map_err(|e| Error::serialization("Failed to serialize inspection", e))?;
        writeln!(out)?;
    } else {
        write_report(&report, &mut out)?;
    }
    out.flush()?;

    let stats = CommandStats {
        lines_read: inspection.lines.len(),
        input_bytes: raw.len(),
        processing_time: start_time.elapsed(),
        ..CommandStats::default()
    };

    info!("Inspected {} lines in {:.2?}", stats.lines_read, stats.processing_time);
    Ok(stats)
}

/// Write a readable inspection listing
pub fn write_report(report: &InspectionReport<'_>, out: &mut dyn Write) -> Result<()> {
    let inspection = report.inspection;
    let (tab, comma, whitespace) = inspection.delimiter_counts();

    writeln!(out, "{}", "Route sheet inspection".bright_green().bold())?;
    writeln!(
        out,
        "Delimiters: {} tab, {} comma, {} whitespace",
        tab, comma, whitespace
    )?;

    match &inspection.header {
        Some((line, mapping)) => writeln!(out, "Header: line {} ({})", line, mapping)?,
        None => writeln!(out, "Columns: {} (default order)", inspection.mapping)?,
    }
    writeln!(out)?;

    for line in &inspection.lines {
        writeln!(
            out,
            "{:>5}  {:<10}  {:?}",
            line.number,
            line.delimiter.as_str().bright_cyan(),
            line.fields
        )?;
    }

    if let Some(statuses) = &report.statuses {
        writeln!(out)?;
        writeln!(out, "{}", "Status vocabulary:".bright_green().bold())?;
        for (token, status) in statuses {
            writeln!(out, "  {:<12} -> {}", token, status)?;
        }
    }

    Ok(())
}
