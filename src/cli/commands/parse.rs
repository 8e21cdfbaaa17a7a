//! Parse command implementation
//!
//! Reads a route sheet, runs the parser with the layered configuration and
//! writes the stops as a readable listing, JSON or CSV.

use super::shared::{CommandStats, load_configuration, read_input, setup_logging};
use crate::app::models::CanonicalStatus;
use crate::app::services::route_sheet_parser::{ParseResult, RouteSheetParser};
use crate::cli::args::{OutputFormat, ParseArgs};
use crate::{Error, Result};
use colored::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Parse command runner
pub fn run_parse(args: ParseArgs) -> Result<CommandStats> {
    let start_time = Instant::now();

    setup_logging(&args.sheet)?;
    debug!("Parse arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args.sheet)?;
    let parser = RouteSheetParser::from_config(&config);

    let raw = read_input(&args.sheet)?;
    if std::str::from_utf8(&raw).is_err() {
        warn!("Input is not valid UTF-8 text; no stops parsed");
    }

    let result = parser.parse_bytes(&raw);
    if result.stops.is_empty() {
        warn!("No stops found in route sheet");
    } else if !result.stats.is_successful() {
        warn!(
            "Only {:.1}% of lines produced stops",
            result.stats.success_rate()
        );
    }

    match &args.output_file {
        Some(path) => {
            // Keep escape codes out of files
            colored::control::set_override(false);
            write_to_file(&result, args.output_format, path)?;
            info!("Wrote {} stops to {}", result.stops.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            write_stops(&result, args.output_format, &mut out)?;
            out.flush()?;
        }
    }

    let mut stats = CommandStats::from_parse_stats(&result.stats, raw.len());
    stats.output_path = args.output_file.clone();
    stats.processing_time = start_time.elapsed();

    info!("Parse complete: {}", stats.summary());
    Ok(stats)
}

fn write_to_file(result: &ParseResult, format: OutputFormat, path: &Path) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
    let mut out = BufWriter::new(file);
    write_stops(result, format, &mut out)?;
    out.flush()
        .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))
}

/// Write a parse result in the requested format
pub fn write_stops(result: &ParseResult, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Human => write_human(result, out),
        OutputFormat::Json => write_json(result, out),
        OutputFormat::Csv => write_csv(result, out),
    }
}

fn write_human(result: &ParseResult, out: &mut dyn Write) -> Result<()> {
    let stats = &result.stats;

    writeln!(
        out,
        "{} {} stops from {} lines ({} skipped)",
        "Route sheet:".bright_green().bold(),
        stats.stops_parsed,
        stats.total_lines,
        stats.lines_skipped
    )?;
    if stats.header_detected {
        writeln!(out, "{}", "Header line detected".bright_black())?;
    }
    writeln!(out)?;

    let width = result.stops.len().to_string().len();
    for (i, stop) in result.stops.iter().enumerate() {
        let status = if stop.status.is_empty() {
            "-".bright_black()
        } else {
            color_status(&stop.status, stop.canonical_status())
        };

        write!(out, "  {:>width$}. {}  [{}]", i + 1, stop.address, status, width = width)?;
        if stop.has_notes() {
            write!(out, "  {}", stop.notes.bright_black())?;
        }
        writeln!(out)?;
    }

    if stats.unknown_statuses > 0 {
        writeln!(out)?;
        writeln!(
            out,
            "{} {} stops have an unrecognized status",
            "Warning:".bright_yellow().bold(),
            stats.unknown_statuses
        )?;
    }

    Ok(())
}

fn color_status(status: &str, canonical: Option<CanonicalStatus>) -> ColoredString {
    match canonical {
        Some(CanonicalStatus::Active) => status.bright_green(),
        Some(CanonicalStatus::Suspended) => status.bright_yellow(),
        Some(CanonicalStatus::Canceled) => status.bright_red(),
        Some(CanonicalStatus::Unknown) => status.bright_magenta(),
        None => status.normal(),
    }
}

fn write_json(result: &ParseResult, out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)
        .map_err(|e| Error::serialization("Failed to serialize parse result", e))?;
    writeln!(out)?;
    Ok(())
}

fn write_csv(result: &ParseResult, out: &mut dyn Write) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(["address", "status", "notes"])
        .map_err(|e| Error::csv_output("Failed to write CSV header", e))?;

    for stop in &result.stops {
        writer
            .write_record([&stop.address, &stop.status, &stop.notes])
            .map_err(|e| Error::csv_output("Failed to write CSV record", e))?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseOptions;

    fn sample_result() -> ParseResult {
        RouteSheetParser::new(ParseOptions::default().with_strict_status(true)).parse_with_stats(
            "12 Main St\tActive\tLeave at door\n9 Elm Rd, canc, \"Dog, friendly\"\n4 Oak Dr\tlost",
        )
    }

    fn render(result: &ParseResult, format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        write_stops(result, format, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_csv_output() {
        let csv = render(&sample_result(), OutputFormat::Csv);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "address,status,notes");
        assert_eq!(lines[1], "12 main st,active,Leave at door");
        assert_eq!(lines[2], "9 elm rd,canceled,\"Dog, friendly\"");
        assert_eq!(lines[3], "4 oak dr,unknown,");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_csv_output_empty_result() {
        let csv = render(&ParseResult::default(), OutputFormat::Csv);
        assert_eq!(csv, "address,status,notes\n");
    }

    #[test]
    fn test_json_output() {
        let json = render(&sample_result(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["stops"].as_array().unwrap().len(), 3);
        assert_eq!(value["stops"][1]["status"], "canceled");
        assert_eq!(value["stops"][1]["notes"], "Dog, friendly");
        assert_eq!(value["stats"]["stops_parsed"], 3);
        assert_eq!(value["stats"]["unknown_statuses"], 1);
    }

    #[test]
    fn test_human_output() {
        let text = render(&sample_result(), OutputFormat::Human);

        assert!(text.contains("3 stops from 3 lines (0 skipped)"));
        assert!(text.contains("12 main st"));
        assert!(text.contains("Leave at door"));
        assert!(text.contains("1 stops have an unrecognized status"));
    }

    #[test]
    fn test_color_status_passes_text_through() {
        let colored = color_status("delivered", None);
        assert_eq!(colored.to_string(), "delivered");
    }
}
