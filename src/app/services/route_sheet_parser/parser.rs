//! Core route sheet parser implementation
//!
//! This module provides the parse orchestration: line preprocessing, optional
//! header consumption, per-line splitting and field normalization, with
//! statistics and debug tracing collected along the way.

use super::column_mapping::ColumnMapping;
use super::delimiter::split_fields;
use super::field_parsers::{
    StatusTable, normalize_address, normalize_notes, normalize_status_lenient,
};
use super::inspection::{LineInspection, SheetInspection};
use super::line_cleaner::{SheetLine, preprocess_lines};
use super::stats::{ParseResult, ParseStats};
use super::trace::{TraceEvent, TraceSink, TracingSink};
use crate::app::models::StopRecord;
use crate::config::{Config, ParseOptions};

/// Route sheet parser for OCR and CSV text
///
/// This parser focuses on tolerance over rejection:
/// - Delimiters are detected per line (tab, quoted CSV, whitespace runs)
/// - Lines without an address are dropped, never reported as errors
/// - Unrecognized statuses become `unknown` in strict mode
/// - Non-text input produces an empty result
///
/// The parser holds no mutable state and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct RouteSheetParser {
    options: ParseOptions,
    statuses: StatusTable,
}

impl RouteSheetParser {
    /// Create a new parser with the built-in status table
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            statuses: StatusTable::default(),
        }
    }

    /// Create a parser from loaded configuration (options plus extra synonyms)
    pub fn from_config(config: &Config) -> Self {
        Self {
            options: config.parsing,
            statuses: config.status_table(),
        }
    }

    /// Replace the status synonym table
    pub fn with_status_table(mut self, statuses: StatusTable) -> Self {
        self.statuses = statuses;
        self
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn status_table(&self) -> &StatusTable {
        &self.statuses
    }

    /// Parse text into stop records, tracing to `tracing` when debug is enabled
    pub fn parse(&self, raw: &str) -> Vec<StopRecord> {
        self.parse_with_stats(raw).stops
    }

    /// Parse text and return stops with statistics
    pub fn parse_with_stats(&self, raw: &str) -> ParseResult {
        self.parse_traced(raw, &mut TracingSink)
    }

    /// Parse raw bytes; anything that is not valid UTF-8 yields an empty result
    pub fn parse_bytes(&self, raw: &[u8]) -> ParseResult {
        self.parse_bytes_traced(raw, &mut TracingSink)
    }

    /// Parse raw bytes, sending debug trace events to `sink`
    pub fn parse_bytes_traced(&self, raw: &[u8], sink: &mut dyn TraceSink) -> ParseResult {
        match std::str::from_utf8(raw) {
            Ok(text) => self.parse_traced(text, sink),
            Err(e) => {
                let mut tracer = Tracer::new(self.options.debug, sink);
                tracer.emit(|| TraceEvent::InvalidInput {
                    reason: format!("input is not valid UTF-8 text ({})", e),
                });
                ParseResult::default()
            }
        }
    }

    /// Parse text, sending debug trace events to `sink`
    ///
    /// Events are only produced when the `debug` option is set; the returned
    /// result is identical either way.
    pub fn parse_traced(&self, raw: &str, sink: &mut dyn TraceSink) -> ParseResult {
        let mut tracer = Tracer::new(self.options.debug, sink);
        let mut stats = ParseStats::new();
        let mut stops = Vec::new();

        let lines = preprocess_lines(raw, self.options.skip_comments);
        let (header, data_lines) = self.split_header(&lines);

        if let Some(mapping) = header {
            stats.header_detected = true;
            tracer.emit(|| TraceEvent::HeaderDetected {
                line: lines[0].number,
                mapping,
            });
        } else if self.options.has_header {
            if let Some(first) = lines.first() {
                tracer.emit(|| TraceEvent::HeaderNotRecognized { line: first.number });
            }
        }
        let mapping = header.unwrap_or_default();

        for line in data_lines {
            stats.total_lines += 1;

            let (delimiter, fields) = split_fields(&line.text);
            tracer.emit(|| TraceEvent::LineSplit {
                line: line.number,
                delimiter,
                fields: fields.clone(),
            });

            let address = normalize_address(mapping.address_field(&fields));
            if address.is_empty() {
                stats.lines_skipped += 1;
                stats
                    .errors
                    .push(format!("Line {}: missing address", line.number));
                tracer.emit(|| TraceEvent::LineSkipped {
                    line: line.number,
                    content: line.text.clone(),
                });
                continue;
            }

            let raw_status = mapping.status_field(&fields);
            let status = if self.options.strict_status {
                let resolved = self.statuses.resolve(raw_status);
                if !resolved.is_known() {
                    stats.unknown_statuses += 1;
                    tracer.emit(|| TraceEvent::UnknownStatus {
                        line: line.number,
                        raw_status: raw_status.to_string(),
                    });
                }
                resolved.as_str().to_string()
            } else {
                normalize_status_lenient(raw_status)
            };

            let notes = normalize_notes(mapping.notes_field(&fields));

            stops.push(StopRecord::new(address, status, notes));
            stats.stops_parsed += 1;
        }

        let (parsed, total, skipped) = (stats.stops_parsed, stats.total_lines, stats.lines_skipped);
        tracer.emit(|| TraceEvent::Summary {
            stops: parsed,
            lines: total,
            skipped,
        });

        ParseResult { stops, stats }
    }

    /// Show how each line would be split, without building records
    pub fn inspect(&self, raw: &str) -> SheetInspection {
        let lines = preprocess_lines(raw, self.options.skip_comments);
        let (header, data_lines) = self.split_header(&lines);

        let lines_inspected = data_lines
            .iter()
            .map(|line| {
                let (delimiter, fields) = split_fields(&line.text);
                LineInspection {
                    number: line.number,
                    text: line.text.clone(),
                    delimiter,
                    fields,
                }
            })
            .collect();

        SheetInspection {
            header: header.map(|mapping| (lines[0].number, mapping)),
            mapping: header.unwrap_or_default(),
            lines: lines_inspected,
        }
    }

    /// Consume the first line as a header when header mode recognizes it
    ///
    /// Returns the detected mapping and the remaining data lines, or `None`
    /// and every line when there is no usable header.
    fn split_header<'l>(
        &self,
        lines: &'l [SheetLine],
    ) -> (Option<ColumnMapping>, &'l [SheetLine]) {
        if !self.options.has_header {
            return (None, lines);
        }

        match lines.split_first() {
            Some((first, rest)) => match ColumnMapping::from_header(&first.text) {
                Some(mapping) => (Some(mapping), rest),
                None => (None, lines),
            },
            None => (None, lines),
        }
    }
}

/// Parse route sheet text with the given options and the built-in status table
pub fn parse_route_sheet(raw: &str, options: &ParseOptions) -> Vec<StopRecord> {
    RouteSheetParser::new(*options).parse(raw)
}

/// Gate in front of a trace sink so disabled tracing costs nothing
struct Tracer<'a> {
    enabled: bool,
    sink: &'a mut dyn TraceSink,
}

impl<'a> Tracer<'a> {
    fn new(enabled: bool, sink: &'a mut dyn TraceSink) -> Self {
        Self { enabled, sink }
    }

    fn emit<F>(&mut self, build: F)
    where
        F: FnOnce() -> TraceEvent,
    {
        if self.enabled {
            self.sink.record(build());
        }
    }
}
