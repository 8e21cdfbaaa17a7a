//! Route sheet parser for OCR and pasted CSV text
//!
//! This module turns noisy, inconsistently delimited route sheet text into an
//! ordered list of [`StopRecord`](crate::app::models::StopRecord)s. Parsing is a
//! pure, synchronous transformation: it never fails, never performs I/O, and
//! reports diagnostics only through an injected [`TraceSink`].
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration
//! - [`line_cleaner`] - Line splitting, Unicode cleanup and comment skipping
//! - [`delimiter`] - Per-line delimiter detection and field splitting
//! - [`csv_fields`] - Quote-aware splitter for comma-delimited lines
//! - [`column_mapping`] - Optional header-driven column positions
//! - [`field_parsers`] - Address, status and notes normalization
//! - [`trace`] - Debug trace events and sinks
//! - [`stats`] - Parsing statistics and result structures
//! - [`inspection`] - Per-line split diagnostics
//!
//! ## Usage
//!
//! ```rust
//! use route_sheet::{ParseOptions, RouteSheetParser};
//!
//! let parser = RouteSheetParser::new(ParseOptions::default().with_strict_status(true));
//! let result = parser.parse_with_stats("12 High St\tCancelled\tRing twice");
//!
//! assert_eq!(result.stops[0].address, "12 high st");
//! assert_eq!(result.stops[0].status, "canceled");
//! assert_eq!(result.stats.stops_parsed, 1);
//! ```

pub mod column_mapping;
pub mod csv_fields;
pub mod delimiter;
pub mod field_parsers;
pub mod inspection;
pub mod line_cleaner;
pub mod parser;
pub mod stats;
pub mod trace;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use delimiter::Delimiter;
pub use field_parsers::StatusTable;
pub use inspection::{LineInspection, SheetInspection};
pub use line_cleaner::SheetLine;
pub use parser::{RouteSheetParser, parse_route_sheet};
pub use stats::{ParseResult, ParseStats};
pub use trace::{CollectingSink, TraceEvent, TraceSink, TracingSink};
