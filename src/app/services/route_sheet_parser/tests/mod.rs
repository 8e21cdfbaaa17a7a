//! Test fixtures for route sheet parser testing
//!
//! This module provides sample sheets and helper constructors shared by the
//! different test modules.

use crate::app::models::StopRecord;
use crate::config::ParseOptions;

mod field_parser_tests;
mod line_cleaner_tests;
mod trace_tests;

/// Shorthand for an expected stop record
pub fn stop(address: &str, status: &str, notes: &str) -> StopRecord {
    StopRecord::new(address, status, notes)
}

pub fn lenient() -> ParseOptions {
    ParseOptions::default()
}

pub fn strict() -> ParseOptions {
    ParseOptions::default().with_strict_status(true)
}

pub fn with_header() -> ParseOptions {
    ParseOptions::default().with_header(true)
}

/// A sheet mixing every delimiter style, comments and blank lines, as OCR tends to
pub fn create_mixed_sheet() -> String {
    [
        "# Route 14 - Tuesday",
        "123 Main St\tActive\tLeave at door",
        "",
        "\"456 Oak Dr, Apt 2\", Suspended, \"Customer request\"",
        "// driver notes below",
        "789 Pine Rd    Cancelled    Gate code 4411",
        "   ",
        "\tActive\torphan note",
    ]
    .join("\n")
}

/// A header-led CSV export with columns out of the default order
pub fn create_header_sheet() -> String {
    [
        "Status,Delivery Address,Notes",
        "Suspended,123 Main St,Leave at door",
        "active,\"9 Elm Ct, Unit B\",",
        "canc,77 Birch Ln,\"Call \"\"Bob\"\" first\"",
    ]
    .join("\n")
}
