//! Parsing statistics and result structures for route sheet processing
//!
//! This module provides types for tracking how many lines produced stops,
//! how many were dropped, and how many statuses could not be resolved.

use crate::app::models::StopRecord;
use crate::constants::SUCCESS_RATE_THRESHOLD;

/// Parsing result with stops and basic statistics
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ParseResult {
    /// Stops in input line order
    pub stops: Vec<StopRecord>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of data lines considered (header and comments excluded)
    pub total_lines: usize,

    /// Number of stops emitted
    pub stops_parsed: usize,

    /// Number of lines dropped for lack of an address
    pub lines_skipped: usize,

    /// Number of stops whose status resolved to `unknown` in strict mode
    pub unknown_statuses: usize,

    /// Whether the first line was consumed as a header
    pub header_detected: bool,

    /// Skip messages for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            stops_parsed: 0,
            lines_skipped: 0,
            unknown_statuses: 0,
            header_detected: false,
            errors: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.stops_parsed as f64 / self.total_lines as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > SUCCESS_RATE_THRESHOLD
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
