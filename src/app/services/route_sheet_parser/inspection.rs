//! Per-line split diagnostics
//!
//! Shows how each cleaned line would be split without building stop records,
//! which is the quickest way to see why an OCR sheet produced odd stops.

use super::column_mapping::ColumnMapping;
use super::delimiter::Delimiter;
use serde::Serialize;

/// How one cleaned line was split
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineInspection {
    /// 1-based line number in the raw input
    pub number: usize,

    /// Cleaned line text
    pub text: String,

    pub delimiter: Delimiter,

    pub fields: Vec<String>,
}

/// Split diagnostics for a whole sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SheetInspection {
    /// Header line number and detected mapping, when a header was consumed
    pub header: Option<(usize, ColumnMapping)>,

    /// Mapping applied to the data lines
    pub mapping: ColumnMapping,

    /// Data lines in input order
    pub lines: Vec<LineInspection>,
}

impl SheetInspection {
    /// Count of data lines split with each delimiter, as (tab, comma, whitespace)
    pub fn delimiter_counts(&self) -> (usize, usize, usize) {
        self.lines
            .iter()
            .fold((0, 0, 0), |(tab, comma, ws), line| match line.delimiter {
                Delimiter::Tab => (tab + 1, comma, ws),
                Delimiter::Comma => (tab, comma + 1, ws),
                Delimiter::WhitespaceRun => (tab, comma, ws + 1),
            })
    }
}
