//! Per-line delimiter detection and field splitting
//!
//! Real OCR output mixes delimiters from one line to the next, so detection
//! runs on every line independently. Rules are checked in priority order:
//! tab, then comma (quote-aware), then runs of two or more whitespace
//! characters for column-aligned text.

use super::csv_fields::split_quoted_csv;
use crate::constants::WHITESPACE_RUN_MARKER;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid whitespace run regex"));

/// How a line was split into fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    /// Tab separated
    Tab,
    /// Comma separated with quoted fields
    Comma,
    /// Column-aligned text separated by whitespace runs
    WhitespaceRun,
}

impl Delimiter {
    /// Pick the delimiter for a cleaned line
    pub fn detect(line: &str) -> Self {
        if line.contains('\t') {
            Delimiter::Tab
        } else if line.contains(',') {
            Delimiter::Comma
        } else {
            Delimiter::WhitespaceRun
        }
    }

    /// Split a line using this delimiter
    pub fn split(self, line: &str) -> Vec<String> {
        match self {
            Delimiter::Tab => split_tab(line),
            Delimiter::Comma => split_quoted_csv(line),
            Delimiter::WhitespaceRun => split_whitespace_runs(line),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Delimiter::Tab => "tab",
            Delimiter::Comma => "comma",
            Delimiter::WhitespaceRun => "whitespace",
        }
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the delimiter for a line and split it into trimmed fields
pub fn split_fields(line: &str) -> (Delimiter, Vec<String>) {
    let delimiter = Delimiter::detect(line);
    (delimiter, delimiter.split(line))
}

/// Split on tab characters
pub fn split_tab(line: &str) -> Vec<String> {
    line.split('\t').map(|part| part.trim().to_string()).collect()
}

/// Collapse whitespace runs into a marker, then split on the marker
///
/// A literal `|` already present in the line also acts as a separator.
pub fn split_whitespace_runs(line: &str) -> Vec<String> {
    WHITESPACE_RUN_RE
        .replace_all(line, WHITESPACE_RUN_MARKER)
        .split(WHITESPACE_RUN_MARKER)
        .map(|part| part.trim().to_string())
        .collect()
}
