//! Line preprocessing for raw route sheet text
//!
//! OCR output carries non-breaking spaces, ligatures, full-width digits and
//! stray blank lines. Each line is cleaned independently before any field
//! splitting happens.

use crate::constants::{COMMENT_MARKERS, NON_BREAKING_SPACE};
use unicode_normalization::UnicodeNormalization;

/// A cleaned, non-empty line together with its 1-based position in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLine {
    pub number: usize,
    pub text: String,
}

/// Clean a single line: NBSP to space, NFKC normalization, trim
///
/// Leading tabs survive trimming: a leading tab marks an empty first column.
/// Trailing tabs are trimmed like any other whitespace.
pub fn clean_line(line: &str) -> String {
    let spaced = line.replace(NON_BREAKING_SPACE, " ");
    let normalized: String = spaced.nfkc().collect();
    normalized.trim_start_matches(is_trimmable).trim_end().to_string()
}

fn is_trimmable(c: char) -> bool {
    c.is_whitespace() && c != '\t'
}

/// Check whether a cleaned line starts with a comment marker
pub fn is_comment(line: &str) -> bool {
    COMMENT_MARKERS
        .iter()
        .any(|marker| line.starts_with(*marker))
}

/// Split raw text on newlines and keep the cleaned lines worth parsing
///
/// Empty lines are always dropped; comment lines only when `skip_comments`.
pub fn preprocess_lines(raw: &str, skip_comments: bool) -> Vec<SheetLine> {
    raw.split('\n')
        .enumerate()
        .map(|(index, line)| SheetLine {
            number: index + 1,
            text: clean_line(line),
        })
        .filter(|line| !line.text.is_empty())
        .filter(|line| !(skip_comments && is_comment(&line.text)))
        .collect()
}
