//! Header-driven column mapping for route sheets
//!
//! When a sheet carries a header row, the address, status and notes columns
//! may appear in any order. This module locates them by substring match on
//! the lower-cased header tokens.

use crate::constants::{
    DEFAULT_ADDRESS_COLUMN, DEFAULT_NOTES_COLUMN, DEFAULT_STATUS_COLUMN, HEADER_SEPARATORS,
    field_names,
};
use serde::Serialize;

/// Column positions of the three stop fields
///
/// `None` means the header named no such column; that field is then empty
/// for every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnMapping {
    pub address: Option<usize>,
    pub status: Option<usize>,
    pub notes: Option<usize>,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            address: Some(DEFAULT_ADDRESS_COLUMN),
            status: Some(DEFAULT_STATUS_COLUMN),
            notes: Some(DEFAULT_NOTES_COLUMN),
        }
    }
}

impl ColumnMapping {
    /// Analyze a header line to locate the stop fields
    ///
    /// Returns `None` when no token names any of the three fields, in which
    /// case the line should be treated as data.
    pub fn from_header(line: &str) -> Option<Self> {
        let tokens: Vec<String> = line
            .split(HEADER_SEPARATORS)
            .map(|token| token.to_lowercase())
            .collect();

        let position = |name: &str| tokens.iter().position(|token| token.contains(name));

        let mapping = ColumnMapping {
            address: position(field_names::ADDRESS),
            status: position(field_names::STATUS),
            notes: position(field_names::NOTES),
        };

        (mapping.found_count() > 0).then_some(mapping)
    }

    /// Number of stop fields this mapping located
    pub fn found_count(&self) -> usize {
        [self.address, self.status, self.notes]
            .iter()
            .filter(|index| index.is_some())
            .count()
    }

    pub fn address_field<'a>(&self, fields: &'a [String]) -> &'a str {
        field_at(fields, self.address)
    }

    pub fn status_field<'a>(&self, fields: &'a [String]) -> &'a str {
        field_at(fields, self.status)
    }

    pub fn notes_field<'a>(&self, fields: &'a [String]) -> &'a str {
        field_at(fields, self.notes)
    }
}

/// Field value at an optional position; missing positions and short rows read as empty
fn field_at(fields: &[String], index: Option<usize>) -> &str {
    index
        .and_then(|i| fields.get(i))
        .map(String::as_str)
        .unwrap_or("")
}

impl std::fmt::Display for ColumnMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let show = |index: Option<usize>| match index {
            Some(i) => i.to_string(),
            None => "-".to_string(),
        };
        write!(
            f,
            "address={} status={} notes={}",
            show(self.address),
            show(self.status),
            show(self.notes)
        )
    }
}
