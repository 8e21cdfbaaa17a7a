//! Field normalization for stop records
//!
//! This module provides the per-field cleanup applied after splitting:
//! address normalization, lenient and strict status handling, and notes.

use crate::app::models::CanonicalStatus;
use crate::constants::STATUS_SYNONYMS;
use std::collections::HashMap;

/// Normalize an address: lower-case, collapse whitespace runs, trim
///
/// Idempotent; an already normalized address comes back unchanged.
pub fn normalize_address(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lenient status handling: the raw token, lower-cased, with no validation
pub fn normalize_status_lenient(raw: &str) -> String {
    raw.to_lowercase()
}

/// Normalize the free-text notes field
pub fn normalize_notes(raw: &str) -> String {
    raw.trim().to_string()
}

/// Synonym table used by strict status validation
///
/// Starts from the built-in synonyms; callers extend it with
/// [`with_synonym`](Self::with_synonym) rather than changing the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTable {
    synonyms: HashMap<String, CanonicalStatus>,
}

impl Default for StatusTable {
    fn default() -> Self {
        let synonyms = STATUS_SYNONYMS
            .iter()
            .filter_map(|(token, name)| {
                name.parse::<CanonicalStatus>()
                    .ok()
                    .map(|status| (token.to_string(), status))
            })
            .collect();

        Self { synonyms }
    }
}

impl StatusTable {
    /// A table with no synonyms at all; every token resolves to `unknown`
    pub fn empty() -> Self {
        Self {
            synonyms: HashMap::new(),
        }
    }

    /// Add or replace a synonym (token is matched case-insensitively)
    pub fn with_synonym(mut self, token: &str, status: CanonicalStatus) -> Self {
        self.synonyms.insert(token.trim().to_lowercase(), status);
        self
    }

    /// Resolve a raw status token to its canonical value
    ///
    /// Empty or unrecognized tokens resolve to [`CanonicalStatus::Unknown`].
    pub fn resolve(&self, raw: &str) -> CanonicalStatus {
        let token = raw.trim().to_lowercase();
        self.synonyms
            .get(&token)
            .copied()
            .unwrap_or(CanonicalStatus::Unknown)
    }

    pub fn len(&self) -> usize {
        self.synonyms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }

    /// All synonyms sorted by token, for reporting
    pub fn entries(&self) -> Vec<(&str, CanonicalStatus)> {
        let mut entries: Vec<(&str, CanonicalStatus)> = self
            .synonyms
            .iter()
            .map(|(token, status)| (token.as_str(), *status))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
