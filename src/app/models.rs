//! Data models for route sheet parsing
//!
//! This module contains the stop record produced by the parser and the
//! canonical status vocabulary used by strict status validation.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Stop Record
// =============================================================================

/// A single delivery stop extracted from one route sheet line
///
/// Records are created fresh by each parse call and never mutated by the
/// parser afterwards. Geocoded coordinates, if any, are attached by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StopRecord {
    /// Lower-cased address with whitespace runs collapsed; never empty
    pub address: String,

    /// Raw lower-cased status token, or a canonical status name in strict mode
    pub status: String,

    /// Trimmed free-text note; empty when the line had no notes column
    pub notes: String,
}

impl StopRecord {
    pub fn new(
        address: impl Into<String>,
        status: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            status: status.into(),
            notes: notes.into(),
        }
    }

    /// Interpret the status as a canonical value, if it is one
    ///
    /// In lenient mode the status is whatever token the sheet carried, so
    /// this returns `None` for anything outside the canonical vocabulary.
    pub fn canonical_status(&self) -> Option<CanonicalStatus> {
        self.status.parse().ok()
    }

    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }
}

// =============================================================================
// Canonical Status Enumeration
// =============================================================================

/// Canonical stop statuses produced by strict status validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalStatus {
    /// Stop is live and should be visited
    Active,

    /// Stop is temporarily on hold
    Suspended,

    /// Stop has been called off
    Canceled,

    /// Status token was missing or not recognized
    Unknown,
}

impl CanonicalStatus {
    /// Lower-case name used in stop records and reports
    pub fn as_str(self) -> &'static str {
        match self {
            CanonicalStatus::Active => "active",
            CanonicalStatus::Suspended => "suspended",
            CanonicalStatus::Canceled => "canceled",
            CanonicalStatus::Unknown => "unknown",
        }
    }

    /// Get all canonical status values
    pub fn all_values() -> [CanonicalStatus; 4] {
        [
            CanonicalStatus::Active,
            CanonicalStatus::Suspended,
            CanonicalStatus::Canceled,
            CanonicalStatus::Unknown,
        ]
    }

    pub fn is_known(self) -> bool {
        self != CanonicalStatus::Unknown
    }
}

impl FromStr for CanonicalStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "active" => Ok(CanonicalStatus::Active),
            "suspended" => Ok(CanonicalStatus::Suspended),
            "canceled" => Ok(CanonicalStatus::Canceled),
            "unknown" => Ok(CanonicalStatus::Unknown),
            _ => Err(Error::data_validation(format!(
                "Invalid status '{}': must be active, suspended, canceled, or unknown",
                s
            ))),
        }
    }
}

impl std::fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
