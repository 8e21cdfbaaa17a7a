//! Application constants for the route sheet parser
//!
//! This module contains the markers, vocabularies, default values and
//! environment variable names used throughout the crate.

// =============================================================================
// Line Preprocessing
// =============================================================================

/// Prefixes that mark a whole line as a comment
pub const COMMENT_MARKERS: &[&str] = &["#", "//"];

/// Non-breaking space, common in OCR output copied from PDFs and web pages
pub const NON_BREAKING_SPACE: char = '\u{00A0}';

// =============================================================================
// Field Splitting
// =============================================================================

/// Marker that whitespace runs are collapsed into before splitting
pub const WHITESPACE_RUN_MARKER: &str = "|";

/// Characters that separate header tokens
pub const HEADER_SEPARATORS: &[char] = &['\t', ',', '|'];

// =============================================================================
// Column Mapping
// =============================================================================

/// Semantic field names searched for in header tokens
pub mod field_names {
    pub const ADDRESS: &str = "address";
    pub const STATUS: &str = "status";
    pub const NOTES: &str = "notes";
}

/// Column positions used when no header is present or none was recognized
pub const DEFAULT_ADDRESS_COLUMN: usize = 0;
pub const DEFAULT_STATUS_COLUMN: usize = 1;
pub const DEFAULT_NOTES_COLUMN: usize = 2;

// =============================================================================
// Status Vocabulary
// =============================================================================

/// Built-in status synonyms, as (token, canonical name) pairs
///
/// Tokens are matched after lower-casing. Anything not listed here (or added
/// through configuration) resolves to `unknown` in strict mode.
pub const STATUS_SYNONYMS: &[(&str, &str)] = &[
    ("active", "active"),
    ("suspended", "suspended"),
    ("canceled", "canceled"),
    ("cancelled", "canceled"),
    ("cancel", "canceled"),
    ("canc", "canceled"),
];

// =============================================================================
// Parse Quality
// =============================================================================

/// Success rate (percent) above which a parse counts as successful
pub const SUCCESS_RATE_THRESHOLD: f64 = 90.0;

// =============================================================================
// Configuration
// =============================================================================

/// Directory under the user config dir that holds the config file
pub const CONFIG_DIR_NAME: &str = "route-sheet";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment overrides for parse options
pub mod env_vars {
    pub const STRICT_STATUS: &str = "ROUTE_SHEET_STRICT_STATUS";
    pub const HAS_HEADER: &str = "ROUTE_SHEET_HAS_HEADER";
    pub const DEBUG: &str = "ROUTE_SHEET_DEBUG";
    pub const SKIP_COMMENTS: &str = "ROUTE_SHEET_SKIP_COMMENTS";
}

/// Log target filter used when `RUST_LOG` is not set
pub const LOG_TARGET: &str = "route_sheet";
