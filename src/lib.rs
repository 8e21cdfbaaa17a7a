//! Route Sheet Library
//!
//! A Rust library for turning photographed courier route sheets, after OCR,
//! into normalized delivery stop records.
//!
//! This library provides tools for:
//! - Cleaning noisy OCR lines (non-breaking spaces, compatibility characters, comments)
//! - Per-line delimiter detection across tabs, quoted CSV and column-aligned text
//! - Optional header-driven column mapping
//! - Address normalization and status validation against a synonym table
//! - Structured debug tracing through an injectable sink
//!
//! The parser itself never fails: malformed lines are dropped, unrecognized
//! statuses become `unknown` and non-text input yields an empty result.

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod route_sheet_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CanonicalStatus, StopRecord};
pub use app::services::route_sheet_parser::{
    ParseResult, ParseStats, RouteSheetParser, StatusTable, parse_route_sheet,
};
pub use config::{Config, ParseOptions};

/// Result type alias for route sheet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the configuration, input and reporting layers
///
/// Parsing itself never produces an error; these cover everything around it.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Configuration parse error in '{file}': {source}")]
    ConfigParse {
        file: String,
        #[source]
        source: toml::de::Error,
    },

    /// JSON report serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// CSV report writing failed
    #[error("CSV output error: {message}")]
    CsvOutput {
        message: String,
        #[source]
        source: csv::Error,
    },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a configuration parse error for a specific file
    pub fn config_parse(file: impl Into<String>, source: toml::de::Error) -> Self {
        Self::ConfigParse {
            file: file.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV output error with context
    pub fn csv_output(message: impl Into<String>, source: csv::Error) -> Self {
        Self::CsvOutput {
            message: message.into(),
            source,
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::ConfigParse {
            file: "unknown".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvOutput {
            message: "CSV writing failed".to_string(),
            source: error,
        }
    }
}
