//! Configuration management and validation.
//!
//! Provides the parse options record, the configurable status synonym table,
//! and layered loading from defaults, a TOML file, environment variables and
//! finally command-line overrides.

use crate::app::models::CanonicalStatus;
use crate::app::services::route_sheet_parser::StatusTable;
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, env_vars};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Options controlling a single parse call
///
/// All flags are independent. Defaults match a lenient, header-less parse
/// that skips comment lines and emits no trace events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Fold statuses through the synonym table and label anything else `unknown`
    pub strict_status: bool,

    /// Treat the first line as a header row that names the columns
    pub has_header: bool,

    /// Emit diagnostic trace events while parsing
    pub debug: bool,

    /// Drop lines beginning with `#` or `//`
    pub skip_comments: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strict_status: false,
            has_header: false,
            debug: false,
            skip_comments: true,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable strict status validation
    pub fn with_strict_status(mut self, strict_status: bool) -> Self {
        self.strict_status = strict_status;
        self
    }

    /// Enable or disable header-driven column mapping
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Enable or disable debug trace events
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Enable or disable comment line skipping
    pub fn with_skip_comments(mut self, skip_comments: bool) -> Self {
        self.skip_comments = skip_comments;
        self
    }
}

/// Extra status synonyms layered over the built-in table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Token (matched case-insensitively) to canonical status
    pub synonyms: BTreeMap<String, CanonicalStatus>,
}

/// Top-level configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Parse option defaults
    pub parsing: ParseOptions,

    /// Status vocabulary extensions
    pub statuses: StatusConfig,
}

impl Config {
    /// Default config file location (`<config dir>/route-sheet/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        let config: Config =
            toml::from_str(&raw).map_err(|e| Error::config_parse(path.display().to_string(), e))?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration with layered approach (defaults -> file -> env)
    ///
    /// An explicit `config_file` must exist; otherwise the default location is
    /// used only when present.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::load_from_file(path)?,
            None => match Self::default_config_path() {
                Ok(path) if path.exists() => Self::load_from_file(&path)?,
                _ => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `ROUTE_SHEET_*` environment overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides using a custom variable lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let overrides: [(&str, &mut bool); 4] = [
            (env_vars::STRICT_STATUS, &mut self.parsing.strict_status),
            (env_vars::HAS_HEADER, &mut self.parsing.has_header),
            (env_vars::DEBUG, &mut self.parsing.debug),
            (env_vars::SKIP_COMMENTS, &mut self.parsing.skip_comments),
        ];

        for (key, target) in overrides {
            if let Some(value) = lookup(key) {
                *target = parse_env_bool(key, &value)?;
                debug!("Environment override {}={}", key, *target);
            }
        }

        Ok(())
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<()> {
        for token in self.statuses.synonyms.keys() {
            if token.trim().is_empty() {
                return Err(Error::configuration(
                    "Status synonym tokens cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Build the status table: built-in synonyms plus configured ones
    pub fn status_table(&self) -> StatusTable {
        self.statuses
            .synonyms
            .iter()
            .fold(StatusTable::default(), |table, (token, status)| {
                table.with_synonym(token, *status)
            })
    }
}

/// Parse a boolean environment value (true/false, 1/0, yes/no, on/off)
fn parse_env_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::configuration(format!(
            "Invalid boolean for {}: '{}'",
            key, other
        ))),
    }
}
