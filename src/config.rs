//! Configuration file handling for the calculator.
//!
//! Settings live in a small JSON file. Every field has a default, so an empty
//! object `{}` is a valid configuration. Command line flags override values
//! read from the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::{StackEngine, DEFAULT_SEPARATOR};
use crate::error::CalcError;

/// Decimal separators the entry buffer may use
pub const ALLOWED_SEPARATORS: [char; 2] = [',', '.'];

/// Calculator configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Separator appended by the `,` key and recognised on commit
    pub decimal_separator: char,
    /// Where to write logs while the TUI owns the terminal
    pub log_file: Option<PathBuf>,
    /// Open the help overlay when the TUI starts
    pub show_help_on_start: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            decimal_separator: DEFAULT_SEPARATOR,
            log_file: None,
            show_help_on_start: false,
        }
    }
}

impl CalcConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> crate::error::Result<()> {
        if !ALLOWED_SEPARATORS.contains(&self.decimal_separator) {
            return Err(CalcError::config(format!(
                "Decimal separator must be ',' or '.', got {:?}",
                self.decimal_separator
            )));
        }

        if let Some(log_file) = &self.log_file {
            if log_file.as_os_str().is_empty() {
                return Err(CalcError::config("Log file path cannot be empty"));
            }
        }

        Ok(())
    }

    /// A fresh engine using this configuration's separator
    pub fn engine(&self) -> StackEngine {
        StackEngine::with_separator(self.decimal_separator)
    }
}
