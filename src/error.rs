//! Error handling module for rpntui
//!
//! Provides centralized error handling with proper error types using thiserror.
//! The engine itself is permissive: only a malformed entry on commit is an
//! error. Everything else here belongs to the surrounding application.

use std::num::ParseFloatError;

use thiserror::Error;

/// Main error type for rpntui
#[derive(Error, Debug)]
pub enum CalcError {
    /// The entry buffer could not be read as a number on commit
    #[error("Cannot parse entry {entry:?}: {source}")]
    Parse {
        entry: String,
        #[source]
        source: ParseFloatError,
    },

    /// IO errors (config files, log files, terminal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors (loading, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for rpntui operations
pub type Result<T> = std::result::Result<T, CalcError>;

// Convenient error constructors
impl CalcError {
    /// Create a parse error for the given entry text
    pub fn parse(entry: impl Into<String>, source: ParseFloatError) -> Self {
        Self::Parse {
            entry: entry.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }

    /// Whether this error came from committing a malformed entry
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
