//! Logging setup
//!
//! Logs go through `tracing`. `RUST_LOG` always wins; otherwise the level
//! depends on where the output ends up. The TUI owns the terminal, so
//! without a log file it stays silent rather than drawing over the screen.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{CalcError, Result};

/// Default filter when `RUST_LOG` is not set
pub fn default_filter(log_file: Option<&Path>, interactive: bool) -> &'static str {
    match (log_file, interactive) {
        (Some(_), _) => "info",
        (None, true) => "off",
        (None, false) => "warn",
    }
}

/// Initialize the global subscriber.
///
/// With a log file, records are appended to it without ANSI colours.
/// Otherwise they go to stderr.
pub fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(log_file, interactive)));

    let installed = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            fmt()
                .with_env_filter(env_filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .try_init()
        }
        None => fmt()
            .with_env_filter(env_filter)
            .with_writer(io::stderr)
            .with_target(false)
            .try_init(),
    };

    installed.map_err(|e| CalcError::general(format!("Failed to initialize logging: {}", e)))
}
