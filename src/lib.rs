//! rpntui library
//!
//! A four-register RPN calculator engine (X, Y, Z, T plus an entry buffer)
//! and the terminal front end that drives it.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod labels;
pub mod logging;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use config::CalcConfig;
pub use engine::{
    BinaryOp, Command, Dispatch, EntryMode, NilaryOp, Registers, Snapshot, StackEngine, UnaryOp,
};
pub use error::{CalcError, Result};
pub use labels::{apply_label, apply_labels, parse_label, KeypadLabel};
