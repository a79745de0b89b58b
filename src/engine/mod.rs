//! Four-register RPN calculator core
//!
//! The engine layer knows nothing about keypads, glyphs or terminals. The
//! presentation side maps its labels onto [`Command`] values (see
//! [`crate::labels`]) and re-reads the engine state after every call.

pub mod ops;
pub mod stack;

pub use ops::{BinaryOp, Command, Dispatch, NilaryOp, UnaryOp};
pub use stack::{EntryMode, Registers, Snapshot, StackEngine, DEFAULT_SEPARATOR};
