//! Four-register RPN stack engine
//!
//! Holds the registers X, Y, Z, T (X on top, T at the bottom) and the text
//! entry buffer for the number being typed.
//!
//! # Stack movement
//!
//! | Operation     | Effect                                  | Used by                      |
//! |---------------|-----------------------------------------|------------------------------|
//! | `roll_set_x`  | T←Z, Z←Y, Y←X, X←v (old T lost)         | commit, constants, duplicate |
//! | `drop_set_x`  | X←v, Y←Z, Z←T (T kept)                  | binary operators             |
//! | `drop_x`      | X←Y, Y←Z, Z←T (T kept)                  | explicit drop                |
//! | `roll_up`     | X←T, Y←X, Z←Y, T←Z (4-cycle)            | roll                         |
//! | `set_x`       | X←v                                     | unary operators              |
//!
//! # Design
//!
//! - **Pure logic**: no I/O, no references to the presentation layer
//! - **Permissive**: invalid digits, a second separator and unknown labels
//!   are ignored instead of reported as errors
//! - **Fallible commit only**: a malformed entry is the single error path

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::ops::{BinaryOp, Command, Dispatch, NilaryOp, UnaryOp};
use crate::error::{CalcError, Result};

/// Decimal separator of the classic keypad
pub const DEFAULT_SEPARATOR: char = ',';

/// Copy of the four registers, in display order
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Registers {
    pub t: f64,
    pub z: f64,
    pub y: f64,
    pub x: f64,
}

/// Registers plus the pending entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(flatten)]
    pub registers: Registers,
    pub entry: String,
}

impl Snapshot {
    /// Pretty JSON; non-finite registers come out as `null`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Whether a number is being typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    Idle,
    InProgress,
}

/// The calculator state: four registers and an entry buffer
#[derive(Debug, Clone, PartialEq)]
pub struct StackEngine {
    x: f64,
    y: f64,
    z: f64,
    t: f64,
    entry: String,
    separator: char,
}

impl Default for StackEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StackEngine {
    /// Create an engine with all registers at zero and an empty entry
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_SEPARATOR)
    }

    /// Create an engine using `separator` as the decimal separator
    pub fn with_separator(separator: char) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            t: 0.0,
            entry: String::new(),
            separator,
        }
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn registers(&self) -> Registers {
        Registers {
            t: self.t,
            z: self.z,
            y: self.y,
            x: self.x,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            registers: self.registers(),
            entry: self.entry.clone(),
        }
    }

    pub fn mode(&self) -> EntryMode {
        if self.entry.is_empty() {
            EntryMode::Idle
        } else {
            EntryMode::InProgress
        }
    }

    /// T, Z, Y, X and the entry, one per line
    pub fn stack_string(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}\n{}",
            self.t, self.z, self.y, self.x, self.entry
        )
    }

    // ------------------------------------------------------------------------
    // Entry construction
    // ------------------------------------------------------------------------

    /// Append a digit to the entry.
    ///
    /// Anything that reads as an integer literal is accepted and appended in
    /// canonical form (`" 7 "` appends `7`). Anything else is ignored and
    /// `false` is returned.
    pub fn append_digit(&mut self, digit: &str) -> bool {
        match digit.trim().parse::<i64>() {
            Ok(value) => {
                self.entry.push_str(&value.to_string());
                true
            }
            Err(_) => {
                debug!("ignoring non-numeric digit {:?}", digit);
                false
            }
        }
    }

    /// Append the decimal separator unless the entry already has one
    pub fn append_decimal_separator(&mut self) -> bool {
        if self.entry.contains(self.separator) {
            return false;
        }
        self.entry.push(self.separator);
        true
    }

    /// Flip the leading sign of the entry.
    ///
    /// `-` becomes `+`, `+` becomes `-`, anything else gets a `-` in front.
    /// An empty entry therefore becomes `"-"`, and toggling again gives `"+"`.
    pub fn toggle_sign(&mut self) {
        match self.entry.chars().next() {
            Some('-') => self.entry.replace_range(..1, "+"),
            Some('+') => self.entry.replace_range(..1, "-"),
            _ => self.entry.insert(0, '-'),
        }
    }

    pub fn clear_entry(&mut self) {
        self.entry.clear();
    }

    // ------------------------------------------------------------------------
    // Commit
    // ------------------------------------------------------------------------

    /// Parse the entry and push it onto the stack.
    ///
    /// An empty entry is a no-op. On a parse failure the entry and registers
    /// are left as they were.
    pub fn commit(&mut self) -> Result<()> {
        if self.entry.is_empty() {
            return Ok(());
        }

        let normalized = self.entry.replace(self.separator, ".");
        let value = normalized
            .parse::<f64>()
            .map_err(|e| CalcError::parse(self.entry.as_str(), e))?;

        self.roll_set_x(value);
        self.entry.clear();
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Stack movement
    // ------------------------------------------------------------------------

    /// Push `value` into X, rolling the stack up and discarding T
    pub fn roll_set_x(&mut self, value: f64) {
        self.t = self.z;
        self.z = self.y;
        self.y = self.x;
        self.x = value;
    }

    /// Replace X with `value` and drop the stack; T is duplicated into Z
    pub fn drop_set_x(&mut self, value: f64) {
        self.x = value;
        self.y = self.z;
        self.z = self.t;
    }

    /// Discard X and drop the stack; T is duplicated into Z
    pub fn drop_x(&mut self) {
        self.x = self.y;
        self.y = self.z;
        self.z = self.t;
    }

    /// Rotate the four registers; the old T wraps into X
    pub fn roll_up(&mut self) {
        let tmp = self.t;
        self.t = self.z;
        self.z = self.y;
        self.y = self.x;
        self.x = tmp;
    }

    /// Overwrite X, leaving the rest of the stack alone
    pub fn set_x(&mut self, value: f64) {
        self.x = value;
    }

    pub fn swap_xy(&mut self) {
        std::mem::swap(&mut self.x, &mut self.y);
    }

    /// Push a copy of X
    pub fn duplicate_x(&mut self) {
        self.roll_set_x(self.x);
    }

    pub fn clear_x(&mut self) {
        self.x = 0.0;
    }

    /// Zero Y, Z and T; X is kept
    pub fn clear_stack(&mut self) {
        self.y = 0.0;
        self.z = 0.0;
        self.t = 0.0;
    }

    // ------------------------------------------------------------------------
    // Operators
    // ------------------------------------------------------------------------

    /// Combine Y and X into X and drop the stack
    pub fn binary_op(&mut self, op: BinaryOp) -> Dispatch {
        match op.evaluate(self.y, self.x) {
            Some(result) => {
                self.drop_set_x(result);
                Dispatch::Applied
            }
            None => Dispatch::NotImplemented(op.name()),
        }
    }

    /// Replace X with the operator applied to X
    pub fn unary_op(&mut self, op: UnaryOp) -> Dispatch {
        match op.evaluate(self.x) {
            Some(result) => {
                self.set_x(result);
                Dispatch::Applied
            }
            None => Dispatch::NotImplemented(op.name()),
        }
    }

    /// Push a constant
    pub fn nilary_op(&mut self, op: NilaryOp) -> Dispatch {
        match op.value() {
            Some(value) => {
                self.roll_set_x(value);
                Dispatch::Applied
            }
            None => Dispatch::NotImplemented(op.name()),
        }
    }

    // ------------------------------------------------------------------------
    // Variables
    // ------------------------------------------------------------------------

    /// Store X under `name`. There is no variable storage; nothing happens.
    pub fn store_var(&mut self, name: &str) -> Dispatch {
        debug!("sto {}: no variable storage", name);
        Dispatch::NotImplemented("sto")
    }

    /// Recall `name` into X. There is no variable storage; nothing happens.
    pub fn recall_var(&mut self, name: &str) -> Dispatch {
        debug!("rcl {}: no variable storage", name);
        Dispatch::NotImplemented("rcl")
    }

    // ------------------------------------------------------------------------
    // Command dispatch
    // ------------------------------------------------------------------------

    /// Run one command against the engine.
    ///
    /// Only [`Command::Enter`] can fail, and only when the entry does not
    /// parse as a number.
    pub fn execute(&mut self, command: &Command) -> Result<Dispatch> {
        debug!("executing {}", command);

        let dispatch = match command {
            Command::Digit(digit) => {
                self.append_digit(digit);
                Dispatch::Applied
            }
            Command::DecimalSeparator => {
                self.append_decimal_separator();
                Dispatch::Applied
            }
            Command::ToggleSign => {
                self.toggle_sign();
                Dispatch::Applied
            }
            Command::ClearEntry => {
                self.clear_entry();
                Dispatch::Applied
            }
            Command::Enter => {
                if let Err(e) = self.commit() {
                    warn!("commit failed: {}", e);
                    return Err(e);
                }
                Dispatch::Applied
            }
            Command::Binary(op) => self.binary_op(*op),
            Command::Unary(op) => self.unary_op(*op),
            Command::Nilary(op) => self.nilary_op(*op),
            Command::Swap => {
                self.swap_xy();
                Dispatch::Applied
            }
            Command::Duplicate => {
                self.duplicate_x();
                Dispatch::Applied
            }
            Command::Drop => {
                self.drop_x();
                Dispatch::Applied
            }
            Command::Roll => {
                self.roll_up();
                Dispatch::Applied
            }
            Command::ClearX => {
                self.clear_x();
                Dispatch::Applied
            }
            Command::ClearStack => {
                self.clear_stack();
                Dispatch::Applied
            }
            Command::Store(name) => self.store_var(name),
            Command::Recall(name) => self.recall_var(name),
        };

        if let Dispatch::NotImplemented(name) = &dispatch {
            info!("{} is not implemented; stack unchanged", name);
        }

        Ok(dispatch)
    }
}
