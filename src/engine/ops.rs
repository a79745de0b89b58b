//! Operator enumerations and the command surface of the engine
//!
//! Operators are closed enums rather than display strings. Every operator the
//! calculator keypad offers has a variant, including the ones that are
//! recognised but not evaluated yet; those report
//! [`Dispatch::NotImplemented`] so callers can tell a known gap apart from a
//! label nobody recognised.

use std::f64::consts::PI;
use std::fmt;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

// ============================================================================
// Operators
// ============================================================================

/// Operators consuming X and Y and leaving one result in X
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display, EnumString, EnumIter, IntoStaticStr)]
pub enum BinaryOp {
    #[strum(serialize = "add")]
    Add,
    #[strum(serialize = "sub")]
    Subtract,
    #[strum(serialize = "mul")]
    Multiply,
    #[strum(serialize = "div")]
    Divide,
    /// Y raised to X
    #[strum(serialize = "pow")]
    Power,
    /// Xth root of Y
    #[strum(serialize = "root")]
    Root,
}

impl BinaryOp {
    /// Evaluate `y op x`, or `None` if the operator has no evaluation yet.
    ///
    /// Division by zero follows IEEE-754 and yields an infinity or NaN.
    pub fn evaluate(self, y: f64, x: f64) -> Option<f64> {
        match self {
            Self::Add => Some(y + x),
            Self::Subtract => Some(y - x),
            Self::Multiply => Some(y * x),
            Self::Divide => Some(y / x),
            Self::Power | Self::Root => None,
        }
    }

    pub fn is_implemented(self) -> bool {
        !matches!(self, Self::Power | Self::Root)
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Operators replacing X in place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display, EnumString, EnumIter, IntoStaticStr)]
pub enum UnaryOp {
    #[strum(serialize = "sq")]
    Square,
    #[strum(serialize = "sqrt")]
    SquareRoot,
    #[strum(serialize = "log")]
    Log10,
    #[strum(serialize = "ln")]
    Ln,
    #[strum(serialize = "exp10")]
    Exp10,
    #[strum(serialize = "exp")]
    Exp,
    /// Sine of X in radians
    #[strum(serialize = "sin")]
    Sine,
    #[strum(serialize = "cos")]
    Cosine,
    #[strum(serialize = "tan")]
    Tangent,
    #[strum(serialize = "asin")]
    ArcSine,
    #[strum(serialize = "acos")]
    ArcCosine,
    #[strum(serialize = "atan")]
    ArcTangent,
}

impl UnaryOp {
    /// Evaluate the operator on `x`, or `None` if it has no evaluation yet.
    ///
    /// The square root of a negative number is NaN.
    pub fn evaluate(self, x: f64) -> Option<f64> {
        match self {
            Self::Square => Some(x * x),
            Self::SquareRoot => Some(x.sqrt()),
            Self::Sine => Some(x.sin()),
            Self::Log10
            | Self::Ln
            | Self::Exp10
            | Self::Exp
            | Self::Cosine
            | Self::Tangent
            | Self::ArcSine
            | Self::ArcCosine
            | Self::ArcTangent => None,
        }
    }

    pub fn is_implemented(self) -> bool {
        matches!(self, Self::Square | Self::SquareRoot | Self::Sine)
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Operators pushing a known constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display, EnumString, EnumIter, IntoStaticStr)]
pub enum NilaryOp {
    #[strum(serialize = "pi")]
    Pi,
    /// Euler's number
    #[strum(serialize = "e")]
    E,
}

impl NilaryOp {
    /// The constant this operator inserts, or `None` if not available yet.
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Pi => Some(PI),
            Self::E => None,
        }
    }

    pub fn is_implemented(self) -> bool {
        self.value().is_some()
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

// ============================================================================
// Commands
// ============================================================================

/// Every mutation the engine accepts, as one value.
///
/// The presentation layer builds these from keypresses or keypad labels and
/// hands them to [`StackEngine::execute`](super::StackEngine::execute).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a digit (any integer literal) to the entry
    Digit(String),
    DecimalSeparator,
    ToggleSign,
    ClearEntry,
    /// Commit the entry into X
    Enter,
    Binary(BinaryOp),
    Unary(UnaryOp),
    Nilary(NilaryOp),
    Swap,
    Duplicate,
    Drop,
    Roll,
    ClearX,
    ClearStack,
    /// Store X under a variable name (no backing storage)
    Store(String),
    /// Recall a variable into X (no backing storage)
    Recall(String),
}

impl Command {
    /// Whether executing this command can change the engine state
    pub fn is_implemented(&self) -> bool {
        match self {
            Self::Binary(op) => op.is_implemented(),
            Self::Unary(op) => op.is_implemented(),
            Self::Nilary(op) => op.is_implemented(),
            Self::Store(_) | Self::Recall(_) => false,
            _ => true,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "digit {}", d),
            Self::DecimalSeparator => write!(f, "separator"),
            Self::ToggleSign => write!(f, "chs"),
            Self::ClearEntry => write!(f, "clr"),
            Self::Enter => write!(f, "enter"),
            Self::Binary(op) => write!(f, "{}", op),
            Self::Unary(op) => write!(f, "{}", op),
            Self::Nilary(op) => write!(f, "{}", op),
            Self::Swap => write!(f, "swap"),
            Self::Duplicate => write!(f, "dup"),
            Self::Drop => write!(f, "drop"),
            Self::Roll => write!(f, "roll"),
            Self::ClearX => write!(f, "clx"),
            Self::ClearStack => write!(f, "clst"),
            Self::Store(name) => write!(f, "sto {}", name),
            Self::Recall(name) => write!(f, "rcl {}", name),
        }
    }
}

/// Outcome of executing a command or a label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The command ran (permissive no-ops such as a second separator included)
    Applied,
    /// The operator is known but has no evaluation; nothing changed
    NotImplemented(&'static str),
    /// The label did not name any command; nothing changed
    Unrecognized(String),
}

impl Dispatch {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

impl fmt::Display for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied => write!(f, "ok"),
            Self::NotImplemented(name) => write!(f, "{} is not implemented", name),
            Self::Unrecognized(label) => write!(f, "unknown key {:?}", label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_binary_evaluate() {
        assert_eq!(BinaryOp::Add.evaluate(3.0, 2.0), Some(5.0));
        assert_eq!(BinaryOp::Subtract.evaluate(3.0, 2.0), Some(1.0));
        assert_eq!(BinaryOp::Multiply.evaluate(3.0, 2.0), Some(6.0));
        assert_eq!(BinaryOp::Divide.evaluate(3.0, 2.0), Some(1.5));
        assert_eq!(BinaryOp::Divide.evaluate(-5.0, 0.0), Some(f64::NEG_INFINITY));
        assert_eq!(BinaryOp::Power.evaluate(2.0, 3.0), None);
    }

    #[test]
    fn test_unary_sqrt_of_negative_is_nan() {
        let result = UnaryOp::SquareRoot.evaluate(-4.0);
        assert!(result.is_some_and(f64::is_nan));
    }

    #[test]
    fn test_is_implemented_matches_evaluate() {
        for op in BinaryOp::iter() {
            assert_eq!(op.is_implemented(), op.evaluate(1.0, 1.0).is_some(), "{}", op);
        }
        for op in UnaryOp::iter() {
            assert_eq!(op.is_implemented(), op.evaluate(0.5).is_some(), "{}", op);
        }
        for op in NilaryOp::iter() {
            assert_eq!(op.is_implemented(), op.value().is_some(), "{}", op);
        }
    }

    #[test]
    fn test_names_parse_back() {
        for op in UnaryOp::iter() {
            let parsed: UnaryOp = op.name().parse().expect("name should parse");
            assert_eq!(parsed, op);
        }
        assert_eq!("pi".parse::<NilaryOp>().ok(), Some(NilaryOp::Pi));
        assert!("plus".parse::<BinaryOp>().is_err());
    }

    #[test]
    fn test_command_is_implemented() {
        assert!(Command::Enter.is_implemented());
        assert!(Command::Binary(BinaryOp::Divide).is_implemented());
        assert!(!Command::Binary(BinaryOp::Root).is_implemented());
        assert!(!Command::Store("A".into()).is_implemented());
    }
}
