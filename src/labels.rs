//! Keypad label mapping
//!
//! Translates the text printed on calculator keys (`−`, `×`, `√x`, `π`, …)
//! into engine [`Command`]s. The engine never sees these glyphs; swapping
//! the keypad for another glyph set only touches this module.
//!
//! Besides the glyphs, plain ASCII spellings are accepted so labels can be
//! typed on a command line: `-`, `*`, `/`, `^`, the operator names `add`,
//! `sqrt`, `pi`, … and word commands such as `enter`, `swap` or `clst`.

use std::io::{self, Write};

use tracing::debug;

use crate::engine::{BinaryOp, Command, Dispatch, NilaryOp, StackEngine, UnaryOp};
use crate::error::Result;

/// One key of the reference keypad
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadLabel {
    pub label: &'static str,
    pub command: Command,
}

impl KeypadLabel {
    fn new(label: &'static str, command: Command) -> Self {
        Self { label, command }
    }
}

/// The full keypad, in the order the keys are laid out
pub fn keypad() -> Vec<KeypadLabel> {
    use Command::*;

    let mut keys: Vec<KeypadLabel> = ["7", "8", "9", "4", "5", "6", "1", "2", "3", "0"]
        .into_iter()
        .map(|d| KeypadLabel::new(d, Digit(d.to_string())))
        .collect();

    keys.extend([
        KeypadLabel::new(",", DecimalSeparator),
        KeypadLabel::new("±", ToggleSign),
        KeypadLabel::new("Enter", Enter),
        KeypadLabel::new("CLR", ClearEntry),
        KeypadLabel::new("+", Binary(BinaryOp::Add)),
        KeypadLabel::new("−", Binary(BinaryOp::Subtract)),
        KeypadLabel::new("×", Binary(BinaryOp::Multiply)),
        KeypadLabel::new("÷", Binary(BinaryOp::Divide)),
        KeypadLabel::new("yˣ", Binary(BinaryOp::Power)),
        KeypadLabel::new("ˣ√y", Binary(BinaryOp::Root)),
        KeypadLabel::new("x²", Unary(UnaryOp::Square)),
        KeypadLabel::new("√x", Unary(UnaryOp::SquareRoot)),
        KeypadLabel::new("log x", Unary(UnaryOp::Log10)),
        KeypadLabel::new("ln x", Unary(UnaryOp::Ln)),
        KeypadLabel::new("10ˣ", Unary(UnaryOp::Exp10)),
        KeypadLabel::new("eˣ", Unary(UnaryOp::Exp)),
        KeypadLabel::new("sin", Unary(UnaryOp::Sine)),
        KeypadLabel::new("cos", Unary(UnaryOp::Cosine)),
        KeypadLabel::new("tan", Unary(UnaryOp::Tangent)),
        KeypadLabel::new("sin⁻¹", Unary(UnaryOp::ArcSine)),
        KeypadLabel::new("cos⁻¹", Unary(UnaryOp::ArcCosine)),
        KeypadLabel::new("tan⁻¹", Unary(UnaryOp::ArcTangent)),
        KeypadLabel::new("π", Nilary(NilaryOp::Pi)),
        KeypadLabel::new("e", Nilary(NilaryOp::E)),
        KeypadLabel::new("x↔y", Swap),
        KeypadLabel::new("DUP", Duplicate),
        KeypadLabel::new("DROP", Drop),
        KeypadLabel::new("R↓", Roll),
        KeypadLabel::new("CLx", ClearX),
        KeypadLabel::new("CLST", ClearStack),
        KeypadLabel::new("STO A", Store("A".to_string())),
        KeypadLabel::new("RCL A", Recall("A".to_string())),
    ]);

    keys
}

/// Map a label to a command, or `None` if nothing matches
pub fn parse_label(label: &str) -> Option<Command> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }

    if let Some(command) = parse_variable(label) {
        return Some(command);
    }

    // Integer literals are digit keys; "-" and "+" alone are operators
    if label.parse::<i64>().is_ok() {
        return Some(Command::Digit(label.to_string()));
    }

    if let Some(command) = parse_glyph(label) {
        return Some(command);
    }

    parse_word(&label.to_ascii_lowercase())
}

/// Look up `label` and run it against `engine`.
///
/// Unknown labels leave the engine untouched and come back as
/// [`Dispatch::Unrecognized`].
pub fn apply_label(engine: &mut StackEngine, label: &str) -> Result<Dispatch> {
    match parse_label(label) {
        Some(command) => engine.execute(&command),
        None => {
            debug!("unrecognized label {:?}", label);
            Ok(Dispatch::Unrecognized(label.to_string()))
        }
    }
}

/// Apply labels in order, collecting each outcome.
///
/// Stops at the first error (a commit that does not parse); labels before it
/// have already been applied.
pub fn apply_labels<I, S>(engine: &mut StackEngine, labels: I) -> Result<Vec<Dispatch>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .map(|label| apply_label(engine, label.as_ref()))
        .collect()
}

/// Write the keypad table: label, command name, implementation status.
///
/// A reader that closes early (`rpntui labels | head`) ends the listing
/// quietly instead of failing.
pub fn write_table<W: Write>(out: &mut W) -> io::Result<()> {
    let written = keypad()
        .iter()
        .try_for_each(|key| {
            let status = if key.command.is_implemented() {
                "yes"
            } else {
                "not implemented"
            };
            writeln!(out, "{:<8} {:<12} {}", key.label, key.command.to_string(), status)
        })
        .and_then(|()| out.flush());

    match written {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("label listing stopped: {}", e);
            Ok(())
        }
        other => other,
    }
}

/// `STO name` / `RCL name`
fn parse_variable(label: &str) -> Option<Command> {
    let (prefix, name) = label.split_once(char::is_whitespace)?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    match prefix.to_ascii_uppercase().as_str() {
        "STO" => Some(Command::Store(name.to_string())),
        "RCL" => Some(Command::Recall(name.to_string())),
        _ => None,
    }
}

fn parse_glyph(label: &str) -> Option<Command> {
    use Command::*;

    let command = match label {
        "," | "." => DecimalSeparator,
        "±" => ToggleSign,
        "⏎" => Enter,
        "+" => Binary(BinaryOp::Add),
        "−" | "-" => Binary(BinaryOp::Subtract),
        "×" | "*" => Binary(BinaryOp::Multiply),
        "÷" | "/" => Binary(BinaryOp::Divide),
        "yˣ" | "^" => Binary(BinaryOp::Power),
        "ˣ√y" => Binary(BinaryOp::Root),
        "x²" => Unary(UnaryOp::Square),
        "√x" => Unary(UnaryOp::SquareRoot),
        "log x" => Unary(UnaryOp::Log10),
        "ln x" => Unary(UnaryOp::Ln),
        "10ˣ" => Unary(UnaryOp::Exp10),
        "eˣ" => Unary(UnaryOp::Exp),
        "sin⁻¹" => Unary(UnaryOp::ArcSine),
        "cos⁻¹" => Unary(UnaryOp::ArcCosine),
        "tan⁻¹" => Unary(UnaryOp::ArcTangent),
        "π" => Nilary(NilaryOp::Pi),
        "x↔y" => Swap,
        "R↓" => Roll,
        _ => return None,
    };
    Some(command)
}

/// Word commands and operator names, already lowercased
fn parse_word(word: &str) -> Option<Command> {
    use Command::*;

    let command = match word {
        "chs" => ToggleSign,
        "clr" => ClearEntry,
        "enter" => Enter,
        "swap" => Swap,
        "dup" => Duplicate,
        "drop" => Drop,
        "roll" => Roll,
        "clx" => ClearX,
        "clst" => ClearStack,
        _ => {
            if let Ok(op) = word.parse::<BinaryOp>() {
                Binary(op)
            } else if let Ok(op) = word.parse::<UnaryOp>() {
                Unary(op)
            } else if let Ok(op) = word.parse::<NilaryOp>() {
                Nilary(op)
            } else {
                return None;
            }
        }
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keypad_label_parses_to_its_command() {
        for key in keypad() {
            assert_eq!(parse_label(key.label), Some(key.command.clone()), "{}", key.label);
        }
    }

    #[test]
    fn test_keypad_labels_are_unique() {
        let keys = keypad();
        let mut labels: Vec<_> = keys.iter().map(|k| k.label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), keys.len());
    }

    #[test]
    fn test_ascii_spellings() {
        assert_eq!(parse_label("-"), Some(Command::Binary(BinaryOp::Subtract)));
        assert_eq!(parse_label("/"), Some(Command::Binary(BinaryOp::Divide)));
        assert_eq!(parse_label("sqrt"), Some(Command::Unary(UnaryOp::SquareRoot)));
        assert_eq!(parse_label("PI"), Some(Command::Nilary(NilaryOp::Pi)));
        assert_eq!(parse_label("enter"), Some(Command::Enter));
        assert_eq!(parse_label(" swap "), Some(Command::Swap));
    }

    #[test]
    fn test_integer_literals_are_digits() {
        assert_eq!(parse_label("42"), Some(Command::Digit("42".into())));
        assert_eq!(parse_label("-3"), Some(Command::Digit("-3".into())));
    }

    #[test]
    fn test_variables() {
        assert_eq!(parse_label("sto B"), Some(Command::Store("B".into())));
        assert_eq!(parse_label("RCL  x1"), Some(Command::Recall("x1".into())));
        assert_eq!(parse_label("STO"), None);
    }

    #[test]
    fn test_unknown_labels() {
        assert_eq!(parse_label(""), None);
        assert_eq!(parse_label("%"), None);
        assert_eq!(parse_label("sinh"), None);
    }

    /// Accepts `limit` writes, then fails every call with `kind`
    struct ClosingWriter {
        limit: usize,
        kind: io::ErrorKind,
        lines: usize,
    }

    impl Write for ClosingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.lines >= self.limit {
                return Err(io::Error::new(self.kind, "reader closed"));
            }
            self.lines += buf.iter().filter(|&&b| b == b'\n').count();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_table_lists_every_key() {
        let mut out = Vec::new();
        write_table(&mut out).expect("writing to a Vec cannot fail");
        let text = String::from_utf8(out).expect("utf-8");
        assert_eq!(text.lines().count(), keypad().len());
        assert!(text.lines().any(|l| l.starts_with("π") && l.ends_with("yes")));
        assert!(text.lines().any(|l| l.starts_with("yˣ") && l.ends_with("not implemented")));
    }

    #[test]
    fn test_write_table_stops_quietly_on_broken_pipe() {
        let mut out = ClosingWriter {
            limit: 3,
            kind: io::ErrorKind::BrokenPipe,
            lines: 0,
        };
        assert!(write_table(&mut out).is_ok());
        assert_eq!(out.lines, 3);
    }

    #[test]
    fn test_write_table_reports_other_errors() {
        let mut out = ClosingWriter {
            limit: 0,
            kind: io::ErrorKind::PermissionDenied,
            lines: 0,
        };
        let err = write_table(&mut out).expect_err("not a broken pipe");
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_apply_unknown_label_leaves_engine_alone() {
        let mut engine = StackEngine::new();
        engine.roll_set_x(3.0);
        let before = engine.clone();
        let dispatch = apply_label(&mut engine, "mod").expect("never fails");
        assert_eq!(dispatch, Dispatch::Unrecognized("mod".into()));
        assert_eq!(engine, before);
    }
}
