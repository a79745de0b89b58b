//! Tests for the RPN stack engine
//!
//! These tests verify:
//! - Entry construction (digits, separator, sign)
//! - Commit and the stack shifts it triggers
//! - Binary, unary and nilary operators
//! - Recognised-but-unimplemented operators leave the stack alone

use rpntui::engine::{BinaryOp, Command, Dispatch, EntryMode, NilaryOp, StackEngine, UnaryOp};
use std::f64::consts::PI;

/// Helper: engine with T=1, Z=2, Y=3, X=4
fn loaded() -> StackEngine {
    let mut engine = StackEngine::new();
    for v in [1.0, 2.0, 3.0, 4.0] {
        engine.roll_set_x(v);
    }
    engine
}

fn regs(engine: &StackEngine) -> [f64; 4] {
    let r = engine.registers();
    [r.t, r.z, r.y, r.x]
}

// =============================================================================
// Entry
// =============================================================================

#[test]
fn test_digits_concatenate_in_order() {
    let mut engine = StackEngine::new();
    for d in ["1", "0", "9", "0"] {
        engine.append_digit(d);
    }
    assert_eq!(engine.entry(), "1090");
}

#[test]
fn test_double_separator_leaves_one() {
    let mut engine = StackEngine::new();
    engine.append_decimal_separator();
    engine.append_decimal_separator();
    assert_eq!(engine.entry(), ",");
    assert_eq!(engine.entry().matches(',').count(), 1);
}

#[test]
fn test_toggle_sign_empty_entry_asymmetry() {
    let mut engine = StackEngine::new();
    engine.toggle_sign();
    assert_eq!(engine.entry(), "-");
    engine.toggle_sign();
    // Not back to empty: the sign flips to '+'
    assert_eq!(engine.entry(), "+");
}

#[test]
fn test_clear_entry_keeps_registers() {
    let mut engine = loaded();
    engine.append_digit("9");
    engine.clear_entry();
    assert_eq!(engine.entry(), "");
    assert_eq!(engine.mode(), EntryMode::Idle);
    assert_eq!(regs(&engine), [1.0, 2.0, 3.0, 4.0]);
}

// =============================================================================
// Commit
// =============================================================================

#[test]
fn test_commit_comma_value_shifts_stack() {
    let mut engine = loaded();
    engine.append_digit("3");
    engine.append_decimal_separator();
    engine.append_digit("1");
    engine.append_digit("4");
    assert_eq!(engine.entry(), "3,14");

    engine.commit().expect("3,14 should parse");

    assert_eq!(engine.x(), 3.14);
    assert_eq!(engine.entry(), "");
    // old X -> Y, old Y -> Z, old Z -> T, old T discarded
    assert_eq!(regs(&engine), [2.0, 3.0, 4.0, 3.14]);
}

#[test]
fn test_commit_negative_number() {
    let mut engine = StackEngine::new();
    engine.append_digit("8");
    engine.toggle_sign();
    engine.commit().expect("-8 should parse");
    assert_eq!(engine.x(), -8.0);
}

#[test]
fn test_commit_malformed_entry_is_parse_error() {
    let mut engine = StackEngine::new();
    engine.append_decimal_separator();
    let err = engine.commit().expect_err("a lone separator is not a number");
    assert!(err.is_parse());
    assert_eq!(engine.entry(), ",");
    assert_eq!(engine.mode(), EntryMode::InProgress);
}

// =============================================================================
// Operators
// =============================================================================

#[test]
fn test_add_drops_stack() {
    let mut engine = StackEngine::new();
    engine.roll_set_x(7.0); // becomes T
    engine.roll_set_x(6.0); // becomes Z
    engine.roll_set_x(3.0); // Y
    engine.roll_set_x(2.0); // X

    assert_eq!(engine.binary_op(BinaryOp::Add), Dispatch::Applied);

    assert_eq!(engine.x(), 5.0);
    assert_eq!(engine.y(), 6.0);
    assert_eq!(engine.z(), 7.0);
    assert_eq!(engine.t(), 7.0);
}

#[test]
fn test_operand_order_is_y_then_x() {
    let mut engine = StackEngine::new();
    engine.roll_set_x(10.0);
    engine.roll_set_x(4.0);
    engine.binary_op(BinaryOp::Subtract);
    assert_eq!(engine.x(), 6.0);

    engine.roll_set_x(4.0);
    engine.binary_op(BinaryOp::Divide);
    assert_eq!(engine.x(), 1.5);
}

#[test]
fn test_divide_by_zero_is_infinity() {
    let mut engine = StackEngine::new();
    engine.roll_set_x(5.0);
    engine.roll_set_x(0.0);
    assert_eq!(engine.binary_op(BinaryOp::Divide), Dispatch::Applied);
    assert_eq!(engine.x(), f64::INFINITY);
}

#[test]
fn test_zero_over_zero_is_nan() {
    let mut engine = StackEngine::new();
    engine.binary_op(BinaryOp::Divide);
    assert!(engine.x().is_nan());
    assert!(engine.stack_string().ends_with("NaN\n"));
}

#[test]
fn test_unary_ops_replace_x_only() {
    let mut engine = loaded();
    engine.unary_op(UnaryOp::Square);
    assert_eq!(regs(&engine), [1.0, 2.0, 3.0, 16.0]);
    engine.unary_op(UnaryOp::SquareRoot);
    assert_eq!(regs(&engine), [1.0, 2.0, 3.0, 4.0]);

    engine.set_x(PI / 2.0);
    engine.unary_op(UnaryOp::Sine);
    assert!((engine.x() - 1.0).abs() < 1e-12);
}

#[test]
fn test_sqrt_of_negative_is_nan() {
    let mut engine = StackEngine::new();
    engine.roll_set_x(-9.0);
    engine.unary_op(UnaryOp::SquareRoot);
    assert!(engine.x().is_nan());
}

#[test]
fn test_pi_rolls_stack_up() {
    let mut engine = loaded();
    assert_eq!(engine.nilary_op(NilaryOp::Pi), Dispatch::Applied);
    assert_eq!(regs(&engine), [2.0, 3.0, 4.0, PI]);
}

#[test]
fn test_unimplemented_operators_are_reported_and_inert() {
    let cases = [
        Command::Binary(BinaryOp::Power),
        Command::Binary(BinaryOp::Root),
        Command::Unary(UnaryOp::Log10),
        Command::Unary(UnaryOp::Ln),
        Command::Unary(UnaryOp::Exp10),
        Command::Unary(UnaryOp::Exp),
        Command::Unary(UnaryOp::Cosine),
        Command::Unary(UnaryOp::Tangent),
        Command::Unary(UnaryOp::ArcSine),
        Command::Unary(UnaryOp::ArcCosine),
        Command::Unary(UnaryOp::ArcTangent),
        Command::Nilary(NilaryOp::E),
        Command::Store("A".into()),
        Command::Recall("A".into()),
    ];

    for command in cases {
        let mut engine = loaded();
        engine.append_digit("5");
        let before = engine.clone();
        let dispatch = engine.execute(&command).expect("never fails");
        assert!(
            matches!(dispatch, Dispatch::NotImplemented(_)),
            "{} should be a placeholder",
            command
        );
        assert_eq!(engine, before, "{} changed the engine", command);
    }
}

// =============================================================================
// Stack manipulation
// =============================================================================

#[test]
fn test_roll_up_is_a_four_cycle() {
    let mut engine = loaded();
    let original = regs(&engine);
    for _ in 0..4 {
        engine.roll_up();
    }
    assert_eq!(regs(&engine), original);
}

#[test]
fn test_drop_keeps_t() {
    let mut engine = loaded();
    engine.drop_x();
    assert_eq!(regs(&engine), [1.0, 1.0, 2.0, 3.0]);
}

#[test]
fn test_duplicate_discards_t() {
    let mut engine = loaded();
    engine.duplicate_x();
    assert_eq!(regs(&engine), [2.0, 3.0, 4.0, 4.0]);
}

#[test]
fn test_clear_x_and_clear_stack() {
    let mut engine = loaded();
    engine.clear_x();
    assert_eq!(regs(&engine), [1.0, 2.0, 3.0, 0.0]);

    let mut engine = loaded();
    engine.clear_stack();
    assert_eq!(regs(&engine), [0.0, 0.0, 0.0, 4.0]);
}

// =============================================================================
// End to end
// =============================================================================

#[test]
fn test_scenario_52_plus_zero() {
    let mut engine = StackEngine::new();
    assert_eq!(regs(&engine), [0.0; 4]);

    engine.append_digit("5");
    engine.append_digit("2");
    engine.commit().expect("52 should parse");
    assert_eq!(regs(&engine), [0.0, 0.0, 0.0, 52.0]);

    engine.binary_op(BinaryOp::Add);
    assert_eq!(engine.x(), 52.0);
}

#[test]
fn test_stack_string_format() {
    let mut engine = StackEngine::new();
    engine.roll_set_x(1.5);
    engine.append_digit("2");
    assert_eq!(engine.stack_string(), "0\n0\n0\n1.5\n2");
}

#[test]
fn test_snapshot_json() {
    let mut engine = StackEngine::new();
    engine.roll_set_x(2.0);
    engine.append_digit("7");
    let json = engine.snapshot().to_json().expect("serializes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["x"], 2.0);
    assert_eq!(value["t"], 0.0);
    assert_eq!(value["entry"], "7");
}
