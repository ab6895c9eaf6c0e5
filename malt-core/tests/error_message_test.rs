// malt-core - Error message tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Checks that error messages name the failing operation and the values
//! involved.

mod common;

use common::*;

fn message(source: &str) -> String {
    eval_str(source).unwrap_err().to_string()
}

#[test]
fn test_unbound_symbol_message() {
    assert_eq!(message("foo"), "symbol 'foo' is not defined");
}

#[test]
fn test_builtin_arity_message() {
    assert_eq!(
        message("(+ 1)"),
        "wrong number of arguments to '+': expected at least 2, got 1"
    );
    assert_eq!(
        message("(count 1 2)"),
        "wrong number of arguments to 'count': expected 1, got 2"
    );
}

#[test]
fn test_special_form_arity_message() {
    assert_eq!(
        message("(if 1)"),
        "wrong number of arguments to 'if': expected 2 to 3, got 1"
    );
    assert_eq!(
        message("(def! a)"),
        "wrong number of arguments to 'def!': expected 2, got 1"
    );
}

#[test]
fn test_closure_arity_message() {
    assert_eq!(
        message("((fn* (a b & c) a) 1)"),
        "wrong number of arguments to 'fn*': expected at least 2, got 1"
    );
}

#[test]
fn test_binding_message() {
    assert_eq!(
        message("(def! 5 1)"),
        "invalid binding in 'def!': expected a symbol, got Number"
    );
    assert!(message("(fn* (a & b c) a)").starts_with("invalid binding in 'fn*'"));
}

#[test]
fn test_comparison_message() {
    assert_eq!(message("(< 1 nil)"), "<: expected Number, got Nil");
}

#[test]
fn test_arithmetic_messages() {
    assert_eq!(
        message("(- \"a\" 1)"),
        "cannot apply subtraction: given types: String and Number"
    );
    assert_eq!(message("(/ 1 0)"), "division: divide by zero");
}

#[test]
fn test_read_error_messages_are_positional() {
    let msg = message("(+ 1 2]");
    assert!(msg.contains("1:7"), "{}", msg);
    assert_eq!(err_kind("(1 2"), ErrorKind::Parse);
    assert_eq!(err_kind("{:a}"), ErrorKind::MapArity);
    assert_eq!(err_kind("\"abc"), ErrorKind::Parse);
}
