// malt-core - Interpreter session tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Tests for `Interpreter`: printed output, error recovery and session
//! isolation.

use malt_core::{ErrorKind, Interpreter, MaltVal, Symbol};

fn rep(interp: &Interpreter, source: &str) -> Option<String> {
    interp
        .rep(source)
        .unwrap_or_else(|e| panic!("Failed to evaluate '{}': {}", source, e))
}

#[test]
fn test_rep_prints_readable_forms() {
    let interp = Interpreter::new();
    assert_eq!(rep(&interp, "(+ 1 2)").as_deref(), Some("3"));
    assert_eq!(rep(&interp, "\"a\\nb\"").as_deref(), Some("\"a\\nb\""));
    assert_eq!(rep(&interp, ":kw").as_deref(), Some(":kw"));
    assert_eq!(rep(&interp, "(list 1 [2 {:a 3}])").as_deref(), Some("(1 [2 {:a 3}])"));
    assert_eq!(rep(&interp, "(fn* (x) x)").as_deref(), Some("#<function>"));
    assert_eq!(rep(&interp, "+").as_deref(), Some("#<function>"));
    assert_eq!(rep(&interp, "true").as_deref(), Some("true"));
    assert_eq!(rep(&interp, "()").as_deref(), Some("()"));
}

#[test]
fn test_rep_nil_prints_nothing() {
    let interp = Interpreter::new();
    assert_eq!(rep(&interp, "nil"), None);
    assert_eq!(rep(&interp, "(if false 1)"), None);
    assert_eq!(rep(&interp, "(prn)"), None);
}

#[test]
fn test_rep_comment_prints_nothing() {
    let interp = Interpreter::new();
    assert_eq!(rep(&interp, "; (+ 1 2)"), None);
    assert_eq!(interp.read_eval(";; note").unwrap(), None);
}

#[test]
fn test_trailing_comment_ignored() {
    let interp = Interpreter::new();
    assert_eq!(rep(&interp, "(+ 1 2) ; sum").as_deref(), Some("3"));
}

#[test]
fn test_session_persists_definitions() {
    let interp = Interpreter::new();
    rep(&interp, "(def! inc (fn* (x) (+ x 1)))");
    assert_eq!(rep(&interp, "(inc 41)").as_deref(), Some("42"));
}

#[test]
fn test_session_recovers_after_error() {
    let interp = Interpreter::new();
    rep(&interp, "(def! x 1)");
    assert_eq!(
        interp.rep("(+ x undefined)").unwrap_err().kind(),
        ErrorKind::UnboundSymbol
    );
    assert_eq!(interp.rep("(1 2").unwrap_err().kind(), ErrorKind::Parse);
    assert_eq!(rep(&interp, "x").as_deref(), Some("1"));
}

#[test]
fn test_partial_effects_not_rolled_back() {
    let interp = Interpreter::new();
    assert!(interp.rep("(do (def! a 1) (def! b (/ a 0)))").is_err());
    assert_eq!(rep(&interp, "a").as_deref(), Some("1"));
    assert!(!interp.env().is_defined(&Symbol::new("b")));
}

#[test]
fn test_sessions_are_isolated() {
    let first = Interpreter::new();
    let second = Interpreter::new();
    rep(&first, "(def! only-here 1)");
    assert_eq!(
        second.rep("only-here").unwrap_err().kind(),
        ErrorKind::UnboundSymbol
    );
}

#[test]
fn test_redefining_builtin_is_session_local() {
    let first = Interpreter::new();
    let second = Interpreter::new();
    rep(&first, "(def! + (fn* (a b) 0))");
    assert_eq!(rep(&first, "(+ 1 2)").as_deref(), Some("0"));
    assert_eq!(rep(&second, "(+ 1 2)").as_deref(), Some("3"));
}

#[test]
fn test_eval_all_program() {
    let interp = Interpreter::default();
    let result = interp
        .eval_all(
            ";; counts down
             (def! countdown (fn* (n) (if (= n 0) :done (countdown (- n 1)))))
             (countdown 50)",
        )
        .unwrap();
    assert_eq!(result, MaltVal::keyword("done"));
}

#[test]
fn test_eval_all_stops_at_first_error() {
    let interp = Interpreter::new();
    assert!(interp.eval_all("(def! p 1) (boom) (def! q 2)").is_err());
    assert!(interp.env().is_defined(&Symbol::new("p")));
    assert!(!interp.env().is_defined(&Symbol::new("q")));
}
