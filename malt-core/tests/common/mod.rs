// malt-core - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared test helpers for malt integration tests.
//!
//! # Usage
//!
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`eval_str`] - Evaluate the first form in a fresh environment with builtins
//! - [`eval_str_with_env`] - Evaluate the first form in an existing environment
//! - [`eval_all`] - Evaluate every form, returning the last
//! - [`new_env`] - Create a new environment with builtins registered
//! - [`err_kind`] - Evaluate and return the kind of the resulting error
//!
//! # Macros
//!
//! - [`assert_eval!`] - Assert that code evaluates to an expected value
//! - [`assert_eval_err!`] - Assert that code produces an error, optionally of a given kind

#![allow(dead_code)]

pub use malt_core::builtins::register_builtins;
pub use malt_core::env::Env;
pub use malt_core::error::{Error, ErrorKind};
pub use malt_core::eval::eval;
#[allow(unused_imports)]
pub use malt_parser::{Keyword, MaltVal, Reader, Symbol, read_str};

/// Evaluate the first form of `s` in a fresh environment.
pub fn eval_str(s: &str) -> Result<MaltVal, Error> {
    eval_str_with_env(s, &new_env())
}

/// Evaluate the first form of `s` in the given environment.
pub fn eval_str_with_env(s: &str, env: &Env) -> Result<MaltVal, Error> {
    let expr = read_str(s)?;
    eval(&expr, env)
}

/// Evaluate every form of `s` in order, returning the last result.
/// Comments are skipped.
pub fn eval_all(s: &str, env: &Env) -> Result<MaltVal, Error> {
    let mut reader = Reader::new(s);
    let mut result = MaltVal::Nil;
    while !reader.is_at_end() {
        let expr = reader.read_form()?;
        if let MaltVal::Comment(_) = expr {
            continue;
        }
        result = eval(&expr, env)?;
    }
    Ok(result)
}

/// Create a new environment with builtins registered.
#[must_use]
pub fn new_env() -> Env {
    let env = Env::new();
    register_builtins(&env);
    env
}

/// Evaluate `s` in a fresh environment and return the kind of the error.
///
/// # Panics
///
/// Panics if evaluation succeeds.
pub fn err_kind(s: &str) -> ErrorKind {
    match eval_str(s) {
        Ok(val) => panic!("Expected error for '{}' but got {}", s, val),
        Err(e) => e.kind(),
    }
}

/// Shorthand for building a list of numbers.
pub fn num_list(ns: &[i64]) -> MaltVal {
    MaltVal::list(ns.iter().copied().map(MaltVal::number).collect())
}

/// Assert that evaluating `input` produces the expected value.
///
/// ```ignore
/// assert_eval!("(+ 1 2)", MaltVal::number(3));
/// ```
#[macro_export]
macro_rules! assert_eval {
    ($input:expr, $expected:expr) => {
        let result = $crate::common::eval_str($input);
        assert!(
            result.is_ok(),
            "Failed to evaluate '{}': {:?}",
            $input,
            result.err()
        );
        assert_eq!(
            result.unwrap(),
            $expected,
            "Evaluation of '{}' did not match expected",
            $input
        );
    };
}

/// Assert that evaluating `input` produces an error.
///
/// ```ignore
/// assert_eval_err!("(+ 1 :not-a-number)");
/// assert_eval_err!("(/ 1 0)", ErrorKind::Arithmetic);
/// ```
#[macro_export]
macro_rules! assert_eval_err {
    ($input:expr) => {
        let result = $crate::common::eval_str($input);
        assert!(
            result.is_err(),
            "Expected error for '{}' but got {:?}",
            $input,
            result.ok()
        );
    };
    ($input:expr, $kind:expr) => {
        assert_eq!(
            $crate::common::err_kind($input),
            $kind,
            "Wrong error kind for '{}'",
            $input
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_str_basic() {
        assert_eq!(eval_str("42").unwrap(), MaltVal::number(42));
        assert_eq!(eval_str("(+ 1 2)").unwrap(), MaltVal::number(3));
    }

    #[test]
    fn test_eval_all() {
        let env = new_env();
        let result = eval_all("(def! x 1) (def! y 2) (+ x y)", &env).unwrap();
        assert_eq!(result, MaltVal::number(3));
    }
}
