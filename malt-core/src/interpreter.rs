// malt-core - Interpreter session
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The `Interpreter` struct - one session with its own global environment.

use malt_parser::{MaltVal, Reader, read_str};

use crate::builtins::register_builtins;
use crate::env::Env;
use crate::error::Result;
use crate::eval::eval;

/// A read-eval-print session.
///
/// Each `Interpreter` owns a root environment with the builtins registered.
/// Definitions made through one session are invisible to every other.
///
/// Like [`Env`], an `Interpreter` is single-threaded.
///
/// # Example
///
/// ```rust
/// use malt_core::Interpreter;
///
/// let interp = Interpreter::new();
/// interp.rep("(def! x 40)").unwrap();
/// assert_eq!(interp.rep("(+ x 2)").unwrap().as_deref(), Some("42"));
/// ```
pub struct Interpreter {
    env: Env,
}

impl Interpreter {
    /// Create a session with a fresh global environment.
    pub fn new() -> Self {
        let env = Env::new();
        register_builtins(&env);
        Interpreter { env }
    }

    /// The global environment of this session.
    pub fn env(&self) -> &Env {
        &self.env
    }

    /// Read the first form of `source` and evaluate it.
    ///
    /// Returns `None` when the form is a comment.
    ///
    /// # Errors
    ///
    /// Read errors and evaluation errors are returned as-is. Any `def!` that
    /// ran before the failure stays in effect.
    pub fn read_eval(&self, source: &str) -> Result<Option<MaltVal>> {
        let form = read_str(source)?;
        if let MaltVal::Comment(_) = form {
            return Ok(None);
        }
        eval(&form, &self.env).map(Some)
    }

    /// Read, evaluate and print one input line.
    ///
    /// Returns the readable rendering of the result, or `None` when there is
    /// nothing to show (a nil result or a comment).
    pub fn rep(&self, source: &str) -> Result<Option<String>> {
        let rendered = match self.read_eval(source)? {
            None | Some(MaltVal::Nil) => None,
            Some(val) => Some(val.to_string()),
        };
        Ok(rendered)
    }

    /// Evaluate every top-level form of `source`, skipping comments.
    ///
    /// Returns the value of the last form, or nil when there are none.
    pub fn eval_all(&self, source: &str) -> Result<MaltVal> {
        let mut reader = Reader::new(source);
        let mut result = MaltVal::Nil;
        while !reader.is_at_end() {
            let form = reader.read_form()?;
            if let MaltVal::Comment(_) = form {
                continue;
            }
            result = eval(&form, &self.env)?;
        }
        Ok(result)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
