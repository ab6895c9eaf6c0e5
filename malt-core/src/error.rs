// malt-core - Error types for the malt evaluator
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for malt evaluation.

use std::fmt;

use malt_parser::{MaltVal, ParseError, Symbol};
use thiserror::Error;

/// Result type for malt evaluation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or evaluating.
///
/// Errors unwind the whole evaluation; nothing inside the evaluator recovers
/// from them.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Malformed source, including odd-length map literals
    #[error("{0}")]
    Read(#[from] ParseError),

    /// Symbol absent from the whole environment chain
    #[error("symbol '{0}' is not defined")]
    UnboundSymbol(Symbol),

    /// Wrong kind of value for a special form or builtin
    #[error("{context}: {detail}")]
    TypeMismatch { context: String, detail: String },

    /// Wrong number of arguments to a function or special form
    #[error("wrong number of arguments to '{name}': expected {expected}, got {got}")]
    ArityError {
        name: String,
        expected: AritySpec,
        got: usize,
    },

    /// A binding name or parameter that is not a symbol, or a misplaced `&`
    #[error("invalid binding in '{form}': {message}")]
    BindingError { form: &'static str, message: String },

    /// Integer overflow or division by zero
    #[error("{operation}: {message}")]
    Arithmetic {
        operation: &'static str,
        message: &'static str,
    },

    /// Internal error - invariant violation
    #[error("internal error: {0}")]
    Internal(String),
}

/// The broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    MapArity,
    UnboundSymbol,
    TypeMismatch,
    Arity,
    Binding,
    Arithmetic,
    Internal,
}

/// Specification for expected arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AritySpec {
    Exact(usize),
    AtLeast(usize),
    Range(usize, usize),
}

impl AritySpec {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            AritySpec::Exact(n) => count == n,
            AritySpec::AtLeast(n) => count >= n,
            AritySpec::Range(min, max) => (min..=max).contains(&count),
        }
    }
}

impl fmt::Display for AritySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AritySpec::Exact(n) => write!(f, "{}", n),
            AritySpec::AtLeast(n) => write!(f, "at least {}", n),
            AritySpec::Range(min, max) => write!(f, "{} to {}", min, max),
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Read(ParseError::MapArity(_)) => ErrorKind::MapArity,
            Error::Read(_) => ErrorKind::Parse,
            Error::UnboundSymbol(_) => ErrorKind::UnboundSymbol,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::ArityError { .. } => ErrorKind::Arity,
            Error::BindingError { .. } => ErrorKind::Binding,
            Error::Arithmetic { .. } => ErrorKind::Arithmetic,
            Error::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Create an arity error.
    pub fn arity(name: impl Into<String>, expected: AritySpec, got: usize) -> Self {
        Error::ArityError {
            name: name.into(),
            expected,
            got,
        }
    }

    /// Fail with an arity error unless `got` satisfies `expected`.
    pub fn check_arity(name: &str, expected: AritySpec, got: usize) -> Result<()> {
        if expected.accepts(got) {
            Ok(())
        } else {
            Err(Error::arity(name, expected, got))
        }
    }

    /// Create a type error naming what was expected and the type actually seen.
    pub fn type_mismatch(context: impl Into<String>, expected: &str, got: &MaltVal) -> Self {
        Error::TypeMismatch {
            context: context.into(),
            detail: format!("expected {}, got {}", expected, got.type_description()),
        }
    }

    /// Type error for a binary numeric operation, naming both operands.
    pub fn operand_mismatch(operation: &str, lhs: &MaltVal, rhs: &MaltVal) -> Self {
        Error::TypeMismatch {
            context: format!("cannot apply {}", operation),
            detail: format!(
                "given types: {} and {}",
                lhs.type_description(),
                rhs.type_description()
            ),
        }
    }

    /// Create a binding error.
    pub fn binding(form: &'static str, message: impl Into<String>) -> Self {
        Error::BindingError {
            form,
            message: message.into(),
        }
    }
}
