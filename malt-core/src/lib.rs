// malt-core - Runtime and evaluator for malt
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # malt-core
//!
//! Runtime and evaluator for malt, a small Lisp.
//! Provides an AST-walking interpreter for `MaltVal` expressions.

pub mod builtins;
pub mod env;
pub mod error;
pub mod eval;
pub mod interpreter;

pub use builtins::register_builtins;
pub use env::Env;
pub use error::{AritySpec, Error, ErrorKind, Result};
pub use eval::{apply, eval, make_native_fn};
pub use interpreter::Interpreter;

// Re-export parser types for convenience
pub use malt_parser::{Keyword, MaltVal, ParseError, Symbol, read_all, read_str};
