// malt-core - Built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Built-in functions for malt.
//!
//! Every builtin checks its argument count before looking at argument
//! types.

mod arithmetic;
mod comparison;
mod io;
mod logic;
mod sequences;

pub use io::{format_println, format_prn, pr_str, unescape};

use malt_parser::{MaltVal, Symbol};

use crate::env::Env;
use crate::error::{AritySpec, Error, Result};
use crate::eval::make_native_fn;

use arithmetic::{builtin_add, builtin_div, builtin_mul, builtin_sub};
use comparison::{builtin_eq, builtin_ge, builtin_gt, builtin_le, builtin_lt};
use io::{builtin_pr_str, builtin_println, builtin_prn, builtin_str};
use logic::{builtin_and, builtin_not, builtin_or};
use sequences::{builtin_count, builtin_empty_p, builtin_list, builtin_list_p};

/// Register all built-in functions in the given environment.
pub fn register_builtins(env: &Env) {
    // Arithmetic
    env.define_native("+", builtin_add);
    env.define_native("-", builtin_sub);
    env.define_native("*", builtin_mul);
    env.define_native("/", builtin_div);

    // Comparison
    env.define_native("=", builtin_eq);
    env.define_native(">", builtin_gt);
    env.define_native(">=", builtin_ge);
    env.define_native("<", builtin_lt);
    env.define_native("<=", builtin_le);

    // Logic
    env.define_native("not", builtin_not);
    env.define_native("and", builtin_and);
    env.define_native("or", builtin_or);

    // Sequences
    env.define_native("list", builtin_list);
    env.define_native("list?", builtin_list_p);
    env.define_native("empty?", builtin_empty_p);
    env.define_native("count", builtin_count);

    // Printing
    env.define_native("str", builtin_str);
    env.define_native("pr-str", builtin_pr_str);
    env.define_native("prn", builtin_prn);
    env.define_native("println", builtin_println);

    tracing::debug!("registered builtins");
}

/// Helper trait to define native functions more easily.
pub trait EnvExt {
    fn define_native(&self, name: &'static str, func: fn(&[MaltVal]) -> Result<MaltVal>);
}

impl EnvExt for Env {
    fn define_native(&self, name: &'static str, func: fn(&[MaltVal]) -> Result<MaltVal>) {
        let native = make_native_fn(name, func);
        self.define(Symbol::new(name), MaltVal::native_fn(native));
    }
}

// ============================================================================
// Shared Helpers
// ============================================================================

pub(crate) fn require_number(name: &str, val: &MaltVal) -> Result<i64> {
    match val {
        MaltVal::Number(n) => Ok(*n),
        other => Err(Error::type_mismatch(name, "Number", other)),
    }
}

pub(crate) fn require_arity(name: &str, expected: AritySpec, args: &[MaltVal]) -> Result<()> {
    Error::check_arity(name, expected, args.len())
}
