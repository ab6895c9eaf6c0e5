// malt-core - Comparison built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Comparison operations: =, <, >, <=, >=

use std::cmp::Ordering;

use malt_parser::MaltVal;

use crate::error::{AritySpec, Result};

use super::{require_arity, require_number};

// ============================================================================
// Equality
// ============================================================================

/// True iff every argument equals the first.
pub(crate) fn builtin_eq(args: &[MaltVal]) -> Result<MaltVal> {
    require_arity("=", AritySpec::AtLeast(2), args)?;
    let first = &args[0];
    Ok(MaltVal::bool(args[1..].iter().all(|arg| arg == first)))
}

// ============================================================================
// Ordering
// ============================================================================

/// Chained comparison: every adjacent pair must satisfy `accept`.
fn compare_chain(
    name: &str,
    args: &[MaltVal],
    accept: fn(Ordering) -> bool,
) -> Result<MaltVal> {
    require_arity(name, AritySpec::AtLeast(2), args)?;
    let numbers = args
        .iter()
        .map(|arg| require_number(name, arg))
        .collect::<Result<Vec<_>>>()?;
    Ok(MaltVal::bool(
        numbers.windows(2).all(|pair| accept(pair[0].cmp(&pair[1]))),
    ))
}

pub(crate) fn builtin_lt(args: &[MaltVal]) -> Result<MaltVal> {
    compare_chain("<", args, Ordering::is_lt)
}

pub(crate) fn builtin_le(args: &[MaltVal]) -> Result<MaltVal> {
    compare_chain("<=", args, Ordering::is_le)
}

pub(crate) fn builtin_gt(args: &[MaltVal]) -> Result<MaltVal> {
    compare_chain(">", args, Ordering::is_gt)
}

pub(crate) fn builtin_ge(args: &[MaltVal]) -> Result<MaltVal> {
    compare_chain(">=", args, Ordering::is_ge)
}
