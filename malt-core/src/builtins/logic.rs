// malt-core - Logic built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Logic operations: not, and, or
//!
//! `and` and `or` are ordinary functions here, so their arguments are
//! already evaluated; they pick a result, they do not short-circuit.

use malt_parser::MaltVal;

use crate::error::{AritySpec, Result};

use super::require_arity;

/// (not x) - logical not
pub(crate) fn builtin_not(args: &[MaltVal]) -> Result<MaltVal> {
    require_arity("not", AritySpec::Exact(1), args)?;
    Ok(MaltVal::bool(!args[0].is_truthy()))
}

/// (and x*) - first falsy argument, else the last; true when empty
pub(crate) fn builtin_and(args: &[MaltVal]) -> Result<MaltVal> {
    let Some(last) = args.last() else {
        return Ok(MaltVal::bool(true));
    };
    Ok(args
        .iter()
        .find(|arg| !arg.is_truthy())
        .unwrap_or(last)
        .clone())
}

/// (or x*) - first truthy argument, else the last; nil when empty
pub(crate) fn builtin_or(args: &[MaltVal]) -> Result<MaltVal> {
    let Some(last) = args.last() else {
        return Ok(MaltVal::Nil);
    };
    Ok(args
        .iter()
        .find(|arg| arg.is_truthy())
        .unwrap_or(last)
        .clone())
}
