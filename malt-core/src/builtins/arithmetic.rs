// malt-core - Arithmetic built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Arithmetic operations: +, -, *, /
//!
//! Each operator folds its arguments pairwise from the left. Integer
//! overflow and division by zero are errors rather than wrapping or
//! panicking.

use malt_parser::MaltVal;

use crate::error::{AritySpec, Error, Result};

use super::require_arity;

/// One arithmetic operator: the builtin name, the operation name used in
/// error messages, and the checked integer operation.
struct Operator {
    name: &'static str,
    operation: &'static str,
    apply: fn(i64, i64) -> Option<i64>,
}

const ADD: Operator = Operator {
    name: "+",
    operation: "addition",
    apply: i64::checked_add,
};

const SUB: Operator = Operator {
    name: "-",
    operation: "subtraction",
    apply: i64::checked_sub,
};

const MUL: Operator = Operator {
    name: "*",
    operation: "multiplication",
    apply: i64::checked_mul,
};

const DIV: Operator = Operator {
    name: "/",
    operation: "division",
    apply: i64::checked_div,
};

fn fold(op: &Operator, args: &[MaltVal]) -> Result<MaltVal> {
    require_arity(op.name, AritySpec::AtLeast(2), args)?;

    let mut acc = args[0].clone();
    for operand in &args[1..] {
        let (MaltVal::Number(a), MaltVal::Number(b)) = (&acc, operand) else {
            return Err(Error::operand_mismatch(op.operation, &acc, operand));
        };
        if op.name == "/" && *b == 0 {
            return Err(Error::Arithmetic {
                operation: op.operation,
                message: "divide by zero",
            });
        }
        let result = (op.apply)(*a, *b).ok_or(Error::Arithmetic {
            operation: op.operation,
            message: "integer overflow",
        })?;
        acc = MaltVal::Number(result);
    }
    Ok(acc)
}

pub(crate) fn builtin_add(args: &[MaltVal]) -> Result<MaltVal> {
    fold(&ADD, args)
}

pub(crate) fn builtin_sub(args: &[MaltVal]) -> Result<MaltVal> {
    fold(&SUB, args)
}

pub(crate) fn builtin_mul(args: &[MaltVal]) -> Result<MaltVal> {
    fold(&MUL, args)
}

/// Integer division, truncating toward zero.
pub(crate) fn builtin_div(args: &[MaltVal]) -> Result<MaltVal> {
    fold(&DIV, args)
}
