// malt-core - AST-walking evaluator
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! AST-walking evaluator for malt expressions.
//!
//! Evaluation is plain recursion over the value tree. There is no
//! trampoline, so every nested call consumes a host stack frame and very
//! deep recursion in a user program can exhaust the stack.

pub mod apply;

pub use apply::{NativeFnImpl, apply, make_native_fn};

use std::rc::Rc;

use malt_parser::{MaltFn, MaltVal, Symbol, Vector};

use crate::env::Env;
use crate::error::{AritySpec, Error, Result};

/// Evaluate `expr` in `env`.
///
/// # Errors
///
/// Returns an error if:
/// - A symbol cannot be resolved
/// - A function is called with wrong arity
/// - Type mismatches occur during operations
/// - A special form is malformed
pub fn eval(expr: &MaltVal, env: &Env) -> Result<MaltVal> {
    match expr {
        // Self-evaluating forms
        MaltVal::Nil
        | MaltVal::Bool(_)
        | MaltVal::Number(_)
        | MaltVal::String(_)
        | MaltVal::Keyword(_)
        | MaltVal::Fn(_)
        | MaltVal::NativeFn(_) => Ok(expr.clone()),

        MaltVal::Symbol(sym) => env.lookup(sym),

        MaltVal::List(items) => eval_list(items, env),

        // Vectors evaluate their elements
        MaltVal::Vector(items) => {
            let evaluated: Result<Vec<_>> = items.iter().map(|e| eval(e, env)).collect();
            Ok(MaltVal::vector(evaluated?))
        }

        // Maps evaluate their keys and values
        MaltVal::Map(map) => {
            let mut pairs = Vec::with_capacity(map.len());
            for (k, v) in map.iter() {
                pairs.push((eval(k, env)?, eval(v, env)?));
            }
            Ok(MaltVal::map(pairs))
        }

        MaltVal::Comment(_) => Err(Error::type_mismatch(
            "eval",
            "an expression",
            expr,
        )),
    }
}

/// Evaluate a list form (special form or function call).
fn eval_list(items: &Vector<MaltVal>, env: &Env) -> Result<MaltVal> {
    let Some(head) = items.front() else {
        // The empty list is a literal, not a call
        return Ok(MaltVal::List(items.clone()));
    };

    if let MaltVal::Symbol(sym) = head {
        let special = match sym.name() {
            "def!" => Some(eval_def as SpecialForm),
            "let*" => Some(eval_let as SpecialForm),
            "do" => Some(eval_do as SpecialForm),
            "if" => Some(eval_if as SpecialForm),
            "fn*" => Some(eval_fn as SpecialForm),
            _ => None,
        };
        if let Some(handler) = special {
            tracing::trace!(form = sym.name(), "special form");
            let args: Vec<MaltVal> = items.iter().skip(1).cloned().collect();
            return handler(&args, env);
        }
    }

    // Regular function call - evaluate all forms then apply
    let evaluated: Vec<MaltVal> = items
        .iter()
        .map(|item| eval(item, env))
        .collect::<Result<_>>()?;
    apply(&evaluated[0], &evaluated[1..])
}

type SpecialForm = fn(&[MaltVal], &Env) -> Result<MaltVal>;

// ============================================================================
// Special forms
// ============================================================================

/// (def! name expr) - bind in the current frame
fn eval_def(args: &[MaltVal], env: &Env) -> Result<MaltVal> {
    Error::check_arity("def!", AritySpec::Exact(2), args.len())?;

    let name = binding_name("def!", &args[0])?;
    let value = eval(&args[1], env)?;
    tracing::debug!(name = %name, "def!");
    env.define(name, value.clone());
    Ok(value)
}

/// (let* (name expr ...) body) - sequential local bindings
fn eval_let(args: &[MaltVal], env: &Env) -> Result<MaltVal> {
    Error::check_arity("let*", AritySpec::Exact(2), args.len())?;

    let bindings = args[0]
        .as_sequence()
        .ok_or_else(|| Error::type_mismatch("let*", "a List or Vector of bindings", &args[0]))?;

    if bindings.len() % 2 != 0 {
        return Err(Error::binding(
            "let*",
            format!(
                "bindings must contain an even number of forms, got {}",
                bindings.len()
            ),
        ));
    }

    let let_env = env.child();

    // Each value sees the bindings made before it
    let mut forms = bindings.iter();
    while let (Some(name), Some(expr)) = (forms.next(), forms.next()) {
        let name = binding_name("let*", name)?;
        let value = eval(expr, &let_env)?;
        let_env.define(name, value);
    }

    eval(&args[1], &let_env)
}

/// (do exprs*) - evaluate expressions in sequence, return last
fn eval_do(args: &[MaltVal], env: &Env) -> Result<MaltVal> {
    let mut result = MaltVal::Nil;
    for expr in args {
        result = eval(expr, env)?;
    }
    Ok(result)
}

/// (if test then else?) - conditional evaluation
fn eval_if(args: &[MaltVal], env: &Env) -> Result<MaltVal> {
    Error::check_arity("if", AritySpec::Range(2, 3), args.len())?;

    let test = eval(&args[0], env)?;

    if test.is_truthy() {
        eval(&args[1], env)
    } else if let Some(otherwise) = args.get(2) {
        eval(otherwise, env)
    } else {
        Ok(MaltVal::Nil)
    }
}

/// (fn* (params*) body) - closure over the defining environment
fn eval_fn(args: &[MaltVal], env: &Env) -> Result<MaltVal> {
    Error::check_arity("fn*", AritySpec::Exact(2), args.len())?;

    let (params, rest_param) = parse_params(&args[0])?;
    Ok(MaltVal::closure(MaltFn::new(
        params,
        rest_param,
        args[1].clone(),
        Rc::new(env.clone()),
    )))
}

/// Split a parameter list into positional parameters and the optional rest
/// parameter. `&` is only allowed second to last.
fn parse_params(form: &MaltVal) -> Result<(Vec<Symbol>, Option<Symbol>)> {
    let items = form
        .as_sequence()
        .ok_or_else(|| Error::type_mismatch("fn*", "a List or Vector of parameters", form))?;

    let mut params = items
        .iter()
        .map(|item| binding_name("fn*", item))
        .collect::<Result<Vec<_>>>()?;

    let ampersands = params.iter().filter(|p| p.is_ampersand()).count();
    let variadic = params.len() >= 2 && params[params.len() - 2].is_ampersand();

    if ampersands == 0 {
        return Ok((params, None));
    }
    if !variadic || ampersands > 1 {
        return Err(Error::binding(
            "fn*",
            "& must appear exactly once, directly before the last parameter",
        ));
    }

    let rest = params.pop();
    params.pop();
    Ok((params, rest))
}

fn binding_name(form: &'static str, val: &MaltVal) -> Result<Symbol> {
    match val {
        MaltVal::Symbol(sym) => Ok(sym.clone()),
        other => Err(Error::binding(
            form,
            format!("expected a symbol, got {}", other.type_description()),
        )),
    }
}
