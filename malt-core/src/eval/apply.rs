// malt-core - Function application
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Function application for malt.

use std::any::Any;
use std::rc::Rc;

use malt_parser::{MaltFn, MaltNativeFn, MaltVal};

use super::eval;
use crate::env::Env;
use crate::error::{AritySpec, Error, Result};

/// Type alias for native function signature.
pub type NativeFnImpl = dyn Fn(&[MaltVal]) -> Result<MaltVal>;

/// Apply a function to already-evaluated arguments.
pub fn apply(func: &MaltVal, args: &[MaltVal]) -> Result<MaltVal> {
    match func {
        MaltVal::Fn(f) => apply_fn(f, args),
        MaltVal::NativeFn(f) => apply_native(f, args),
        other => Err(Error::type_mismatch("apply", "Function", other)),
    }
}

/// Apply a closure: bind parameters in a fresh child of the captured
/// environment and evaluate the body there.
pub(crate) fn apply_fn(func: &MaltFn, args: &[MaltVal]) -> Result<MaltVal> {
    if !func.accepts(args.len()) {
        let expected = if func.is_variadic() {
            AritySpec::AtLeast(func.params.len())
        } else {
            AritySpec::Exact(func.params.len())
        };
        return Err(Error::arity("fn*", expected, args.len()));
    }

    let captured_env = func
        .env
        .downcast_ref::<Env>()
        .ok_or_else(|| Error::Internal("function environment has invalid type".into()))?;

    // Parent is the defining environment, not the caller's
    let fn_env = captured_env.child();

    for (param, arg) in func.params.iter().zip(args.iter()) {
        fn_env.define(param.clone(), arg.clone());
    }

    if let Some(rest) = &func.rest_param {
        let rest_args = args[func.params.len()..].to_vec();
        fn_env.define(rest.clone(), MaltVal::list(rest_args));
    }

    tracing::trace!(args = args.len(), "invoking closure");
    eval(&func.body, &fn_env)
}

/// Apply a native function.
pub(crate) fn apply_native(func: &MaltNativeFn, args: &[MaltVal]) -> Result<MaltVal> {
    let f = func
        .func()
        .downcast_ref::<Rc<NativeFnImpl>>()
        .ok_or_else(|| Error::Internal("native function has invalid type".into()))?;
    f(args)
}

/// Create a native function value.
pub fn make_native_fn(
    name: &'static str,
    func: impl Fn(&[MaltVal]) -> Result<MaltVal> + 'static,
) -> MaltNativeFn {
    let func_rc: Rc<NativeFnImpl> = Rc::new(func);
    let func_any: Rc<dyn Any> = Rc::new(func_rc);
    MaltNativeFn::new(name, func_any)
}
