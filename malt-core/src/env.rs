// malt-core - Environment for lexical scoping
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Environment for variable bindings with lexical scoping.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use malt_parser::{MaltVal, Symbol};

use crate::error::{Error, Result};

/// A lexical environment for variable bindings.
///
/// Environments form a chain through parent references. A child holds its
/// parent; a parent never refers to its children. Closures keep the
/// environment they were created in alive, so a closure stored in its own
/// defining frame forms an `Rc` cycle that is never freed. Sessions are
/// short-lived, so that memory is reclaimed at process exit.
///
/// # Examples
///
/// ```
/// use malt_core::Env;
/// use malt_parser::{MaltVal, Symbol};
///
/// let env = Env::new();
/// env.define(Symbol::new("x"), MaltVal::number(42));
/// assert_eq!(env.lookup(&Symbol::new("x")).unwrap(), MaltVal::number(42));
///
/// // Child can shadow parent bindings
/// let child = env.child();
/// child.define(Symbol::new("x"), MaltVal::number(100));
/// assert_eq!(child.lookup(&Symbol::new("x")).unwrap(), MaltVal::number(100));
/// assert_eq!(env.lookup(&Symbol::new("x")).unwrap(), MaltVal::number(42));
/// ```
#[derive(Debug, Clone)]
pub struct Env {
    inner: Rc<RefCell<EnvInner>>,
}

#[derive(Debug)]
struct EnvInner {
    bindings: HashMap<Symbol, MaltVal>,
    parent: Option<Env>,
}

impl Env {
    /// Create a new root environment with no parent.
    pub fn new() -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                parent: None,
            })),
        }
    }

    /// Create a child environment with this environment as parent.
    #[must_use]
    pub fn child(&self) -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                parent: Some(self.clone()),
            })),
        }
    }

    /// Define a binding in this frame (never a parent), replacing any
    /// existing entry.
    pub fn define(&self, sym: Symbol, val: MaltVal) {
        self.inner.borrow_mut().bindings.insert(sym, val);
    }

    /// Look up a symbol in this environment or parent chain.
    /// Uses iterative traversal to avoid stack overflow on deep environments.
    pub fn lookup(&self, sym: &Symbol) -> Result<MaltVal> {
        let mut current = self.clone();
        loop {
            let inner = current.inner.borrow();
            if let Some(val) = inner.bindings.get(sym) {
                return Ok(val.clone());
            }
            let parent = inner.parent.clone();
            drop(inner);
            match parent {
                Some(p) => current = p,
                None => return Err(Error::UnboundSymbol(sym.clone())),
            }
        }
    }

    /// Check if a symbol is defined in this environment or parent chain.
    #[must_use]
    pub fn is_defined(&self, sym: &Symbol) -> bool {
        self.lookup(sym).is_ok()
    }

    /// True if this frame itself (ignoring parents) binds `sym`.
    #[must_use]
    pub fn defines_locally(&self, sym: &Symbol) -> bool {
        self.inner.borrow().bindings.contains_key(sym)
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
