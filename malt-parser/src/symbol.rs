// malt-parser - Symbol type with interning
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Symbols are the identifiers of malt source code.
//!
//! # Interning
//!
//! Symbol names are interned in a global pool, so two symbols with the same
//! name share one allocation. Equality and hashing are pointer operations;
//! ordering falls back to the name so that maps keyed by symbols print in a
//! stable order.
//!
//! Interned names are never released. Programs read from a prompt use a
//! small, bounded set of names, so the pool stays small.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, OnceLock};

static INTERNER: OnceLock<Mutex<HashSet<Arc<str>>>> = OnceLock::new();

/// Intern `name`, returning the shared allocation for it.
///
/// Shared by [`Symbol`] and [`crate::Keyword`].
pub(crate) fn intern(name: &str) -> Arc<str> {
    let pool = INTERNER.get_or_init(|| Mutex::new(HashSet::new()));
    // A poisoned pool still holds valid strings.
    let mut pool = match pool.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    if let Some(existing) = pool.get(name) {
        return Arc::clone(existing);
    }
    let interned: Arc<str> = Arc::from(name);
    pool.insert(Arc::clone(&interned));
    interned
}

/// An interned identifier.
#[derive(Clone)]
pub struct Symbol {
    name: Arc<str>,
}

impl Symbol {
    /// Create (or look up) the symbol with the given name.
    pub fn new(name: &str) -> Self {
        Symbol { name: intern(name) }
    }

    /// The symbol's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for the variadic marker `&` in parameter lists.
    pub fn is_ampersand(&self) -> bool {
        &*self.name == "&"
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.name, &other.name)
    }
}

impl Eq for Symbol {}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if Arc::ptr_eq(&self.name, &other.name) {
            return std::cmp::Ordering::Equal;
        }
        self.name.cmp(&other.name)
    }
}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.name) as *const u8 as usize).hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.name)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}
