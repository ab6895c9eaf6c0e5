// malt-parser - Keyword type with interning
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Keywords are self-evaluating names written with a leading colon.
//!
//! A keyword lives in its own variant of [`crate::MaltVal`], so `:a` never
//! equals the string `"a"` or the symbol `a`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::symbol::intern;

/// An interned keyword. The stored name excludes the leading `:`.
#[derive(Clone)]
pub struct Keyword {
    name: Arc<str>,
}

impl Keyword {
    /// Create a keyword from its name, without the colon.
    pub fn new(name: &str) -> Self {
        Keyword { name: intern(name) }
    }

    /// The keyword's name, without the colon.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Keyword {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.name, &other.name)
    }
}

impl Eq for Keyword {}

impl PartialOrd for Keyword {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyword {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.name.cmp(&other.name)
    }
}

impl Hash for Keyword {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.name) as *const u8 as usize).hash(state);
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.name)
    }
}

impl fmt::Debug for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keyword(:{})", self.name)
    }
}
