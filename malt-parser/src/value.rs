// malt-parser - Value types for malt
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core value type for malt.
//!
//! `MaltVal` is the closed set of runtime values. Source code is read into
//! the same representation, so a program is a `MaltVal` tree. Values are
//! immutable; collections are persistent `im` structures and share
//! structure when rebuilt.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use im::{OrdMap, Vector};
use thiserror::Error;

use crate::keyword::Keyword;
use crate::symbol::Symbol;

/// A map literal or map construction with an odd number of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("map must contain an even number of forms, got {count}")]
pub struct MapArityError {
    pub count: usize,
}

/// All values in malt are represented by this enum.
#[derive(Clone)]
pub enum MaltVal {
    /// The nil value, representing nothing/absence
    Nil,
    /// Boolean true or false
    Bool(bool),
    /// 64-bit signed integer
    Number(i64),
    /// String contents exactly as written between the quotes
    String(Rc<str>),
    Symbol(Symbol),
    Keyword(Keyword),
    /// Persistent list. Shares sequence equality with `Vector`.
    List(Vector<MaltVal>),
    Vector(Vector<MaltVal>),
    Map(OrdMap<MaltVal, MaltVal>),
    /// User-defined function (closure)
    Fn(Rc<MaltFn>),
    /// Native (Rust) function
    NativeFn(Rc<MaltNativeFn>),
    /// A `;` comment. Produced by the reader, never evaluated.
    Comment(Rc<str>),
}

// ============================================================================
// Function Types
// ============================================================================

/// A user-defined function (closure).
///
/// The captured environment is type-erased because the environment type is
/// defined in malt-core.
pub struct MaltFn {
    /// Positional parameters (excluding `&` and the rest parameter)
    pub params: Vec<Symbol>,
    /// Parameter bound to the surplus arguments, if variadic
    pub rest_param: Option<Symbol>,
    pub body: MaltVal,
    pub env: Rc<dyn Any>,
}

impl MaltFn {
    pub fn new(
        params: Vec<Symbol>,
        rest_param: Option<Symbol>,
        body: MaltVal,
        env: Rc<dyn Any>,
    ) -> Self {
        MaltFn {
            params,
            rest_param,
            body,
            env,
        }
    }

    pub fn is_variadic(&self) -> bool {
        self.rest_param.is_some()
    }

    /// Check if this function can accept the given number of arguments.
    pub fn accepts(&self, arg_count: usize) -> bool {
        if self.is_variadic() {
            arg_count >= self.params.len()
        } else {
            arg_count == self.params.len()
        }
    }
}

impl fmt::Debug for MaltFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<function>")
    }
}

/// A native (Rust) function.
pub struct MaltNativeFn {
    /// Function name for error messages
    pub name: &'static str,
    /// The actual function (type-erased)
    func: Rc<dyn Any>,
}

impl MaltNativeFn {
    /// Create a new native function with a type-erased function.
    pub fn new(name: &'static str, func: Rc<dyn Any>) -> Self {
        MaltNativeFn { name, func }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the inner function reference.
    pub fn func(&self) -> &Rc<dyn Any> {
        &self.func
    }
}

impl fmt::Debug for MaltNativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<native-fn {}>", self.name)
    }
}

// ============================================================================
// Constructors and queries
// ============================================================================

impl MaltVal {
    pub fn nil() -> Self {
        MaltVal::Nil
    }

    pub fn bool(b: bool) -> Self {
        MaltVal::Bool(b)
    }

    pub fn number(n: i64) -> Self {
        MaltVal::Number(n)
    }

    pub fn string(s: impl Into<Rc<str>>) -> Self {
        MaltVal::String(s.into())
    }

    pub fn symbol(name: &str) -> Self {
        MaltVal::Symbol(Symbol::new(name))
    }

    /// Create a keyword from its name, without the colon.
    pub fn keyword(name: &str) -> Self {
        MaltVal::Keyword(Keyword::new(name))
    }

    pub fn empty_list() -> Self {
        MaltVal::List(Vector::new())
    }

    pub fn list(elements: Vec<MaltVal>) -> Self {
        MaltVal::List(elements.into_iter().collect())
    }

    pub fn vector(elements: Vec<MaltVal>) -> Self {
        MaltVal::Vector(elements.into_iter().collect())
    }

    /// Build a map from key/value pairs. Later duplicates replace earlier ones.
    pub fn map(pairs: Vec<(MaltVal, MaltVal)>) -> Self {
        MaltVal::Map(pairs.into_iter().collect())
    }

    /// Build a map from a flat `k1 v1 k2 v2 ...` sequence.
    pub fn map_from_elements(elements: Vec<MaltVal>) -> Result<Self, MapArityError> {
        if elements.len() % 2 != 0 {
            return Err(MapArityError {
                count: elements.len(),
            });
        }
        let mut map = OrdMap::new();
        let mut iter = elements.into_iter();
        while let (Some(key), Some(value)) = (iter.next(), iter.next()) {
            map.insert(key, value);
        }
        Ok(MaltVal::Map(map))
    }

    pub fn closure(func: MaltFn) -> Self {
        MaltVal::Fn(Rc::new(func))
    }

    pub fn native_fn(func: MaltNativeFn) -> Self {
        MaltVal::NativeFn(Rc::new(func))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, MaltVal::Nil)
    }

    /// Everything except nil and false.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, MaltVal::Nil | MaltVal::Bool(false))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, MaltVal::Fn(_) | MaltVal::NativeFn(_))
    }

    /// Elements of a List or Vector.
    pub fn as_sequence(&self) -> Option<&Vector<MaltVal>> {
        match self {
            MaltVal::List(items) | MaltVal::Vector(items) => Some(items),
            _ => None,
        }
    }

    /// Size of a List, Vector or Map (entries), `None` for anything else.
    pub fn sequence_len(&self) -> Option<usize> {
        match self {
            MaltVal::List(items) | MaltVal::Vector(items) => Some(items.len()),
            MaltVal::Map(map) => Some(map.len()),
            _ => None,
        }
    }

    /// Flatten a map into `k1 v1 k2 v2 ...` order.
    pub fn map_elements(map: &OrdMap<MaltVal, MaltVal>) -> Vec<MaltVal> {
        let mut elements = Vec::with_capacity(map.len() * 2);
        for (k, v) in map.iter() {
            elements.push(k.clone());
            elements.push(v.clone());
        }
        elements
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            MaltVal::Nil => "Nil",
            MaltVal::Bool(_) => "Boolean",
            MaltVal::Number(_) => "Number",
            MaltVal::String(_) => "String",
            MaltVal::Symbol(_) => "Symbol",
            MaltVal::Keyword(_) => "Keyword",
            MaltVal::List(_) => "List",
            MaltVal::Vector(_) => "Vector",
            MaltVal::Map(_) => "Map",
            MaltVal::Fn(_) | MaltVal::NativeFn(_) => "Function",
            MaltVal::Comment(_) => "Comment",
        }
    }

    /// Type name that recurses into collections, e.g. `List (Number String)`.
    pub fn type_description(&self) -> String {
        fn join<'a>(items: impl Iterator<Item = &'a MaltVal>) -> String {
            items
                .map(MaltVal::type_description)
                .collect::<Vec<_>>()
                .join(" ")
        }

        match self {
            MaltVal::List(items) => format!("List ({})", join(items.iter())),
            MaltVal::Vector(items) => format!("Vector [{}]", join(items.iter())),
            MaltVal::Map(map) => format!(
                "Map {{{}}}",
                join(map.iter().flat_map(|(k, v)| [k, v]))
            ),
            other => other.type_name().to_string(),
        }
    }

    /// Render without string quotes (the form `str` and `println` use).
    pub fn display_raw(&self) -> Raw<'_> {
        Raw(self)
    }

    /// Rank used to order values of different types. List and Vector share a
    /// rank since they compare equal element-wise.
    fn type_rank(&self) -> u8 {
        match self {
            MaltVal::Nil => 0,
            MaltVal::Bool(_) => 1,
            MaltVal::Number(_) => 2,
            MaltVal::String(_) => 3,
            MaltVal::Symbol(_) => 4,
            MaltVal::Keyword(_) => 5,
            MaltVal::List(_) | MaltVal::Vector(_) => 6,
            MaltVal::Map(_) => 7,
            MaltVal::Fn(_) => 8,
            MaltVal::NativeFn(_) => 9,
            MaltVal::Comment(_) => 10,
        }
    }

    fn write_form(&self, f: &mut fmt::Formatter<'_>, readably: bool) -> fmt::Result {
        match self {
            MaltVal::Nil => write!(f, "nil"),
            MaltVal::Bool(b) => write!(f, "{}", b),
            MaltVal::Number(n) => write!(f, "{}", n),
            MaltVal::String(s) if readably => write!(f, "\"{}\"", s),
            MaltVal::String(s) => write!(f, "{}", s),
            MaltVal::Symbol(sym) => write!(f, "{}", sym),
            MaltVal::Keyword(kw) => write!(f, "{}", kw),
            MaltVal::List(items) => {
                write!(f, "(")?;
                write_joined(f, items.iter(), readably)?;
                write!(f, ")")
            }
            MaltVal::Vector(items) => {
                write!(f, "[")?;
                write_joined(f, items.iter(), readably)?;
                write!(f, "]")
            }
            MaltVal::Map(map) => {
                write!(f, "{{")?;
                write_joined(f, map.iter().flat_map(|(k, v)| [k, v]), readably)?;
                write!(f, "}}")
            }
            MaltVal::Fn(_) | MaltVal::NativeFn(_) => write!(f, "#<function>"),
            MaltVal::Comment(_) => Ok(()),
        }
    }
}

fn write_joined<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'a MaltVal>,
    readably: bool,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        item.write_form(f, readably)?;
    }
    Ok(())
}

// ============================================================================
// Display implementation
// ============================================================================

/// Readable form: strings keep their quotes.
impl fmt::Display for MaltVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_form(f, true)
    }
}

impl fmt::Debug for MaltVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Non-readable rendering returned by [`MaltVal::display_raw`].
pub struct Raw<'a>(&'a MaltVal);

impl fmt::Display for Raw<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_form(f, false)
    }
}

// ============================================================================
// Equality and ordering (for use as map keys)
// ============================================================================

impl PartialEq for MaltVal {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (MaltVal::Nil, MaltVal::Nil) => true,
            (MaltVal::Bool(a), MaltVal::Bool(b)) => a == b,
            (MaltVal::Number(a), MaltVal::Number(b)) => a == b,
            (MaltVal::String(a), MaltVal::String(b)) => a == b,
            (MaltVal::Symbol(a), MaltVal::Symbol(b)) => a == b,
            (MaltVal::Keyword(a), MaltVal::Keyword(b)) => a == b,
            (
                MaltVal::List(a) | MaltVal::Vector(a),
                MaltVal::List(b) | MaltVal::Vector(b),
            ) => a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y),
            (MaltVal::Map(a), MaltVal::Map(b)) => a == b,
            (MaltVal::Fn(a), MaltVal::Fn(b)) => Rc::ptr_eq(a, b),
            (MaltVal::NativeFn(a), MaltVal::NativeFn(b)) => Rc::ptr_eq(a, b),
            (MaltVal::Comment(a), MaltVal::Comment(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for MaltVal {}

impl PartialOrd for MaltVal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MaltVal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;

        let ta = self.type_rank();
        let tb = other.type_rank();
        if ta != tb {
            return ta.cmp(&tb);
        }

        match (self, other) {
            (MaltVal::Bool(a), MaltVal::Bool(b)) => a.cmp(b),
            (MaltVal::Number(a), MaltVal::Number(b)) => a.cmp(b),
            (MaltVal::String(a), MaltVal::String(b)) => a.cmp(b),
            (MaltVal::Symbol(a), MaltVal::Symbol(b)) => a.cmp(b),
            (MaltVal::Keyword(a), MaltVal::Keyword(b)) => a.cmp(b),
            (
                MaltVal::List(a) | MaltVal::Vector(a),
                MaltVal::List(b) | MaltVal::Vector(b),
            ) => a.iter().cmp(b.iter()),
            (MaltVal::Map(a), MaltVal::Map(b)) => a.iter().cmp(b.iter()),
            (MaltVal::Fn(a), MaltVal::Fn(b)) => {
                (Rc::as_ptr(a) as usize).cmp(&(Rc::as_ptr(b) as usize))
            }
            (MaltVal::NativeFn(a), MaltVal::NativeFn(b)) => {
                (Rc::as_ptr(a) as usize).cmp(&(Rc::as_ptr(b) as usize))
            }
            (MaltVal::Comment(a), MaltVal::Comment(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl Hash for MaltVal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // The rank, not the discriminant, so List and Vector hash alike.
        self.type_rank().hash(state);
        match self {
            MaltVal::Nil => {}
            MaltVal::Bool(b) => b.hash(state),
            MaltVal::Number(n) => n.hash(state),
            MaltVal::String(s) => s.hash(state),
            MaltVal::Symbol(sym) => sym.hash(state),
            MaltVal::Keyword(kw) => kw.hash(state),
            MaltVal::List(items) | MaltVal::Vector(items) => {
                items.len().hash(state);
                for item in items.iter() {
                    item.hash(state);
                }
            }
            MaltVal::Map(map) => {
                map.len().hash(state);
                for (k, v) in map.iter() {
                    k.hash(state);
                    v.hash(state);
                }
            }
            MaltVal::Fn(f) => (Rc::as_ptr(f) as usize).hash(state),
            MaltVal::NativeFn(f) => (Rc::as_ptr(f) as usize).hash(state),
            MaltVal::Comment(text) => text.hash(state),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
