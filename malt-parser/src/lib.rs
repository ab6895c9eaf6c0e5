// malt-parser - Tokenizer, reader and value model for malt
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # malt-parser
//!
//! Lexer, reader and value model for the malt language.
//! Produces `MaltVal` trees from source code strings.

pub mod keyword;
pub mod lexer;
pub mod reader;
pub mod symbol;
pub mod value;

pub use im::{OrdMap, Vector};
pub use keyword::Keyword;
pub use lexer::{Lexer, Token, tokenize};
pub use reader::{ParseError, Reader, read_all, read_str};
pub use symbol::Symbol;
pub use value::{MaltFn, MaltNativeFn, MaltVal, MapArityError, Raw};
