// malt-parser - Reader for malt
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Recursive descent reader for malt source code.
//!
//! Walks the token sequence produced by the [`Lexer`] and builds `MaltVal`
//! trees. Atoms are classified here, in a fixed order: `nil`, booleans,
//! integers, keywords, strings, and finally symbols as the fallback.

use thiserror::Error;

use crate::lexer::{Lexer, Token};
use crate::value::{MapArityError, MaltVal};

/// Reader error, with the position of the offending token where known.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("unexpected end of input: '{open}' opened at {line}:{column} was never closed")]
    UnclosedSequence {
        open: char,
        line: usize,
        column: usize,
    },

    #[error("mismatched delimiter at {line}:{column}: expected '{expected}', found '{found}'")]
    MismatchedDelimiter {
        expected: char,
        found: String,
        line: usize,
        column: usize,
    },

    #[error("unbalanced delimiter '{found}' at {line}:{column}")]
    UnexpectedClose {
        found: String,
        line: usize,
        column: usize,
    },

    #[error("unterminated string at {line}:{column}: {token}")]
    UnterminatedString {
        token: String,
        line: usize,
        column: usize,
    },

    #[error(transparent)]
    MapArity(#[from] MapArityError),
}

/// The three bracketed sequence kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    Paren,
    Bracket,
    Brace,
}

impl Delimiter {
    fn from_open(token: &str) -> Option<Self> {
        match token {
            "(" => Some(Delimiter::Paren),
            "[" => Some(Delimiter::Bracket),
            "{" => Some(Delimiter::Brace),
            _ => None,
        }
    }

    fn is_close(token: &str) -> bool {
        matches!(token, ")" | "]" | "}")
    }

    fn open(self) -> char {
        match self {
            Delimiter::Paren => '(',
            Delimiter::Bracket => '[',
            Delimiter::Brace => '{',
        }
    }

    fn close(self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Bracket => ']',
            Delimiter::Brace => '}',
        }
    }
}

/// A cursor over a token sequence.
pub struct Reader {
    tokens: Vec<Token>,
    position: usize,
}

impl Reader {
    /// Tokenize `source` and position the cursor at the first token.
    pub fn new(source: &str) -> Self {
        Reader::from_tokens(Lexer::new(source).tokenize())
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Reader {
            tokens,
            position: 0,
        }
    }

    /// True once every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Read the next form. A `;` comment reads as `MaltVal::Comment`.
    pub fn read_form(&mut self) -> Result<MaltVal, ParseError> {
        let token = self.peek()?;
        if token.is_comment() {
            let text = token.text.clone();
            self.position += 1;
            return Ok(MaltVal::Comment(text.into()));
        }
        if let Some(delimiter) = Delimiter::from_open(&token.text) {
            return self.read_sequence(delimiter);
        }
        if Delimiter::is_close(&token.text) {
            return Err(ParseError::UnexpectedClose {
                found: token.text.clone(),
                line: token.line,
                column: token.column,
            });
        }
        let token = self.advance()?;
        read_atom(&token)
    }

    // ========================================================================
    // Internal reading methods
    // ========================================================================

    /// Peeking past the end is how unbalanced input shows up.
    fn peek(&self) -> Result<&Token, ParseError> {
        self.tokens
            .get(self.position)
            .ok_or(ParseError::UnexpectedEof)
    }

    fn advance(&mut self) -> Result<Token, ParseError> {
        let token = self.peek()?.clone();
        self.position += 1;
        Ok(token)
    }

    fn read_sequence(&mut self, delimiter: Delimiter) -> Result<MaltVal, ParseError> {
        let open = self.advance()?;
        if Delimiter::from_open(&open.text) != Some(delimiter) {
            return Err(ParseError::MismatchedDelimiter {
                expected: delimiter.open(),
                found: open.text,
                line: open.line,
                column: open.column,
            });
        }

        let mut elements = Vec::new();
        loop {
            let next = match self.peek() {
                Ok(token) => token,
                Err(_) => {
                    return Err(ParseError::UnclosedSequence {
                        open: delimiter.open(),
                        line: open.line,
                        column: open.column,
                    });
                }
            };

            if Delimiter::is_close(&next.text) {
                if next.text.starts_with(delimiter.close()) {
                    self.position += 1;
                    break;
                }
                return Err(ParseError::MismatchedDelimiter {
                    expected: delimiter.close(),
                    found: next.text.clone(),
                    line: next.line,
                    column: next.column,
                });
            }

            match self.read_form()? {
                MaltVal::Comment(_) => {}
                form => elements.push(form),
            }
        }

        Ok(match delimiter {
            Delimiter::Paren => MaltVal::list(elements),
            Delimiter::Bracket => MaltVal::vector(elements),
            Delimiter::Brace => MaltVal::map_from_elements(elements)?,
        })
    }
}

// ============================================================================
// Atom coercion
// ============================================================================

fn read_atom(token: &Token) -> Result<MaltVal, ParseError> {
    let text = token.text.as_str();

    if text == "nil" {
        return Ok(MaltVal::Nil);
    }
    if let Some(b) = coerce_bool(text) {
        return Ok(MaltVal::Bool(b));
    }
    if let Ok(n) = text.parse::<i64>() {
        return Ok(MaltVal::Number(n));
    }
    if let Some(name) = text.strip_prefix(':') {
        return Ok(MaltVal::keyword(name));
    }
    if text.starts_with('"') {
        return match string_contents(text) {
            Some(contents) => Ok(MaltVal::string(contents)),
            None => Err(ParseError::UnterminatedString {
                token: text.to_string(),
                line: token.line,
                column: token.column,
            }),
        };
    }
    Ok(MaltVal::symbol(text))
}

/// Strict match only: `True` and `FALSE` are symbols.
fn coerce_bool(text: &str) -> Option<bool> {
    match text {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// The text between the quotes, or `None` if the closing quote is missing or
/// escaped.
fn string_contents(text: &str) -> Option<&str> {
    if text.len() < 2 || !text.ends_with('"') {
        return None;
    }
    let inner = &text[1..text.len() - 1];
    let trailing_backslashes = inner.chars().rev().take_while(|&c| c == '\\').count();
    if trailing_backslashes % 2 == 1 {
        return None;
    }
    Some(inner)
}

// ============================================================================
// Convenience entry points
// ============================================================================

/// Read the first form of `source`. Any tokens after it are ignored.
pub fn read_str(source: &str) -> Result<MaltVal, ParseError> {
    Reader::new(source).read_form()
}

/// Read every top-level form of `source`, comments included.
pub fn read_all(source: &str) -> Result<Vec<MaltVal>, ParseError> {
    let mut reader = Reader::new(source);
    let mut forms = Vec::new();
    while !reader.is_at_end() {
        forms.push(reader.read_form()?);
    }
    Ok(forms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(source: &str) -> MaltVal {
        read_str(source).unwrap()
    }

    #[test]
    fn test_atoms() {
        assert_eq!(read("nil"), MaltVal::Nil);
        assert_eq!(read("true"), MaltVal::Bool(true));
        assert_eq!(read("false"), MaltVal::Bool(false));
        assert_eq!(read("42"), MaltVal::Number(42));
        assert_eq!(read("-7"), MaltVal::Number(-7));
        assert_eq!(read(":key"), MaltVal::keyword("key"));
        assert_eq!(read("\"hi\""), MaltVal::string("hi"));
        assert_eq!(read("foo"), MaltVal::symbol("foo"));
    }

    #[test]
    fn test_boolean_is_strict() {
        assert_eq!(read("True"), MaltVal::symbol("True"));
        assert_eq!(read("nil?"), MaltVal::symbol("nil?"));
    }

    #[test]
    fn test_sign_alone_is_symbol() {
        assert_eq!(read("-"), MaltVal::symbol("-"));
        assert_eq!(read("+"), MaltVal::symbol("+"));
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(read("\"\""), MaltVal::string(""));
    }

    #[test]
    fn test_string_keeps_escapes() {
        assert_eq!(read(r#""a\"b""#), MaltVal::string(r#"a\"b"#));
        assert_eq!(read(r#""a\\""#), MaltVal::string(r"a\\"));
    }

    #[test]
    fn test_unterminated_strings() {
        for source in [r#"""#, r#""abc"#, r#""abc\""#] {
            assert!(
                matches!(
                    read_str(source),
                    Err(ParseError::UnterminatedString { .. })
                ),
                "{source}"
            );
        }
    }

    #[test]
    fn test_list_and_vector() {
        assert_eq!(
            read("(+ 1 2)"),
            MaltVal::list(vec![
                MaltVal::symbol("+"),
                MaltVal::number(1),
                MaltVal::number(2)
            ])
        );
        assert!(matches!(read("[1 [2]]"), MaltVal::Vector(_)));
        assert!(matches!(read("()"), MaltVal::List(items) if items.is_empty()));
    }

    #[test]
    fn test_map() {
        assert_eq!(
            read("{:a 1 :b 2}"),
            MaltVal::map(vec![
                (MaltVal::keyword("a"), MaltVal::number(1)),
                (MaltVal::keyword("b"), MaltVal::number(2)),
            ])
        );
    }

    #[test]
    fn test_odd_map_is_map_arity_error() {
        assert_eq!(
            read_str("{:a 1 :b}"),
            Err(ParseError::MapArity(MapArityError { count: 3 }))
        );
    }

    #[test]
    fn test_comment_form() {
        assert!(matches!(read("; note"), MaltVal::Comment(_)));
    }

    #[test]
    fn test_comments_dropped_inside_sequences() {
        assert_eq!(
            read("(1 ; one\n 2)"),
            MaltVal::list(vec![MaltVal::number(1), MaltVal::number(2)])
        );
    }

    #[test]
    fn test_reader_macros_read_as_symbols() {
        assert_eq!(read("'"), MaltVal::symbol("'"));
        assert_eq!(read("~@"), MaltVal::symbol("~@"));
    }

    #[test]
    fn test_unclosed_is_distinct_from_mismatch() {
        assert!(matches!(
            read_str("(1 2"),
            Err(ParseError::UnclosedSequence { open: '(', .. })
        ));
        assert!(matches!(
            read_str("(1 2]"),
            Err(ParseError::MismatchedDelimiter { expected: ')', .. })
        ));
    }

    #[test]
    fn test_stray_close() {
        assert!(matches!(
            read_str(")"),
            Err(ParseError::UnexpectedClose { .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(read_str(""), Err(ParseError::UnexpectedEof));
        assert_eq!(read_str("  ,, "), Err(ParseError::UnexpectedEof));
    }

    #[test]
    fn test_first_form_only() {
        assert_eq!(read("1 2 3"), MaltVal::number(1));
    }

    #[test]
    fn test_read_all() {
        let forms = read_all("(def! a 1) ; c\n a").unwrap();
        assert_eq!(forms.len(), 3);
        assert!(matches!(forms[1], MaltVal::Comment(_)));
        assert_eq!(forms[2], MaltVal::symbol("a"));
    }

    #[test]
    fn test_error_positions() {
        let err = read_str("(a\n  \"b").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnterminatedString {
                token: "\"b".to_string(),
                line: 2,
                column: 3,
            }
        );
        assert_eq!(
            err.to_string(),
            "unterminated string at 2:3: \"b"
        );
    }
}
