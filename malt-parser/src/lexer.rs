// malt-parser - Lexer for malt
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Lexer (tokeniser) for malt source code.
//!
//! Splits a source string into raw token strings. Tokens are not classified
//! here: deciding whether `42` is a number or `:a` a keyword happens in the
//! reader. The lexer never fails. An unterminated string comes out as a
//! single trailing token and is rejected when the reader coerces it.

use std::iter::Peekable;
use std::str::Chars;

/// A raw token together with its 1-based starting position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    /// True for `;` comments.
    pub fn is_comment(&self) -> bool {
        self.text.starts_with(';')
    }
}

/// The lexer walks the source one character at a time.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            chars: source.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Current line (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Current column (1-based).
    pub fn column(&self) -> usize {
        self.column
    }

    /// Consume the whole source.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    /// Produce the next token, or `None` once only whitespace remains.
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let line = self.line;
        let column = self.column;
        let c = self.peek()?;
        let mut text = String::new();

        match c {
            '~' => {
                self.push_next(&mut text);
                if self.peek() == Some('@') {
                    self.push_next(&mut text);
                }
            }
            c if is_single_char_token(c) => self.push_next(&mut text),
            '"' => self.read_string(&mut text),
            ';' => {
                while let Some(c) = self.peek() {
                    if c == '\n' || c == '\r' {
                        break;
                    }
                    self.push_next(&mut text);
                }
            }
            _ => {
                while let Some(c) = self.peek() {
                    if ends_atom(c) {
                        break;
                    }
                    self.push_next(&mut text);
                }
            }
        }

        Some(Token { text, line, column })
    }

    // ========================================================================
    // Character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn push_next(&mut self, text: &mut String) {
        if let Some(c) = self.advance() {
            text.push(c);
        }
    }

    /// Commas count as whitespace.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == ',' {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Read a string literal verbatim, escapes included. Stops after the
    /// closing quote or at end of input.
    fn read_string(&mut self, text: &mut String) {
        self.push_next(text);
        while let Some(c) = self.advance() {
            text.push(c);
            match c {
                '\\' => self.push_next(text),
                '"' => return,
                _ => {}
            }
        }
    }
}

/// Structural characters and reader-macro prefixes that form a token alone.
fn is_single_char_token(c: char) -> bool {
    matches!(
        c,
        '(' | ')' | '[' | ']' | '{' | '}' | '\'' | '`' | '^' | '@'
    )
}

/// Characters that terminate a symbol/number/keyword run. `~`, `^` and `@`
/// are not among them.
fn ends_atom(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '(' | ')' | '[' | ']' | '{' | '}' | '\'' | '"' | '`' | ',' | ';'
        )
}

/// Split `source` into token strings.
pub fn tokenize(source: &str) -> Vec<String> {
    Lexer::new(source)
        .tokenize()
        .into_iter()
        .map(|token| token.text)
        .collect()
}
