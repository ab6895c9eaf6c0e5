// malt-core - Printing built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Printing operations: str, pr-str, prn, println
//!
//! The text each one produces is built by a pure formatter so it can be
//! checked without capturing stdout.

use malt_parser::MaltVal;

use crate::error::Result;

// ============================================================================
// Formatting
// ============================================================================

/// Text produced by `pr-str`: each readable form with backslashes, quotes and
/// newlines escaped, joined by a single space.
pub fn pr_str(args: &[MaltVal]) -> String {
    args.iter()
        .map(|arg| escape(&arg.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Line written by `prn`, without the trailing newline.
pub fn format_prn(args: &[MaltVal]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Line written by `println`, without the trailing newline.
pub fn format_println(args: &[MaltVal]) -> String {
    let joined = args
        .iter()
        .map(|arg| arg.display_raw().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    unescape(&joined)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    out
}

/// Turn `\"`, `\n` and `\\` into the characters they stand for. Any other
/// backslash is left alone.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            _ => {
                out.push('\\');
                continue;
            }
        }
        chars.next();
    }
    out
}

// ============================================================================
// Builtins
// ============================================================================

/// (str & args) - concatenate the raw forms of args
pub(crate) fn builtin_str(args: &[MaltVal]) -> Result<MaltVal> {
    let mut result = String::new();
    for arg in args {
        result.push_str(&arg.display_raw().to_string());
    }
    Ok(MaltVal::string(result))
}

/// (pr-str & args)
pub(crate) fn builtin_pr_str(args: &[MaltVal]) -> Result<MaltVal> {
    Ok(MaltVal::string(pr_str(args)))
}

/// (prn & args) - print readable forms, then a newline
pub(crate) fn builtin_prn(args: &[MaltVal]) -> Result<MaltVal> {
    println!("{}", format_prn(args));
    Ok(MaltVal::Nil)
}

/// (println & args) - print raw forms with escapes resolved, then a newline
pub(crate) fn builtin_println(args: &[MaltVal]) -> Result<MaltVal> {
    println!("{}", format_println(args));
    Ok(MaltVal::Nil)
}
