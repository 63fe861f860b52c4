//! Lexical front end for the Lox scripting language.
//!
//! ```
//! use lox_scan::{scan, TokenKind};
//!
//! let (tokens, diagnostics) = scan("var age = 15;");
//! assert!(!diagnostics.has_errors());
//! assert_eq!(TokenKind::Var, tokens[0].kind());
//! assert_eq!(TokenKind::EndOfFile, tokens.last().unwrap().kind());
//! ```

pub mod diagnostics;
pub mod error;
pub mod lox;
pub mod scanner;
pub mod token;

pub use crate::{
    diagnostics::{Diagnostic, Diagnostics, Severity},
    error::{Error, ErrorKind, LexicalError, Result},
    scanner::Scanner,
    token::{Literal, Token, TokenKind},
};

/// Scans `source` with a fresh diagnostics collector.
pub fn scan(source: &str) -> (Vec<Token>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let tokens = Scanner::new(source).scan_tokens(&mut diagnostics);
    (tokens, diagnostics)
}
