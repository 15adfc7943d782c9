//! asmc-lex - Lexical Scanner for Assembly Source
//!
//! This crate turns assembly source text into a flat sequence of typed
//! tokens for the parser. The scanner is a state machine that makes a
//! greedy, longest-match decision at every step and never looks back more
//! than one character.
//!
//! # Example Usage
//!
//! ```
//! use asmc_lex::{scan, TokenKind};
//!
//! let tokens = scan("ori $t0, $zero, 16\n");
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
//! assert_eq!(texts, ["ori", "$t0", ",", "$zero", ",", "16", "\n", ""]);
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```
//!
//! Errors are not recovered from: the first lexical error becomes the last
//! token.
//!
//! ```
//! use asmc_lex::{scan, TokenKind};
//!
//! let tokens = scan("db \"abc");
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[1].kind, TokenKind::Error);
//! assert_eq!(tokens[1].text(), "unexpected end of input in string literal");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - The state machine
//! - [`cursor`] - Character cursor with one step of rewind
//! - [`unicode`] - Character classes and digit sets
//! - [`error`] - Lexical error types
//!
//! # Tokens
//!
//! - **Identifiers**: `mov`, `_start`, `$t0`, `.text`
//! - **Integers**: `42`, `-1`, `0x80`, `0b101`, `017`
//! - **Characters**: `'!'`, `'\n'`, `'\x41'`
//! - **Strings**: `"Hello world"`, and raw strings in backticks
//! - **Punctuation**: `:`, `,`, newline
//! - **Operators**: `+ - * / % & | ^ << >>`
//! - **Comments**: `;` to the end of the line
//!
//! Spaces and tabs separate tokens and are discarded.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod unicode;

mod edge_cases;

use asmc_util::Handler;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{Found, LexError, ScanError};
pub use lexer::{Lexer, State};
pub use token::{Token, TokenKind};

/// Scans `input` and returns every token.
///
/// The result always ends with exactly one [`TokenKind::Eof`] or
/// [`TokenKind::Error`] token.
pub fn scan(input: &str) -> Vec<Token<'_>> {
    let mut handler = Handler::new();
    Lexer::new(input, &mut handler).run()
}

/// Scans `input`, separating success from a lexical error.
///
/// On success the tokens end with [`TokenKind::Eof`]. On failure the
/// [`ScanError`] holds the error, its span, and the tokens before it.
///
/// # Example
///
/// ```
/// use asmc_lex::{tokenize, LexError};
///
/// let err = tokenize("li $v0, 0x\n").unwrap_err();
/// assert_eq!(err.error, LexError::MissingDigits);
/// assert_eq!((err.span.line, err.span.column), (1, 9));
/// assert_eq!(err.tokens.len(), 3);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, ScanError<'_>> {
    let mut handler = Handler::new();
    let mut lexer = Lexer::new(input, &mut handler);
    let mut tokens: Vec<Token<'_>> = lexer.by_ref().collect();
    match lexer.take_error() {
        None => Ok(tokens),
        Some((error, span)) => {
            tokens.pop();
            Err(ScanError {
                error,
                span,
                tokens,
            })
        },
    }
}
