//! Lexical error types.
//!
//! A [`LexError`] halts the scan. Its `Display` output is the text of the
//! final [`TokenKind::Error`](crate::TokenKind::Error) token.

use std::fmt;

use asmc_util::{DiagnosticCode, Span};
use thiserror::Error;

use crate::token::Token;

/// What the scanner found where it expected something else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Found(pub Option<char>);

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(c) => write!(f, "{:?}", c),
            None => f.write_str("end of input"),
        }
    }
}

/// A lexical error in assembly source.
///
/// # Example
///
/// ```
/// use asmc_lex::error::{Found, LexError};
///
/// let err = LexError::NonHexEscape(Found(Some('g')));
/// assert_eq!(err.to_string(), "non-hex character in escape sequence: 'g'");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot begin any token
    #[error("unexpected character {0:?} at beginning of token")]
    UnexpectedChar(char),

    /// `.` or `$` not followed by a letter or underscore
    #[error("expected letter or underscore, found {0}")]
    ExpectedIdentStart(Found),

    /// An integer literal that does not start with a digit after its sign
    #[error("expected decimal digit, found {0}")]
    ExpectedDecimalDigit(Found),

    /// `0x` or `0b` with no digits after the prefix
    #[error("missing digits in integer literal")]
    MissingDigits,

    /// Input ended inside a character literal
    #[error("unexpected end of input in character literal")]
    CharLiteralEof,

    /// `''` holds no character
    #[error("unexpected ' in character literal")]
    EmptyCharLiteral,

    /// A raw newline inside a character literal
    #[error("unexpected newline in character literal")]
    CharLiteralNewline,

    /// A character literal not closed after its one character
    #[error("missing ' in character literal")]
    UnterminatedCharLiteral,

    /// Input ended inside a string literal
    #[error("unexpected end of input in string literal")]
    StringEof,

    /// A raw newline inside a string literal
    #[error("unexpected newline in string literal")]
    StringNewline,

    /// Input ended inside a raw string literal
    #[error("unexpected end of input in raw string literal")]
    RawStringEof,

    /// Input ended right after a backslash
    #[error("unexpected end of input after backslash escape character")]
    EscapeEof,

    /// `\0`-`\3` not followed by two octal digits
    #[error("non-octal character in escape sequence: {0}")]
    NonOctalEscape(Found),

    /// `\x` not followed by two hexadecimal digits
    #[error("non-hex character in escape sequence: {0}")]
    NonHexEscape(Found),

    /// A backslash followed by a character with no escape meaning here
    #[error("unknown escape sequence: {0:?}")]
    UnknownEscape(char),

    /// A single `<` or `>` where a shift operator was expected
    #[error("expected '{op}', found {found}")]
    IncompleteShift {
        /// The shift operator being lexed
        op: &'static str,
        /// What followed its first character
        found: Found,
    },
}

impl LexError {
    /// The diagnostic code reported for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedChar(_)
            | LexError::ExpectedIdentStart(_)
            | LexError::IncompleteShift { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::ExpectedDecimalDigit(_) | LexError::MissingDigits => {
                DiagnosticCode::E_LEXER_INVALID_NUMBER
            },
            LexError::CharLiteralEof
            | LexError::EmptyCharLiteral
            | LexError::CharLiteralNewline
            | LexError::UnterminatedCharLiteral => DiagnosticCode::E_LEXER_INVALID_CHAR_LITERAL,
            LexError::StringEof | LexError::StringNewline => {
                DiagnosticCode::E_LEXER_UNTERMINATED_STRING
            },
            LexError::RawStringEof => DiagnosticCode::E_LEXER_UNTERMINATED_RAW_STRING,
            LexError::EscapeEof
            | LexError::NonOctalEscape(_)
            | LexError::NonHexEscape(_)
            | LexError::UnknownEscape(_) => DiagnosticCode::E_LEXER_INVALID_ESCAPE,
        }
    }
}

/// A scan that halted on a lexical error.
///
/// Returned by [`tokenize`](crate::tokenize). Holds everything that was
/// scanned before the error as well as where the error happened.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{}:{}: {error}", .span.line, .span.column)]
pub struct ScanError<'src> {
    /// The error that halted the scan
    pub error: LexError,
    /// Byte range of the offending text with the line and column of its start
    pub span: Span,
    /// Tokens scanned before the error, without the error token
    pub tokens: Vec<Token<'src>>,
}
