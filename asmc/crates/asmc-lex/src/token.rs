//! Token definitions for assembly source.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact lexeme that produced it.
//! Lexeme text borrows from the scanned input; only the message carried by
//! an [`TokenKind::Error`] token is owned.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// The kind of a lexical token.
///
/// # Example
///
/// ```
/// use asmc_lex::TokenKind;
///
/// assert_eq!(TokenKind::Int.to_string(), "integer literal");
/// assert_eq!(TokenKind::Shl.to_string(), "<<");
/// assert!(TokenKind::Eof.is_terminal());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    // ===== Terminal =====
    /// A lexical error; the text holds the error message
    Error,
    /// End of input; the text is empty
    Eof,

    // ===== Lexemes =====
    /// Label, mnemonic, register or directive name (`loop`, `$t0`, `.text`)
    Ident,
    /// Label declaration colon
    Colon,
    /// Integer literal in base 2, 8, 10 or 16, sign included
    Int,
    /// Character literal, quotes included
    Char,
    /// Interpreted or raw string literal, delimiters included
    String,
    /// Operand separator
    Comma,
    /// `;` up to the end of the line
    LineComment,
    /// A single `\n`
    Newline,

    // ===== Operators =====
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `&`
    And,
    /// `|`
    Or,
    /// `^`
    Xor,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
}

impl TokenKind {
    /// Returns true for the kinds that end a token sequence.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, TokenKind::Error | TokenKind::Eof)
    }

    /// Returns true for the arithmetic and bitwise operator kinds.
    #[inline]
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Add
                | TokenKind::Sub
                | TokenKind::Mul
                | TokenKind::Div
                | TokenKind::Mod
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Xor
                | TokenKind::Shl
                | TokenKind::Shr
        )
    }

    /// Returns true for integer, character and string literals.
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(self, TokenKind::Int | TokenKind::Char | TokenKind::String)
    }

    /// The fixed name used for this kind in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Error => "error",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "identifier",
            TokenKind::Colon => ":",
            TokenKind::Int => "integer literal",
            TokenKind::Char => "character literal",
            TokenKind::String => "string literal",
            TokenKind::Comma => ",",
            TokenKind::LineComment => "line comment",
            TokenKind::Newline => "newline",
            TokenKind::Add => "+",
            TokenKind::Sub => "-",
            TokenKind::Mul => "*",
            TokenKind::Div => "/",
            TokenKind::Mod => "%",
            TokenKind::And => "&",
            TokenKind::Or => "|",
            TokenKind::Xor => "^",
            TokenKind::Shl => "<<",
            TokenKind::Shr => ">>",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexical token: its kind and the source text it covers.
///
/// # Example
///
/// ```
/// use asmc_lex::{Token, TokenKind};
///
/// let tok = Token::new(TokenKind::Ident, "$zero");
/// assert_eq!(tok.to_string(), r#"[identifier]: "$zero""#);
/// assert_eq!(Token::new(TokenKind::Eof, "").to_string(), "EOF");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token<'src> {
    /// Token kind
    pub kind: TokenKind,
    /// Lexeme text, or the message of an error token
    pub text: Cow<'src, str>,
}

impl<'src> Token<'src> {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<Cow<'src, str>>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Returns the token text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if this token ends a token sequence.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }

    /// Detaches the token from the lifetime of the scanned input.
    pub fn into_owned(self) -> Token<'static> {
        Token {
            kind: self.kind,
            text: Cow::Owned(self.text.into_owned()),
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "[{}]: {:?}", self.kind, self.text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::Error.to_string(), "error");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
        assert_eq!(TokenKind::Colon.to_string(), ":");
        assert_eq!(TokenKind::Comma.to_string(), ",");
        assert_eq!(TokenKind::LineComment.to_string(), "line comment");
        assert_eq!(TokenKind::Newline.to_string(), "newline");
        assert_eq!(TokenKind::Shr.to_string(), ">>");
    }

    #[test]
    fn test_kind_classes() {
        assert!(TokenKind::Error.is_terminal());
        assert!(!TokenKind::Newline.is_terminal());
        assert!(TokenKind::Xor.is_operator());
        assert!(!TokenKind::Comma.is_operator());
        assert!(TokenKind::Char.is_literal());
        assert!(!TokenKind::Ident.is_literal());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(
            Token::new(TokenKind::Newline, "\n").to_string(),
            r#"[newline]: "\n""#
        );
        assert_eq!(
            Token::new(TokenKind::String, "\".text\"").to_string(),
            r#"[string literal]: "\".text\"""#
        );
        assert_eq!(Token::new(TokenKind::Eof, "").to_string(), "EOF");
    }

    #[test]
    fn test_into_owned() {
        let source = String::from("16");
        let owned = Token::new(TokenKind::Int, source.as_str()).into_owned();
        drop(source);
        assert_eq!(owned.text(), "16");
        assert!(matches!(owned.text, Cow::Owned(_)));
    }
}
