//! Operator lexing.
//!
//! This module handles the arithmetic and bitwise operators that may appear
//! in operand expressions. A `+` or `-` directly before a digit is a sign
//! and belongs to the integer literal instead.

use super::State;
use crate::error::{Found, LexError};
use crate::token::TokenKind;
use crate::unicode::is_digit;
use crate::Lexer;

impl<'src> Lexer<'src, '_> {
    /// Lexes a sign or an additive operator. The `+` or `-` has been consumed.
    ///
    /// Handles: `+`, `-`, and the sign of `-1` / `+7`
    pub(crate) fn lex_sign_or_operator(&mut self, sign: char) -> Option<State> {
        if self.cursor.peek().is_some_and(is_digit) {
            return Some(State::IntLit);
        }
        let kind = if sign == '+' {
            TokenKind::Add
        } else {
            TokenKind::Sub
        };
        self.emit_then_line(kind)
    }

    /// Lexes a multiplicative, bitwise or shift operator. Its first
    /// character has been consumed.
    ///
    /// Handles: `*`, `/`, `%`, `&`, `|`, `^`, `<<`, `>>`
    pub(crate) fn lex_operator(&mut self, first: char) -> Option<State> {
        let kind = match first {
            '*' => TokenKind::Mul,
            '/' => TokenKind::Div,
            '%' => TokenKind::Mod,
            '&' => TokenKind::And,
            '|' => TokenKind::Or,
            '^' => TokenKind::Xor,
            '<' => return self.lex_shift('<', TokenKind::Shl),
            '>' => return self.lex_shift('>', TokenKind::Shr),
            c => return self.errorf(LexError::UnexpectedChar(c)),
        };
        self.emit_then_line(kind)
    }

    /// Lexes the second character of a shift operator.
    fn lex_shift(&mut self, second: char, kind: TokenKind) -> Option<State> {
        if self.cursor.accept_fn(|c| c == second) {
            return self.emit_then_line(kind);
        }
        let found = self.cursor.peek();
        self.errorf(LexError::IncompleteShift {
            op: kind.name(),
            found: Found(found),
        })
    }
}
