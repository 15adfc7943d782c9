//! Integer literal lexing.
//!
//! This module handles integer literals with an optional sign, in decimal,
//! hexadecimal (`0x`/`0X`), binary (`0b`) and octal (leading `0`). Only the
//! text is kept; the value is left to the consumer.

use super::State;
use crate::error::{Found, LexError};
use crate::token::TokenKind;
use crate::unicode::{BINARY_DIGITS, DECIMAL_DIGITS, HEX_DIGITS, OCTAL_DIGITS};
use crate::Lexer;

impl<'src> Lexer<'src, '_> {
    /// Lexes an integer literal. A sign may have been consumed.
    ///
    /// # Number Formats
    ///
    /// - Decimal: `42`, `-1`, `+7`
    /// - Hexadecimal: `0x80`, `0XfF`
    /// - Binary: `0b101`
    /// - Octal: `017`, and `0` on its own
    pub(crate) fn lex_int_lit(&mut self) -> Option<State> {
        self.cursor.accept("+-");

        let digits;
        // A leading `0` or `1`-`9` is already a complete literal.
        let mut complete = false;
        match self.cursor.next_char() {
            Some('0') => {
                if self.cursor.accept("xX") {
                    digits = HEX_DIGITS;
                } else if self.cursor.accept("b") {
                    digits = BINARY_DIGITS;
                } else {
                    digits = OCTAL_DIGITS;
                    complete = true;
                }
            },
            Some('1'..='9') => {
                digits = DECIMAL_DIGITS;
                complete = true;
            },
            found => return self.errorf(LexError::ExpectedDecimalDigit(Found(found))),
        }

        if !self.cursor.accept_run(digits) && !complete {
            return self.errorf(LexError::MissingDigits);
        }
        self.emit_then_line(TokenKind::Int)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use asmc_util::Handler;

    fn lex_num(source: &str) -> Vec<Token<'_>> {
        let mut handler = Handler::new();
        crate::Lexer::new(source, &mut handler).run()
    }

    fn int(text: &str) -> Token<'_> {
        Token::new(TokenKind::Int, text)
    }

    #[test]
    fn test_decimal_integer() {
        assert_eq!(lex_num("42")[0], int("42"));
        assert_eq!(lex_num("123")[0], int("123"));
    }

    #[test]
    fn test_hex_integer() {
        assert_eq!(lex_num("0x1F")[0], int("0x1F"));
        assert_eq!(lex_num("0Xab")[0], int("0Xab"));
    }

    #[test]
    fn test_binary_integer() {
        assert_eq!(lex_num("0b101")[0], int("0b101"));
    }

    #[test]
    fn test_octal_integer() {
        assert_eq!(lex_num("017")[0], int("017"));
        assert_eq!(lex_num("0")[0], int("0"));
    }

    #[test]
    fn test_signed_integer() {
        assert_eq!(lex_num("-1")[0], int("-1"));
        assert_eq!(lex_num("+0x10")[0], int("+0x10"));
    }

    #[test]
    fn test_octal_stops_at_non_octal_digit() {
        let tokens = lex_num("09");
        assert_eq!(tokens[0], int("0"));
        assert_eq!(tokens[1], int("9"));
    }

    #[test]
    fn test_uppercase_b_is_not_a_binary_prefix() {
        let tokens = lex_num("0B1");
        assert_eq!(tokens[0], int("0"));
        assert_eq!(tokens[1], Token::new(TokenKind::Ident, "B1"));
    }

    #[test]
    fn test_missing_digits_after_prefix() {
        for source in ["0x", "0xg", "0b", "0b2"] {
            let tokens = lex_num(source);
            assert_eq!(tokens.len(), 1, "{source}");
            assert_eq!(tokens[0].kind, TokenKind::Error);
            assert_eq!(tokens[0].text(), "missing digits in integer literal");
        }
    }

    #[test]
    fn test_int_state_without_digit() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("-x", &mut handler);
        assert_eq!(lexer.step(super::State::IntLit), None);
        let token = lexer.next_token().unwrap();
        assert_eq!(token.text(), "expected decimal digit, found 'x'");
    }
}
