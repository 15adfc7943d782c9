//! String and character literal lexing.
//!
//! This module handles character literals, interpreted string literals,
//! raw string literals, and the escape sequences the first two share.
//! Escapes are validated, not decoded; the token text stays verbatim.

use super::State;
use crate::error::{Found, LexError};
use crate::token::TokenKind;
use crate::unicode::{HEX_DIGITS, OCTAL_DIGITS};
use crate::Lexer;

impl<'src> Lexer<'src, '_> {
    /// Lexes a character literal. The opening `'` has been consumed.
    ///
    /// Exactly one character or escape sequence must come before the
    /// closing quote.
    pub(crate) fn lex_char_lit(&mut self) -> Option<State> {
        if self.cursor.accept("\\") {
            if let Err(error) = self.consume_escape('\'') {
                return self.errorf(error);
            }
        } else {
            match self.cursor.next_char() {
                None => return self.errorf(LexError::CharLiteralEof),
                Some('\'') => return self.errorf(LexError::EmptyCharLiteral),
                Some('\n') => return self.errorf(LexError::CharLiteralNewline),
                Some(_) => {},
            }
        }
        if !self.cursor.accept("'") {
            return self.errorf(LexError::UnterminatedCharLiteral);
        }
        self.emit_then_line(TokenKind::Char)
    }

    /// Lexes a string literal. The opening `"` has been consumed.
    pub(crate) fn lex_string_lit(&mut self) -> Option<State> {
        loop {
            match self.cursor.next_char() {
                None => return self.errorf(LexError::StringEof),
                Some('\n') => return self.errorf(LexError::StringNewline),
                Some('\\') => {
                    if let Err(error) = self.consume_escape('"') {
                        return self.errorf(error);
                    }
                },
                Some('"') => return self.emit_then_line(TokenKind::String),
                Some(_) => {},
            }
        }
    }

    /// Lexes a raw string literal. The opening backtick has been consumed.
    ///
    /// Raw strings don't process escape sequences and may span lines.
    pub(crate) fn lex_raw_string_lit(&mut self) -> Option<State> {
        loop {
            match self.cursor.next_char() {
                None => return self.errorf(LexError::RawStringEof),
                Some('`') => return self.emit_then_line(TokenKind::String),
                Some(_) => {},
            }
        }
    }

    /// Consumes an escape sequence. The backslash has been consumed.
    ///
    /// `quote` is the one quote character that may be escaped here: `'` in
    /// character literals and `"` in string literals.
    ///
    /// # Escape Forms
    ///
    /// - `\0`-`\3` followed by two octal digits
    /// - `\x` followed by two hexadecimal digits
    /// - `\a \b \f \n \r \t \v \\`
    /// - the contextual quote
    fn consume_escape(&mut self, quote: char) -> Result<(), LexError> {
        match self.cursor.next_char() {
            None => Err(LexError::EscapeEof),
            Some('0'..='3') => self.expect_two(OCTAL_DIGITS, LexError::NonOctalEscape),
            Some('x') => self.expect_two(HEX_DIGITS, LexError::NonHexEscape),
            Some('a' | 'b' | 'f' | 'n' | 'r' | 't' | 'v' | '\\') => Ok(()),
            Some(c) if c == quote => Ok(()),
            Some(c) => Err(LexError::UnknownEscape(c)),
        }
    }

    /// Consumes exactly two characters from `digits`.
    fn expect_two(
        &mut self,
        digits: &str,
        error: fn(Found) -> LexError,
    ) -> Result<(), LexError> {
        if self.cursor.accept(digits) && self.cursor.accept(digits) {
            Ok(())
        } else {
            Err(error(Found(self.cursor.next_char())))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use asmc_util::Handler;

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        let mut handler = Handler::new();
        crate::Lexer::new(source, &mut handler).run()
    }

    fn single(source: &str) -> Token<'_> {
        let tokens = lex_all(source);
        assert!(tokens.len() <= 2, "{:?}", tokens);
        tokens.into_iter().next().unwrap()
    }

    fn error_text(source: &str) -> String {
        let token = lex_all(source).pop().unwrap();
        assert_eq!(token.kind, TokenKind::Error, "{source:?}");
        token.text.into_owned()
    }

    #[test]
    fn test_char_literal() {
        assert_eq!(single("'!'"), Token::new(TokenKind::Char, "'!'"));
        assert_eq!(single("'é'"), Token::new(TokenKind::Char, "'é'"));
    }

    #[test]
    fn test_char_escapes() {
        for source in [r"'\x41'", r"'\101'", r"'\n'", r"'\\'", r"'\''"] {
            assert_eq!(single(source), Token::new(TokenKind::Char, source));
        }
    }

    #[test]
    fn test_char_literal_errors() {
        assert_eq!(error_text("'"), "unexpected end of input in character literal");
        assert_eq!(error_text("''"), "unexpected ' in character literal");
        assert_eq!(error_text("'\n'"), "unexpected newline in character literal");
        assert_eq!(error_text("'ab'"), "missing ' in character literal");
        assert_eq!(error_text("'a"), "missing ' in character literal");
    }

    #[test]
    fn test_double_quote_escape_only_in_strings() {
        assert_eq!(error_text(r#"'\"'"#), "unknown escape sequence: '\"'");
        assert_eq!(
            single(r#""say \"hi\"""#),
            Token::new(TokenKind::String, r#""say \"hi\"""#)
        );
        assert_eq!(error_text(r#""it\'s""#), "unknown escape sequence: '\\''");
    }

    #[test]
    fn test_escape_errors() {
        assert_eq!(error_text(r"'\9'"), "unknown escape sequence: '9'");
        assert_eq!(error_text(r#""\k""#), "unknown escape sequence: 'k'");
        assert_eq!(
            error_text(r"'\18'"),
            "non-octal character in escape sequence: '8'"
        );
        assert_eq!(
            error_text(r"'\x4g'"),
            "non-hex character in escape sequence: 'g'"
        );
        assert_eq!(
            error_text(r#""\x"#),
            "non-hex character in escape sequence: end of input"
        );
        assert_eq!(
            error_text("\"\\"),
            "unexpected end of input after backslash escape character"
        );
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(
            single(r#""Hello world\n""#),
            Token::new(TokenKind::String, r#""Hello world\n""#)
        );
        assert_eq!(single(r#""""#), Token::new(TokenKind::String, r#""""#));
    }

    #[test]
    fn test_string_errors() {
        assert_eq!(error_text("\"abc"), "unexpected end of input in string literal");
        assert_eq!(error_text("\"ab\ncd\""), "unexpected newline in string literal");
    }

    #[test]
    fn test_raw_string() {
        assert_eq!(
            single("`a\\k\nb`"),
            Token::new(TokenKind::String, "`a\\k\nb`")
        );
        assert_eq!(error_text("`open"), "unexpected end of input in raw string literal");
    }
}
