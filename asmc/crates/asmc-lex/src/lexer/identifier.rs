//! Identifier lexing.
//!
//! Labels, mnemonics, registers (`$t0`) and directives (`.text`) are all
//! lexed as identifiers; telling them apart is up to the parser.

use super::State;
use crate::error::{Found, LexError};
use crate::token::TokenKind;
use crate::unicode::{is_letter, is_letter_or_digit};
use crate::Lexer;

impl<'src> Lexer<'src, '_> {
    /// Lexes an identifier. A `.` or `$` prefix may have been consumed.
    ///
    /// The first character after any prefix must be a letter or underscore;
    /// letters, digits and underscores follow.
    pub(crate) fn lex_ident(&mut self) -> Option<State> {
        if !self.cursor.accept_fn(is_letter) {
            let found = self.cursor.next_char();
            return self.errorf(LexError::ExpectedIdentStart(Found(found)));
        }
        self.cursor.accept_run_fn(is_letter_or_digit);
        self.emit_then_line(TokenKind::Ident)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Token;
    use asmc_util::Handler;

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        let mut handler = Handler::new();
        crate::Lexer::new(source, &mut handler).run()
    }

    #[test]
    fn test_simple_identifier() {
        let tokens = lex_all("addi");
        assert_eq!(tokens[0], Token::new(TokenKind::Ident, "addi"));
    }

    #[test]
    fn test_identifier_with_underscore_and_digits() {
        let tokens = lex_all("_start loop_2");
        assert_eq!(tokens[0].text(), "_start");
        assert_eq!(tokens[1].text(), "loop_2");
    }

    #[test]
    fn test_register_and_directive_prefixes() {
        let tokens = lex_all("$zero .rdata");
        assert_eq!(tokens[0], Token::new(TokenKind::Ident, "$zero"));
        assert_eq!(tokens[1], Token::new(TokenKind::Ident, ".rdata"));
    }

    #[test]
    fn test_unicode_identifier() {
        let tokens = lex_all("étiquette:");
        assert_eq!(tokens[0], Token::new(TokenKind::Ident, "étiquette"));
        assert_eq!(tokens[1].kind, TokenKind::Colon);
    }

    #[test]
    fn test_prefix_needs_letter() {
        let tokens = lex_all("$0");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(tokens[0].text(), "expected letter or underscore, found '0'");
    }

    #[test]
    fn test_prefix_at_end_of_input() {
        let tokens = lex_all(".");
        assert_eq!(tokens[0].text(), "expected letter or underscore, found end of input");
    }

    #[test]
    fn test_ident_state_directly() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("9lives", &mut handler);
        assert_eq!(lexer.step(State::Ident), None);
        assert_eq!(lexer.next_token().map(|t| t.kind), Some(TokenKind::Error));
    }
}
