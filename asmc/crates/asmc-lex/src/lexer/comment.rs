//! Comment lexing.
//!
//! Line comments run from `;` to the end of the line. They are emitted as
//! tokens; the terminating newline is left for the `Line` state.

use super::State;
use crate::token::TokenKind;
use crate::Lexer;

impl<'src> Lexer<'src, '_> {
    /// Lexes a line comment. The `;` has been consumed.
    pub(crate) fn lex_line_comment(&mut self) -> Option<State> {
        loop {
            match self.cursor.next_char() {
                None => {
                    // No `Line` state runs after this, so end the input here.
                    self.emit(TokenKind::LineComment);
                    return self.emit_eof();
                },
                Some('\n') => {
                    self.cursor.backup();
                    return self.emit_then_line(TokenKind::LineComment);
                },
                Some(_) => {},
            }
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

    #[test]
    fn test_comment_then_eof() {
        assert_eq!(
            lex_all("; done"),
            vec![
                Token::new(TokenKind::LineComment, "; done"),
                Token::new(TokenKind::Eof, "")
            ]
        );
    }

    #[test]
    fn test_comment_leaves_newline() {
        let tokens = lex_all("nop ; sys_write\nret");
        assert_eq!(tokens[1], Token::new(TokenKind::LineComment, "; sys_write"));
        assert_eq!(tokens[2], Token::new(TokenKind::Newline, "\n"));
        assert_eq!(tokens[3].text(), "ret");
    }

    #[test]
    fn test_comment_keeps_quotes_and_semicolons() {
        let tokens = lex_all("; write(1, \"Hi\\n\", 3) ; again\n");
        assert_eq!(tokens[0].text(), "; write(1, \"Hi\\n\", 3) ; again");
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_empty_comment() {
        let tokens = lex_all(";");
        assert_eq!(tokens[0], Token::new(TokenKind::LineComment, ";"));
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }
}
