//! Core lexer implementation.
//!
//! This module contains the Lexer struct, token emission, and the `Line`
//! state that every other state returns to.

use std::collections::VecDeque;

use asmc_util::{DiagnosticBuilder, Handler, Span};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::unicode::{is_digit, is_letter, is_space};

/// A state of the scanner.
///
/// Each state consumes zero or more characters, may emit tokens, and names
/// the state to run next. `None` halts the scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// Between tokens; the initial state
    Line,
    /// Identifier, possibly after a consumed `.` or `$`
    Ident,
    /// Integer literal, possibly after a consumed sign
    IntLit,
    /// Character literal after the opening `'`
    CharLit,
    /// String literal after the opening `"`
    StringLit,
    /// Raw string literal after the opening backtick
    RawStringLit,
    /// Line comment after the `;`
    LineComment,
}

/// Lexer for assembly source.
///
/// The lexer is a state machine over a [`Cursor`]. It is driven lazily
/// through [`Iterator`]: states run until at least one token is queued.
/// The sequence always ends with exactly one [`TokenKind::Eof`] or
/// [`TokenKind::Error`] token.
///
/// A lexical error is also reported to the [`Handler`] as a diagnostic
/// with a code and a span.
///
/// # Example
///
/// ```
/// use asmc_lex::{Lexer, TokenKind};
/// use asmc_util::Handler;
///
/// let mut handler = Handler::new();
/// let kinds: Vec<TokenKind> = Lexer::new("loop:\n", &mut handler)
///     .map(|tok| tok.kind)
///     .collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Ident, TokenKind::Colon, TokenKind::Newline, TokenKind::Eof]
/// );
/// ```
pub struct Lexer<'src, 'h> {
    /// Character cursor for source traversal.
    pub cursor: Cursor<'src>,

    /// Error handler for reporting lexical errors.
    handler: &'h mut Handler,

    /// State to run next, or `None` once the scan has halted.
    state: Option<State>,

    /// Tokens emitted but not yet handed out.
    queue: VecDeque<Token<'src>>,

    /// The error that halted the scan, with its span.
    error: Option<(LexError, Span)>,
}

impl<'src, 'h> Lexer<'src, 'h> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'src str, handler: &'h mut Handler) -> Self {
        debug!(len = source.len(), "scanning input");
        Self {
            cursor: Cursor::new(source),
            handler,
            state: Some(State::Line),
            queue: VecDeque::new(),
            error: None,
        }
    }

    /// Runs the scan to completion and returns every token.
    pub fn run(self) -> Vec<Token<'src>> {
        self.collect()
    }

    /// Returns the next token, running states as needed.
    ///
    /// Returns `None` after the terminal token has been returned.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        loop {
            if let Some(token) = self.queue.pop_front() {
                return Some(token);
            }
            let state = self.state.take()?;
            self.state = self.step(state);
        }
    }

    /// Runs a single state and returns the state to run next.
    pub fn step(&mut self, state: State) -> Option<State> {
        match state {
            State::Line => self.lex_line(),
            State::Ident => self.lex_ident(),
            State::IntLit => self.lex_int_lit(),
            State::CharLit => self.lex_char_lit(),
            State::StringLit => self.lex_string_lit(),
            State::RawStringLit => self.lex_raw_string_lit(),
            State::LineComment => self.lex_line_comment(),
        }
    }

    /// Returns true once the scan has halted and every token was handed out.
    pub fn is_finished(&self) -> bool {
        self.state.is_none() && self.queue.is_empty()
    }

    /// Returns the error that halted the scan, if any.
    pub fn error(&self) -> Option<&LexError> {
        self.error.as_ref().map(|(error, _)| error)
    }

    /// Takes the error that halted the scan together with its span.
    pub fn take_error(&mut self) -> Option<(LexError, Span)> {
        self.error.take()
    }

    /// Emits a token covering the pending text and advances `start`.
    pub(crate) fn emit(&mut self, kind: TokenKind) {
        let text = self.cursor.take_pending();
        trace!(%kind, text, "emit token");
        self.queue.push_back(Token::new(kind, text));
    }

    /// Emits a token covering the pending text and returns to `Line`.
    pub(crate) fn emit_then_line(&mut self, kind: TokenKind) -> Option<State> {
        self.emit(kind);
        Some(State::Line)
    }

    /// Emits an error token, reports the diagnostic, and halts the scan.
    pub(crate) fn errorf(&mut self, error: LexError) -> Option<State> {
        let span = self.pending_span();
        let message = error.to_string();
        debug!(error = %message, offset = span.start, "lexical error");

        DiagnosticBuilder::error(message.clone())
            .code(error.code())
            .span(span)
            .emit(self.handler);

        self.queue.push_back(Token::new(TokenKind::Error, message));
        self.error = Some((error, span));
        None
    }

    /// Emits the end-of-input token and halts the scan.
    ///
    /// # Panics
    ///
    /// Panics if input remains or pending text was never emitted; both mean
    /// a state forgot to consume or emit something.
    pub(crate) fn emit_eof(&mut self) -> Option<State> {
        assert!(
            self.cursor.is_at_end(),
            "Lexer::emit_eof: unexpected end of input; pos {} < len {}",
            self.cursor.pos(),
            self.cursor.source().len()
        );
        assert!(
            self.cursor.start() == self.cursor.pos(),
            "Lexer::emit_eof: pending input {:?} not handled",
            self.cursor.pending()
        );
        self.emit(TokenKind::Eof);
        None
    }

    /// Span of the pending text, with the line and column of its start.
    fn pending_span(&self) -> Span {
        Span::locate(self.cursor.source(), self.cursor.start(), self.cursor.pos())
    }

    /// Lexes between tokens. It is the initial state.
    fn lex_line(&mut self) -> Option<State> {
        loop {
            let Some(c) = self.cursor.next_char() else {
                return self.emit_eof();
            };
            match c {
                c if is_space(c) => self.cursor.ignore(),
                c if is_letter(c) => {
                    self.cursor.backup();
                    return Some(State::Ident);
                },
                // Local label, directive or register; the prefix is kept.
                '.' | '$' => return Some(State::Ident),
                ':' => return self.emit_then_line(TokenKind::Colon),
                c if is_digit(c) => {
                    self.cursor.backup();
                    return Some(State::IntLit);
                },
                '+' | '-' => return self.lex_sign_or_operator(c),
                '*' | '/' | '%' | '&' | '|' | '^' | '<' | '>' => return self.lex_operator(c),
                '\'' => return Some(State::CharLit),
                '"' => return Some(State::StringLit),
                '`' => return Some(State::RawStringLit),
                ',' => return self.emit_then_line(TokenKind::Comma),
                ';' => return Some(State::LineComment),
                '\n' => return self.emit_then_line(TokenKind::Newline),
                c => return self.errorf(LexError::UnexpectedChar(c)),
            }
        }
    }
}

impl<'src> Iterator for Lexer<'src, '_> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
