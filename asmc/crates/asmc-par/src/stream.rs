//! Token stream with single-step lookahead and rewind.

use asmc_lex::{scan, Token, TokenKind};

/// A cursor over a scanned token sequence.
///
/// The sequence must end with its terminal token ([`TokenKind::Eof`] or
/// [`TokenKind::Error`]); [`scan`] always produces one.
#[derive(Clone, Debug)]
pub struct TokenStream<'src> {
    /// The input tokens.
    tokens: Vec<Token<'src>>,

    /// Index of the next token to read.
    pos: usize,

    /// Whether the last operation was a read that `backup` may undo.
    can_backup: bool,
}

impl<'src> TokenStream<'src> {
    /// Wraps a token sequence.
    ///
    /// # Panics
    ///
    /// Panics if `tokens` does not end with a terminal token.
    pub fn new(tokens: Vec<Token<'src>>) -> Self {
        assert!(
            tokens.last().is_some_and(Token::is_terminal),
            "TokenStream::new: token sequence must end with EOF or an error token"
        );
        Self {
            tokens,
            pos: 0,
            can_backup: false,
        }
    }

    /// Scans `source` and wraps the result.
    pub fn from_source(source: &'src str) -> Self {
        Self::new(scan(source))
    }

    /// Consumes and returns the next token.
    ///
    /// # Panics
    ///
    /// Panics if the terminal token has already been consumed.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> &Token<'src> {
        let Some(token) = self.tokens.get(self.pos) else {
            panic!("TokenStream::next: read past the terminal token");
        };
        self.pos += 1;
        self.can_backup = true;
        token
    }

    /// Returns the next token without consuming it.
    ///
    /// A `backup` that was allowed before the peek is still allowed after it.
    ///
    /// # Panics
    ///
    /// Panics if the terminal token has already been consumed.
    pub fn peek(&mut self) -> &Token<'src> {
        let could_backup = self.can_backup;
        self.next();
        self.backup();
        self.can_backup = could_backup;
        &self.tokens[self.pos]
    }

    /// Steps back over the token returned by the last `next`.
    ///
    /// # Panics
    ///
    /// Panics if nothing has been consumed yet, or if the previous call
    /// was already a `backup`.
    pub fn backup(&mut self) {
        if self.pos == 0 {
            panic!("TokenStream::backup: no tokens have been consumed yet");
        }
        if !self.can_backup {
            panic!("TokenStream::backup: no matching call to next to undo");
        }
        self.pos -= 1;
        self.can_backup = false;
    }

    /// Consumes the next token if it has the given kind.
    pub fn accept(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.next();
            true
        } else {
            false
        }
    }

    /// Returns true if the next token is the terminal token, or if it has
    /// been consumed.
    pub fn is_at_end(&self) -> bool {
        self.tokens
            .get(self.pos)
            .map_or(true, |token| token.is_terminal())
    }

    /// Returns the index of the next token to read.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the tokens not yet read.
    pub fn remaining(&self) -> &[Token<'src>] {
        &self.tokens[self.pos..]
    }

    /// Consumes the stream and returns the underlying tokens.
    pub fn into_tokens(self) -> Vec<Token<'src>> {
        self.tokens
    }
}
