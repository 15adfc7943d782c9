//! Character cursor for traversing assembly source.
//!
//! This module provides the `Cursor` struct which tracks the span of the
//! token under construction (`start..pos`) and the width of the last
//! character read, so that exactly one read can be undone. It decodes UTF-8
//! correctly; positions are byte offsets.

/// A cursor over source text with one step of rewind.
///
/// Every [`next_char`](Cursor::next_char) records the byte width of the
/// character it consumed. [`backup`](Cursor::backup) undoes that read and
/// clears the width, so a second `backup` without an intervening read is a
/// bug in the caller and panics.
///
/// # Example
///
/// ```
/// use asmc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("li $v0");
/// assert_eq!(cursor.next_char(), Some('l'));
/// assert!(cursor.accept("i"));
/// assert_eq!(cursor.pending(), "li");
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Start of the token under construction (byte offset).
    start: usize,

    /// Next unread position (byte offset).
    pos: usize,

    /// Byte width of the character returned by the last `next_char`, or 0.
    width: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the beginning of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            pos: 0,
            width: 0,
        }
    }

    /// Consumes and returns the next character.
    ///
    /// Returns `None` at the end of the input; the recorded width is zero
    /// in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use asmc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("é");
    /// assert_eq!(cursor.next_char(), Some('é'));
    /// assert_eq!(cursor.pos(), 2);
    /// assert_eq!(cursor.next_char(), None);
    /// ```
    #[inline]
    pub fn next_char(&mut self) -> Option<char> {
        let Some(c) = self.source[self.pos..].chars().next() else {
            self.width = 0;
            return None;
        };
        self.width = c.len_utf8();
        self.pos += self.width;
        Some(c)
    }

    /// Steps back over the character returned by the last `next_char`.
    ///
    /// # Panics
    ///
    /// Panics if there is no read to undo: at the start, after a read at the
    /// end of input, or after a previous `backup`.
    #[inline]
    pub fn backup(&mut self) {
        if self.width == 0 {
            panic!("Cursor::backup: no matching call to next_char to undo");
        }
        self.pos -= self.width;
        self.width = 0;
    }

    /// Returns the next character without consuming it.
    ///
    /// # Example
    ///
    /// ```
    /// use asmc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("-1");
    /// cursor.next_char();
    /// assert_eq!(cursor.peek(), Some('1'));
    /// assert_eq!(cursor.pos(), 1);
    /// ```
    #[inline]
    pub fn peek(&mut self) -> Option<char> {
        let c = self.next_char()?;
        self.backup();
        Some(c)
    }

    /// Consumes the next character if it is one of `valid`.
    pub fn accept(&mut self, valid: &str) -> bool {
        self.accept_fn(|c| valid.contains(c))
    }

    /// Consumes the next character if it satisfies `is_valid`.
    pub fn accept_fn(&mut self, is_valid: impl Fn(char) -> bool) -> bool {
        match self.next_char() {
            None => false,
            Some(c) if is_valid(c) => true,
            Some(_) => {
                self.backup();
                false
            },
        }
    }

    /// Consumes a run of characters from `valid`.
    ///
    /// Returns true if at least one character was consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use asmc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("0177x");
    /// assert!(cursor.accept_run("01234567"));
    /// assert_eq!(cursor.pending(), "0177");
    /// assert!(!cursor.accept_run("01234567"));
    /// ```
    pub fn accept_run(&mut self, valid: &str) -> bool {
        self.accept_run_fn(|c| valid.contains(c))
    }

    /// Consumes a run of characters satisfying `is_valid`.
    ///
    /// Returns true if at least one character was consumed.
    pub fn accept_run_fn(&mut self, is_valid: impl Fn(char) -> bool) -> bool {
        let mut consumed = false;
        while self.accept_fn(&is_valid) {
            consumed = true;
        }
        consumed
    }

    /// Drops the pending text by moving `start` up to `pos`.
    #[inline]
    pub fn ignore(&mut self) {
        self.start = self.pos;
    }

    /// Returns the pending text and moves `start` up to `pos`.
    #[inline]
    pub fn take_pending(&mut self) -> &'a str {
        let text = &self.source[self.start..self.pos];
        self.start = self.pos;
        text
    }

    /// Returns the text between `start` and `pos`.
    #[inline]
    pub fn pending(&self) -> &'a str {
        &self.source[self.start..self.pos]
    }

    /// Returns the start of the token under construction.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the next unread byte position.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns true if the whole input has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Returns the unread part of the input.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Returns the full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }
}
