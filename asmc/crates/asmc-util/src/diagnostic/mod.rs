//! Diagnostics reported while scanning assembly source.
//!
//! A [`Diagnostic`] pairs a message with the [`Span`] it refers to; a
//! [`Handler`] collects them for the lifetime of one scan.
//!
//! # Examples
//!
//! ```
//! use asmc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use asmc_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '#' at beginning of token")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(9, 10, 1, 10))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// How serious a diagnostic is
///
/// # Examples
///
/// ```
/// use asmc_util::diagnostic::Level;
///
/// assert_eq!(Level::Error.to_string(), "error");
/// assert_eq!(Level::Help.as_str(), "help");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// An error that stops the input from being accepted
    Error,
    /// A warning that doesn't stop the input from being accepted
    Warning,
    /// Context attached to another diagnostic
    Note,
    /// A suggested fix
    Help,
}

impl Level {
    /// The lowercase name printed in diagnostic headers
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Help => "help",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message about a range of source text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity
    pub level: Level,
    /// Primary message, without location
    pub message: String,
    /// The text the message is about
    pub span: Span,
    /// Stable code, e.g. `E1002`
    pub code: Option<DiagnosticCode>,
    /// Extra context lines
    pub notes: Vec<String>,
    /// Suggested fixes
    pub helps: Vec<String>,
    /// Source lines rendered under the header
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a diagnostic with no code, notes, or snippets
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Shorthand for [`Level::Error`]
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Shorthand for [`Level::Warning`]
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Attach a code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Append a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Append a help line
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Append a snippet
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Render the diagnostic header, e.g. `error[E1001]: unexpected character`
    ///
    /// # Examples
    ///
    /// ```
    /// use asmc_util::diagnostic::{Diagnostic, DiagnosticCode};
    /// use asmc_util::Span;
    ///
    /// let diag = Diagnostic::error("missing digits in integer literal", Span::DUMMY)
    ///     .with_code(DiagnosticCode::E_LEXER_INVALID_NUMBER);
    /// assert_eq!(diag.header(), "error[E1003]: missing digits in integer literal");
    /// ```
    pub fn header(&self) -> String {
        match self.code {
            Some(code) => format!("{}[{}]: {}", self.level, code, self.message),
            None => format!("{}: {}", self.level, self.message),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header())?;
        for snippet in &self.snippets {
            f.write_str("\n")?;
            f.write_str(&snippet.format())?;
        }
        let trailers = self
            .notes
            .iter()
            .map(|note| (Level::Note, note))
            .chain(self.helps.iter().map(|help| (Level::Help, help)));
        for (level, text) in trailers {
            write!(f, "\n  = {}: {}", level, text)?;
        }
        Ok(())
    }
}

/// Collects the diagnostics of one scan
///
/// Emission takes `&self`, so a lexer can hold a shared reference while the
/// caller keeps ownership. A panicking handler turns the first error into a
/// panic, which makes unexpected diagnostics fail loudly in tests.
///
/// # Examples
///
/// ```
/// use asmc_util::diagnostic::{Diagnostic, Handler};
/// use asmc_util::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("unexpected newline in string literal", Span::DUMMY));
///
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
    panic_on_error: bool,
}

impl Handler {
    /// An empty, non-panicking handler
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty handler that panics when an error is emitted
    pub fn new_panicking() -> Self {
        Self {
            panic_on_error: true,
            ..Self::default()
        }
    }

    /// Record `diagnostic`
    ///
    /// # Panics
    ///
    /// Panics on an error-level diagnostic if the handler was created with
    /// [`Handler::new_panicking`].
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if self.panic_on_error && diagnostic.level == Level::Error {
            panic!("error emitted to a panicking handler: {}", diagnostic);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Start an error diagnostic at `span`
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Whether at least one error was recorded
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Number of errors recorded
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Number of warnings recorded
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// A copy of everything recorded so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Move everything recorded out, leaving the handler empty
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }

    /// Drop everything recorded
    pub fn clear(&self) {
        self.diagnostics.replace(Vec::new());
    }
}
