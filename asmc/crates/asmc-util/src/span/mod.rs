//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations,
//! including byte offsets, line/column information, and file identification.
//!
//! # Examples
//!
//! ```
//! use asmc_util::span::{FileId, Span};
//!
//! // `$t0` on the first line, starting at column 5
//! let span = Span::new(4, 7, 1, 5);
//! assert_eq!(span.len(), 3);
//!
//! let span = Span::with_file(4, 7, FileId(2), 1, 5);
//! assert_eq!(span.file_id, FileId(2));
//! ```

mod source_map;

pub use source_map::{SourceFile, SourceMap};

/// A unique identifier for a source file
///
/// FileIds are assigned sequentially as files are added to the [`SourceMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

impl FileId {
    /// A placeholder id for spans that are not tied to a source map
    pub const DUMMY: FileId = FileId(0);

    /// Get the raw index value
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl Default for FileId {
    #[inline]
    fn default() -> Self {
        Self::DUMMY
    }
}

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end)
/// - Line and column of `start` (1-based, column counted in characters)
/// - File ID (for multi-file runs)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
    /// File identifier
    pub file_id: FileId,
}

impl Span {
    /// Dummy span for diagnostics without a location
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
        file_id: FileId::DUMMY,
    };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use asmc_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id: FileId::DUMMY,
        }
    }

    /// Create a new span associated with a specific file
    #[inline]
    pub fn with_file(start: usize, end: usize, file_id: FileId, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id,
        }
    }

    /// Create a span over `text[start..end]`, resolving the line and column of
    /// `start` by scanning the text before it
    ///
    /// Gives the same position as [`SourceFile::span`] without building line
    /// tables. Positions past `u32::MAX` saturate.
    ///
    /// # Examples
    ///
    /// ```
    /// use asmc_util::span::Span;
    ///
    /// let span = Span::locate("loop:\n\tj loop\n", 9, 13);
    /// assert_eq!((span.line, span.column), (2, 4));
    /// ```
    pub fn locate(text: &str, start: usize, end: usize) -> Self {
        let before = text.get(..start).unwrap_or(text);
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let line = before.bytes().filter(|&b| b == b'\n').count() + 1;
        let column = before[line_start..].chars().count() + 1;
        Self::new(start, end, saturating_u32(line), saturating_u32(column))
    }

    /// Create an empty span at a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use asmc_util::span::Span;
    ///
    /// let point = Span::point(12, 2, 3);
    /// assert!(point.is_empty());
    /// assert_eq!(point.start, 12);
    /// ```
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Merge two spans into a single span covering both
    ///
    /// The line and column are taken from whichever span starts first.
    ///
    /// # Examples
    ///
    /// ```
    /// use asmc_util::span::Span;
    ///
    /// let mnemonic = Span::new(0, 3, 1, 1);
    /// let operand = Span::new(4, 7, 1, 5);
    /// let merged = mnemonic.merge(operand);
    /// assert_eq!((merged.start, merged.end), (0, 7));
    /// assert_eq!(merged.column, 1);
    /// ```
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        let first = if other.start < self.start { other } else { self };
        Span {
            start: first.start,
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
            file_id: self.file_id,
        }
    }

    /// Set the file ID for this span
    #[inline]
    pub fn with_file_id(mut self, file_id: FileId) -> Self {
        self.file_id = file_id;
        self
    }
}

/// Narrow a line or column to `u32`, saturating instead of wrapping
#[inline]
pub(crate) fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
