//! Core error types for the asmc-util crate.

use thiserror::Error;

/// Error type for source map operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceMapError {
    /// No file with this id was added to the source map
    #[error("file not found: id {0}")]
    FileNotFound(usize),

    /// Invalid span range
    #[error("invalid span: start {start} > end {end}")]
    InvalidSpan {
        /// Byte offset the span starts at
        start: usize,
        /// Byte offset the span ends at
        end: usize,
    },

    /// Span out of bounds for file
    #[error("span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        /// Length of the file in bytes
        file_len: usize,
        /// Start of the requested span
        span_start: usize,
        /// End of the requested span
        span_end: usize,
    },

    /// Range splits a multi-byte character
    #[error("span {start}..{end} is not on character boundaries")]
    NotCharBoundary {
        /// Start of the requested range
        start: usize,
        /// End of the requested range
        end: usize,
    },
}

/// Result type alias for source map operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_span_display() {
        let err = SourceMapError::InvalidSpan { start: 9, end: 3 };
        assert_eq!(err.to_string(), "invalid span: start 9 > end 3");
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = SourceMapError::SpanOutOfBounds {
            file_len: 4,
            span_start: 2,
            span_end: 8,
        };
        assert_eq!(
            err.to_string(),
            "span out of bounds: file has 4 bytes, span is 2..8"
        );
    }

    #[test]
    fn test_not_char_boundary_display() {
        let err = SourceMapError::NotCharBoundary { start: 1, end: 2 };
        assert_eq!(err.to_string(), "span 1..2 is not on character boundaries");
    }

    #[test]
    fn test_file_not_found_display() {
        assert_eq!(
            SourceMapError::FileNotFound(7).to_string(),
            "file not found: id 7"
        );
    }
}
