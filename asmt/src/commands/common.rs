//! Common types and utilities for asmt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{AsmtError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported formats for token listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `token <i>: <token>` line per token
    #[default]
    Text,
    /// One JSON array of `{kind, text}` objects per file
    Json,
}

// ============================================================================
// File Utilities
// ============================================================================

/// Read a source file into memory.
///
/// The scanner works on a fully materialized buffer, so the whole file is
/// read before scanning starts.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(AsmtError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(AsmtError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    std::fs::read_to_string(path)
        .map_err(|e| AsmtError::FileOperation(format!("{}: {}", path.display(), e)))
}

/// Wrap `text` in bold red when `color` is set.
pub fn paint_error(text: &str, color: bool) -> String {
    if color {
        format!("\x1b[1;31m{}\x1b[0m", text)
    } else {
        text.to_string()
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when the job count is zero.
    pub const ZERO_JOBS: &str = "Number of jobs must be at least 1";

    /// Error when files ended in a lexical error.
    pub const FILES_FAILED: &str = "file(s) ended in a lexical error";
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.asm");
        std::fs::write(&path, "nop\n").unwrap();
        assert_eq!(read_source(&path).unwrap(), "nop\n");
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("/nonexistent/a.asm")).unwrap_err();
        assert!(matches!(err, AsmtError::FileOperation(_)));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_read_source_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_source(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("is not a file"));
    }

    #[test]
    fn test_paint_error() {
        assert_eq!(paint_error("error", false), "error");
        assert_eq!(paint_error("error", true), "\x1b[1;31merror\x1b[0m");
    }
}
