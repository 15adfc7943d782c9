//! Error handling module for the asmt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the asmt CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of asmt commands.
#[derive(Error, Debug)]
pub enum AsmtError {
    /// Error when a configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when reading a source file fails.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when one or more inputs ended in a lexical error.
    #[error("Lexical error: {0}")]
    Lex(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when TOML serialization fails.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Result type alias using AsmtError.
pub type Result<T> = std::result::Result<T, AsmtError>;
