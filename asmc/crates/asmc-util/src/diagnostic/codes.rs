//! Diagnostic codes for categorizing front-end errors.
//!
//! Codes follow the format `{prefix}{number:04}`; lexer errors live in the
//! `E1xxx` range.
//!
//! # Examples
//!
//! ```
//! use asmc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_INVALID_ESCAPE;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.as_str(), "E1005");
//! ```

/// A unique code identifying a diagnostic message
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the code prefix
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric part of the code
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E1001-E1999)
    // =========================================================================

    /// E1001: Lexer - Unexpected character
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: Lexer - Unterminated string literal
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: Lexer - Invalid integer literal
    pub const E_LEXER_INVALID_NUMBER: Self = Self::new("E", 1003);
    /// E1004: Lexer - Malformed character literal
    pub const E_LEXER_INVALID_CHAR_LITERAL: Self = Self::new("E", 1004);
    /// E1005: Lexer - Invalid escape sequence
    pub const E_LEXER_INVALID_ESCAPE: Self = Self::new("E", 1005);
    /// E1006: Lexer - Unterminated raw string literal
    pub const E_LEXER_UNTERMINATED_RAW_STRING: Self = Self::new("E", 1006);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
