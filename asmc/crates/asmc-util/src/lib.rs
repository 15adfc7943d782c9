//! asmc-util - Shared foundation types for the asmc toolchain
//!
//! This crate holds the pieces every other asmc crate leans on:
//!
//! - [`span`] - byte ranges with line/column information, and the
//!   [`SourceMap`] that resolves offsets back to source lines
//! - [`diagnostic`] - levels, codes, the fluent [`DiagnosticBuilder`] and
//!   the [`Handler`] that collects what the front end reports
//! - [`error`] - error types for the utilities above
//!
//! # Example
//!
//! ```
//! use asmc_util::{DiagnosticBuilder, DiagnosticCode, Handler, SourceMap, Span};
//!
//! let mut sources = SourceMap::new();
//! let id = sources.add_file("loop.s", "addi $t0, $t0, -1\n");
//! let span = Span::with_file(5, 8, id, 1, 6);
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unknown register")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(span)
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! assert_eq!(sources.format_span(span).as_deref(), Some("loop.s:1:6"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{FileId, SourceFile, SourceMap, Span};
