//! asmc-par - Token navigation for the assembly parser
//!
//! This crate provides the [`TokenStream`] a syntactic parser reads from:
//! the scanner's output with one token of lookahead and one token of
//! rewind, the same discipline the scanner applies to characters.
//!
//! # Example Usage
//!
//! ```
//! use asmc_lex::TokenKind;
//! use asmc_par::TokenStream;
//!
//! let mut stream = TokenStream::from_source("loop:\n\tj loop\n");
//!
//! // A label declaration is an identifier followed by a colon.
//! let name = stream.next().text().to_string();
//! if stream.peek().kind == TokenKind::Colon {
//!     stream.next();
//! }
//! assert_eq!(name, "loop");
//! assert_eq!(stream.next().kind, TokenKind::Newline);
//! ```
//!
//! # Contract
//!
//! Misuse of the stream is a bug in the parser, not in the input, so it
//! panics:
//! - reading past the terminal token
//! - rewinding twice without reading in between
//! - rewinding before anything was read

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod stream;

pub use stream::TokenStream;
