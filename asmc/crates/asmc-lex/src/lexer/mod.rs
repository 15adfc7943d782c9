//! Lexer module.
//!
//! This module organizes the state machine into smaller, focused components:
//! - `core` - Lexer struct, emission and the `Line` dispatch state
//! - `identifier` - Label, mnemonic, register and directive names
//! - `number` - Integer literals in base 2, 8, 10 and 16
//! - `string` - Character, string and raw string literals, escapes
//! - `operator` - Arithmetic and bitwise operators
//! - `comment` - Line comments

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::{Lexer, State};
