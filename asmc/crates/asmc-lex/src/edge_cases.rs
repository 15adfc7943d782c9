//! Edge case tests for asmc-lex
