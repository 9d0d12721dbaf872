//! Lexical analysis module for the interpreter.
//!
//! This module contains the lexer (scanner) that turns source text into a
//! lazy, forward-only stream of tokens. It handles:
//!
//! - Recognition of keywords, identifiers, numbers and character literals
//! - One- and two-character operators and punctuation
//! - Token position tracking for error reporting
//! - Reporting of malformed input, after which it yields `End`

pub mod lexer;
pub mod tokens;
