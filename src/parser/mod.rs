//! Parser and evaluator for the statement language.
//!
//! Parsing and evaluation happen in one pass: each grammar rule pulls tokens
//! from the lexer on demand, keeps a single token of lookahead and reduces
//! what it recognises straight to runtime values. It handles:
//!
//! - Statement dispatch through a lookup table keyed by token kind
//! - Declarations, assignments and the single-level `if`
//! - Expressions with term/factor precedence and relational conditions
//! - Recovery from unexpected tokens according to the configured policy

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
