//! Runtime values and the symbol table they are stored in.
//!
//! - `value` holds the tagged [`value::Value`] and the mixed-type arithmetic
//!   and comparison rules applied to it
//! - `environment` holds the [`environment::SymbolTable`] one session mutates

pub mod environment;
pub mod value;

#[cfg(test)]
mod tests;
