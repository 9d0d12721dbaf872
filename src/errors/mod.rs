//! Error types and diagnostic reporting for the interpreter.
//!
//! No error raised while scanning, parsing or evaluating is fatal. Each one is
//! wrapped with the source position it was detected at and handed to a
//! [`sink::DiagnosticSink`], while the component that raised it substitutes a
//! safe default and carries on.

pub mod errors;
pub mod sink;
