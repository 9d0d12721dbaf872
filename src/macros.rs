//! Utility macros for the interpreter.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span between two byte offsets of one file
//!
//! These macros reduce boilerplate in the lexer and parser.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Span covering `$start..$end` in `$file`.
///
/// `$file` is an `&Rc<String>`; both offsets are byte offsets.
#[macro_export]
macro_rules! MK_SPAN {
    ($file:expr, $start:expr, $end:expr) => {
        $crate::Span {
            start: $crate::Position($start as u32, ::std::rc::Rc::clone($file)),
            end: $crate::Position($end as u32, ::std::rc::Rc::clone($file)),
        }
    };
}
