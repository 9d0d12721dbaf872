//! Knobs for how a session recovers from malformed programs.

/// What the parser does when the current token is not the one a rule expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryPolicy {
    /// Report `UnexpectedToken`, step over the offending token and continue.
    #[default]
    ReportAndAdvance,
    /// Report `UnexpectedToken` and treat the rest of the program as `End`.
    Halt,
}

/// How the body of an `if` whose condition is false is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkipMode {
    /// Skip to the first `}`; nested braces are not counted.
    #[default]
    Flat,
    /// Track brace depth and skip to the `}` that closes the body.
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterpreterConfig {
    pub on_mismatch: RecoveryPolicy,
    pub skip_mode: SkipMode,
}

impl InterpreterConfig {
    pub fn new(on_mismatch: RecoveryPolicy, skip_mode: SkipMode) -> Self {
        InterpreterConfig {
            on_mismatch,
            skip_mode,
        }
    }
}
