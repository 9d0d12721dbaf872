use tracing::{debug, warn};

use super::errors::Error;

/// Receives every diagnostic raised during a session.
pub trait DiagnosticSink {
    fn report(&mut self, error: Error);
}

impl DiagnosticSink for Vec<Error> {
    fn report(&mut self, error: Error) {
        self.push(error);
    }
}

/// Emits each diagnostic as a `warn` event and keeps nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, error: Error) {
        warn!(
            kind = error.get_error_name(),
            offset = error.get_position().0,
            file = %error.get_position().1,
            "{}",
            error.get_kind()
        );
    }
}

/// Collects diagnostics in the order they were reported, optionally echoing
/// each one through a [`TracingSink`] as it arrives.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<Error>,
    echo: Option<TracingSink>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics {
            errors: vec![],
            echo: None,
        }
    }

    pub fn with_tracing() -> Self {
        Diagnostics {
            errors: vec![],
            echo: Some(TracingSink),
        }
    }

    pub fn is_tracing(&self) -> bool {
        self.echo.is_some()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Counts the diagnostics whose error name is `name`.
    pub fn count(&self, name: &str) -> usize {
        self.errors
            .iter()
            .filter(|error| error.get_error_name() == name)
            .count()
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, error: Error) {
        match &mut self.echo {
            Some(echo) => echo.report(error.clone()),
            None => debug!(kind = error.get_error_name(), offset = error.get_position().0, "diagnostic"),
        }

        self.errors.push(error);
    }
}
