//! Parser session state.
//!
//! The `Parser` owns everything one interpretation session needs: the lexer it
//! pulls tokens from, the single token of lookahead, the symbol table that
//! statements write to, and the sink that receives diagnostics. Grammar rules
//! live in `expr` and `stmt` and drive the session through the methods here.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    config::{InterpreterConfig, RecoveryPolicy},
    errors::{
        errors::{Error, ErrorImpl},
        sink::DiagnosticSink,
    },
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    runtime::environment::SymbolTable,
    Position, Span, MK_TOKEN,
};

use super::{
    lookups::{create_token_lookups, BPLookup, BindingPower, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

pub struct Parser<'a> {
    /// Source of further tokens
    lexer: Lexer,
    /// The lookahead: produced by the lexer, not yet consumed
    current: Token,
    /// Variables written by declarations and assignments
    symbols: SymbolTable,
    /// Where every diagnostic of the session goes
    sink: &'a mut dyn DiagnosticSink,
    config: InterpreterConfig,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for operator binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Set once a mismatch under `RecoveryPolicy::Halt` ended the session
    halted: bool,
    /// Parentheses and `if` bodies currently open
    depth: usize,
}

/// Deepest nesting of parentheses and `if` bodies the parser recurses into.
pub const MAX_NESTING_DEPTH: usize = 256;

impl<'a> Parser<'a> {
    /// Creates a parser and primes the lookahead with the first token.
    pub fn new(
        source: &str,
        file: Option<String>,
        config: InterpreterConfig,
        sink: &'a mut dyn DiagnosticSink,
    ) -> Self {
        let mut lexer = Lexer::new(source, file);
        let current = lexer.next_token(&mut *sink);

        Parser {
            lexer,
            current,
            symbols: SymbolTable::new(),
            sink,
            config,
            stmt_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            halted: false,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Binding power of the current token, `Default` for anything that is not an operator or operand.
    pub fn current_binding_power(&self) -> BindingPower {
        *self
            .get_bp_lookup()
            .get(&self.current.kind)
            .unwrap_or(&BindingPower::Default)
    }

    /// Consumes the current token and returns it.
    ///
    /// `End` is never consumed: once the lookahead is `End` it stays `End`,
    /// even when it was forced early by a scan error.
    pub fn advance(&mut self) -> Token {
        if self.current.kind == TokenKind::End {
            return self.current.clone();
        }

        let next = self.lexer.next_token(&mut *self.sink);
        trace!(kind = %next.kind, value = %next.value, "lookahead");

        std::mem::replace(&mut self.current, next)
    }

    /// Consumes a token that should be of `expected_kind`.
    ///
    /// A mismatch is reported as `UnexpectedToken` and then handled by the
    /// configured [`RecoveryPolicy`]: with `ReportAndAdvance` the offending token
    /// is consumed anyway and returned, with `Halt` the session ends.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Token {
        if self.current.kind != expected_kind {
            self.unexpected(expected_kind.to_string());
        }

        self.advance()
    }

    /// Reports the current token as unexpected where `expected` was wanted.
    ///
    /// Does not consume the token. Under `RecoveryPolicy::Halt` the lookahead
    /// is replaced by `End` and nothing further is reported.
    pub fn unexpected(&mut self, expected: String) {
        // The mismatch that halted the session was the last one reported.
        if self.halted {
            return;
        }

        let token = self.current.clone();
        self.report(
            ErrorImpl::UnexpectedToken {
                expected,
                found: token.describe(),
            },
            token.span.start.clone(),
        );

        if self.config.on_mismatch == RecoveryPolicy::Halt {
            self.halt();
        }
    }

    fn halt(&mut self) {
        debug!(offset = self.current.span.start.0, "halting on mismatch");
        let position = self.current.span.start.clone();
        self.halted = true;
        self.current = MK_TOKEN!(
            TokenKind::End,
            String::new(),
            Span {
                start: position.clone(),
                end: position
            }
        );
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Opens one level of nesting, or returns false once the limit is reached.
    pub fn enter_nesting(&mut self) -> bool {
        if self.depth >= MAX_NESTING_DEPTH {
            return false;
        }

        self.depth += 1;
        true
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Consumes tokens up to and including the `close` matching an `open` that
    /// was already consumed. Stops early at `End`.
    pub fn skip_nested(&mut self, open: TokenKind, close: TokenKind) {
        let mut depth = 1usize;

        while self.current.kind != TokenKind::End {
            let kind = self.advance().kind;

            if kind == open {
                depth += 1;
            } else if kind == close {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
        }
    }

    /// Hands a diagnostic to the sink. Silent once the session has halted.
    pub fn report(&mut self, error: ErrorImpl, position: Position) {
        if self.halted {
            return;
        }

        self.sink.report(Error::new(error, position));
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers the binding power of a token.
    pub fn binding_power(&mut self, kind: TokenKind, binding_power: BindingPower) {
        self.binding_power_lookup.insert(kind, binding_power);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Interprets `source` statement by statement until `End`.
///
/// This is the main entry point for a session. It creates a parser, fills
/// the lookup tables and returns the symbol table left behind.
pub fn parse(
    source: &str,
    file: Option<String>,
    config: InterpreterConfig,
    sink: &mut dyn DiagnosticSink,
) -> SymbolTable {
    let mut parser = Parser::new(source, file, config, sink);
    create_token_lookups(&mut parser);

    while parser.current_token_kind() != TokenKind::End {
        parse_stmt(&mut parser);
    }

    debug!(variables = parser.symbols().len(), halted = parser.is_halted(), "session finished");
    parser.into_symbols()
}
