use tracing::debug;

use crate::{
    config::SkipMode,
    errors::errors::ErrorImpl,
    lexer::tokens::{Token, TokenKind},
    runtime::value::Value,
};

use super::{
    expr::{parse_condition, parse_expr},
    parser::{Parser, MAX_NESTING_DEPTH},
};

/// Recognises one statement at the current token.
///
/// A token no statement starts with is reported and consumed.
pub fn parse_stmt(parser: &mut Parser<'_>) {
    let kind = parser.current_token_kind();
    let handler = parser.get_stmt_lookup().get(&kind).copied();

    if let Some(handler) = handler {
        handler(parser);
        return;
    }

    parser.unexpected(String::from("statement"));
    parser.advance();
}

/// `('int' | 'char') IDENTIFIER '=' expression ';'`
///
/// The keyword does not constrain the stored value: it keeps whatever type the
/// expression produced.
pub fn parse_var_decl_stmt(parser: &mut Parser<'_>) {
    let keyword = parser.advance();
    let identifier = parser.expect(TokenKind::Identifier);
    parser.expect(TokenKind::Assignment);
    let value = parse_expr(parser);

    debug!(declared = %keyword.kind, "declaration");
    store(parser, &identifier, value);

    parser.expect(TokenKind::Semicolon);
}

/// `IDENTIFIER '=' expression ';'`, creating the variable if it does not exist.
pub fn parse_assignment_stmt(parser: &mut Parser<'_>) {
    let identifier = parser.advance();
    parser.expect(TokenKind::Assignment);
    let value = parse_expr(parser);

    store(parser, &identifier, value);

    parser.expect(TokenKind::Semicolon);
}

/// `'if' '(' condition ')' '{' block '}'`
pub fn parse_if_stmt(parser: &mut Parser<'_>) {
    let keyword = parser.advance();
    parser.expect(TokenKind::OpenParen);
    let condition = parse_condition(parser);
    parser.expect(TokenKind::CloseParen);
    let open = parser.expect(TokenKind::OpenCurly);

    if !parser.enter_nesting() {
        parser.report(
            ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            },
            keyword.span.start.clone(),
        );
        if open.kind == TokenKind::OpenCurly {
            parser.skip_nested(TokenKind::OpenCurly, TokenKind::CloseCurly);
        }
        return;
    }

    if condition {
        parse_block(parser);
    } else {
        skip_block(parser);
    }

    parser.expect(TokenKind::CloseCurly);
    parser.leave_nesting();
}

/// Runs statements up to, not including, the closing `}`.
pub fn parse_block(parser: &mut Parser<'_>) {
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseCurly | TokenKind::End
    ) {
        parse_stmt(parser);
    }
}

/// Consumes the body of a false branch without running it, stopping at the
/// `}` chosen by the configured [`SkipMode`].
pub fn skip_block(parser: &mut Parser<'_>) {
    let mut depth = 0usize;
    let mut skipped = 0usize;

    loop {
        match parser.current_token_kind() {
            TokenKind::End => break,
            TokenKind::CloseCurly if depth == 0 => break,
            TokenKind::CloseCurly => depth -= 1,
            TokenKind::OpenCurly if parser.config().skip_mode == SkipMode::Balanced => depth += 1,
            _ => {}
        }

        parser.advance();
        skipped += 1;
    }

    debug!(skipped, "skipped false branch");
}

fn store(parser: &mut Parser<'_>, identifier: &Token, value: Value) {
    // A mismatched name was already reported by `expect`; a halted session
    // drops the statement it stopped in.
    if identifier.kind != TokenKind::Identifier || parser.is_halted() {
        return;
    }

    debug!(name = %identifier.value, value = %value, "store");
    parser.symbols_mut().set(identifier.value.clone(), value);
}
