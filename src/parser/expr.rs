use tracing::debug;

use crate::{
    errors::errors::ErrorImpl,
    lexer::tokens::{Token, TokenKind},
    runtime::value::{BinaryOp, CompareOp, Value},
};

use super::{
    lookups::BindingPower,
    parser::{Parser, MAX_NESTING_DEPTH},
};

/// `expression := term ( ('+'|'-') term )*`
pub fn parse_expr(parser: &mut Parser<'_>) -> Value {
    let mut left = parse_term(parser);

    while parser.current_binding_power() == BindingPower::Additive {
        let operator_token = parser.advance();
        let right = parse_term(parser);
        left = apply_binary(parser, left, &operator_token, right);
    }

    left
}

/// `term := factor ( ('*'|'/') factor )*`
pub fn parse_term(parser: &mut Parser<'_>) -> Value {
    let mut left = parse_factor(parser);

    while parser.current_binding_power() == BindingPower::Multiplicative {
        let operator_token = parser.advance();
        let right = parse_factor(parser);
        left = apply_binary(parser, left, &operator_token, right);
    }

    left
}

/// `factor := NUMBER | CHAR_LITERAL | IDENTIFIER | '(' expression ')'`
///
/// Anything else is reported and read as Integer 0.
pub fn parse_factor(parser: &mut Parser<'_>) -> Value {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance();
            parse_number(parser, &token)
        }
        TokenKind::CharLiteral => {
            let token = parser.advance();
            match token.value.chars().next() {
                Some(ch) => Value::Character(ch),
                None => Value::Integer(0),
            }
        }
        TokenKind::Identifier => {
            let token = parser.advance();
            let value = parser.symbols().lookup(&token.value);
            match value {
                Some(value) => value,
                None => {
                    parser.report(
                        ErrorImpl::UndeclaredVariable {
                            variable: token.value.clone(),
                        },
                        token.span.start.clone(),
                    );
                    Value::Integer(0)
                }
            }
        }
        TokenKind::OpenParen => {
            let open = parser.advance();

            if !parser.enter_nesting() {
                parser.report(
                    ErrorImpl::NestingTooDeep {
                        limit: MAX_NESTING_DEPTH,
                    },
                    open.span.start.clone(),
                );
                parser.skip_nested(TokenKind::OpenParen, TokenKind::CloseParen);
                return Value::Integer(0);
            }

            let value = parse_expr(parser);
            parser.expect(TokenKind::CloseParen);
            parser.leave_nesting();
            value
        }
        _ => {
            parser.unexpected(String::from("expression"));
            parser.advance();
            Value::Integer(0)
        }
    }
}

/// `condition := expression ( relop expression )?`
///
/// A bare expression with no relational operator is never true.
pub fn parse_condition(parser: &mut Parser<'_>) -> bool {
    let left = parse_expr(parser);

    if parser.current_binding_power() != BindingPower::Relational {
        debug!(value = %left, "condition without relational operator is false");
        return false;
    }

    let operator_token = parser.advance();
    let right = parse_expr(parser);

    let Some(op) = CompareOp::from_token(operator_token.kind) else {
        return false;
    };

    match left.compare(op, right) {
        Ok(result) => result,
        Err(error) => {
            parser.report(error, operator_token.span.start.clone());
            false
        }
    }
}

fn parse_number(parser: &mut Parser<'_>, token: &Token) -> Value {
    let parsed = if token.value.contains('.') {
        token.value.parse::<f64>().map(Value::Float).ok()
    } else {
        token.value.parse::<i64>().map(Value::Integer).ok()
    };

    parsed.unwrap_or_else(|| {
        parser.report(
            ErrorImpl::MalformedNumber {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        );
        Value::Integer(0)
    })
}

fn apply_binary(parser: &mut Parser<'_>, left: Value, operator_token: &Token, right: Value) -> Value {
    let Some(op) = BinaryOp::from_token(operator_token.kind) else {
        return left;
    };

    match left.apply(op, right) {
        Ok(value) => value,
        Err(error) => {
            parser.report(error, operator_token.span.start.clone());
            Value::Integer(0)
        }
    }
}
