//! Unit tests for runtime values and the symbol table.

use super::{
    environment::SymbolTable,
    value::{BinaryOp, CompareOp, Value},
};
use crate::{errors::errors::ErrorImpl, lexer::tokens::TokenKind};

#[test]
fn test_integer_arithmetic() {
    let seven = Value::Integer(7);
    let two = Value::Integer(2);

    assert_eq!(seven.apply(BinaryOp::Add, two), Ok(Value::Integer(9)));
    assert_eq!(seven.apply(BinaryOp::Subtract, two), Ok(Value::Integer(5)));
    assert_eq!(seven.apply(BinaryOp::Multiply, two), Ok(Value::Integer(14)));
    assert_eq!(seven.apply(BinaryOp::Divide, two), Ok(Value::Integer(3)));
}

#[test]
fn test_integer_division_truncates_toward_zero() {
    assert_eq!(
        Value::Integer(-7).apply(BinaryOp::Divide, Value::Integer(2)),
        Ok(Value::Integer(-3))
    );
    assert_eq!(
        Value::Integer(7).apply(BinaryOp::Divide, Value::Integer(-2)),
        Ok(Value::Integer(-3))
    );
}

#[test]
fn test_integer_division_by_zero() {
    assert_eq!(
        Value::Integer(1).apply(BinaryOp::Divide, Value::Integer(0)),
        Err(ErrorImpl::DivisionByZero)
    );
}

#[test]
fn test_integer_overflow_wraps() {
    assert_eq!(
        Value::Integer(i64::MAX).apply(BinaryOp::Add, Value::Integer(1)),
        Ok(Value::Integer(i64::MIN))
    );
    assert_eq!(
        Value::Integer(i64::MIN).apply(BinaryOp::Divide, Value::Integer(-1)),
        Ok(Value::Integer(i64::MIN))
    );
}

#[test]
fn test_mixed_arithmetic_widens_to_float() {
    assert_eq!(
        Value::Integer(3).apply(BinaryOp::Add, Value::Float(2.5)),
        Ok(Value::Float(5.5))
    );
    assert_eq!(
        Value::Float(7.0).apply(BinaryOp::Divide, Value::Integer(2)),
        Ok(Value::Float(3.5))
    );
    assert_eq!(
        Value::Float(1.5).apply(BinaryOp::Multiply, Value::Float(2.0)),
        Ok(Value::Float(3.0))
    );
}

#[test]
fn test_float_division_by_zero_is_infinite() {
    assert_eq!(
        Value::Float(1.0).apply(BinaryOp::Divide, Value::Integer(0)),
        Ok(Value::Float(f64::INFINITY))
    );
}

#[test]
fn test_character_arithmetic_is_unsupported() {
    let cases = [
        (Value::Character('a'), Value::Integer(1)),
        (Value::Integer(1), Value::Character('a')),
        (Value::Float(1.0), Value::Character('a')),
        (Value::Character('a'), Value::Character('b')),
    ];

    for (left, right) in cases {
        match left.apply(BinaryOp::Add, right) {
            Err(ErrorImpl::UnsupportedOperandType { operator, .. }) => assert_eq!(operator, "+"),
            other => panic!("expected unsupported operands, got {:?}", other),
        }
        assert!(left.compare(CompareOp::Equals, right).is_err());
    }
}

#[test]
fn test_unsupported_names_operand_types() {
    assert_eq!(
        Value::Character('x').compare(CompareOp::Less, Value::Float(1.0)),
        Err(ErrorImpl::UnsupportedOperandType {
            operator: "<".to_string(),
            left: "char".to_string(),
            right: "float".to_string(),
        })
    );
}

#[test]
fn test_comparisons() {
    let three = Value::Integer(3);
    let five = Value::Integer(5);

    assert_eq!(three.compare(CompareOp::Less, five), Ok(true));
    assert_eq!(three.compare(CompareOp::Greater, five), Ok(false));
    assert_eq!(three.compare(CompareOp::LessEquals, three), Ok(true));
    assert_eq!(five.compare(CompareOp::GreaterEquals, three), Ok(true));
    assert_eq!(five.compare(CompareOp::Equals, five), Ok(true));
    assert_eq!(five.compare(CompareOp::NotEquals, five), Ok(false));
    assert_eq!(three.compare(CompareOp::Equals, Value::Float(3.0)), Ok(true));
    assert_eq!(Value::Float(2.5).compare(CompareOp::Less, three), Ok(true));
}

#[test]
fn test_operator_lookup() {
    assert_eq!(BinaryOp::from_token(TokenKind::Star), Some(BinaryOp::Multiply));
    assert_eq!(BinaryOp::from_token(TokenKind::Less), None);
    assert_eq!(CompareOp::from_token(TokenKind::NotEquals), Some(CompareOp::NotEquals));
    assert_eq!(CompareOp::from_token(TokenKind::Assignment), None);
}

#[test]
fn test_value_display() {
    assert_eq!(Value::Integer(-4).to_string(), "-4");
    assert_eq!(Value::Float(5.5).to_string(), "5.5");
    assert_eq!(Value::Character('a').to_string(), "'a'");
}

#[test]
fn test_symbol_table() {
    let mut symbols = SymbolTable::new();
    assert!(symbols.is_empty());

    assert_eq!(symbols.set("x".to_string(), Value::Integer(1)), None);
    assert_eq!(
        symbols.set("x".to_string(), Value::Float(2.0)),
        Some(Value::Integer(1))
    );
    symbols.set("a".to_string(), Value::Character('c'));

    assert_eq!(symbols.len(), 2);
    assert!(symbols.contains("a"));
    assert_eq!(symbols.lookup("x"), Some(Value::Float(2.0)));
    assert_eq!(
        symbols.get("missing"),
        Err(ErrorImpl::UndeclaredVariable {
            variable: "missing".to_string()
        })
    );

    let names: Vec<&str> = symbols.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["a", "x"]);
}
