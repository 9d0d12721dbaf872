//! Runtime values and their arithmetic.
//!
//! Integer with Integer stays Integer. A Float on either side widens both
//! operands to Float. A Character on either side is rejected with
//! `UnsupportedOperandType`; callers substitute `0` or `false`.

use std::fmt::Display;

use crate::{errors::errors::ErrorImpl, lexer::tokens::TokenKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Character(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Equals,
    NotEquals,
}

impl BinaryOp {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Dash => Some(BinaryOp::Subtract),
            TokenKind::Star => Some(BinaryOp::Multiply),
            TokenKind::Slash => Some(BinaryOp::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        }
    }
}

impl CompareOp {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Less => Some(CompareOp::Less),
            TokenKind::LessEquals => Some(CompareOp::LessEquals),
            TokenKind::Greater => Some(CompareOp::Greater),
            TokenKind::GreaterEquals => Some(CompareOp::GreaterEquals),
            TokenKind::Equals => Some(CompareOp::Equals),
            TokenKind::NotEquals => Some(CompareOp::NotEquals),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Less => "<",
            CompareOp::LessEquals => "<=",
            CompareOp::Greater => ">",
            CompareOp::GreaterEquals => ">=",
            CompareOp::Equals => "==",
            CompareOp::NotEquals => "!=",
        }
    }

    fn holds<T: PartialOrd>(&self, left: T, right: T) -> bool {
        match self {
            CompareOp::Less => left < right,
            CompareOp::LessEquals => left <= right,
            CompareOp::Greater => left > right,
            CompareOp::GreaterEquals => left >= right,
            CompareOp::Equals => left == right,
            CompareOp::NotEquals => left != right,
        }
    }
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "int",
            Value::Float(_) => "float",
            Value::Character(_) => "char",
        }
    }

    fn unsupported(&self, operator: &str, rhs: &Value) -> ErrorImpl {
        ErrorImpl::UnsupportedOperandType {
            operator: operator.to_string(),
            left: self.type_name().to_string(),
            right: rhs.type_name().to_string(),
        }
    }

    /// Applies `op` with `self` on the left.
    pub fn apply(self, op: BinaryOp, rhs: Value) -> Result<Value, ErrorImpl> {
        match (self, rhs) {
            (Value::Character(_), _) | (_, Value::Character(_)) => {
                Err(self.unsupported(op.symbol(), &rhs))
            }
            (Value::Integer(left), Value::Integer(right)) => integer_arithmetic(op, left, right),
            (Value::Integer(left), Value::Float(right)) => {
                Ok(Value::Float(float_arithmetic(op, left as f64, right)))
            }
            (Value::Float(left), Value::Integer(right)) => {
                Ok(Value::Float(float_arithmetic(op, left, right as f64)))
            }
            (Value::Float(left), Value::Float(right)) => {
                Ok(Value::Float(float_arithmetic(op, left, right)))
            }
        }
    }

    /// Compares `self` against `rhs` under the same coercion as [`Value::apply`].
    pub fn compare(self, op: CompareOp, rhs: Value) -> Result<bool, ErrorImpl> {
        match (self, rhs) {
            (Value::Character(_), _) | (_, Value::Character(_)) => {
                Err(self.unsupported(op.symbol(), &rhs))
            }
            (Value::Integer(left), Value::Integer(right)) => Ok(op.holds(left, right)),
            (Value::Integer(left), Value::Float(right)) => Ok(op.holds(left as f64, right)),
            (Value::Float(left), Value::Integer(right)) => Ok(op.holds(left, right as f64)),
            (Value::Float(left), Value::Float(right)) => Ok(op.holds(left, right)),
        }
    }
}

// Overflow wraps; division truncates toward zero.
fn integer_arithmetic(op: BinaryOp, left: i64, right: i64) -> Result<Value, ErrorImpl> {
    let result = match op {
        BinaryOp::Add => left.wrapping_add(right),
        BinaryOp::Subtract => left.wrapping_sub(right),
        BinaryOp::Multiply => left.wrapping_mul(right),
        BinaryOp::Divide => {
            if right == 0 {
                return Err(ErrorImpl::DivisionByZero);
            }
            left.wrapping_div(right)
        }
    };

    Ok(Value::Integer(result))
}

fn float_arithmetic(op: BinaryOp, left: f64, right: f64) -> f64 {
    match op {
        BinaryOp::Add => left + right,
        BinaryOp::Subtract => left - right,
        BinaryOp::Multiply => left * right,
        BinaryOp::Divide => left / right,
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::Character(value) => write!(f, "'{}'", value),
        }
    }
}
