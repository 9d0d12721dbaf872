use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::MalformedCharLiteral { .. } => "MalformedCharLiteral",
            ErrorImpl::InvalidOperatorSequence { .. } => "InvalidOperatorSequence",
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UndeclaredVariable { .. } => "UndeclaredVariable",
            ErrorImpl::UnsupportedOperandType { .. } => "UnsupportedOperandType",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::MalformedNumber { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, a number may hold at most one decimal point",
                token
            )),
            ErrorImpl::MalformedCharLiteral { token } => ErrorTip::Suggestion(format!(
                "Invalid character literal: `{}`, expected exactly one character between quotes",
                token
            )),
            ErrorImpl::InvalidOperatorSequence { token } => ErrorTip::Suggestion(format!(
                "Invalid operator: `{}`, did you mean `!=`?",
                token
            )),
            ErrorImpl::InvalidCharacter { token } => {
                ErrorTip::Suggestion(format!("Invalid character: `{}`", token))
            }
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected {}",
                found, expected
            )),
            ErrorImpl::UndeclaredVariable { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` not declared, reading it as 0",
                variable
            )),
            ErrorImpl::UnsupportedOperandType {
                operator,
                left,
                right,
            } => ErrorTip::Suggestion(format!(
                "Operator `{}` is not supported between `{}` and `{}`",
                operator, left, right
            )),
            ErrorImpl::DivisionByZero => ErrorTip::None,
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Nesting deeper than {} levels is skipped and read as 0",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}:{})",
            self.internal_error, self.position.1, self.position.0
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("malformed number: {token:?}")]
    MalformedNumber { token: String },
    #[error("malformed character literal: {token:?}")]
    MalformedCharLiteral { token: String },
    #[error("invalid operator sequence: {token:?}")]
    InvalidOperatorSequence { token: String },
    #[error("invalid character: {token:?}")]
    InvalidCharacter { token: String },
    #[error("unexpected token: expected {expected}, found {found:?}")]
    UnexpectedToken { expected: String, found: String },
    #[error("variable {variable:?} not declared")]
    UndeclaredVariable { variable: String },
    #[error("unsupported operand types for {operator}: {left} and {right}")]
    UnsupportedOperandType {
        operator: String,
        left: String,
        right: String,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
