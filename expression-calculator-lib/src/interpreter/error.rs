use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;

/// The pipeline stage an expression was in when it failed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Stage {
    Tokenization,
    Conversion,
    Evaluation,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Tokenization => write!(f, "tokenization"),
            Stage::Conversion => write!(f, "conversion"),
            Stage::Evaluation => write!(f, "evaluation"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),
    #[error("mismatched parentheses")]
    MismatchedParentheses,
    #[error("operator '{operator}' needs two operands but only {available} available")]
    InsufficientOperands {
        operator: BinaryOperator,
        available: usize,
    },
    #[error("malformed expression: {remaining} values remain after evaluation, expected 1")]
    MalformedExpression { remaining: usize },
    #[error("unknown token '{0}'")]
    UnknownToken(String),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
}

impl EvaluationError {
    pub fn stage(&self) -> Stage {
        match self {
            EvaluationError::InvalidCharacter(_) => Stage::Tokenization,
            EvaluationError::MismatchedParentheses => Stage::Conversion,
            EvaluationError::InsufficientOperands { .. }
            | EvaluationError::MalformedExpression { .. }
            | EvaluationError::UnknownToken(_)
            | EvaluationError::InvalidNumber(_) => Stage::Evaluation,
        }
    }
}

pub type Result<T> = std::result::Result<T, EvaluationError>;
