use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A numeric literal, kept as written until it is evaluated.
    Number(String),
    Operator(BinaryOperator),
    LeftParenthesis,
    RightParenthesis,
}

impl Token {
    /// Classifies a single non-numeric character as an operator or a parenthesis.
    ///
    /// # Examples
    ///
    /// ```
    /// use expression_calculator::interpreter::operator::BinaryOperator;
    /// use expression_calculator::interpreter::token::Token;
    ///
    /// assert_eq!(Token::from_symbol('*'), Some(Token::Operator(BinaryOperator::Multiply)));
    /// assert_eq!(Token::from_symbol('('), Some(Token::LeftParenthesis));
    /// assert_eq!(Token::from_symbol('x'), None);
    /// ```
    pub fn from_symbol(symbol: char) -> Option<Token> {
        match symbol {
            '(' => Some(Token::LeftParenthesis),
            ')' => Some(Token::RightParenthesis),
            symbol => BinaryOperator::from_symbol(symbol).map(Token::Operator),
        }
    }

    pub fn number(text: impl Into<String>) -> Token {
        Token::Number(text.into())
    }

    pub fn is_parenthesis(&self) -> bool {
        matches!(self, Token::LeftParenthesis | Token::RightParenthesis)
    }
}

impl From<BinaryOperator> for Token {
    fn from(operator: BinaryOperator) -> Self {
        Token::Operator(operator)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::LeftParenthesis => write!(f, "("),
            Token::RightParenthesis => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
