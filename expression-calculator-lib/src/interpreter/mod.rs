pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

pub use crate::interpreter::error::{EvaluationError, Result, Stage};
use crate::interpreter::evaluator::evaluate_postfix;
use crate::interpreter::token::Token;
use itertools::Itertools;
use log::debug;

/// The outcome of evaluating an expression: its postfix form and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub postfix: Vec<Token>,
    pub result: f64,
}

impl Evaluation {
    /// The postfix tokens joined by single spaces, e.g. `1 2 3 * +`.
    pub fn postfix_notation(&self) -> String {
        tokens_to_string(&self.postfix)
    }

    /// The postfix tokens in their textual form.
    pub fn postfix_symbols(&self) -> Vec<String> {
        self.postfix.iter().map(Token::to_string).collect()
    }
}

/// Evaluates the given arithmetic expression.
///
/// The expression is tokenized, reordered into postfix notation and then reduced to a
/// single value. Division by zero and fractional powers of negative numbers are not errors;
/// they produce infinities and NaN as in IEEE-754 arithmetic.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, using numbers, `+ - * / ^` and parentheses.
///
/// returns: The postfix form of the expression together with its value.
///
/// # Examples
///
/// ```
/// use expression_calculator::interpreter::evaluate_expression;
/// # use expression_calculator::interpreter::Result;
///
/// # fn main() -> Result<()> {
/// let evaluation = evaluate_expression("10 + 2 * 6")?;
/// assert_eq!(evaluation.postfix_notation(), "10 2 6 * +");
/// assert_eq!(evaluation.result, 22.0);
/// # Ok(()) }
/// ```
pub fn evaluate_expression(expression: &str) -> Result<Evaluation> {
    let infix = lexer::tokenize(expression)?;
    let postfix = parser::parse(infix)?;
    let result = evaluate_postfix(&postfix)?;
    debug!("{} => {} = {}", expression, tokens_to_string(&postfix), result);
    Ok(Evaluation { postfix, result })
}

/// Prints the given tokens separated by single spaces.
///
/// # Examples
///
/// ```
/// use expression_calculator::interpreter::tokens_to_string;
/// use expression_calculator::interpreter::token::Token;
///
/// let tokens = vec![
///     Token::number("2"),
///     Token::number("8"),
///     Token::from_symbol('^').unwrap(),
/// ];
/// assert_eq!(tokens_to_string(&tokens), "2 8 ^");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().join(" ")
}
