use crate::interpreter::error::{EvaluationError, Result};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use log::trace;

/// Computes the value of the given postfix tokens.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens ordered in postfix notation, as returned by
///   [`parse`](crate::interpreter::parser::parse).
///
/// returns: The single value the tokens reduce to.
///
/// # Examples
///
/// ```
/// use expression_calculator::interpreter::evaluator::evaluate_postfix;
/// use expression_calculator::interpreter::token::Token;
/// # use expression_calculator::interpreter::Result;
///
/// # fn main() -> Result<()> {
/// let postfix_tokens = [
///     Token::number("10"),
///     Token::number("4"),
///     Token::from_symbol('-').unwrap(),
/// ];
/// assert_eq!(evaluate_postfix(&postfix_tokens)?, 6.0);
/// # Ok(()) }
/// ```
pub fn evaluate_postfix(postfix_tokens: &[Token]) -> Result<f64> {
    let mut operands: Vec<f64> = Vec::new();

    for token in postfix_tokens {
        match token {
            Token::Number(text) => operands.push(parse_number(text)?),
            Token::Operator(operator) => {
                let result = apply(&mut operands, *operator)?;
                operands.push(result);
            }
            Token::LeftParenthesis | Token::RightParenthesis => {
                return Err(EvaluationError::UnknownToken(token.to_string()))
            }
        }
    }

    match operands[..] {
        [result] => {
            trace!("evaluated {:?} to {}", postfix_tokens, result);
            Ok(result)
        }
        _ => Err(EvaluationError::MalformedExpression {
            remaining: operands.len(),
        }),
    }
}

fn apply(operands: &mut Vec<f64>, operator: BinaryOperator) -> Result<f64> {
    let available = operands.len();
    let insufficient = || EvaluationError::InsufficientOperands {
        operator,
        available,
    };
    // The most recently pushed value is the right-hand operand.
    let right_operand = operands.pop().ok_or_else(insufficient)?;
    let left_operand = operands.pop().ok_or_else(insufficient)?;
    Ok(operator.evaluate(left_operand, right_operand))
}

fn parse_number(text: &str) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|_| EvaluationError::InvalidNumber(text.to_string()))
}
