use crate::interpreter::error::{EvaluationError, Result};
use crate::interpreter::operator::{Associativity, BinaryOperator};
use crate::interpreter::token::Token;

/// Reorders infix tokens into postfix order using the shunting-yard algorithm.
///
/// Operand arity is not checked here; that is left to the evaluator.
pub(super) fn infix_to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    let mut operators: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::with_capacity(infix_tokens.len());

    for token in infix_tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::LeftParenthesis => operators.push(token),
            Token::Operator(operator) => {
                parse_operator_token(&mut operators, &mut output, operator)
            }
            Token::RightParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(operators: &mut Vec<Token>, output: &mut Vec<Token>) -> Result<()> {
    while let Some(operator) = operators.pop() {
        if operator.is_parenthesis() {
            return Err(EvaluationError::MismatchedParentheses);
        }
        output.push(operator);
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    loop {
        match operators.pop() {
            None => return Err(EvaluationError::MismatchedParentheses),
            // Discard the open parenthesis.
            Some(Token::LeftParenthesis) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) {
    while let Some(&Token::Operator(top_of_operator_stack)) = operators.last() {
        if !yields_to(operator, top_of_operator_stack) {
            break;
        }
        output.extend(operators.pop());
    }

    operators.push(operator.into());
}

/// Whether `incoming` must wait for `top_of_operator_stack` to be output first.
/// Equal precedence only yields for left-associative operators.
fn yields_to(incoming: BinaryOperator, top_of_operator_stack: BinaryOperator) -> bool {
    match incoming.associativity() {
        Associativity::Left => incoming.precedence_le(&top_of_operator_stack),
        Associativity::Right => incoming.precedence_lt(&top_of_operator_stack),
    }
}
