use crate::interpreter::error::{EvaluationError, Result};
use crate::interpreter::token::Token;
use itertools::Itertools;
use log::trace;

/// Splits the given expression into tokens.
///
/// Runs of digits and decimal points become a single [`Token::Number`], kept as text.
/// Whitespace separates tokens and is otherwise dropped.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens of the expression, in the order they appear.
///
/// # Examples
///
/// ```
/// use expression_calculator::interpreter::lexer::tokenize;
/// use expression_calculator::interpreter::token::Token;
/// # use expression_calculator::interpreter::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize("(1.5+2)")?;
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[1], Token::number("1.5"));
/// # Ok(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    let mut characters = expression.chars().peekable();
    let mut tokens = Vec::new();

    while let Some(&character) = characters.peek() {
        if is_numeric(character) {
            let literal: String = characters
                .peeking_take_while(|character| is_numeric(*character))
                .collect();
            tokens.push(Token::Number(literal));
            continue;
        }

        characters.next();
        if character.is_whitespace() {
            continue;
        }
        match Token::from_symbol(character) {
            Some(token) => tokens.push(token),
            None => return Err(EvaluationError::InvalidCharacter(character)),
        }
    }

    trace!("tokenized {:?} into {:?}", expression, tokens);
    Ok(tokens)
}

fn is_numeric(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::operator::BinaryOperator;
    use pretty_assertions::assert_eq;

    #[test]
    fn simple_expression_returns_tokens() {
        let expected = vec![
            Token::number("10"),
            Token::Operator(BinaryOperator::Add),
            Token::number("2"),
            Token::Operator(BinaryOperator::Multiply),
            Token::number("6"),
        ];

        let actual = tokenize("10 + 2 * 6").unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn tokens_need_no_separating_whitespace() {
        let expected = vec![
            Token::LeftParenthesis,
            Token::number("2"),
            Token::Operator(BinaryOperator::Exponentiate),
            Token::number("0.5"),
            Token::RightParenthesis,
            Token::Operator(BinaryOperator::Divide),
            Token::number("14"),
        ];

        let actual = tokenize("(2^0.5)/14").unwrap();

        assert_eq!(actual, expected)
    }

    #[test]
    fn whitespace_of_any_kind_is_skipped() {
        let actual = tokenize(" \t1\n-\r\n 2 ").unwrap();

        assert_eq!(
            actual,
            vec![
                Token::number("1"),
                Token::Operator(BinaryOperator::Subtract),
                Token::number("2"),
            ]
        )
    }

    #[test]
    fn whitespace_splits_numeric_literals() {
        let actual = tokenize("1 2").unwrap();

        assert_eq!(actual, vec![Token::number("1"), Token::number("2")])
    }

    #[test]
    fn multiple_decimal_points_stay_in_one_literal() {
        let actual = tokenize("1.2.3+.").unwrap();

        assert_eq!(
            actual,
            vec![
                Token::number("1.2.3"),
                Token::Operator(BinaryOperator::Add),
                Token::number("."),
            ]
        )
    }

    #[test]
    fn empty_expression_returns_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn invalid_character_is_reported() {
        let error = tokenize("3 & 4").unwrap_err();

        assert_eq!(error, EvaluationError::InvalidCharacter('&'))
    }

    #[test]
    fn letters_are_invalid_characters() {
        let error = tokenize("2x").unwrap_err();

        assert_eq!(error, EvaluationError::InvalidCharacter('x'))
    }

    #[test]
    fn non_ascii_digits_are_invalid_characters() {
        let error = tokenize("1+٣").unwrap_err();

        assert_eq!(error, EvaluationError::InvalidCharacter('٣'))
    }
}
