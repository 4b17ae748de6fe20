mod infix_converter;

use crate::interpreter::error::Result;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;
use log::trace;

/// Parses the given infix tokens into an equivalent sequence of postfix tokens,
/// which can be evaluated in a single pass without any precedence rules.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The same tokens in postfix order, without parentheses.
///
/// # Examples
///
/// ```
/// # use expression_calculator::interpreter::Result;
/// # fn main() -> Result<()> {
/// use expression_calculator::interpreter::parser::parse;
/// use expression_calculator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::number("2"),
///     Token::from_symbol('^').unwrap(),
///     Token::number("8"),
/// ];
/// let postfix_tokens = parse(infix_tokens)?;
/// assert_eq!(postfix_tokens[2].to_string(), "^");
/// # Ok(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    let postfix_tokens = infix_to_postfix(infix_tokens)?;
    trace!("converted to postfix {:?}", postfix_tokens);
    Ok(postfix_tokens)
}
