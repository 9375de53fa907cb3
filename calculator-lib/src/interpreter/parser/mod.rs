mod infix_converter;

use crate::interpreter::error::EvalError;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;

/// Parses the given infix tokens into postfix order,
/// which can be evaluated without any precedence rules.
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
/// use calculator::interpreter::parser::parse;
/// use calculator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::new_number("2"),
///     Token::Plus,
///     Token::new_number("3"),
/// ];
/// let postfix_tokens = parse(infix_tokens).unwrap();
/// assert_eq!(postfix_tokens[2], Token::Plus);
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Vec<Token>, EvalError> {
    infix_to_postfix(infix_tokens)
}
