pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::error::EvalError;
use crate::interpreter::evaluator::evaluate_postfix;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use log::debug;
use string_builder::Builder;

/// Calculates the value of the given arithmetic expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, using `+ - * /`, parentheses,
///   decimal numbers and unary minus.
///
/// returns: The value of the expression, or the first error found in it.
///
/// # Examples
///
/// ```
/// use calculator::interpreter::evaluate;
///
/// let result = evaluate("(2 + 3) * 4");
/// assert_eq!(result, Ok(20.0));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let infix_tokens = lexer::tokenize(expression)?;
    let postfix_tokens = parser::parse(infix_tokens)?;
    if log::log_enabled!(log::Level::Debug) {
        if let Ok(postfix) = tokens_to_string(&postfix_tokens) {
            debug!("{:?} in postfix: {}", expression, postfix);
        }
    }
    evaluate_postfix(&postfix_tokens)
}

/// Pretty-prints the given tokens separated by whitespace.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use calculator::interpreter::tokens_to_string;
/// use calculator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::new_number("1"),
///     Token::new_number("2"),
///     Token::Plus,
/// ];
/// let pretty_printed_tokens = tokens_to_string(&tokens)?;
/// assert_eq!(pretty_printed_tokens, "1 2 +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().context("Failed to build token string")
}
