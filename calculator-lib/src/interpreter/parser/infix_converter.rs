use crate::interpreter::error::{at, EvalError};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use std::collections::VecDeque;

/// Reorders infix tokens into postfix order using the shunting-yard algorithm.
pub(crate) fn infix_to_postfix(original_tokens: Vec<Token>) -> Result<Vec<Token>, EvalError> {
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut output: Vec<Token> = Vec::with_capacity(original_tokens.len());
    for (index, token) in original_tokens.into_iter().enumerate() {
        match token {
            Token::Number(_) if token.is_valid_number() => output.push(token),
            Token::OpenParenthesis => operators.push_front(token),
            Token::CloseParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output, index)?
            }
            Token::Plus | Token::Dash | Token::Asterisk | Token::ForwardSlash => {
                parse_operator_token(&mut operators, &mut output, token)?
            }
            Token::Number(ref text) => {
                return Err(EvalError::InsufficientValues(at(index, text)));
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<(), EvalError> {
    while let Some(operator) = operators.pop_front() {
        match operator {
            Token::OpenParenthesis | Token::CloseParenthesis => {
                return Err(EvalError::MismatchedParentheses(
                    "unterminated parentheses' group".to_string(),
                ));
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
    index: usize,
) -> Result<(), EvalError> {
    loop {
        match operators.pop_front() {
            None => {
                return Err(EvalError::MismatchedParentheses(at(
                    index,
                    Token::CloseParenthesis,
                )));
            }
            // Found the matching parenthesis, which is discarded.
            Some(Token::OpenParenthesis) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
    token: Token,
) -> Result<(), EvalError> {
    let operator = operator_of(&token)?;
    while let Some(top_of_operator_stack) = operators.front() {
        let other_operator = match top_of_operator_stack {
            Token::OpenParenthesis => break,
            other_token => operator_of(other_token)?,
        };
        // Equal precedence also pops, which keeps every operator left-associative.
        if !other_operator.precedence_ge(&operator) {
            break;
        }
        if let Some(other_operator_token) = operators.pop_front() {
            output.push(other_operator_token);
        }
    }

    operators.push_front(token);
    Ok(())
}

fn operator_of(token: &Token) -> Result<BinaryOperator, EvalError> {
    token.as_operator().ok_or_else(|| {
        EvalError::Unknown(format!("found non-operator {} in operator stack", token))
    })
}
