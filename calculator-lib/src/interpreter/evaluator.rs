use crate::interpreter::error::{at, EvalError};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::{parse_number, Token, MAX_MAGNITUDE};

/// Computes the value of an expression given in postfix order.
///
/// # Arguments
///
/// * `postfix_tokens`: The tokens to evaluate, as produced by the parser.
///
/// returns: The single value the expression reduces to.
///
/// # Examples
///
/// ```
/// use calculator::interpreter::evaluator::evaluate_postfix;
/// use calculator::interpreter::token::Token;
///
/// let postfix_tokens = vec![
///     Token::new_number("8"),
///     Token::new_number("2"),
///     Token::Dash,
/// ];
/// assert_eq!(evaluate_postfix(&postfix_tokens), Ok(6.0));
/// ```
pub fn evaluate_postfix(postfix_tokens: &[Token]) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix_tokens.len());

    for (index, token) in postfix_tokens.iter().enumerate() {
        match token {
            Token::Number(text) => {
                let value = parse_number(text).ok_or_else(|| {
                    EvalError::Unknown(format!("unparsable number {}", at(index, text)))
                })?;
                stack.push(value);
            }
            token => {
                let operator = token.as_operator().ok_or_else(|| {
                    EvalError::Unknown(format!("unexpected token {}", at(index, token)))
                })?;
                let (a, b) = match (stack.pop(), stack.pop()) {
                    (Some(b), Some(a)) => (a, b),
                    _ => return Err(EvalError::InsufficientValues(at(index, token))),
                };
                stack.push(apply(operator, a, b, index)?);
            }
        }
    }

    match stack.as_slice() {
        // Normalises -0 so a zero result always reads as 0.
        [value] if *value == 0.0 => Ok(0.0),
        [value] => Ok(*value),
        values => Err(EvalError::TooManyValues(format!(
            "{} values left after evaluation",
            values.len()
        ))),
    }
}

fn apply(operator: BinaryOperator, a: f64, b: f64, index: usize) -> Result<f64, EvalError> {
    if operator == BinaryOperator::Divide && b == 0.0 {
        return Err(EvalError::DivisionByZero(at(index, operator)));
    }
    let result = operator.evaluate(a, b);
    if result.abs() > MAX_MAGNITUDE {
        return Err(EvalError::TooLargeNumber(format!(
            "result of {:e} {} {:e} exceeds {:e}",
            a, operator, b, MAX_MAGNITUDE
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    fn tokens_of(symbols: &[&str]) -> Vec<Token> {
        symbols
            .iter()
            .map(|symbol| symbol.parse().unwrap())
            .collect()
    }

    #[parameterized(
        postfix = {
            &["1", "2", "+"],
            &["1", "2", "3", "*", "+"],
            &["1", "2", "+", "3", "*"],
            &["3", "2", "1", "*", "+"],
            &["8", "3", "-", "2", "-"],
            &["9", "3", "/"],
            &["8", "-1", "2", "*", "/"],
            &["2.5"]
        },
        expected = { 3.0, 7.0, 9.0, 5.0, 3.0, 3.0, -4.0, 2.5 }
    )]
    fn evaluate_postfix_returns_value(postfix: &[&str], expected: f64) {
        let actual = evaluate_postfix(&tokens_of(postfix)).unwrap();

        assert_eq!(actual, expected);
    }

    #[test]
    fn division_by_zero_should_return_err() {
        let actual = evaluate_postfix(&tokens_of(&["1", "0", "/"])).unwrap_err();

        assert_eq!(actual, EvalError::DivisionByZero("position 2: /".into()));
    }

    #[test]
    fn division_by_negative_zero_should_return_err() {
        let actual = evaluate_postfix(&tokens_of(&["1", "-1", "0", "*", "/"])).unwrap_err();

        assert!(matches!(actual, EvalError::DivisionByZero(_)));
    }

    #[test]
    fn operator_without_two_values_should_return_err() {
        let actual = evaluate_postfix(&tokens_of(&["1", "+"])).unwrap_err();

        assert_eq!(actual, EvalError::InsufficientValues("position 1: +".into()));
    }

    #[test]
    fn leftover_values_should_return_err() {
        let actual = evaluate_postfix(&tokens_of(&["1", "2"])).unwrap_err();

        assert_eq!(
            actual,
            EvalError::TooManyValues("2 values left after evaluation".into())
        );
    }

    #[test]
    fn no_values_should_return_err() {
        let actual = evaluate_postfix(&[]).unwrap_err();

        assert!(matches!(actual, EvalError::TooManyValues(_)));
    }

    #[test]
    fn overflowing_result_should_return_err() {
        let actual = evaluate_postfix(&tokens_of(&["1e308", "10", "*"])).unwrap_err();

        assert_eq!(
            actual,
            EvalError::TooLargeNumber("result of 1e308 * 1e1 exceeds 1e308".into())
        );
    }

    #[test]
    fn result_at_the_magnitude_limit_is_accepted() {
        let actual = evaluate_postfix(&tokens_of(&["1e308", "1", "*"])).unwrap();

        assert_eq!(actual, 1e308);
    }

    #[test]
    fn zero_result_is_not_an_error() {
        let actual = evaluate_postfix(&tokens_of(&["2", "2", "-"])).unwrap();

        assert_eq!(actual, 0.0);
    }

    #[test]
    fn negative_zero_result_reads_as_positive_zero() {
        let actual = evaluate_postfix(&tokens_of(&["-1", "0", "*"])).unwrap();

        assert!(actual.is_sign_positive());
    }

    #[test]
    fn parenthesis_in_postfix_is_an_unknown_state() {
        let actual = evaluate_postfix(&[Token::OpenParenthesis]).unwrap_err();

        assert!(!actual.is_client_error());
    }
}
