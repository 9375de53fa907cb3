use crate::interpreter::error::{at, EvalError};
use crate::interpreter::token::Token;
use std::mem;

/// What the lexer saw last, which decides how the next character is read.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum PreviousToken {
    Empty,
    Number,
    Dot,
    Operator,
    UnaryMinus,
    OpenParenthesis,
    CloseParenthesis,
}

/// Splits an infix expression into tokens.
///
/// A minus that cannot be a subtraction is rewritten as a multiplication by `-1` of the number
/// or parenthesised group that follows it, so the later stages only ever see binary operators.
/// The rewrite is wrapped in its own parentheses so that it binds to that operand alone and
/// `8 / -2` stays `8 / (-1 * 2)`. Number tokens keep their literal text; whether that text is a
/// valid number is checked when it is parsed.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in infix order.
///
/// # Examples
///
/// ```
/// use calculator::interpreter::lexer::tokenize;
/// use calculator::interpreter::token::Token;
///
/// let tokens = tokenize("-2 * 3").unwrap();
/// assert_eq!(tokens, vec![
///     Token::OpenParenthesis,
///     Token::new_number("-1"),
///     Token::Asterisk,
///     Token::new_number("2"),
///     Token::CloseParenthesis,
///     Token::Asterisk,
///     Token::new_number("3"),
/// ]);
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, EvalError> {
    let mut lexer = Lexer::new();
    for (position, character) in expression.chars().enumerate() {
        lexer.consume(position, character)?;
    }
    lexer.finish()
}

struct Lexer {
    tokens: Vec<Token>,
    number: String,
    open_parentheses: usize,
    previous: PreviousToken,
    negated_number: bool,
    /// Depths of the open groups that a unary minus applies to.
    negated_groups: Vec<usize>,
}

impl Lexer {
    fn new() -> Lexer {
        Lexer {
            tokens: Vec::new(),
            number: String::new(),
            open_parentheses: 0,
            previous: PreviousToken::Empty,
            negated_number: false,
            negated_groups: Vec::new(),
        }
    }

    fn consume(&mut self, position: usize, character: char) -> Result<(), EvalError> {
        match character {
            c if c.is_whitespace() => Ok(()),
            c if c.is_ascii_digit() => {
                self.consume_digit(c);
                Ok(())
            }
            '.' => self.consume_dot(position, character),
            '(' => self.consume_open_parenthesis(position, character),
            ')' => self.consume_close_parenthesis(position, character),
            '-' => self.consume_dash(position, character),
            '+' | '*' | '/' => self.consume_operator(position, character),
            _ => Err(EvalError::InvalidCharacter(at(position, character))),
        }
    }

    fn consume_digit(&mut self, digit: char) {
        if self.previous == PreviousToken::UnaryMinus {
            self.open_negation();
            self.negated_number = true;
        }
        self.number.push(digit);
        self.previous = PreviousToken::Number;
    }

    fn consume_dot(&mut self, position: usize, dot: char) -> Result<(), EvalError> {
        if self.previous != PreviousToken::Number {
            return Err(EvalError::InsufficientValues(format!(
                "decimal dot delimiter not after number, {}",
                at(position, dot)
            )));
        }
        self.number.push(dot);
        self.previous = PreviousToken::Dot;
        Ok(())
    }

    fn consume_open_parenthesis(
        &mut self,
        position: usize,
        parenthesis: char,
    ) -> Result<(), EvalError> {
        let negated = match self.previous {
            PreviousToken::Empty | PreviousToken::OpenParenthesis | PreviousToken::Operator => {
                false
            }
            PreviousToken::UnaryMinus => true,
            _ => {
                return Err(EvalError::MismatchedParentheses(at(position, parenthesis)));
            }
        };
        if negated {
            self.open_negation();
        }
        self.tokens.push(Token::OpenParenthesis);
        self.open_parentheses += 1;
        if negated {
            self.negated_groups.push(self.open_parentheses);
        }
        self.previous = PreviousToken::OpenParenthesis;
        Ok(())
    }

    fn consume_close_parenthesis(
        &mut self,
        position: usize,
        parenthesis: char,
    ) -> Result<(), EvalError> {
        match self.previous {
            PreviousToken::Number | PreviousToken::CloseParenthesis => self.flush_number(),
            _ => {
                return Err(EvalError::MismatchedParentheses(at(position, parenthesis)));
            }
        }
        let depth = self.open_parentheses;
        self.open_parentheses = depth
            .checked_sub(1)
            .ok_or_else(|| EvalError::MismatchedParentheses(at(position, parenthesis)))?;
        self.tokens.push(Token::CloseParenthesis);
        if self.negated_groups.last() == Some(&depth) {
            self.negated_groups.pop();
            self.tokens.push(Token::CloseParenthesis);
        }
        self.previous = PreviousToken::CloseParenthesis;
        Ok(())
    }

    fn consume_dash(&mut self, position: usize, dash: char) -> Result<(), EvalError> {
        match self.previous {
            PreviousToken::Empty | PreviousToken::OpenParenthesis | PreviousToken::Operator => {
                self.previous = PreviousToken::UnaryMinus;
                Ok(())
            }
            PreviousToken::Number | PreviousToken::CloseParenthesis => {
                self.push_operator(Token::Dash);
                Ok(())
            }
            _ => Err(EvalError::TooManyValues(at(position, dash))),
        }
    }

    fn consume_operator(&mut self, position: usize, symbol: char) -> Result<(), EvalError> {
        match self.previous {
            PreviousToken::Number | PreviousToken::CloseParenthesis => {
                let token = match symbol {
                    '+' => Token::Plus,
                    '*' => Token::Asterisk,
                    _ => Token::ForwardSlash,
                };
                self.push_operator(token);
                Ok(())
            }
            _ => Err(EvalError::MismatchedOperator(at(position, symbol))),
        }
    }

    fn push_operator(&mut self, operator: Token) {
        self.flush_number();
        self.tokens.push(operator);
        self.previous = PreviousToken::Operator;
    }

    fn flush_number(&mut self) {
        if !self.number.is_empty() {
            let text = mem::take(&mut self.number);
            self.tokens.push(Token::Number(text));
        }
        if mem::take(&mut self.negated_number) {
            self.tokens.push(Token::CloseParenthesis);
        }
    }

    fn open_negation(&mut self) {
        self.tokens.push(Token::OpenParenthesis);
        self.tokens.extend(Token::negation());
    }

    fn finish(mut self) -> Result<Vec<Token>, EvalError> {
        self.flush_number();
        if self.open_parentheses != 0 {
            return Err(EvalError::MismatchedParentheses(
                "unterminated last parentheses' group".to_string(),
            ));
        }
        Ok(self.tokens)
    }
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
        expression = {
            "1+2*3",
            "(1+2)*3",
            "-1+2",
            "2*-3",
            "2*-3.14",
            "1 + 2",
            "(-1 + 2) * 3",
            "1.2 - 0.5 * 3",
            "(-2.3 + 4.5) / 1.1 - 2 * 3.3",
            "-(2 + 3)",
            "4 - -(1)",
            "8 / -2",
            "-(-(2))"
        },
        expected = {
            &["1", "+", "2", "*", "3"],
            &["(", "1", "+", "2", ")", "*", "3"],
            &["(", "-1", "*", "1", ")", "+", "2"],
            &["2", "*", "(", "-1", "*", "3", ")"],
            &["2", "*", "(", "-1", "*", "3.14", ")"],
            &["1", "+", "2"],
            &["(", "(", "-1", "*", "1", ")", "+", "2", ")", "*", "3"],
            &["1.2", "-", "0.5", "*", "3"],
            &["(", "(", "-1", "*", "2.3", ")", "+", "4.5", ")", "/", "1.1", "-", "2", "*", "3.3"],
            &["(", "-1", "*", "(", "2", "+", "3", ")", ")"],
            &["4", "-", "(", "-1", "*", "(", "1", ")", ")"],
            &["8", "/", "(", "-1", "*", "2", ")"],
            &["(", "-1", "*", "(", "(", "-1", "*", "(", "2", ")", ")", ")", ")"]
        }
    )]
    fn well_formed_expression_returns_tokens(expression: &str, expected: &[&str]) {
        let actual = tokenize(expression).unwrap();

        assert_eq!(actual, tokens_of(expected));
    }

    #[test]
    fn repeated_dots_stay_in_one_number_token() {
        let actual = tokenize("1.2.3 + 2").unwrap();

        assert_eq!(
            actual,
            vec![Token::new_number("1.2.3"), Token::Plus, Token::new_number("2")]
        );
    }

    #[test]
    fn digits_separated_by_whitespace_form_one_number() {
        let actual = tokenize("1 2").unwrap();

        assert_eq!(actual, vec![Token::new_number("12")]);
    }

    #[test]
    fn empty_expression_returns_no_tokens() {
        assert_eq!(tokenize("  ").unwrap(), Vec::new());
    }

    #[parameterized(
        expression = {
            ". + 1",
            "1.234 + 1 -* 2",
            "1.234 + 1 --- 2",
            "(2 + 3",
            "(2 + ((((((((3)))",
            "2 + 3)",
            "* 1",
            "-* 1",
            "2a+2",
            "1 + ()",
            "2(3)",
            "1. + 2"
        },
        expected = {
            EvalError::InsufficientValues("decimal dot delimiter not after number, position 0: .".into()),
            EvalError::MismatchedOperator("position 11: *".into()),
            EvalError::TooManyValues("position 12: -".into()),
            EvalError::MismatchedParentheses("unterminated last parentheses' group".into()),
            EvalError::MismatchedParentheses("unterminated last parentheses' group".into()),
            EvalError::MismatchedParentheses("position 5: )".into()),
            EvalError::MismatchedOperator("position 0: *".into()),
            EvalError::MismatchedOperator("position 1: *".into()),
            EvalError::InvalidCharacter("position 1: a".into()),
            EvalError::MismatchedParentheses("position 5: )".into()),
            EvalError::MismatchedParentheses("position 1: (".into()),
            EvalError::MismatchedOperator("position 3: +".into())
        }
    )]
    fn malformed_expression_returns_err(expression: &str, expected: EvalError) {
        let actual = tokenize(expression).unwrap_err();

        assert_eq!(actual, expected);
    }

    #[test]
    fn invalid_character_position_counts_characters_not_bytes() {
        let actual = tokenize("ä+x").unwrap_err();

        assert_eq!(actual, EvalError::InvalidCharacter("position 0: ä".into()));

        let actual = tokenize("1 × 2").unwrap_err();

        assert_eq!(actual, EvalError::InvalidCharacter("position 2: ×".into()));
    }
}
