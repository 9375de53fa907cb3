use crate::interpreter::error::EvalError;
use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// Largest magnitude a literal or any computed value may have.
pub const MAX_MAGNITUDE: f64 = 1e308;

/// A discrete part of an expression
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// The literal decimal text of a number, parsed only when it is needed.
    Number(String),
    Plus,
    Dash,
    Asterisk,
    ForwardSlash,
    OpenParenthesis,
    CloseParenthesis,
}

impl Token {
    pub fn new_number(text: impl Into<String>) -> Token {
        Token::Number(text.into())
    }

    /// The tokens that stand in for a unary minus: `-1 *`. The lexer wraps them, together with
    /// the negated operand, in parentheses.
    pub fn negation() -> [Token; 2] {
        [Token::new_number("-1"), Token::Asterisk]
    }

    /// A number token whose text is a finite value within [`MAX_MAGNITUDE`].
    pub fn is_valid_number(&self) -> bool {
        match self {
            Token::Number(text) => is_number(text),
            _ => false,
        }
    }

    pub fn as_operator(&self) -> Option<BinaryOperator> {
        match self {
            Token::Plus => Some(BinaryOperator::Add),
            Token::Dash => Some(BinaryOperator::Subtract),
            Token::Asterisk => Some(BinaryOperator::Multiply),
            Token::ForwardSlash => Some(BinaryOperator::Divide),
            _ => None,
        }
    }
}

/// Whether the text parses as a float whose magnitude does not exceed [`MAX_MAGNITUDE`].
pub fn is_number(text: &str) -> bool {
    parse_number(text).is_some()
}

pub(crate) fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.abs() <= MAX_MAGNITUDE)
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Plus => write!(f, "+"),
            Token::Dash => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::ForwardSlash => write!(f, "/"),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl str::FromStr for Token {
    type Err = EvalError;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        match input {
            "+" => Ok(Token::Plus),
            "-" => Ok(Token::Dash),
            "*" => Ok(Token::Asterisk),
            "/" => Ok(Token::ForwardSlash),
            "(" => Ok(Token::OpenParenthesis),
            ")" => Ok(Token::CloseParenthesis),
            text if is_number(text) => Ok(Token::new_number(text)),
            text => Err(EvalError::InvalidCharacter(text.to_string())),
        }
    }
}
