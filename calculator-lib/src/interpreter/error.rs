use std::fmt::Display;
use thiserror::Error;

/// Every way an expression can be rejected.
///
/// Each kind carries a detail string that usually names the offending symbol and where it was
/// found, and that detail is part of the message for every kind but `DivisionByZero`. Errors are terminal: the first one detected ends the evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("invalid character: {0}")]
    InvalidCharacter(String),

    #[error("mismatched parentheses: {0}")]
    MismatchedParentheses(String),

    #[error("insufficient values in expression: {0}")]
    InsufficientValues(String),

    #[error("division by zero")]
    DivisionByZero(String),

    #[error("too many values in expression: {0}")]
    TooManyValues(String),

    #[error("number too large: {0}")]
    TooLargeNumber(String),

    #[error("mismatched operator: {0}")]
    MismatchedOperator(String),

    /// A state the pipeline should never reach. Not caused by the input.
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl EvalError {
    /// Whether the error was caused by the submitted expression rather than by the evaluator.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, EvalError::Unknown(_))
    }
}

/// Formats the location of a symbol for an error detail, e.g. `position 3: +`.
pub(crate) fn at(position: usize, symbol: impl Display) -> String {
    format!("position {}: {}", position, symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn message_includes_kind_and_detail() {
        let error = EvalError::InvalidCharacter(at(1, 'a'));

        assert_eq!(error.to_string(), "invalid character: position 1: a");
    }

    #[test]
    fn division_by_zero_message_is_fixed() {
        let error = EvalError::DivisionByZero(at(2, '/'));

        assert_eq!(error.to_string(), "division by zero");
    }

    #[test]
    fn taxonomy_errors_are_client_errors() {
        let errors = [
            EvalError::InvalidCharacter(String::new()),
            EvalError::MismatchedParentheses(String::new()),
            EvalError::InsufficientValues(String::new()),
            EvalError::DivisionByZero(String::new()),
            EvalError::TooManyValues(String::new()),
            EvalError::TooLargeNumber(String::new()),
            EvalError::MismatchedOperator(String::new()),
        ];

        assert!(errors.iter().all(EvalError::is_client_error));
    }

    #[test]
    fn unknown_error_is_not_a_client_error() {
        assert!(!EvalError::Unknown("empty stack".into()).is_client_error());
    }
}
