//! Maps calculation failures onto HTTP responses.

use crate::api::dto::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use calculator::EvalError;
use log::error;
use thiserror::Error;

/// Everything the calculate endpoint can fail with.
///
/// Request-side problems become 4xx responses that echo the reason; server-side problems become
/// a 500 with a generic message and are logged instead.
#[derive(Error, Debug)]
pub enum CalculateError {
    #[error("{0}")]
    InvalidBody(String),

    #[error("'expression' field is required.")]
    MissingExpression,

    #[error("request error: {0}")]
    Request(EvalError),

    #[error("server error: {0}")]
    Server(EvalError),
}

impl From<EvalError> for CalculateError {
    fn from(error: EvalError) -> Self {
        if error.is_client_error() {
            CalculateError::Request(error)
        } else {
            CalculateError::Server(error)
        }
    }
}

impl CalculateError {
    pub fn status(&self) -> StatusCode {
        match self {
            CalculateError::InvalidBody(_) | CalculateError::MissingExpression => {
                StatusCode::BAD_REQUEST
            }
            CalculateError::Request(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CalculateError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CalculateError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            CalculateError::Server(_) => {
                error!("{}", self);
                StatusCode::INTERNAL_SERVER_ERROR
                    .canonical_reason()
                    .unwrap_or("Internal Server Error")
                    .to_string()
            }
            _ => self.to_string(),
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
