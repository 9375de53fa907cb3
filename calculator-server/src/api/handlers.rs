use crate::api::dto::{CalculateRequest, CalculateResponse};
use crate::api::error::CalculateError;
use axum::body::Bytes;
use axum::Json;
use log::debug;

/// Handler for `POST /api/{version}/calculate`.
///
/// The body is decoded regardless of its content type, as long as it is a JSON object.
pub async fn calculate(body: Bytes) -> Result<Json<CalculateResponse>, CalculateError> {
    let request: CalculateRequest = serde_json::from_slice(&body)
        .map_err(|error| CalculateError::InvalidBody(error.to_string()))?;

    if request.expression.is_empty() {
        return Err(CalculateError::MissingExpression);
    }

    let result = calculator::evaluate(&request.expression)?;
    debug!("{:?} = {}", request.expression, result);

    Ok(Json(CalculateResponse {
        result: format!("{:.6}", result),
    }))
}

/// Liveness probe.
pub async fn ping() -> &'static str {
    "."
}
