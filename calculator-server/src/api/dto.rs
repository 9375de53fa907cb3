use serde::{Deserialize, Serialize};

/// Body of `POST /api/{version}/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// Infix expression to evaluate. A missing field reads as empty.
    #[serde(default)]
    pub expression: String,
}

/// Successful evaluation, formatted with six decimals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub result: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
