//! Error body shared by every endpoint.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ErrorCode;

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn from_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(code.to_string(), message)
    }

    /// Malformed path parameters.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::InvalidFormat, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::Unauthorized, message)
    }

    /// Generic body for storage failures; the cause is logged, never returned.
    pub fn internal() -> Self {
        Self::from_code(ErrorCode::InternalError, "Internal server error")
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Pair the body with a status code.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Unwrap a JSON request body; rejected bodies become 400 `VALIDATION_FAILED`.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        tracing::debug!(rejection = %rejection.body_text(), "Rejected request body");
        ErrorResponse::from_code(ErrorCode::ValidationFailed, rejection.body_text())
            .into_response_with(StatusCode::BAD_REQUEST)
    })
}
