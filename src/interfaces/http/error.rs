use crate::error::PayrollError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

/// Wraps crate errors that escape a handler so axum can render them.
///
/// Refused payments never reach this type; they are answered by the failure
/// callback. Anything arriving here is a wiring mistake and maps to a 500.
#[derive(Debug)]
pub struct ApiError(PayrollError);

impl From<PayrollError> for ApiError {
    fn from(err: PayrollError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}
