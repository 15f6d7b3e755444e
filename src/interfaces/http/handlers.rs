use super::error::ApiError;
use crate::application::pay_employee::{PaidEmployee, PayEmployee, PayEmployeeRequest};
use crate::application::response::ResponseDispatcher;
use crate::application::use_case::UseCase;
use crate::error::PayEmployeeError;
use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::{info, warn};

/// Liveness probe: GET /healthz
pub async fn healthz() -> Response {
    (StatusCode::OK, "ok").into_response()
}

/// Pay an employee: GET /pay/:employee_id
///
/// Answers 200 `{"success": ...}` when the employee was paid and
/// 404 `{"failure": ...}` when the payment was refused.
pub async fn pay_employee(Path(employee_id): Path<String>) -> Result<Response, ApiError> {
    let request = PayEmployeeRequest::new(employee_id.clone());

    let dispatcher = ResponseDispatcher::respond(|r| {
        r.register_success(|paid: PaidEmployee| {
            info!(employee_id = %paid.employee_id, "employee paid");
            (StatusCode::OK, Json(json!({ "success": paid.message }))).into_response()
        })
        .register_failure(move |e: PayEmployeeError| {
            warn!(%employee_id, error = %e, "payment refused");
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "failure": format!("could not find {employee_id}: {e}") })),
            )
                .into_response()
        });
    });

    PayEmployee::new()
        .perform_with(request, dispatcher)
        .map_err(ApiError::from)
}
