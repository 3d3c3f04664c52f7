//! API route definitions.

use axum::{Json, Router, http::StatusCode, response::IntoResponse, response::Response};
use finquest_shared::AppError;
use serde_json::json;

use crate::AppState;

pub mod budget;
pub mod forecast;
pub mod health;
pub mod transactions;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(budget::routes())
        .merge(transactions::routes())
        .merge(forecast::routes())
}

/// Renders an error as `{"error": "<context>: <error>", "code": ...}`.
pub(crate) fn error_response(context: &str, error: &AppError) -> Response {
    let status =
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": format!("{context}: {error}"),
            "code": error.error_code(),
        })),
    )
        .into_response()
}
