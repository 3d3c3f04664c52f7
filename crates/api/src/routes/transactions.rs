//! Transaction list route.

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};
use finquest_core::transactions::TransactionsResponse;
use finquest_shared::AppError;
use tracing::error;

use super::error_response;
use crate::AppState;

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/transactions", get(list_transactions))
}

async fn list_transactions(State(state): State<AppState>) -> impl IntoResponse {
    match state.transactions.transactions().await {
        Ok(transactions) => {
            (StatusCode::OK, Json(TransactionsResponse { transactions })).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to load transactions");
            error_response("Failed to get transactions", &AppError::from(e))
        }
    }
}
