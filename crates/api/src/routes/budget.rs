//! Budget constraint routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use finquest_core::budget::{BudgetCategory, BudgetConstraints};
use finquest_shared::AppError;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};

use super::error_response;
use crate::AppState;

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/budget", get(get_budget).post(save_budget))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for `POST /budget`: lowercase keys, missing ones are zero.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SaveBudgetRequest {
    /// Food and dining.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub food: Option<Decimal>,
    /// Travel.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub travel: Option<Decimal>,
    /// Shopping.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub shopping: Option<Decimal>,
    /// Entertainment.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub entertainment: Option<Decimal>,
    /// Bills and utilities.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub bills: Option<Decimal>,
    /// Transportation.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub transport: Option<Decimal>,
}

impl SaveBudgetRequest {
    /// Converts to constraints, rejecting negative amounts.
    fn into_constraints(self) -> Result<BudgetConstraints, AppError> {
        let pairs = [
            (BudgetCategory::Food, self.food),
            (BudgetCategory::Travel, self.travel),
            (BudgetCategory::Shopping, self.shopping),
            (BudgetCategory::Entertainment, self.entertainment),
            (BudgetCategory::Bills, self.bills),
            (BudgetCategory::Transport, self.transport),
        ];

        let mut constraints = BudgetConstraints::default();
        for (category, amount) in pairs {
            let amount = amount.unwrap_or(Decimal::ZERO);
            if amount.is_sign_negative() && !amount.is_zero() {
                return Err(AppError::Validation(format!(
                    "{} must not be negative",
                    category.key()
                )));
            }
            constraints.set(category, amount);
        }
        Ok(constraints)
    }
}

// ============================================================================
// Handlers
// ============================================================================

async fn get_budget(State(state): State<AppState>) -> impl IntoResponse {
    match state.budgets.load().await {
        Ok(constraints) => (StatusCode::OK, Json(constraints.to_wire())).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to load budget");
            error_response("Failed to get budget", &AppError::from(e))
        }
    }
}

async fn save_budget(
    State(state): State<AppState>,
    payload: Result<Json<SaveBudgetRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Rejected budget payload");
            return (
                rejection.status(),
                Json(json!({
                    "error": rejection.body_text(),
                    "code": "VALIDATION_ERROR",
                })),
            )
                .into_response();
        }
    };

    let constraints = match request.into_constraints() {
        Ok(constraints) => constraints,
        Err(e) => {
            warn!(error = %e, "Rejected budget payload");
            return error_response("Failed to save budget", &e);
        }
    };

    match state.budgets.save(&constraints).await {
        Ok(()) => {
            info!(total = %constraints.total(), "Budget constraints updated");
            (
                StatusCode::OK,
                Json(json!({
                    "message": "Budget saved successfully",
                    "budgets": constraints.to_wire(),
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to save budget");
            error_response("Failed to save budget", &AppError::from(e))
        }
    }
}
