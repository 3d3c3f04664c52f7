//! Spending forecast route.

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};
use finquest_core::forecast::ForecastResult;
use finquest_shared::AppError;
use tracing::{debug, error};

use super::error_response;
use crate::AppState;

const CONTEXT: &str = "Failed to generate forecast";

/// Creates the forecast routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/forecast", get(get_forecast))
}

async fn get_forecast(State(state): State<AppState>) -> impl IntoResponse {
    let transactions = match state.transactions.transactions().await {
        Ok(transactions) => transactions,
        Err(e) => {
            error!(error = %e, "Failed to load transactions for forecast");
            return error_response(CONTEXT, &AppError::Internal(e.to_string()));
        }
    };

    let budgets = match state.budgets.load().await {
        Ok(budgets) => budgets,
        Err(e) => {
            error!(error = %e, "Failed to load budget for forecast");
            return error_response(CONTEXT, &AppError::Internal(e.to_string()));
        }
    };

    let today = (state.today)();
    let forecast = match state.engine.forecast(&transactions, &budgets, today) {
        Ok(forecast) => forecast,
        Err(e) => {
            error!(error = %e, "Failed to project spending");
            return error_response(CONTEXT, &e);
        }
    };
    debug!(%today, categories = forecast.len(), "Forecast computed");

    let reccs = match state.recommender.recommend(&forecast).await {
        Ok(reccs) => reccs,
        Err(e) => {
            error!(error = %e, "Failed to produce recommendations");
            return error_response(CONTEXT, &e);
        }
    };

    (StatusCode::OK, Json(ForecastResult { forecast, reccs })).into_response()
}
