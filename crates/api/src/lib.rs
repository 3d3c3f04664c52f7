//! HTTP backend for the FinQuest dashboard.
//!
//! This crate provides:
//! - `GET`/`POST /budget` backed by a [`BudgetStore`]
//! - `GET /transactions` backed by a [`TransactionSource`]
//! - `GET /forecast`, combining both with a [`Recommender`]
//! - `GET /health`

pub mod recommender;
pub mod routes;
pub mod sources;
pub mod store;

use std::sync::Arc;

use axum::Router;
use chrono::NaiveDate;
use finquest_core::forecast::ForecastEngine;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use recommender::{Recommender, StaticRecommender};
pub use sources::{InMemoryTransactionSource, JsonFileTransactionSource, TransactionSource};
pub use store::{BudgetStore, InMemoryBudgetStore, JsonFileBudgetStore, StoreError};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Saved budget constraints.
    pub budgets: Arc<dyn BudgetStore>,
    /// Upstream transactions.
    pub transactions: Arc<dyn TransactionSource>,
    /// Recommendation text producer.
    pub recommender: Arc<dyn Recommender>,
    /// Projection engine for `/forecast`.
    pub engine: ForecastEngine,
    /// Current date, injectable for tests.
    pub today: fn() -> NaiveDate,
}

impl AppState {
    /// Creates state with the local calendar as clock.
    #[must_use]
    pub fn new(
        budgets: Arc<dyn BudgetStore>,
        transactions: Arc<dyn TransactionSource>,
        recommender: Arc<dyn Recommender>,
        engine: ForecastEngine,
    ) -> Self {
        Self {
            budgets,
            transactions,
            recommender,
            engine,
            today: local_today,
        }
    }
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    routes::api_routes()
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
