//! FinQuest API Server
//!
//! Main entry point for the FinQuest backend service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finquest_api::{
    AppState, JsonFileBudgetStore, JsonFileTransactionSource, StaticRecommender, create_router,
};
use finquest_core::forecast::ForecastEngine;
use finquest_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finquest=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    info!(
        budgets = %config.data.budgets_file,
        transactions = %config.data.transactions_file,
        days_in_month = config.forecast.days_in_month,
        "Data sources configured"
    );

    let state = AppState::new(
        Arc::new(JsonFileBudgetStore::new(&config.data.budgets_file)),
        Arc::new(JsonFileTransactionSource::new(&config.data.transactions_file)),
        Arc::new(StaticRecommender::new(config.recommendations.fallback.clone())),
        ForecastEngine::with_days_in_month(config.forecast.days_in_month),
    );

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
