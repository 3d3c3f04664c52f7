//! Spend forecasts: the wire records, display reconciliation, and the
//! projection engine that produces them.

pub mod projection;
pub mod recommendations;
pub mod reconcile;
pub mod types;

#[cfg(test)]
mod tests;

pub use projection::ForecastEngine;
pub use recommendations::{NO_RECOMMENDATIONS, RecommendationsView};
pub use reconcile::{ForecastReconciler, ReconciledCategory};
pub use types::{CategoryForecast, ForecastResult, ForecastStatus};
