//! Recommendation text producers.

use std::collections::BTreeMap;

use async_trait::async_trait;
use finquest_core::forecast::CategoryForecast;
use finquest_shared::AppError;

/// Produces free-text recommendations for a forecast.
///
/// The output is opaque display text, shown in order.
#[async_trait]
pub trait Recommender: Send + Sync {
    /// Returns recommendation lines for `forecast`; may be empty.
    async fn recommend(
        &self,
        forecast: &BTreeMap<String, CategoryForecast>,
    ) -> Result<Vec<String>, AppError>;
}

/// Returns the same configured lines for every forecast.
#[derive(Debug, Clone, Default)]
pub struct StaticRecommender {
    lines: Vec<String>,
}

impl StaticRecommender {
    /// Creates a recommender that always answers with `lines`.
    #[must_use]
    pub const fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

#[async_trait]
impl Recommender for StaticRecommender {
    async fn recommend(
        &self,
        _forecast: &BTreeMap<String, CategoryForecast>,
    ) -> Result<Vec<String>, AppError> {
        Ok(self.lines.clone())
    }
}
