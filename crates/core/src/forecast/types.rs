//! Forecast data types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Status label meaning "nominal".
pub const ON_TRACK_LABEL: &str = "on track";

/// Status label the projection engine uses for everything else.
pub const OVER_BUDGET_LABEL: &str = "over budget";

/// Forecast for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryForecast {
    /// Spend recorded so far this month.
    #[serde(with = "rust_decimal::serde::float")]
    pub spent_so_far: Decimal,
    /// Monthly ceiling.
    #[serde(with = "rust_decimal::serde::float")]
    pub budget: Decimal,
    /// Projected spend at month end.
    #[serde(with = "rust_decimal::serde::float")]
    pub projected_end_of_month: Decimal,
    /// Free-form status label.
    pub status: String,
}

impl CategoryForecast {
    /// Status partition of [`status`](Self::status).
    #[must_use]
    pub fn status_kind(&self) -> ForecastStatus {
        ForecastStatus::from_label(&self.status)
    }
}

/// Body of a successful `GET /forecast`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Forecasts keyed by category name.
    pub forecast: BTreeMap<String, CategoryForecast>,
    /// Recommendations, in display order. Missing or `null` reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reccs: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Two-way partition of status labels.
///
/// Only the exact label `"on track"` is nominal. Every other label,
/// including ones the backend may add later, is a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastStatus {
    /// Neutral badge.
    OnTrack,
    /// Warning badge.
    AtRisk,
}

impl ForecastStatus {
    /// Classifies a status label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == ON_TRACK_LABEL {
            Self::OnTrack
        } else {
            Self::AtRisk
        }
    }

    /// Whether the badge should use the warning style.
    #[must_use]
    pub const fn is_warning(self) -> bool {
        matches!(self, Self::AtRisk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("on track", ForecastStatus::OnTrack)]
    #[case("over budget", ForecastStatus::AtRisk)]
    #[case("over", ForecastStatus::AtRisk)]
    #[case("On Track", ForecastStatus::AtRisk)]
    #[case("", ForecastStatus::AtRisk)]
    #[case("trending-up-v2", ForecastStatus::AtRisk)]
    fn test_status_partition(#[case] label: &str, #[case] expected: ForecastStatus) {
        assert_eq!(ForecastStatus::from_label(label), expected);
        assert_eq!(ForecastStatus::from_label(label).is_warning(), expected == ForecastStatus::AtRisk);
    }

    #[test]
    fn test_deserialize_forecast_response() {
        let json = r#"{
            "forecast": {
                "food": {"spent_so_far": 450, "budget": 500, "projected_end_of_month": 600.5, "status": "over budget"},
                "travel": {"spent_so_far": 10, "budget": 300, "projected_end_of_month": 30, "status": "on track"}
            },
            "reccs": ["Cook at home more often."]
        }"#;
        let result: ForecastResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.forecast.len(), 2);
        assert_eq!(result.forecast["food"].projected_end_of_month, dec!(600.5));
        assert_eq!(result.forecast["travel"].status_kind(), ForecastStatus::OnTrack);
        assert_eq!(result.reccs, vec!["Cook at home more often.".to_string()]);
    }

    #[rstest]
    #[case(r#"{"forecast": {}}"#)]
    #[case(r#"{"forecast": {}, "reccs": null}"#)]
    #[case(r#"{"forecast": {}, "reccs": []}"#)]
    fn test_missing_reccs_reads_as_empty(#[case] json: &str) {
        let result: ForecastResult = serde_json::from_str(json).unwrap();
        assert!(result.reccs.is_empty());
    }
}
