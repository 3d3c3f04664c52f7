//! Month-end spend projection by linear extrapolation.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use finquest_shared::{AppError, AppResult};
use rust_decimal::Decimal;

use super::types::{CategoryForecast, ON_TRACK_LABEL, OVER_BUDGET_LABEL};
use crate::budget::{BudgetCategory, BudgetConstraints};
use crate::transactions::Transaction;
use crate::transactions::categorize::OTHER_TAG;

/// Default month length used for extrapolation.
pub const DEFAULT_DAYS_IN_MONTH: u32 = 30;

/// Projects each category's month-end spend from spend so far.
#[derive(Debug, Clone, Copy)]
pub struct ForecastEngine {
    days_in_month: u32,
}

impl ForecastEngine {
    /// Creates an engine with a 30-day month.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            days_in_month: DEFAULT_DAYS_IN_MONTH,
        }
    }

    /// Creates an engine with a custom month length.
    #[must_use]
    pub const fn with_days_in_month(days_in_month: u32) -> Self {
        Self { days_in_month }
    }

    /// Spend per category, keyed by each transaction's first tag.
    ///
    /// Untagged transactions count as `other`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if a category total overflows.
    pub fn spend_by_category(transactions: &[Transaction]) -> AppResult<BTreeMap<String, Decimal>> {
        let mut spending: BTreeMap<String, Decimal> = BTreeMap::new();
        for tx in transactions {
            let category = tx.primary_category().unwrap_or(OTHER_TAG);
            let total = spending.entry(category.to_string()).or_insert(Decimal::ZERO);
            *total = total.checked_add(tx.amount).ok_or_else(|| {
                AppError::Validation(format!("spend total overflows for {category}"))
            })?;
        }
        Ok(spending)
    }

    /// Linear projection: `spent / days_elapsed * days_in_month`, 2 dp.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the projection overflows.
    pub fn project_amount(&self, spent: Decimal, days_elapsed: u32) -> AppResult<Decimal> {
        let days_elapsed = days_elapsed.max(1);
        spent
            .checked_div(Decimal::from(days_elapsed))
            .and_then(|daily| daily.checked_mul(Decimal::from(self.days_in_month)))
            .map(|projected| projected.round_dp(2))
            .ok_or_else(|| AppError::Validation("projected spend overflows".to_string()))
    }

    /// Builds the forecast for every category with recorded spend.
    ///
    /// Categories outside the six budget categories have a zero budget.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if spend totals or projections overflow.
    pub fn forecast(
        &self,
        transactions: &[Transaction],
        budgets: &BudgetConstraints,
        today: NaiveDate,
    ) -> AppResult<BTreeMap<String, CategoryForecast>> {
        let days_elapsed = today.day();

        Self::spend_by_category(transactions)?
            .into_iter()
            .map(|(category, spent)| {
                let projected = self.project_amount(spent, days_elapsed)?;
                let budget = BudgetCategory::from_key(&category)
                    .map_or(Decimal::ZERO, |c| budgets.get(c));
                let status = if projected <= budget {
                    ON_TRACK_LABEL
                } else {
                    OVER_BUDGET_LABEL
                };

                let forecast = CategoryForecast {
                    spent_so_far: spent.round_dp(2),
                    budget,
                    projected_end_of_month: projected,
                    status: status.to_string(),
                };
                Ok((category, forecast))
            })
            .collect()
    }
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tx(id: &str, amount: Decimal, tags: &[&str]) -> Transaction {
        Transaction {
            transaction_id: id.into(),
            account_id: "acc".into(),
            amount,
            merchant_name: "Merchant".into(),
            category: tags.iter().map(ToString::to_string).collect(),
            date: "2025-06-10".into(),
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    #[test]
    fn test_spend_by_first_tag_only() {
        let list = [
            tx("1", dec!(10), &["food", "travel"]),
            tx("2", dec!(5.5), &["food"]),
            tx("3", dec!(7), &[]),
        ];
        let spending = ForecastEngine::spend_by_category(&list).unwrap();

        assert_eq!(spending["food"], dec!(15.5));
        assert_eq!(spending["other"], dec!(7));
        assert!(!spending.contains_key("travel"));
    }

    #[test]
    fn test_project_amount() {
        let engine = ForecastEngine::new();
        assert_eq!(engine.project_amount(dec!(100), 10).unwrap(), dec!(300));
        assert_eq!(engine.project_amount(dec!(100), 30).unwrap(), dec!(100));
        assert_eq!(engine.project_amount(dec!(10), 3).unwrap(), dec!(100));

        let july = ForecastEngine::with_days_in_month(31);
        assert_eq!(july.project_amount(dec!(31), 31).unwrap(), dec!(31));
    }

    #[test]
    fn test_forecast_status_and_budget_lookup() {
        let budgets = BudgetConstraints {
            food: dec!(400),
            transport: dec!(50),
            ..BudgetConstraints::default()
        };
        let list = [
            tx("1", dec!(100), &["food"]),
            tx("2", dec!(30), &["transport"]),
            tx("3", dec!(12), &["other"]),
        ];

        let forecast = ForecastEngine::new().forecast(&list, &budgets, date(10)).unwrap();

        let food = &forecast["food"];
        assert_eq!(food.spent_so_far, dec!(100));
        assert_eq!(food.projected_end_of_month, dec!(300));
        assert_eq!(food.budget, dec!(400));
        assert_eq!(food.status, ON_TRACK_LABEL);

        let transport = &forecast["transport"];
        assert_eq!(transport.projected_end_of_month, dec!(90));
        assert_eq!(transport.status, OVER_BUDGET_LABEL);

        let other = &forecast["other"];
        assert_eq!(other.budget, Decimal::ZERO);
        assert_eq!(other.status, OVER_BUDGET_LABEL);
    }

    #[test]
    fn test_projection_equal_to_budget_is_on_track() {
        let budgets = BudgetConstraints {
            bills: dec!(300),
            ..BudgetConstraints::default()
        };
        let forecast =
            ForecastEngine::new()
            .forecast(&[tx("1", dec!(100), &["bills"])], &budgets, date(10))
            .unwrap();
        assert_eq!(forecast["bills"].status, ON_TRACK_LABEL);
    }

    #[test]
    fn test_no_transactions_no_forecast() {
        let forecast =
            ForecastEngine::new()
            .forecast(&[], &BudgetConstraints::default(), date(1))
            .unwrap();
        assert!(forecast.is_empty());
    }

    #[test]
    fn test_spend_overflow_is_validation_error() {
        let big = Decimal::from_scientific("5e28").unwrap();
        let list = [tx("1", big, &["food"]), tx("2", big, &["food"])];

        let err = ForecastEngine::new()
            .forecast(&list, &BudgetConstraints::default(), date(10))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_projection_overflow_is_validation_error() {
        let big = Decimal::from_scientific("5e28").unwrap();
        let err = ForecastEngine::new().project_amount(big, 1).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
