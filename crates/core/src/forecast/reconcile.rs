//! Reconciliation: display-ready figures derived from a category forecast.

use rust_decimal::Decimal;

use super::types::{CategoryForecast, ForecastResult, ForecastStatus};

/// A category forecast plus everything the view derives from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledCategory {
    /// Category name as served.
    pub category: String,
    /// Spend so far.
    pub spent: Decimal,
    /// Monthly ceiling.
    pub budget: Decimal,
    /// Projected month-end spend.
    pub projected: Decimal,
    /// Status label as served.
    pub status_label: String,
    /// Badge partition of the label.
    pub status: ForecastStatus,
    /// Spent / budget, clamped to `[0, 100]` for bar width.
    pub spent_percentage: Decimal,
    /// Projected / budget, clamped to `[0, 100]` for bar width.
    pub projected_percentage: Decimal,
    /// `projected - budget` when the projection exceeds the budget.
    pub over_budget_by: Option<Decimal>,
}

impl ReconciledCategory {
    /// Whether the over-budget warning line is shown.
    #[must_use]
    pub const fn is_over_budget(&self) -> bool {
        self.over_budget_by.is_some()
    }
}

/// Derives presentation values from raw forecast numbers.
pub struct ForecastReconciler;

impl ForecastReconciler {
    /// Raw `value / budget * 100`, rounded to 2 dp.
    ///
    /// A zero budget yields zero rather than a non-finite ratio. A ratio too
    /// large for `Decimal` saturates to `Decimal::MAX` (or `MIN` when the
    /// signs differ), which clamps to a full or empty bar.
    #[must_use]
    pub fn raw_percentage(value: Decimal, budget: Decimal) -> Decimal {
        if budget.is_zero() {
            return Decimal::ZERO;
        }
        value
            .checked_div(budget)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map_or_else(
                || {
                    if value.is_sign_negative() == budget.is_sign_negative() {
                        Decimal::MAX
                    } else {
                        Decimal::MIN
                    }
                },
                |percentage| percentage.round_dp(2),
            )
    }

    /// Clamps a percentage into the displayable `[0, 100]` range.
    #[must_use]
    pub fn clamp_percentage(percentage: Decimal) -> Decimal {
        percentage.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
    }

    /// Amount by which the projection exceeds the budget, if it does.
    ///
    /// Compares the unclamped figures.
    #[must_use]
    pub fn over_budget_by(projected: Decimal, budget: Decimal) -> Option<Decimal> {
        (projected > budget).then(|| projected.checked_sub(budget).unwrap_or(Decimal::MAX))
    }

    /// Reconciles one category.
    #[must_use]
    pub fn reconcile(category: &str, forecast: &CategoryForecast) -> ReconciledCategory {
        let budget = forecast.budget;

        ReconciledCategory {
            category: category.to_string(),
            spent: forecast.spent_so_far,
            budget,
            projected: forecast.projected_end_of_month,
            status_label: forecast.status.clone(),
            status: forecast.status_kind(),
            spent_percentage: Self::clamp_percentage(Self::raw_percentage(
                forecast.spent_so_far,
                budget,
            )),
            projected_percentage: Self::clamp_percentage(Self::raw_percentage(
                forecast.projected_end_of_month,
                budget,
            )),
            over_budget_by: Self::over_budget_by(forecast.projected_end_of_month, budget),
        }
    }

    /// Reconciles every category, in the result's key order.
    #[must_use]
    pub fn reconcile_all(result: &ForecastResult) -> Vec<ReconciledCategory> {
        result
            .forecast
            .iter()
            .map(|(category, forecast)| Self::reconcile(category, forecast))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn forecast(spent: Decimal, budget: Decimal, projected: Decimal, status: &str) -> CategoryForecast {
        CategoryForecast {
            spent_so_far: spent,
            budget,
            projected_end_of_month: projected,
            status: status.to_string(),
        }
    }

    #[test]
    fn test_over_budget_category() {
        let result = ForecastReconciler::reconcile(
            "food",
            &forecast(dec!(450), dec!(500), dec!(600), "over"),
        );

        assert_eq!(result.spent_percentage, dec!(90));
        assert_eq!(result.projected_percentage, dec!(100));
        assert_eq!(result.status, ForecastStatus::AtRisk);
        assert_eq!(result.over_budget_by, Some(dec!(100)));
        assert!(result.is_over_budget());
    }

    #[test]
    fn test_on_track_category() {
        let result = ForecastReconciler::reconcile(
            "travel",
            &forecast(dec!(100), dec!(400), dec!(300), "on track"),
        );

        assert_eq!(result.spent_percentage, dec!(25));
        assert_eq!(result.projected_percentage, dec!(75));
        assert_eq!(result.status, ForecastStatus::OnTrack);
        assert_eq!(result.over_budget_by, None);
    }

    #[test]
    fn test_zero_budget_is_zero_percent() {
        let result = ForecastReconciler::reconcile(
            "other",
            &forecast(dec!(80), dec!(0), dec!(240), "over budget"),
        );

        assert_eq!(result.spent_percentage, Decimal::ZERO);
        assert_eq!(result.projected_percentage, Decimal::ZERO);
        assert_eq!(result.over_budget_by, Some(dec!(240)));
    }

    #[test]
    fn test_projection_equal_to_budget_is_not_over() {
        assert_eq!(ForecastReconciler::over_budget_by(dec!(500), dec!(500)), None);
    }

    #[test]
    fn test_negative_values_clamp_to_zero() {
        let result = ForecastReconciler::reconcile(
            "refunds",
            &forecast(dec!(-20), dec!(100), dec!(-60), "on track"),
        );
        assert_eq!(result.spent_percentage, Decimal::ZERO);
        assert_eq!(result.projected_percentage, Decimal::ZERO);
    }

    #[test]
    fn test_tiny_budget_saturates_instead_of_overflowing() {
        let huge = Decimal::from_scientific("1e22").unwrap();
        let tiny = Decimal::from_scientific("1e-7").unwrap();
        let result = ForecastReconciler::reconcile("food", &forecast(huge, tiny, huge, "over"));

        assert_eq!(result.spent_percentage, Decimal::ONE_HUNDRED);
        assert_eq!(result.projected_percentage, Decimal::ONE_HUNDRED);
        assert_eq!(result.over_budget_by, Some(huge - tiny));
    }

    #[test]
    fn test_saturated_ratio_with_opposite_signs_is_empty_bar() {
        let huge = Decimal::from_scientific("1e22").unwrap();
        let tiny = Decimal::from_scientific("-1e-7").unwrap();
        assert_eq!(ForecastReconciler::raw_percentage(huge, tiny), Decimal::MIN);

        let result = ForecastReconciler::reconcile("food", &forecast(huge, tiny, huge, "over"));
        assert_eq!(result.spent_percentage, Decimal::ZERO);
    }

    #[test]
    fn test_over_budget_amount_saturates() {
        assert_eq!(
            ForecastReconciler::over_budget_by(Decimal::MAX, Decimal::MIN),
            Some(Decimal::MAX)
        );
    }

    #[test]
    fn test_reconcile_all_keeps_key_order() {
        let mut result = ForecastResult::default();
        result
            .forecast
            .insert("travel".into(), forecast(dec!(1), dec!(10), dec!(2), "on track"));
        result
            .forecast
            .insert("bills".into(), forecast(dec!(1), dec!(10), dec!(2), "on track"));

        let names: Vec<_> = ForecastReconciler::reconcile_all(&result)
            .into_iter()
            .map(|c| c.category)
            .collect();
        assert_eq!(names, vec!["bills".to_string(), "travel".to_string()]);
    }
}
