//! Property-based tests for forecast module.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::reconcile::ForecastReconciler;
use super::types::{CategoryForecast, ForecastStatus};

fn money() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Any representable decimal, from tiny fractions to the 96-bit extremes.
fn any_decimal() -> impl Strategy<Value = Decimal> {
    (any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>(), 0u32..=28)
        .prop_map(|(lo, mid, hi, negative, scale)| Decimal::from_parts(lo, mid, hi, negative, scale))
}

fn forecast(spent: Decimal, budget: Decimal, projected: Decimal, status: String) -> CategoryForecast {
    CategoryForecast {
        spent_so_far: spent,
        budget,
        projected_end_of_month: projected,
        status,
    }
}

proptest! {
    /// Bar widths always land in [0, 100].
    #[test]
    fn test_percentages_within_display_range(
        spent in money(),
        budget in money(),
        projected in money(),
    ) {
        let result = ForecastReconciler::reconcile(
            "food",
            &forecast(spent, budget, projected, "on track".into()),
        );

        prop_assert!(result.spent_percentage >= Decimal::ZERO);
        prop_assert!(result.spent_percentage <= Decimal::ONE_HUNDRED);
        prop_assert!(result.projected_percentage >= Decimal::ZERO);
        prop_assert!(result.projected_percentage <= Decimal::ONE_HUNDRED);
    }

    /// The over-budget warning follows the raw comparison, not the clamped bar.
    #[test]
    fn test_over_budget_uses_unclamped_values(
        budget in money(),
        projected in money(),
    ) {
        let result = ForecastReconciler::reconcile(
            "food",
            &forecast(Decimal::ZERO, budget, projected, "over".into()),
        );

        if projected > budget {
            prop_assert_eq!(result.over_budget_by, Some(projected - budget));
        } else {
            prop_assert_eq!(result.over_budget_by, None);
        }
    }

    /// Zero budget never yields a non-zero percentage.
    #[test]
    fn test_zero_budget_yields_zero_percent(spent in money(), projected in money()) {
        let result = ForecastReconciler::reconcile(
            "food",
            &forecast(spent, Decimal::ZERO, projected, "on track".into()),
        );

        prop_assert_eq!(result.spent_percentage, Decimal::ZERO);
        prop_assert_eq!(result.projected_percentage, Decimal::ZERO);
    }

    /// Any label other than the exact "on track" is a warning.
    #[test]
    fn test_unknown_status_is_warning(label in "\\PC*") {
        prop_assume!(label != "on track");
        prop_assert_eq!(ForecastStatus::from_label(&label), ForecastStatus::AtRisk);
    }

    /// Extreme but finite wire values never panic and stay displayable.
    #[test]
    fn test_extreme_values_stay_in_range(
        spent in any_decimal(),
        budget in any_decimal(),
        projected in any_decimal(),
    ) {
        let result = ForecastReconciler::reconcile(
            "food",
            &forecast(spent, budget, projected, "on track".into()),
        );

        prop_assert!(result.spent_percentage >= Decimal::ZERO);
        prop_assert!(result.spent_percentage <= Decimal::ONE_HUNDRED);
        prop_assert!(result.projected_percentage >= Decimal::ZERO);
        prop_assert!(result.projected_percentage <= Decimal::ONE_HUNDRED);
        prop_assert_eq!(result.over_budget_by.is_some(), projected > budget);
    }
}
