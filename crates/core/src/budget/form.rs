//! Budget form state: the values being edited, the save guard, and the
//! success banner.

use std::time::{Duration, Instant};

use rust_decimal::Decimal;

use super::category::BudgetCategory;
use super::constraints::BudgetConstraints;
use super::error::BudgetError;
use super::input::parse_amount_input;

/// How long the "saved" confirmation stays visible after a successful save.
pub const SUBMITTED_BANNER_DURATION: Duration = Duration::from_secs(3);

/// Editable budget form.
///
/// At most one save may be in flight: [`begin_save`](Self::begin_save)
/// refuses while a previous save has not been finished.
#[derive(Debug, Clone, Default)]
pub struct BudgetForm {
    constraints: BudgetConstraints,
    saving: bool,
    submitted_at: Option<Instant>,
}

impl BudgetForm {
    /// Creates an empty form (all categories zero).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current values.
    #[must_use]
    pub const fn constraints(&self) -> &BudgetConstraints {
        &self.constraints
    }

    /// Replaces all values at once, e.g. with what the backend returned.
    pub fn replace(&mut self, constraints: BudgetConstraints) {
        self.constraints = constraints;
    }

    /// Applies raw text typed into one category field.
    pub fn set_input(&mut self, category: BudgetCategory, text: &str) {
        self.constraints.set(category, parse_amount_input(text));
    }

    /// Sum of all categories, recomputed from the current values.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.constraints.total()
    }

    /// Whether a save is in flight.
    #[must_use]
    pub const fn is_saving(&self) -> bool {
        self.saving
    }

    /// Whether the submit action is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.saving && !self.total().is_zero()
    }

    /// Marks a save as started and returns the payload to send.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::SaveInFlight` if a save is already running.
    /// Returns `BudgetError::EmptyBudget` if the total is zero.
    pub fn begin_save(&mut self) -> Result<BudgetConstraints, BudgetError> {
        if self.saving {
            return Err(BudgetError::SaveInFlight);
        }
        if self.total().is_zero() {
            return Err(BudgetError::EmptyBudget);
        }
        self.saving = true;
        Ok(self.constraints)
    }

    /// Marks the in-flight save as finished.
    ///
    /// On success the confirmation banner starts at `now`. On failure the
    /// values are left exactly as they were.
    pub fn finish_save(&mut self, succeeded: bool, now: Instant) {
        self.saving = false;
        if succeeded {
            self.submitted_at = Some(now);
        }
    }

    /// Whether the confirmation banner is visible at `now`.
    #[must_use]
    pub fn is_submitted(&self, now: Instant) -> bool {
        self.submitted_at
            .is_some_and(|at| now.saturating_duration_since(at) < SUBMITTED_BANNER_DURATION)
    }
}
