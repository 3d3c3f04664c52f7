//! Budget error types.

use thiserror::Error;

use super::category::BudgetCategory;

/// Budget-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// A save is already in flight for this form.
    #[error("A budget save is already in progress")]
    SaveInFlight,

    /// Nothing to save: every category is zero.
    #[error("Budget total is zero")]
    EmptyBudget,

    /// Amount cannot be negative.
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(BudgetCategory),
}
