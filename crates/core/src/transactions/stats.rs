//! Aggregate statistics over a fetched transaction list.

use std::collections::HashSet;

use finquest_shared::{AppResult, Currency, Money};

use super::types::Transaction;

/// Count and total over one batch. Recomputed, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionStats {
    /// Number of transactions.
    pub count: usize,
    /// Sum of all amounts.
    pub total_spent: Money,
}

impl TransactionStats {
    /// Computes statistics for `transactions` in `currency`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the total overflows.
    pub fn from_transactions(transactions: &[Transaction], currency: Currency) -> AppResult<Self> {
        Ok(Self {
            count: transactions.len(),
            total_spent: Money::sum(transactions.iter().map(|tx| tx.amount), currency)?,
        })
    }
}

/// Returns the first `transaction_id` that appears more than once.
#[must_use]
pub fn find_duplicate_id(transactions: &[Transaction]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(transactions.len());
    transactions
        .iter()
        .map(|tx| tx.transaction_id.as_str())
        .find(|id| !seen.insert(*id))
}
