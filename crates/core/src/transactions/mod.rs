//! Transaction records, feed statistics, and category presentation.

pub mod categorize;
pub mod stats;
pub mod style;
pub mod types;

pub use categorize::{categorize, normalize};
pub use stats::{TransactionStats, find_duplicate_id};
pub use style::CategoryStyle;
pub use types::{RawTransaction, Transaction, TransactionsResponse};
