//! Dashboard side of the FinQuest backend contract.
//!
//! Each view owns its own client and data. Nothing is cached or shared
//! between views; every load is one independent request.
//!
//! - [`BudgetClient`] / [`BudgetPlanner`]: load and save the six-category budget
//! - [`TransactionFeedClient`] / [`TransactionsView`]: the transaction history
//! - [`ForecastClient`] / [`ForecastView`]: projections and recommendations

pub mod backend;
pub mod budget;
pub mod error;
pub mod forecast;
pub mod transactions;

pub use backend::BackendClient;
pub use budget::{BudgetClient, BudgetPlanner};
pub use error::{CONNECT_FAILED, ClientError, ClientResult, SAVE_FAILED_ALERT, SubmitError};
pub use forecast::{ForecastClient, ForecastView};
pub use transactions::{TransactionFeedClient, TransactionsView};
