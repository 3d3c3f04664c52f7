//! Core business logic for FinQuest.
//!
//! This crate contains pure domain logic with ZERO web or storage dependencies.
//! Both the backend and the dashboard client build on these types, so the
//! wire contract between them is defined exactly once.
//!
//! # Modules
//!
//! - `budget` - Budget categories, constraints, and form state
//! - `transactions` - Transaction records, statistics, and category styles
//! - `forecast` - Forecast records, reconciliation, and projection
//! - `load_state` - Tagged loading / error / data view state

pub mod budget;
pub mod forecast;
pub mod load_state;
pub mod transactions;

pub use load_state::LoadState;
