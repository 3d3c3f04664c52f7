//! Shared types, errors, and configuration for FinQuest.
//!
//! This crate provides common types used across all other crates:
//! - Money types with decimal precision and display formatting
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod error_tests;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::{Currency, Money};
