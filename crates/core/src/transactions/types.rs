//! Transaction data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A financial transaction as served by `GET /transactions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque identifier, unique within one fetched batch.
    pub transaction_id: String,
    /// Opaque account identifier.
    pub account_id: String,
    /// Signed amount.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Merchant display name.
    pub merchant_name: String,
    /// Category tags, in upstream order.
    pub category: Vec<String>,
    /// ISO calendar date (`YYYY-MM-DD`).
    pub date: String,
}

impl Transaction {
    /// Parses the ISO date, if well-formed.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Short en-US date (`Jan 5, 2025`); falls back to the raw string.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.parsed_date()
            .map_or_else(|| self.date.clone(), |d| d.format("%b %-d, %Y").to_string())
    }

    /// First category tag, if any.
    #[must_use]
    pub fn primary_category(&self) -> Option<&str> {
        self.category.first().map(String::as_str)
    }
}

/// Body of a successful `GET /transactions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionsResponse {
    /// The transactions.
    pub transactions: Vec<Transaction>,
}

/// A transaction as stored upstream, before normalization.
///
/// Every field may be missing; see [`normalize`](super::categorize::normalize).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTransaction {
    /// Upstream identifier.
    #[serde(default)]
    pub transaction_id: Option<String>,
    /// Upstream account identifier.
    #[serde(default)]
    pub account_id: Option<String>,
    /// Amount as reported upstream.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    /// Merchant name, when upstream knows it.
    #[serde(default)]
    pub merchant_name: Option<String>,
    /// Upstream category hierarchy.
    #[serde(default)]
    pub category: Option<Vec<String>>,
    /// ISO date.
    #[serde(default)]
    pub date: Option<String>,
}
