//! Upstream transaction sources.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use finquest_core::transactions::{RawTransaction, Transaction, normalize};
use serde::Deserialize;
use tracing::debug;

use crate::store::StoreError;

/// Supplies the current month's transactions.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Returns normalized transactions in upstream order.
    async fn transactions(&self) -> Result<Vec<Transaction>, StoreError>;
}

#[derive(Debug, Deserialize)]
struct TransactionsFile {
    #[serde(default)]
    transactions: Vec<RawTransaction>,
}

/// Reads `{"transactions": [...]}` from a JSON file on every request.
pub struct JsonFileTransactionSource {
    path: PathBuf,
}

impl JsonFileTransactionSource {
    /// Creates a source for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TransactionSource for JsonFileTransactionSource {
    async fn transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        let path = self.path.display().to_string();

        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => StoreError::NotFound(path.clone()),
                _ => StoreError::Io {
                    path: path.clone(),
                    source,
                },
            })?;

        let file: TransactionsFile =
            serde_json::from_str(&text).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?;

        let transactions: Vec<Transaction> =
            file.transactions.into_iter().map(normalize).collect();
        debug!(path = %path, count = transactions.len(), "Loaded transactions");
        Ok(transactions)
    }
}

/// Fixed in-memory transaction list.
#[derive(Debug, Default)]
pub struct InMemoryTransactionSource {
    transactions: Vec<Transaction>,
}

impl InMemoryTransactionSource {
    /// Creates a source serving `transactions` as-is.
    #[must_use]
    pub const fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}

#[async_trait]
impl TransactionSource for InMemoryTransactionSource {
    async fn transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        Ok(self.transactions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("finquest-{}", uuid::Uuid::new_v4()))
            .join("transactions.json")
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let source = JsonFileTransactionSource::new(temp_path());
        let err = source.transactions().await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_file_is_normalized() {
        let path = temp_path();
        tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        tokio::fs::write(
            &path,
            r#"{"transactions": [
                {"transaction_id": "t1", "account_id": "a1", "amount": 12.5,
                 "merchant_name": "Starbucks", "category": ["Coffee Shop"], "date": "2025-06-02"},
                {"transaction_id": "t2", "account_id": "a1", "amount": 40,
                 "category": ["Travel", "Airlines"], "date": "2025-06-03"}
            ]}"#,
        )
        .await
        .unwrap();

        let transactions = JsonFileTransactionSource::new(&path)
            .transactions()
            .await
            .unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].category, vec!["food".to_string()]);
        assert_eq!(transactions[0].amount, dec!(12.5));
        assert_eq!(transactions[1].merchant_name, "Unknown");
        assert_eq!(transactions[1].category, vec!["travel".to_string()]);
    }
}
