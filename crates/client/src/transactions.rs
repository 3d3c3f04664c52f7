//! Transaction Feed Client and the transaction history view.

use finquest_core::LoadState;
use finquest_core::transactions::{Transaction, TransactionStats, TransactionsResponse};
use finquest_shared::Currency;
use serde_json::Value;
use tracing::{debug, warn};

use crate::backend::BackendClient;
use crate::error::{ClientError, ClientResult};

/// Fallback message when an error response carries no message of its own.
pub const FETCH_FAILED: &str = "Failed to fetch transactions";

/// Reads the transaction list at `/transactions`.
#[derive(Debug, Clone)]
pub struct TransactionFeedClient {
    backend: BackendClient,
}

impl TransactionFeedClient {
    /// Creates a transaction client.
    #[must_use]
    pub const fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    /// Fetches the transaction list.
    ///
    /// # Errors
    ///
    /// `ClientError::Transport` when there is no readable response.
    /// `ClientError::Status` otherwise, carrying the body's `error` (or
    /// `detail`) field, else [`FETCH_FAILED`].
    pub async fn load(&self) -> ClientResult<Vec<Transaction>> {
        let response = self.backend.get("/transactions").await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .bytes()
                .await
                .ok()
                .and_then(|body| serde_json::from_slice::<Value>(&body).ok())
                .and_then(|body| error_message(&body))
                .unwrap_or_else(|| FETCH_FAILED.to_string());
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        let parsed: TransactionsResponse = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "Malformed transactions payload");
            ClientError::Status {
                status: status.as_u16(),
                message: FETCH_FAILED.to_string(),
            }
        })?;
        Ok(parsed.transactions)
    }
}

fn error_message(body: &Value) -> Option<String> {
    ["error", "detail"]
        .into_iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .filter(|message| !message.is_empty())
        .map(ToString::to_string)
}

/// Transaction history view state.
#[derive(Debug)]
pub struct TransactionsView {
    client: TransactionFeedClient,
    currency: Currency,
    state: LoadState<Vec<Transaction>>,
    stats: Option<TransactionStats>,
}

impl TransactionsView {
    /// Creates a view in the loading state.
    #[must_use]
    pub fn new(client: TransactionFeedClient, currency: Currency) -> Self {
        Self {
            client,
            currency,
            state: LoadState::Loading,
            stats: None,
        }
    }

    /// Issues one read and stores its outcome.
    ///
    /// A list whose total cannot be represented is shown as an error.
    pub async fn refresh(&mut self) {
        self.state = LoadState::Loading;
        self.stats = None;
        let result = self.client.load().await.map_err(|e| e.to_string());
        let result = result.and_then(|transactions| {
            let stats = TransactionStats::from_transactions(&transactions, self.currency)
                .map_err(|e| {
                    warn!(error = %e, "Transaction totals unavailable");
                    e.to_string()
                })?;
            debug!(count = stats.count, "Transactions loaded");
            self.stats = Some(stats);
            Ok(transactions)
        });
        self.state = LoadState::from_result(result);
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &LoadState<Vec<Transaction>> {
        &self.state
    }

    /// Count and total spend, once data is loaded.
    #[must_use]
    pub const fn stats(&self) -> Option<TransactionStats> {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_message_prefers_error_field() {
        let body = json!({"error": "No access token", "detail": "ignored"});
        assert_eq!(error_message(&body).as_deref(), Some("No access token"));
    }

    #[test]
    fn test_error_message_reads_detail() {
        let body = json!({"detail": "Failed to get transactions: boom"});
        assert_eq!(
            error_message(&body).as_deref(),
            Some("Failed to get transactions: boom")
        );
    }

    #[test]
    fn test_error_message_absent() {
        assert_eq!(error_message(&json!({})), None);
        assert_eq!(error_message(&json!({"error": ""})), None);
        assert_eq!(error_message(&json!([1, 2])), None);
    }
}
