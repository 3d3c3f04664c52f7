//! Shared HTTP plumbing.

use reqwest::{Client, Response};
use serde::Serialize;

use crate::error::ClientResult;

/// Connection to the FinQuest backend.
///
/// Cheap to clone; each view holds its own copy.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    /// Creates a client for `base_url` (e.g. `http://127.0.0.1:5000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends `GET {base_url}{path}`. Non-success statuses are returned as-is.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Transport` if no response arrives.
    pub async fn get(&self, path: &str) -> ClientResult<Response> {
        Ok(self.http.get(self.url(path)).send().await?)
    }

    /// Sends `POST {base_url}{path}` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Transport` if no response arrives.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Response> {
        Ok(self.http.post(self.url(path)).json(body).send().await?)
    }
}
