//! Forecast client and the analysis view.

use finquest_core::LoadState;
use finquest_core::forecast::{
    ForecastReconciler, ForecastResult, ReconciledCategory, RecommendationsView,
};
use tracing::error;

use crate::backend::BackendClient;
use crate::error::{ClientError, ClientResult};

/// Reads projections and recommendations at `/forecast`.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    backend: BackendClient,
}

impl ForecastClient {
    /// Creates a forecast client.
    #[must_use]
    pub const fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    /// Fetches the forecast.
    ///
    /// # Errors
    ///
    /// `ClientError::Status` with `HTTP error! status: N` on a non-success
    /// status; `ClientError::Decode` when a success body is not a forecast;
    /// `ClientError::Transport` when there is no readable response.
    pub async fn load(&self) -> ClientResult<ForecastResult> {
        let response = self.backend.get("/forecast").await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: format!("HTTP error! status: {}", status.as_u16()),
            });
        }
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Analysis view state.
#[derive(Debug)]
pub struct ForecastView {
    client: ForecastClient,
    state: LoadState<ForecastResult>,
}

impl ForecastView {
    /// Creates a view in the loading state.
    #[must_use]
    pub fn new(client: ForecastClient) -> Self {
        Self {
            client,
            state: LoadState::Loading,
        }
    }

    /// Issues one read and stores its outcome.
    pub async fn refresh(&mut self) {
        self.state = LoadState::Loading;
        let result = self.client.load().await;
        if let Err(e) = &result {
            error!(error = %e, "Error fetching forecast data");
        }
        self.state = LoadState::from_result(result);
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &LoadState<ForecastResult> {
        &self.state
    }

    /// One reconciled card per category, in backend order.
    #[must_use]
    pub fn cards(&self) -> Vec<ReconciledCategory> {
        self.state
            .data()
            .map(ForecastReconciler::reconcile_all)
            .unwrap_or_default()
    }

    /// Recommendations panel, once data is loaded.
    #[must_use]
    pub fn recommendations(&self) -> Option<RecommendationsView> {
        self.state
            .data()
            .map(|result| RecommendationsView::from_list(&result.reccs))
    }
}
