//! Budget Store Client and the budget planner view.

use std::time::Instant;

use finquest_core::budget::{BudgetCategory, BudgetConstraints, BudgetForm, BudgetWire};
use rust_decimal::Decimal;
use tracing::{debug, error, info, warn};

use crate::backend::BackendClient;
use crate::error::{ClientError, ClientResult, SubmitError};

/// Reads and writes the budget at `/budget`.
#[derive(Debug, Clone)]
pub struct BudgetClient {
    backend: BackendClient,
}

impl BudgetClient {
    /// Creates a budget client.
    #[must_use]
    pub const fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    /// Fetches the saved budget.
    ///
    /// Returns `None` on any failure; the failure is logged and never
    /// surfaced, so callers keep whatever values they already have.
    pub async fn load(&self) -> Option<BudgetConstraints> {
        match self.fetch().await {
            Ok(constraints) => Some(constraints),
            Err(e) => {
                warn!(error = %e, "Error loading budget data");
                None
            }
        }
    }

    async fn fetch(&self) -> ClientResult<BudgetConstraints> {
        let response = self.backend.get("/budget").await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: format!("Failed to load budget: {status}"),
            });
        }
        let wire: BudgetWire = response.json().await?;
        Ok(BudgetConstraints::from(wire))
    }

    /// Replaces the saved budget with `constraints`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Transport` if the backend is unreachable and
    /// `ClientError::Status` if it rejects the save.
    pub async fn save(&self, constraints: &BudgetConstraints) -> ClientResult<()> {
        let response = self.backend.post_json("/budget", constraints).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: "Failed to save budget".to_string(),
            });
        }
        debug!(total = %constraints.total(), "Budget saved");
        Ok(())
    }
}

/// The budget planner: an editable form backed by [`BudgetClient`].
#[derive(Debug)]
pub struct BudgetPlanner {
    client: BudgetClient,
    form: BudgetForm,
}

impl BudgetPlanner {
    /// Creates a planner with an all-zero form.
    #[must_use]
    pub fn new(client: BudgetClient) -> Self {
        Self {
            client,
            form: BudgetForm::new(),
        }
    }

    /// The form being edited.
    #[must_use]
    pub const fn form(&self) -> &BudgetForm {
        &self.form
    }

    /// Sum of the six categories.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.form.total()
    }

    /// Loads the saved budget into the form. Failures leave the form as is.
    ///
    /// Returns whether the saved budget was loaded.
    pub async fn load(&mut self) -> bool {
        match self.client.load().await {
            Some(constraints) => {
                self.form.replace(constraints);
                true
            }
            None => false,
        }
    }

    /// Applies raw text typed into one category field.
    pub fn set_input(&mut self, category: BudgetCategory, text: &str) {
        self.form.set_input(category, text);
    }

    /// Submits the form.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Blocked` if the total is zero or a save is
    /// already running, and `SubmitError::Failed` if the request fails. In
    /// both cases the form values are unchanged.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let payload = self.form.begin_save()?;

        let result = self.client.save(&payload).await;
        self.form.finish_save(result.is_ok(), Instant::now());

        match result {
            Ok(()) => {
                info!(total = %payload.total(), "Budget constraints submitted");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Error saving budgets");
                Err(SubmitError::Failed(e))
            }
        }
    }

    /// Whether the "saved" confirmation is showing.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.form.is_submitted(Instant::now())
    }
}
