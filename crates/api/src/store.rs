//! Budget persistence.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use finquest_core::budget::{BudgetConstraints, BudgetWire};
use finquest_shared::AppError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file does not exist.
    #[error("File not found: {0}")]
    NotFound(String),

    /// Reading or writing failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File involved.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file content is not the expected JSON.
    #[error("Malformed JSON in {path}: {source}")]
    Parse {
        /// File involved.
        path: String,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(_) => Self::NotFound(error.to_string()),
            StoreError::Io { .. } | StoreError::Parse { .. } => Self::Storage(error.to_string()),
        }
    }
}

/// Persists the user's budget constraints.
///
/// `save` fully replaces what was stored; there is no merge.
#[async_trait]
pub trait BudgetStore: Send + Sync {
    /// Returns the stored budget, all zero if nothing was saved yet.
    async fn load(&self) -> Result<BudgetConstraints, StoreError>;

    /// Replaces the stored budget.
    async fn save(&self, constraints: &BudgetConstraints) -> Result<(), StoreError>;
}

/// On-disk shape: `{"budgets": {"Food": 100, ...}}`.
#[derive(Debug, Serialize, Deserialize)]
struct BudgetFile {
    budgets: BudgetWire,
}

/// Budget store backed by a JSON file.
pub struct JsonFileBudgetStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl JsonFileBudgetStore {
    /// Creates a store for `path`. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

#[async_trait]
impl BudgetStore for JsonFileBudgetStore {
    async fn load(&self) -> Result<BudgetConstraints, StoreError> {
        let _guard = self.lock.read().await;

        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.display_path(), "No saved budget, using zeros");
                return Ok(BudgetConstraints::default());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.display_path(),
                    source,
                });
            }
        };

        let file: BudgetFile = serde_json::from_str(&text).map_err(|source| StoreError::Parse {
            path: self.display_path(),
            source,
        })?;
        Ok(BudgetConstraints::from(file.budgets))
    }

    async fn save(&self, constraints: &BudgetConstraints) -> Result<(), StoreError> {
        let _guard = self.lock.write().await;

        let io_error = |source| StoreError::Io {
            path: self.display_path(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
        }

        let file = BudgetFile {
            budgets: constraints.to_wire(),
        };
        let text = serde_json::to_string_pretty(&file).map_err(|source| StoreError::Parse {
            path: self.display_path(),
            source,
        })?;
        tokio::fs::write(&self.path, text).await.map_err(io_error)?;

        info!(path = %self.display_path(), total = %constraints.total(), "Budget saved");
        Ok(())
    }
}

/// Budget store held in memory.
#[derive(Default)]
pub struct InMemoryBudgetStore {
    constraints: RwLock<BudgetConstraints>,
}

impl InMemoryBudgetStore {
    /// Creates a store seeded with `constraints`.
    #[must_use]
    pub fn with(constraints: BudgetConstraints) -> Self {
        Self {
            constraints: RwLock::new(constraints),
        }
    }
}

#[async_trait]
impl BudgetStore for InMemoryBudgetStore {
    async fn load(&self) -> Result<BudgetConstraints, StoreError> {
        Ok(*self.constraints.read().await)
    }

    async fn save(&self, constraints: &BudgetConstraints) -> Result<(), StoreError> {
        *self.constraints.write().await = *constraints;
        Ok(())
    }
}
