//! Application configuration management.

use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
///
/// Every section has defaults, so an empty environment yields a working
/// local setup (backend on `127.0.0.1:5000`, amounts shown in USD).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Backend server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Where the dashboard finds the backend.
    #[serde(default)]
    pub backend: BackendConfig,
    /// Presentation settings.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Data files read and written by the backend.
    #[serde(default)]
    pub data: DataConfig,
    /// Forecast engine settings.
    #[serde(default)]
    pub forecast: ForecastConfig,
    /// Recommendation service settings.
    #[serde(default)]
    pub recommendations: RecommendationsConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

/// Backend location as seen from the dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

/// Display configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Currency used when formatting amounts.
    #[serde(default = "default_currency")]
    pub currency: Currency,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

const fn default_currency() -> Currency {
    Currency::Usd
}

/// Data file locations.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// JSON file holding the saved budget.
    #[serde(default = "default_budgets_file")]
    pub budgets_file: String,
    /// JSON file holding the synced transactions.
    #[serde(default = "default_transactions_file")]
    pub transactions_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            budgets_file: default_budgets_file(),
            transactions_file: default_transactions_file(),
        }
    }
}

fn default_budgets_file() -> String {
    "data/budgets.json".to_string()
}

fn default_transactions_file() -> String {
    "data/transactions.json".to_string()
}

/// Forecast engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastConfig {
    /// Month length used for linear extrapolation.
    #[serde(default = "default_days_in_month")]
    pub days_in_month: u32,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            days_in_month: default_days_in_month(),
        }
    }
}

const fn default_days_in_month() -> u32 {
    30
}

/// Recommendation service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationsConfig {
    /// Lines returned by the built-in recommender.
    #[serde(default)]
    pub fallback: Vec<String>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `FINQUEST__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("FINQUEST")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
