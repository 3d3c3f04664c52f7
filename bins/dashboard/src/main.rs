//! FinQuest Dashboard - terminal front end for the FinQuest backend
//!
//! ```bash
//! finquest-dashboard budget show
//! finquest-dashboard budget set --food 400 --bills 250
//! finquest-dashboard transactions
//! finquest-dashboard forecast --server http://127.0.0.1:5000
//! ```

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finquest_client::BackendClient;
use finquest_core::budget::BudgetCategory;
use finquest_shared::AppConfig;

mod display;
mod views;

/// FinQuest Dashboard - budget planner, transaction history and forecast
#[derive(Parser)]
#[command(name = "finquest-dashboard")]
#[command(version)]
#[command(about = "Personal finance dashboard for the FinQuest backend", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Backend URL (defaults to `backend.base_url` from configuration)
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or update monthly budget constraints
    Budget {
        #[command(subcommand)]
        action: BudgetCommands,
    },

    /// Show the transaction history
    Transactions,

    /// Show spending projections and recommendations
    Forecast,
}

#[derive(Subcommand)]
enum BudgetCommands {
    /// Show the saved budget
    Show,

    /// Update categories and save; unspecified categories keep their value
    Set(BudgetInputs),
}

/// Raw text per category. Unparsable or negative values become zero.
#[derive(clap::Args)]
struct BudgetInputs {
    /// Food & Dining
    #[arg(long, allow_hyphen_values = true)]
    food: Option<String>,
    /// Travel
    #[arg(long, allow_hyphen_values = true)]
    travel: Option<String>,
    /// Shopping
    #[arg(long, allow_hyphen_values = true)]
    shopping: Option<String>,
    /// Entertainment
    #[arg(long, allow_hyphen_values = true)]
    entertainment: Option<String>,
    /// Bills & Utilities
    #[arg(long, allow_hyphen_values = true)]
    bills: Option<String>,
    /// Transportation
    #[arg(long, allow_hyphen_values = true)]
    transport: Option<String>,
}

impl BudgetInputs {
    fn entries(&self) -> impl Iterator<Item = (BudgetCategory, &str)> {
        [
            (BudgetCategory::Food, &self.food),
            (BudgetCategory::Travel, &self.travel),
            (BudgetCategory::Shopping, &self.shopping),
            (BudgetCategory::Entertainment, &self.entertainment),
            (BudgetCategory::Bills, &self.bills),
            (BudgetCategory::Transport, &self.transport),
        ]
        .into_iter()
        .filter_map(|(category, text)| text.as_deref().map(|text| (category, text)))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finquest=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    let currency = config.display.currency;
    let backend = BackendClient::new(cli.server.unwrap_or(config.backend.base_url));
    debug!(server = %backend.base_url(), %currency, "Dashboard starting");

    match cli.command {
        Commands::Budget { action } => match action {
            BudgetCommands::Show => views::budget_show(backend, currency).await,
            BudgetCommands::Set(inputs) => {
                views::budget_set(backend, currency, inputs.entries()).await
            }
        },
        Commands::Transactions => views::transactions(backend, currency).await,
        Commands::Forecast => views::forecast(backend, currency).await,
    }
}
