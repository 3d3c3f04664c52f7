//! The three dashboard views.

use colored::Colorize;
use finquest_client::{
    BackendClient, BudgetClient, BudgetPlanner, ForecastClient, ForecastView,
    TransactionFeedClient, TransactionsView,
};
use finquest_core::LoadState;
use finquest_core::budget::{BudgetCategory, BudgetConstraints};
use finquest_core::forecast::{ReconciledCategory, RecommendationsView};
use finquest_shared::{Currency, Money};

use crate::display;

fn money(amount: rust_decimal::Decimal, currency: Currency) -> String {
    Money::new(amount, currency).format()
}

fn print_budget(constraints: &BudgetConstraints, currency: Currency) {
    for (category, amount) in constraints.iter() {
        println!(
            "  {} {:<20} {:>14}",
            category.icon(),
            category.label(),
            money(amount, currency).bright_cyan()
        );
    }
    println!();
    display::labeled("Total monthly budget", &money(constraints.total(), currency));
}

/// `budget show`
pub async fn budget_show(backend: BackendClient, currency: Currency) -> anyhow::Result<()> {
    let mut planner = BudgetPlanner::new(BudgetClient::new(backend));
    planner.load().await;

    display::section("Budget Constraints");
    print_budget(planner.form().constraints(), currency);
    Ok(())
}

const PARTIAL_UPDATE_REFUSED: &str =
    "Could not load the saved budget; pass all six categories to replace it";

/// Without the saved budget, only a full replacement may be saved.
fn can_update(loaded: bool, given: usize) -> bool {
    loaded || given >= BudgetCategory::ALL.len()
}

/// `budget set`
pub async fn budget_set<'a>(
    backend: BackendClient,
    currency: Currency,
    inputs: impl Iterator<Item = (BudgetCategory, &'a str)>,
) -> anyhow::Result<()> {
    let inputs: Vec<_> = inputs.collect();
    let mut planner = BudgetPlanner::new(BudgetClient::new(backend));
    let loaded = planner.load().await;
    if !can_update(loaded, inputs.len()) {
        display::error(PARTIAL_UPDATE_REFUSED);
        anyhow::bail!(PARTIAL_UPDATE_REFUSED);
    }
    for (category, text) in inputs {
        planner.set_input(category, text);
    }

    display::section("Set Your Budget Constraints");
    print_budget(planner.form().constraints(), currency);

    if let Err(e) = planner.submit().await {
        display::error(&e.to_string());
        return Err(e.into());
    }

    if planner.is_submitted() {
        display::success("Budget constraints saved successfully!");
    }
    Ok(())
}

/// `transactions`
pub async fn transactions(backend: BackendClient, currency: Currency) -> anyhow::Result<()> {
    let mut view = TransactionsView::new(TransactionFeedClient::new(backend), currency);
    display::info("Loading transactions...");
    view.refresh().await;

    display::section("Transaction History");
    match view.state() {
        LoadState::Loading => display::info("Loading transactions..."),
        LoadState::Error(message) => display::error(message),
        LoadState::Data(transactions) => {
            if let Some(stats) = view.stats() {
                display::labeled("Total Transactions", &stats.count.to_string());
                display::labeled("Total Spent", &stats.total_spent.format());
                println!();
            }
            if transactions.is_empty() {
                display::info("No transactions found.");
            }
            for tx in transactions {
                let tags: Vec<String> = tx.category.iter().map(|t| display::tag(t)).collect();
                println!(
                    "  {:<14} {:<24} {:>12}  {}",
                    tx.display_date().bright_black(),
                    tx.merchant_name,
                    money(tx.amount, currency),
                    tags.join(" ")
                );
            }
        }
    }
    Ok(())
}

fn print_card(card: &ReconciledCategory, currency: Currency) {
    let title = BudgetCategory::from_key(&card.category)
        .map_or_else(|| card.category.clone(), |c| format!("{} {}", c.icon(), c.label()));

    println!(
        "  {}  {}",
        title.bright_white().bold(),
        display::badge(card.status, &card.status_label)
    );
    println!(
        "    Spent      {} {:>6}%  {} of {}",
        display::bar(card.spent_percentage),
        card.spent_percentage,
        money(card.spent, currency),
        money(card.budget, currency)
    );
    println!(
        "    Projected  {} {:>6}%  {}",
        display::bar(card.projected_percentage),
        card.projected_percentage,
        money(card.projected, currency)
    );
    if let Some(over) = card.over_budget_by {
        display::warning(&format!(
            "Projected to exceed budget by {}",
            money(over, currency)
        ));
    }
    println!();
}

/// `forecast`
pub async fn forecast(backend: BackendClient, currency: Currency) -> anyhow::Result<()> {
    let mut view = ForecastView::new(ForecastClient::new(backend));
    display::info("Loading forecast...");
    view.refresh().await;

    display::section("Spending Forecast");
    if let Some(message) = view.state().error() {
        display::error(message);
        return Ok(());
    }

    let cards = view.cards();
    if cards.is_empty() {
        display::info("No spending recorded this month.");
    }
    for card in &cards {
        print_card(card, currency);
    }

    display::section("AI Recommendations");
    match view.recommendations() {
        Some(RecommendationsView::Items(items)) => {
            for (i, item) in items.iter().enumerate() {
                println!("  {}. {}", i + 1, item);
            }
        }
        Some(placeholder @ RecommendationsView::Placeholder(_)) => {
            for line in placeholder.lines() {
                display::info(line);
            }
        }
        None => {}
    }
    Ok(())
}
