//! Maps upstream transactions onto the dashboard's category tags.
//!
//! Merchant names win; upstream category keywords are the fallback; anything
//! left over is `other`.

use rust_decimal::Decimal;

use super::types::{RawTransaction, Transaction};

/// Tag given to transactions that match nothing.
pub const OTHER_TAG: &str = "other";

const MERCHANT_TABLE: [(&str, &[&str]); 6] = [
    ("food", &["McDonald's", "Starbucks", "KFC", "Zomato"]),
    ("transport", &["Uber", "Lyft", "ADNOC Fuel"]),
    ("shopping", &["Amazon", "Walmart", "Target", "Carrefour"]),
    ("entertainment", &["Netflix", "Spotify", "Cinema"]),
    ("bills", &["AT&T", "Verizon", "Electricity", "Water"]),
    (
        "travel",
        &["United Airlines", "Delta", "Airbnb", "Emirates Airlines"],
    ),
];

/// Keyword checks against upstream category names, in priority order.
const KEYWORD_TABLE: [(&[&str], &str); 6] = [
    (&["food"], "food"),
    (&["transport"], "transport"),
    (&["shop"], "shopping"),
    (&["entertain"], "entertainment"),
    (&["bill", "utility"], "bills"),
    (&["travel"], "travel"),
];

/// Picks the dashboard tag for a merchant and its upstream categories.
#[must_use]
pub fn categorize(merchant_name: Option<&str>, upstream: &[String]) -> &'static str {
    if let Some(merchant) = merchant_name.map(str::trim).filter(|m| !m.is_empty()) {
        let hit = MERCHANT_TABLE.iter().find(|(_, merchants)| {
            merchants
                .iter()
                .any(|known| known.eq_ignore_ascii_case(merchant))
        });
        if let Some((tag, _)) = hit {
            return *tag;
        }
    }

    for upstream_category in upstream {
        let lowered = upstream_category.to_lowercase();
        for (keywords, tag) in KEYWORD_TABLE {
            if keywords.iter().any(|keyword| lowered.contains(keyword)) {
                return tag;
            }
        }
    }

    OTHER_TAG
}

/// Normalizes an upstream transaction into the served shape.
///
/// The merchant defaults to `"Unknown"` and the category list collapses to
/// exactly one dashboard tag.
#[must_use]
pub fn normalize(raw: RawTransaction) -> Transaction {
    let upstream = raw.category.unwrap_or_default();
    let tag = categorize(raw.merchant_name.as_deref(), &upstream);

    Transaction {
        transaction_id: raw.transaction_id.unwrap_or_default(),
        account_id: raw.account_id.unwrap_or_default(),
        amount: raw.amount.unwrap_or(Decimal::ZERO),
        merchant_name: raw
            .merchant_name
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "Unknown".to_string()),
        category: vec![tag.to_string()],
        date: raw.date.unwrap_or_default(),
    }
}
