//! Budget constraints and their wire representation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::BudgetCategory;

/// Monthly spending limits for all six categories.
///
/// All six fields are always present; an unset category is zero. Serializes
/// with lowercase keys, the shape the backend accepts on `POST /budget`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetConstraints {
    /// Food and dining limit.
    #[serde(with = "rust_decimal::serde::float")]
    pub food: Decimal,
    /// Travel limit.
    #[serde(with = "rust_decimal::serde::float")]
    pub travel: Decimal,
    /// Shopping limit.
    #[serde(with = "rust_decimal::serde::float")]
    pub shopping: Decimal,
    /// Entertainment limit.
    #[serde(with = "rust_decimal::serde::float")]
    pub entertainment: Decimal,
    /// Bills and utilities limit.
    #[serde(with = "rust_decimal::serde::float")]
    pub bills: Decimal,
    /// Transportation limit.
    #[serde(with = "rust_decimal::serde::float")]
    pub transport: Decimal,
}

/// Budget as returned by `GET /budget`: capitalized keys, any of which may
/// be missing or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetWire {
    /// `Food` amount.
    #[serde(rename = "Food", default, with = "rust_decimal::serde::float_option")]
    pub food: Option<Decimal>,
    /// `Travel` amount.
    #[serde(rename = "Travel", default, with = "rust_decimal::serde::float_option")]
    pub travel: Option<Decimal>,
    /// `Shopping` amount.
    #[serde(rename = "Shopping", default, with = "rust_decimal::serde::float_option")]
    pub shopping: Option<Decimal>,
    /// `Entertainment` amount.
    #[serde(
        rename = "Entertainment",
        default,
        with = "rust_decimal::serde::float_option"
    )]
    pub entertainment: Option<Decimal>,
    /// `Bills` amount.
    #[serde(rename = "Bills", default, with = "rust_decimal::serde::float_option")]
    pub bills: Option<Decimal>,
    /// `Transport` amount.
    #[serde(rename = "Transport", default, with = "rust_decimal::serde::float_option")]
    pub transport: Option<Decimal>,
}

impl BudgetConstraints {
    /// Returns the limit for one category.
    #[must_use]
    pub const fn get(&self, category: BudgetCategory) -> Decimal {
        match category {
            BudgetCategory::Food => self.food,
            BudgetCategory::Travel => self.travel,
            BudgetCategory::Shopping => self.shopping,
            BudgetCategory::Entertainment => self.entertainment,
            BudgetCategory::Bills => self.bills,
            BudgetCategory::Transport => self.transport,
        }
    }

    /// Sets the limit for one category. Negative amounts are stored as zero.
    pub fn set(&mut self, category: BudgetCategory, amount: Decimal) {
        let amount = amount.max(Decimal::ZERO);
        let slot = match category {
            BudgetCategory::Food => &mut self.food,
            BudgetCategory::Travel => &mut self.travel,
            BudgetCategory::Shopping => &mut self.shopping,
            BudgetCategory::Entertainment => &mut self.entertainment,
            BudgetCategory::Bills => &mut self.bills,
            BudgetCategory::Transport => &mut self.transport,
        };
        *slot = amount;
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, category: BudgetCategory, amount: Decimal) -> Self {
        self.set(category, amount);
        self
    }

    /// Iterates `(category, limit)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (BudgetCategory, Decimal)> + '_ {
        BudgetCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Sum of all six limits.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.iter().map(|(_, amount)| amount).sum()
    }

    /// First category holding a negative amount, if any.
    #[must_use]
    pub fn first_negative(&self) -> Option<BudgetCategory> {
        self.iter()
            .find(|(_, amount)| amount.is_sign_negative() && !amount.is_zero())
            .map(|(category, _)| category)
    }

    /// Converts to the capitalized wire shape.
    #[must_use]
    pub fn to_wire(&self) -> BudgetWire {
        BudgetWire {
            food: Some(self.food),
            travel: Some(self.travel),
            shopping: Some(self.shopping),
            entertainment: Some(self.entertainment),
            bills: Some(self.bills),
            transport: Some(self.transport),
        }
    }
}

impl From<BudgetWire> for BudgetConstraints {
    /// Missing or `null` wire fields become zero; negative ones are clamped.
    fn from(wire: BudgetWire) -> Self {
        let mut constraints = Self::default();
        let pairs = [
            (BudgetCategory::Food, wire.food),
            (BudgetCategory::Travel, wire.travel),
            (BudgetCategory::Shopping, wire.shopping),
            (BudgetCategory::Entertainment, wire.entertainment),
            (BudgetCategory::Bills, wire.bills),
            (BudgetCategory::Transport, wire.transport),
        ];
        for (category, amount) in pairs {
            constraints.set(category, amount.unwrap_or(Decimal::ZERO));
        }
        constraints
    }
}
