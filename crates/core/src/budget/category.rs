//! The six fixed budget categories and their key mapping.
//!
//! The backend speaks capitalized keys (`Food`, `Travel`, ...) while the
//! dashboard keeps lowercase keys (`food`, `travel`, ...). Both directions go
//! through [`CATEGORY_TABLE`]; nothing else in the workspace spells these
//! strings out.

use serde::{Deserialize, Serialize};

/// A fixed budget category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    /// Food and dining.
    Food,
    /// Travel.
    Travel,
    /// Shopping.
    Shopping,
    /// Entertainment.
    Entertainment,
    /// Bills and utilities.
    Bills,
    /// Local transportation.
    Transport,
}

/// One row of the category mapping table.
#[derive(Debug, Clone, Copy)]
pub struct CategoryMeta {
    /// The category.
    pub category: BudgetCategory,
    /// Lowercase in-memory key.
    pub key: &'static str,
    /// Capitalized wire key.
    pub wire_key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Display icon.
    pub icon: &'static str,
}

/// Category mapping table, in display order.
pub static CATEGORY_TABLE: [CategoryMeta; 6] = [
    CategoryMeta {
        category: BudgetCategory::Food,
        key: "food",
        wire_key: "Food",
        label: "Food & Dining",
        icon: "🍽️",
    },
    CategoryMeta {
        category: BudgetCategory::Travel,
        key: "travel",
        wire_key: "Travel",
        label: "Travel",
        icon: "✈️",
    },
    CategoryMeta {
        category: BudgetCategory::Shopping,
        key: "shopping",
        wire_key: "Shopping",
        label: "Shopping",
        icon: "🛍️",
    },
    CategoryMeta {
        category: BudgetCategory::Entertainment,
        key: "entertainment",
        wire_key: "Entertainment",
        label: "Entertainment",
        icon: "🎬",
    },
    CategoryMeta {
        category: BudgetCategory::Bills,
        key: "bills",
        wire_key: "Bills",
        label: "Bills & Utilities",
        icon: "💡",
    },
    CategoryMeta {
        category: BudgetCategory::Transport,
        key: "transport",
        wire_key: "Transport",
        label: "Transportation",
        icon: "🚗",
    },
];

impl BudgetCategory {
    /// All categories in display order.
    pub const ALL: [Self; 6] = [
        Self::Food,
        Self::Travel,
        Self::Shopping,
        Self::Entertainment,
        Self::Bills,
        Self::Transport,
    ];

    /// Returns this category's row in the mapping table.
    #[must_use]
    pub fn meta(self) -> &'static CategoryMeta {
        &CATEGORY_TABLE[self as usize]
    }

    /// Lowercase in-memory key.
    #[must_use]
    pub fn key(self) -> &'static str {
        self.meta().key
    }

    /// Capitalized wire key.
    #[must_use]
    pub fn wire_key(self) -> &'static str {
        self.meta().wire_key
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.meta().label
    }

    /// Display icon.
    #[must_use]
    pub fn icon(self) -> &'static str {
        self.meta().icon
    }

    /// Looks up a category by its lowercase key (case-insensitive).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        CATEGORY_TABLE
            .iter()
            .find(|meta| meta.key.eq_ignore_ascii_case(key.trim()))
            .map(|meta| meta.category)
    }

    /// Looks up a category by its exact wire key.
    #[must_use]
    pub fn from_wire_key(wire_key: &str) -> Option<Self> {
        CATEGORY_TABLE
            .iter()
            .find(|meta| meta.wire_key == wire_key)
            .map(|meta| meta.category)
    }
}

impl std::fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for BudgetCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| format!("Unknown budget category: {s}"))
    }
}
