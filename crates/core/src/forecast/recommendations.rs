//! What the recommendations panel shows.

/// Placeholder shown when a successful response carries no recommendations.
pub const NO_RECOMMENDATIONS: &str = "No recommendations available.";

/// Recommendations panel content.
///
/// An empty list is a normal, successful outcome and is distinct from a
/// failed forecast load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationsView {
    /// Exactly one placeholder line.
    Placeholder(&'static str),
    /// Advisory messages, in order.
    Items(Vec<String>),
}

impl RecommendationsView {
    /// Builds the panel from the served list.
    #[must_use]
    pub fn from_list(reccs: &[String]) -> Self {
        if reccs.is_empty() {
            Self::Placeholder(NO_RECOMMENDATIONS)
        } else {
            Self::Items(reccs.to_vec())
        }
    }

    /// Lines to render, placeholder included.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Self::Placeholder(text) => vec![*text],
            Self::Items(items) => items.iter().map(String::as_str).collect(),
        }
    }

    /// Number of advisory items (the placeholder does not count).
    #[must_use]
    pub fn item_count(&self) -> usize {
        match self {
            Self::Placeholder(_) => 0,
            Self::Items(items) => items.len(),
        }
    }
}
