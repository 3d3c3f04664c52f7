//! Fixed presentation styles for transaction category tags.

/// Style bucket for a category tag.
///
/// Lookup is case-insensitive; anything not in the table is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryStyle {
    /// `food`
    Food,
    /// `transport`
    Transport,
    /// `shopping`
    Shopping,
    /// `entertainment`
    Entertainment,
    /// `bills`
    Bills,
    /// `travel`
    Travel,
    /// Fallback for every unknown tag.
    Other,
}

const STYLE_TABLE: [(&str, CategoryStyle); 7] = [
    ("food", CategoryStyle::Food),
    ("transport", CategoryStyle::Transport),
    ("shopping", CategoryStyle::Shopping),
    ("entertainment", CategoryStyle::Entertainment),
    ("bills", CategoryStyle::Bills),
    ("travel", CategoryStyle::Travel),
    ("other", CategoryStyle::Other),
];

impl CategoryStyle {
    /// Resolves the style for a tag.
    #[must_use]
    pub fn for_tag(tag: &str) -> Self {
        let tag = tag.trim();
        STYLE_TABLE
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(tag))
            .map_or(Self::Other, |(_, style)| *style)
    }

    /// Palette color name for this style.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Food => "green",
            Self::Transport => "blue",
            Self::Shopping => "purple",
            Self::Entertainment => "pink",
            Self::Bills => "orange",
            Self::Travel => "indigo",
            Self::Other => "gray",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("food", CategoryStyle::Food)]
    #[case("FOOD", CategoryStyle::Food)]
    #[case("Transport", CategoryStyle::Transport)]
    #[case("shopping", CategoryStyle::Shopping)]
    #[case("Entertainment", CategoryStyle::Entertainment)]
    #[case("bills", CategoryStyle::Bills)]
    #[case("TRAVEL", CategoryStyle::Travel)]
    #[case("other", CategoryStyle::Other)]
    #[case("Food and Drink", CategoryStyle::Other)]
    #[case("", CategoryStyle::Other)]
    #[case("🍕", CategoryStyle::Other)]
    fn test_for_tag(#[case] tag: &str, #[case] expected: CategoryStyle) {
        assert_eq!(CategoryStyle::for_tag(tag), expected);
    }

    #[test]
    fn test_unknown_tag_uses_fallback_color() {
        assert_eq!(CategoryStyle::for_tag("Subscriptions").color(), "gray");
        assert_eq!(CategoryStyle::for_tag("food").color(), "green");
    }
}
