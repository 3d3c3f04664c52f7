//! Display utilities for the dashboard

use colored::{Color, Colorize};
use finquest_core::forecast::ForecastStatus;
use finquest_core::transactions::CategoryStyle;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Width of a progress bar in cells.
pub const BAR_WIDTH: u32 = 20;

/// Print a section header
pub fn section(title: &str) {
    println!();
    println!("{}", "━".repeat(60).bright_black());
    println!(" {}", title.bright_white().bold());
    println!("{}", "━".repeat(60).bright_black());
}

/// Print a success message
pub fn success(message: &str) {
    println!("  {} {}", "✓".bright_green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    println!("  {} {}", "✗".bright_red(), message.bright_red());
}

/// Print an info message
pub fn info(message: &str) {
    println!("  {} {}", "→".bright_blue(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    println!("  {} {}", "⚠".yellow(), message.yellow());
}

/// Print a labeled value
pub fn labeled(label: &str, value: &str) {
    println!("  {}: {}", label.bright_white(), value.bright_cyan());
}

/// Renders a bar for a percentage already clamped to `[0, 100]`.
pub fn bar(percentage: Decimal) -> String {
    let filled = (percentage * Decimal::from(BAR_WIDTH) / Decimal::ONE_HUNDRED)
        .round()
        .clamp(Decimal::ZERO, Decimal::from(BAR_WIDTH));
    let filled = filled.to_usize().unwrap_or(0);
    let empty = BAR_WIDTH as usize - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Terminal color for a transaction tag.
pub const fn tag_color(style: CategoryStyle) -> Color {
    match style {
        CategoryStyle::Food => Color::Green,
        CategoryStyle::Transport => Color::Blue,
        CategoryStyle::Shopping => Color::Magenta,
        CategoryStyle::Entertainment => Color::BrightMagenta,
        CategoryStyle::Bills => Color::Yellow,
        CategoryStyle::Travel => Color::Cyan,
        CategoryStyle::Other => Color::BrightBlack,
    }
}

/// Renders one transaction tag.
pub fn tag(label: &str) -> String {
    format!("[{label}]")
        .color(tag_color(CategoryStyle::for_tag(label)))
        .to_string()
}

/// Renders a status badge: neutral for on track, warning otherwise.
pub fn badge(status: ForecastStatus, label: &str) -> String {
    if status.is_warning() {
        format!(" {label} ").black().on_yellow().to_string()
    } else {
        format!(" {label} ").black().on_green().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), 0)]
    #[case(dec!(50), 10)]
    #[case(dec!(90), 18)]
    #[case(dec!(100), 20)]
    #[case(dec!(2.4), 0)]
    #[case(dec!(2.6), 1)]
    fn test_bar_fill(#[case] percentage: Decimal, #[case] filled: usize) {
        let rendered = bar(percentage);
        assert_eq!(rendered.chars().filter(|c| *c == '█').count(), filled);
        assert_eq!(rendered.chars().count(), BAR_WIDTH as usize);
    }

    #[test]
    fn test_unknown_tag_uses_other_color() {
        assert_eq!(
            tag_color(CategoryStyle::for_tag("crypto")),
            tag_color(CategoryStyle::Other)
        );
    }
}
