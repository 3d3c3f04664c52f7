//! Lenient parsing of budget amounts typed by the user.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parses a budget amount field.
///
/// Never fails: empty, unparsable (`"12abc"` included), or negative text yields zero. Plain
/// decimals (`"12.50"`) and scientific notation (`"1e3"`) are accepted.
#[must_use]
pub fn parse_amount_input(text: &str) -> Decimal {
    let text = text.trim();
    if text.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_or(Decimal::ZERO, |amount| amount.max(Decimal::ZERO))
}
