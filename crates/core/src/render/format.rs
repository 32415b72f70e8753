//! Cell formatting shared by every renderer.

use coop_shared::types::money::format_amount;
use rust_decimal::Decimal;

/// Placeholder for a missing label or date.
pub const MISSING: &str = "—";

/// Message shown when a snapshot has no months.
pub const NO_DATA: &str = "No data available";

/// Formats an amount with two decimals; zero renders "0.00".
#[must_use]
pub fn amount(value: Decimal) -> String {
    format_amount(value)
}

/// A label, or [`MISSING`] when blank.
#[must_use]
pub fn label(value: &str) -> String {
    if value.trim().is_empty() {
        MISSING.to_string()
    } else {
        value.to_string()
    }
}

/// An optional label, or [`MISSING`] when absent or blank.
#[must_use]
pub fn optional_label(value: Option<&str>) -> String {
    label(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_placeholders() {
        assert_eq!(amount(Decimal::ZERO), "0.00");
        assert_eq!(amount(dec!(1234.5)), "1234.50");
        assert_eq!(label("  "), MISSING);
        assert_eq!(optional_label(None), MISSING);
        assert_eq!(optional_label(Some("Jan 2024")), "Jan 2024");
    }
}
