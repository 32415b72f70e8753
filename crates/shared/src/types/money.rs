//! Amount parsing and display.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Raw snapshots carry amounts as JSON numbers, numeric strings or `null`;
//! everything is normalized to `rust_decimal::Decimal` here. Anything that
//! cannot be read as a number degrades to zero instead of failing.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

/// Display text for a zero (or missing) amount.
pub const ZERO_DISPLAY: &str = "0.00";

/// Reads a decimal out of an arbitrary JSON value.
///
/// Numbers and numeric strings (optionally with thousands separators or
/// scientific notation) are parsed; `null`, booleans, arrays, objects and
/// unparseable strings all yield `Decimal::ZERO`.
#[must_use]
pub fn parse_amount(value: &Value) -> Decimal {
    match value {
        Value::Number(number) => parse_text(&number.to_string()),
        Value::String(text) => parse_text(text),
        _ => Decimal::ZERO,
    }
}

fn parse_text(raw: &str) -> Decimal {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .unwrap_or_else(|_| {
            tracing::trace!(raw, "unparseable amount degraded to zero");
            Decimal::ZERO
        })
}

/// Formats an amount with exactly two decimal places, rounding half away
/// from zero.
///
/// Zero, including a negative zero left over from rounding, is always
/// rendered as [`ZERO_DISPLAY`].
#[must_use]
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return ZERO_DISPLAY.to_string();
    }
    format!("{rounded:.2}")
}

/// Serde helpers for permissive snapshot parsing.
///
/// Each helper reads the raw JSON value first and never fails on an
/// off-type value: it degrades to zero, empty or `None` instead.
pub mod de {
    use rust_decimal::Decimal;
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::parse_amount;

    /// Deserializes any JSON value into a decimal, defaulting to zero.
    pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().map_or(Decimal::ZERO, parse_amount))
    }

    /// Deserializes an optional decimal; `null` stays `None`.
    pub fn lenient_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            None | Some(Value::Null) => None,
            Some(value) => Some(parse_amount(&value)),
        })
    }

    fn text(value: Value) -> Option<String> {
        match value {
            Value::String(text) => Some(text),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Deserializes a label; numbers and booleans keep their JSON text,
    /// anything else becomes the empty string.
    pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(text).unwrap_or_default())
    }

    /// Like [`lenient_string`], but `null`, arrays and objects are `None`.
    pub fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(text))
    }

    /// Deserializes a year from a number or numeric string.
    pub fn lenient_optional_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Number(number)) => number.as_i64().and_then(|year| i32::try_from(year).ok()),
            Some(Value::String(text)) => text.trim().parse().ok(),
            _ => None,
        })
    }

    /// Deserializes a list; a non-array value is empty and elements that
    /// cannot be read are skipped.
    pub fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let Some(Value::Array(items)) = Option::<Value>::deserialize(deserializer)? else {
            return Ok(Vec::new());
        };
        Ok(items
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(item) => Some(item),
                Err(err) => {
                    tracing::trace!(error = %err, "unreadable list element skipped");
                    None
                }
            })
            .collect())
    }

    /// Deserializes a nested object; anything that is not a readable object
    /// becomes the default value.
    pub fn lenient_struct<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        Ok(lenient_optional_struct(deserializer)?.unwrap_or_default())
    }

    /// Deserializes an optional nested object; anything that is not a
    /// readable object is `None`.
    pub fn lenient_optional_struct<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
            _ => None,
        })
    }
}
