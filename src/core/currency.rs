//! Currency display formatting.
//!
//! Amounts are rendered with [`rust_decimal::Decimal`] — never floating
//! point — rounded half-away-from-zero to exactly two decimal places.
//! Three currencies get locale-specific conventions; everything else falls
//! through to a generic `"<amount> <code>"` format.

use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

/// Format an amount for display in the given currency.
///
/// A non-numeric amount is returned unchanged (pass-through, not an error):
/// extraction models sometimes emit placeholder text where a number should
/// be, and the viewer shows whatever was extracted. Numeric strings are
/// accepted and formatted like numbers.
///
/// ```rust
/// use invoview::core::format_currency;
/// use serde_json::json;
///
/// assert_eq!(format_currency(&json!(1234.5), "CZK"), "1 234,50 Kč");
/// assert_eq!(format_currency(&json!(1234.5), "EUR"), "€1,234.50");
/// assert_eq!(format_currency(&json!("abc"), "USD"), "abc");
/// ```
pub fn format_currency(amount: &Value, code: &str) -> String {
    let Some(amount) = as_decimal(amount) else {
        return match amount {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
    };

    match code {
        "CZK" => format!("{} Kč", render(amount, " ", ",")),
        "EUR" => format!("€{}", render(amount, ",", ".")),
        "USD" => format!("${}", render(amount, ",", ".")),
        "" => render(amount, ",", "."),
        _ => format!("{} {}", render(amount, ",", "."), code),
    }
}

/// Interpret a JSON scalar as a decimal, accepting numeric strings.
fn as_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else if let Some(u) = n.as_u64() {
                Some(Decimal::from(u))
            } else {
                n.as_f64().and_then(Decimal::from_f64_retain)
            }
        }
        Value::String(s) => {
            let s = s.trim();
            s.parse().ok().or_else(|| Decimal::from_scientific(s).ok())
        }
        _ => None,
    }
}

/// Render with two decimals, the given thousands separator and decimal mark.
fn render(amount: Decimal, thousands: &str, decimal: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{rounded:.2}");
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    format!("{sign}{}{decimal}{frac_part}", group(digits, thousands))
}

/// Insert `sep` between every group of three digits, counting from the right.
fn group(digits: &str, sep: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push_str(sep);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn czk_uses_space_grouping_and_comma_decimal() {
        assert_eq!(format_currency(&json!(1234.5), "CZK"), "1 234,50 Kč");
        assert_eq!(format_currency(&json!(1234567.891), "CZK"), "1 234 567,89 Kč");
    }

    #[test]
    fn eur_and_usd_use_symbol_prefix() {
        assert_eq!(format_currency(&json!(1234.5), "EUR"), "€1,234.50");
        assert_eq!(format_currency(&json!(1234.5), "USD"), "$1,234.50");
        assert_eq!(format_currency(&json!(0), "USD"), "$0.00");
    }

    #[test]
    fn unknown_code_appends_code() {
        assert_eq!(format_currency(&json!(1234.5), "GBP"), "1,234.50 GBP");
        assert_eq!(format_currency(&json!(99), "XYZ"), "99.00 XYZ");
    }

    #[test]
    fn empty_code_still_formats() {
        assert_eq!(format_currency(&json!(5), ""), "5.00");
    }

    #[test]
    fn non_numeric_passes_through() {
        assert_eq!(format_currency(&json!("abc"), "USD"), "abc");
        assert_eq!(format_currency(&json!("N/A"), "CZK"), "N/A");
    }

    #[test]
    fn numeric_strings_are_formatted() {
        assert_eq!(format_currency(&json!("1234.5"), "EUR"), "€1,234.50");
        assert_eq!(format_currency(&json!("  250 "), "CZK"), "250,00 Kč");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside_grouping() {
        assert_eq!(format_currency(&json!(-1234.5), "EUR"), "€-1,234.50");
        assert_eq!(format_currency(&json!("-12.345"), "CZK"), "-12,35 Kč");
    }

    // Midpoint cases go through strings: the f64 route would already have
    // lost the exact .005.
    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_currency(&json!("2.005"), "GBP"), "2.01 GBP");
        assert_eq!(format_currency(&json!("2.004"), "GBP"), "2.00 GBP");
    }
}
