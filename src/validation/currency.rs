//! Amount input parsing and display formatting.
//!
//! The amount inputs show a grouped value ("1,234") and re-parse whatever
//! the user types by keeping only the digits.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

/// Strip every non-digit and read what is left as a whole amount.
///
/// Returns `None` only when no digit remains. Amounts beyond what a
/// `Decimal` can hold saturate at `Decimal::MAX`.
pub fn parse_currency_input(raw: &str) -> Option<Decimal> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some(Decimal::ZERO);
    }
    match Decimal::from_str(significant) {
        Ok(amount) => Some(amount),
        Err(e) => {
            debug!(digits = significant.len(), "Amount out of range, saturating: {}", e);
            Some(Decimal::MAX)
        }
    }
}

/// Format an amount the way the plan screen displays it (es-MX grouping):
/// comma thousands separators, `.` before at most three fractional digits.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(3).normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_examples() {
        assert_eq!(parse_currency_input(""), None);
        assert_eq!(parse_currency_input("abc"), None);
        assert_eq!(parse_currency_input("1,234"), Some(dec!(1234)));
        assert_eq!(parse_currency_input("0"), Some(Decimal::ZERO));
    }

    #[test]
    fn parse_strips_everything_but_digits() {
        assert_eq!(parse_currency_input("$ 12,500 MXN"), Some(dec!(12500)));
        assert_eq!(parse_currency_input("-50"), Some(dec!(50)));
        // Decimal point is stripped too: the input is an unformatted integer.
        assert_eq!(parse_currency_input("10.50"), Some(dec!(1050)));
        assert_eq!(parse_currency_input("000"), Some(Decimal::ZERO));
        assert_eq!(parse_currency_input("007"), Some(dec!(7)));
        // Non-ASCII digits are not amounts.
        assert_eq!(parse_currency_input("١٢٣"), None);
    }

    #[test]
    fn parse_overflow_saturates() {
        assert_eq!(parse_currency_input(&"1".repeat(30)), Some(Decimal::MAX));
        assert_eq!(parse_currency_input(&"9".repeat(40)), Some(Decimal::MAX));
        // Leading zeros don't count toward the size.
        let padded = format!("{}42", "0".repeat(40));
        assert_eq!(parse_currency_input(&padded), Some(dec!(42)));
    }

    #[test]
    fn parse_is_idempotent() {
        for raw in ["", "abc", "1,234", "$ 9.500", "7".repeat(35).as_str()] {
            assert_eq!(parse_currency_input(raw), parse_currency_input(raw), "{raw:?}");
        }
    }

    #[test]
    fn format_groups_thousands() {
        assert_eq!(format_currency(dec!(0)), "0");
        assert_eq!(format_currency(dec!(999)), "999");
        assert_eq!(format_currency(dec!(1000)), "1,000");
        assert_eq!(format_currency(dec!(1234567)), "1,234,567");
        assert_eq!(format_currency(dec!(-25000)), "-25,000");
    }

    #[test]
    fn format_keeps_up_to_three_fraction_digits() {
        assert_eq!(format_currency(dec!(1234.5)), "1,234.5");
        assert_eq!(format_currency(dec!(1234.50)), "1,234.5");
        assert_eq!(format_currency(dec!(0.12345)), "0.123");
    }

    #[test]
    fn reformat_after_parse() {
        let amount = parse_currency_input("1,234,567").unwrap();
        assert_eq!(format_currency(amount), "1,234,567");
        let amount = parse_currency_input("1,234,5678").unwrap();
        assert_eq!(format_currency(amount), "12,345,678");
    }
}
