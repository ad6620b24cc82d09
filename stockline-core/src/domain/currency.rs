//! Currency input parsing and display formatting
//!
//! Prices are edited as integer cents to avoid floating-point rounding while
//! the user types, then stored as a decimal amount (`cents / 100`). The
//! formatting rules reproduce the mobile app's input field exactly: pad to at
//! least three digits and split the last two as the fractional part.

use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Parse free-form price input into integer cents
///
/// Strips every non-digit character before interpreting the rest as cents, so
/// "12.34", "R$12,34" and "1234" all parse to 1234 cents. Empty or digit-free
/// input parses to 0.
pub fn parse_currency_input_to_cents(text: &str) -> i64 {
    let re = Regex::new(r"[^0-9]").unwrap();
    let cleaned = re.replace_all(text, "");

    if cleaned.is_empty() {
        return 0;
    }
    // Inputs too long for i64 clamp rather than fail
    cleaned.parse::<i64>().unwrap_or(i64::MAX)
}

/// Format integer cents as a currency string ("$X.XX")
///
/// Negative values clamp to "$0.00".
pub fn format_cents_to_currency(cents: i64) -> String {
    if cents < 0 {
        return "$0.00".to_string();
    }
    // Pad to at least 3 digits: 5 -> "005" -> "$0.05"
    let s = format!("{:03}", cents);
    let (integer_part, decimal_part) = s.split_at(s.len() - 2);
    format!("${}.{}", integer_part, decimal_part)
}

/// Convert integer cents to the stored decimal amount
pub fn cents_to_amount(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Convert a stored decimal amount back to integer cents (rounded)
pub fn amount_to_cents(amount: Decimal) -> i64 {
    (amount * Decimal::from(100)).round().to_i64().unwrap_or(0)
}

/// Format a stored decimal amount for display
pub fn format_amount(amount: Decimal) -> String {
    format_cents_to_currency(amount_to_cents(amount))
}
