// Display-string amounts
//
// Every numeric field on a document is kept exactly as the user typed it.
// Arithmetic parses the text on demand; anything that does not parse counts
// as zero and the original text is left alone.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Decimal places printed for tax, final and remaining totals
pub const TOTAL_SCALE: u32 = 2;

/// Parse the number a display string starts with.
///
/// Leading whitespace is skipped, then the longest prefix of the form
/// `[+-]?(digits[.digits]|.digits)([eE][+-]?digits)?` is read and the rest of
/// the text ignored, so `12%` is 12, `500/-` is 500 and `12,50,000` is 12.
/// Returns `None` when the text does not start with a number or the number
/// does not fit in a `Decimal`.
pub fn parse_amount(value: &str) -> Option<Decimal> {
    let text = value.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        start + bytes[start.min(bytes.len())..].iter().take_while(|b| b.is_ascii_digit()).count()
    };

    let (negative, int_start) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let int_end = digits_from(int_start);
    let int_digits = &text[int_start..int_end];

    let mut end = int_end;
    let mut frac_digits = "";
    if bytes.get(int_end) == Some(&b'.') {
        let frac_end = digits_from(int_end + 1);
        frac_digits = &text[int_end + 1..frac_end];
        end = frac_end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut exponent = None;
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign_len = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(end + 1 + sign_len);
        if exp_end > end + 1 + sign_len {
            exponent = Some(&text[end + 1..exp_end]);
        }
    }

    let int_digits = if int_digits.is_empty() { "0" } else { int_digits };
    let mantissa = if frac_digits.is_empty() {
        int_digits.to_string()
    } else {
        format!("{}.{}", int_digits, frac_digits)
    };

    let magnitude = match exponent {
        Some(exp) => Decimal::from_scientific(&format!("{}e{}", mantissa, exp)).ok()?,
        None => Decimal::from_str(&mantissa).ok()?,
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// Parse a display string, treating blank and invalid text as zero
pub fn amount_or_zero(value: &str) -> Decimal {
    parse_amount(value).unwrap_or(Decimal::ZERO)
}

/// True when the text parses to a non-zero number
pub fn is_nonzero(value: &str) -> bool {
    parse_amount(value).is_some_and(|amount| !amount.is_zero())
}

/// Format without trailing zeros (`200`, `100.5`)
pub fn format_plain(amount: Decimal) -> String {
    amount.normalize().to_string()
}

/// Round half away from zero and print exactly two decimals (`120.00`)
pub fn format_fixed(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(TOTAL_SCALE, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Accept a JSON string, number or null for a display-string field
pub fn deserialize_display_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number, got {}",
            other
        ))),
    }
}
