// Display-string amount parsing and formatting
//
// Numeric fields are free text: parsing must never fail loudly, and totals
// print with two decimals rounded half away from zero.

use docgen::core::amount::{amount_or_zero, format_fixed, format_plain, is_nonzero, parse_amount};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

proptest! {
    /// Property: trailing text after a number is ignored
    #[test]
    fn test_suffix_is_ignored(value in 0u32..1_000_000, suffix in "[ %/a-dA-Df-zF-Z,_-][ -~]{0,8}") {
        let text = format!("{}{}", value, suffix);
        prop_assert_eq!(parse_amount(&text), Some(Decimal::from(value)));
    }

    /// Property: arbitrary text never panics and unparseable text is zero
    #[test]
    fn test_any_text_is_total(text in "\\PC*") {
        let value = amount_or_zero(&text);
        if parse_amount(&text).is_none() {
            prop_assert_eq!(value, Decimal::ZERO);
        }
    }

    /// Property: integers round-trip through plain formatting
    #[test]
    fn test_integers_format_plainly(value in -1_000_000_000i64..1_000_000_000i64) {
        let parsed = parse_amount(&value.to_string()).unwrap();
        prop_assert_eq!(format_plain(parsed), value.to_string());
    }

    /// Property: fixed formatting always has exactly two decimals
    #[test]
    fn test_fixed_has_two_decimals(units in -1_000_000i64..1_000_000i64, scale in 0u32..6) {
        let formatted = format_fixed(Decimal::new(units, scale));
        let (_, fraction) = formatted.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 2);
    }
}

#[test]
fn test_leading_number_is_read() {
    // Grouped figures stop at the first separator
    assert_eq!(parse_amount("12,50,000"), Some(dec!(12)));
    assert_eq!(parse_amount("1_000"), Some(dec!(1)));
    assert_eq!(parse_amount("12%"), Some(dec!(12)));
    assert_eq!(parse_amount("500/-"), Some(dec!(500)));
    assert_eq!(parse_amount("  2 pcs"), Some(dec!(2)));
    assert!(!is_nonzero("Rs. 500"));
}

#[test]
fn test_zero_forms() {
    assert!(!is_nonzero("0"));
    assert!(!is_nonzero("0.00"));
    assert!(!is_nonzero(""));
    assert!(is_nonzero("0.01"));
}

#[test]
fn test_half_rounds_away_from_zero() {
    assert_eq!(format_fixed(dec!(0.125)), "0.13");
    assert_eq!(format_fixed(dec!(-0.125)), "-0.13");
    assert_eq!(format_fixed(dec!(120)), "120.00");
}

#[test]
fn test_plain_drops_trailing_zeros() {
    assert_eq!(format_plain(dec!(200.00)), "200");
    assert_eq!(format_plain(dec!(100.50)), "100.5");
}
