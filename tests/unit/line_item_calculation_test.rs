// Property-based tests for line item amounts and the never-empty item store
//
// Properties tested:
// 1. amount = quantity × unit price for non-zero inputs
// 2. a manual amount survives until quantity or price changes again
// 3. a zero or blank input leaves the amount untouched
// 4. removing items never empties the store

use docgen::documents::{ItemField, LineItem, LineItemStore};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

proptest! {
    /// Property: amount is the exact product of quantity and unit price
    #[test]
    fn test_amount_is_quantity_times_price(
        quantity in 1u32..=10_000,
        price_cents in 1u64..=10_000_000u64,
    ) {
        let price = Decimal::new(price_cents as i64, 2);
        let mut item = LineItem::empty();
        item.set(ItemField::Quantity, quantity.to_string());
        item.set(ItemField::UnitPrice, price.to_string());

        let amount = Decimal::from_str(&item.amount).unwrap();
        prop_assert_eq!(amount, Decimal::from(quantity) * price);
    }

    /// Property: a manual amount edit survives until an input changes
    #[test]
    fn test_manual_amount_survives_until_input_changes(
        quantity in 1u32..=1_000,
        price in 1u32..=100_000,
        manual in "[0-9]{1,6}",
        new_quantity in 1u32..=1_000,
    ) {
        let mut item = LineItem::empty();
        item.set(ItemField::Quantity, quantity.to_string());
        item.set(ItemField::UnitPrice, price.to_string());
        item.set(ItemField::Amount, manual.clone());
        item.set(ItemField::Description, "edited");

        prop_assert_eq!(&item.amount, &manual);

        item.set(ItemField::Quantity, new_quantity.to_string());
        prop_assert_eq!(
            item.amount_value(),
            Decimal::from(new_quantity) * Decimal::from(price)
        );
    }

    /// Property: the store keeps at least one item whatever is removed
    #[test]
    fn test_remove_never_empties_store(
        adds in 0usize..8,
        removals in proptest::collection::vec(0usize..10, 0..20),
    ) {
        let mut store = LineItemStore::new();
        for _ in 0..adds {
            store.add_item();
        }

        for index in removals {
            store.remove_item(index);
            prop_assert!(!store.is_empty());
        }
    }
}

#[test]
fn test_zero_input_keeps_amount() {
    let mut item = LineItem::empty();
    item.set(ItemField::Amount, "750");
    item.set(ItemField::Quantity, "0");
    item.set(ItemField::UnitPrice, "25");
    assert_eq!(item.amount, "750");

    item.set(ItemField::Quantity, "");
    assert_eq!(item.amount, "750");
}

#[test]
fn test_fractional_product() {
    let mut item = LineItem::empty();
    item.set(ItemField::Quantity, "2.5");
    item.set(ItemField::UnitPrice, "40.2");
    assert_eq!(item.amount_value(), dec!(100.5));
    assert_eq!(item.amount, "100.5");
}

#[test]
fn test_remove_last_item_leaves_fresh_one() {
    let mut store = LineItemStore::new();
    store.set_field(0, ItemField::Description, "Syringe Pump");

    assert!(store.remove_item(0));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(0), Some(&LineItem::empty()));
}

#[test]
fn test_out_of_range_edits_are_ignored() {
    let mut store = LineItemStore::new();
    assert!(!store.set_field(3, ItemField::Quantity, "1"));
    assert!(!store.remove_item(3));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_sum_of_worked_example() {
    let mut store = LineItemStore::new();
    store.add_item();
    store.add_item();
    store.set_field(0, ItemField::Quantity, "2");
    store.set_field(0, ItemField::UnitPrice, "50");
    store.set_field(1, ItemField::Quantity, "1");
    store.set_field(1, ItemField::UnitPrice, "100");
    store.set_field(2, ItemField::Quantity, "0");
    store.set_field(2, ItemField::UnitPrice, "0");

    assert_eq!(store.items()[2].amount, "");
    assert_eq!(store.sum_amounts(), dec!(200));
}
