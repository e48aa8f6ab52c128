// Line items and the ordered store that owns them
//
// A line item is one row of the document table. Its amount follows
// quantity × unit price whenever both are non-zero numbers, but the user may
// overwrite it directly; that override lasts until quantity or price is
// edited again.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::amount::{amount_or_zero, format_plain};
use crate::core::AppError;

/// One editable row of a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
    pub amount: String,
}

/// Editable columns of a line item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Description,
    Quantity,
    UnitPrice,
    Amount,
}

impl std::str::FromStr for ItemField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "description" => Ok(ItemField::Description),
            "qty" | "quantity" => Ok(ItemField::Quantity),
            "price" | "unitPrice" => Ok(ItemField::UnitPrice),
            "amount" => Ok(ItemField::Amount),
            _ => Err(AppError::validation(format!("Unknown item field: {}", s))),
        }
    }
}

impl LineItem {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store `value` verbatim in `field`.
    ///
    /// Editing quantity or unit price recalculates the amount when both parse
    /// to non-zero numbers, replacing any manual amount.
    pub fn set(&mut self, field: ItemField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ItemField::Description => self.description = value,
            ItemField::Amount => self.amount = value,
            ItemField::Quantity => {
                self.quantity = value;
                self.recalculate_amount();
            }
            ItemField::UnitPrice => {
                self.unit_price = value;
                self.recalculate_amount();
            }
        }
    }

    /// Amount used for the subtotal; blank or invalid text counts as zero
    pub fn amount_value(&self) -> Decimal {
        amount_or_zero(&self.amount)
    }

    fn recalculate_amount(&mut self) {
        let quantity = amount_or_zero(&self.quantity);
        let unit_price = amount_or_zero(&self.unit_price);

        if quantity.is_zero() || unit_price.is_zero() {
            return;
        }

        // An overflowing product leaves the previous amount in place
        if let Some(product) = quantity.checked_mul(unit_price) {
            self.amount = format_plain(product);
        }
    }
}

/// Ordered, never-empty collection of line items
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LineItemStore {
    items: Vec<LineItem>,
}

impl<'de> Deserialize<'de> for LineItemStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<LineItem>::deserialize(deserializer).map(Self::from_items)
    }
}

impl Default for LineItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LineItemStore {
    /// A store holding a single empty item
    pub fn new() -> Self {
        Self {
            items: vec![LineItem::empty()],
        }
    }

    /// Build a store from existing rows, keeping at least one item
    pub fn from_items(items: Vec<LineItem>) -> Self {
        if items.is_empty() {
            return Self::new();
        }
        Self { items }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LineItem> {
        self.items.get(index)
    }

    /// Edit one field of the item at `index`.
    ///
    /// Returns `false` and changes nothing when `index` is out of range.
    pub fn set_field(&mut self, index: usize, field: ItemField, value: impl Into<String>) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.set(field, value);
                true
            }
            None => false,
        }
    }

    pub fn add_item(&mut self) {
        self.items.push(LineItem::empty());
    }

    /// Remove the item at `index`; removing the last one leaves a single empty item
    pub fn remove_item(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }

        self.items.remove(index);
        if self.items.is_empty() {
            self.items.push(LineItem::empty());
        }
        true
    }

    /// Sum of every item amount, invalid or blank amounts counting as zero
    pub fn sum_amounts(&self) -> Decimal {
        self.items.iter().fold(Decimal::ZERO, |total, item| {
            total.checked_add(item.amount_value()).unwrap_or(total)
        })
    }
}
