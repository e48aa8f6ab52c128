use rust_decimal::Decimal;

use crate::core::amount::{amount_or_zero, format_fixed, format_plain, is_nonzero};
use crate::modules::documents::models::{LineItemStore, Totals};

/// Derivation inputs touched by an edit or by an earlier pipeline stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub items: bool,
    pub subtotal: bool,
    pub tax_percent: bool,
    pub tax_amount: bool,
    pub advance_payment: bool,
    pub payment_done: bool,
}

impl ChangeSet {
    pub fn items() -> Self {
        Self {
            items: true,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn affects_tax(&self) -> bool {
        self.subtotal || self.tax_percent
    }

    fn affects_final(&self) -> bool {
        self.subtotal || self.tax_amount || self.advance_payment || self.payment_done
    }
}

/// Keeps subtotal, tax, final amount and remaining payment consistent.
///
/// The pipeline is `recompute_subtotal → recompute_tax →
/// recompute_final_and_remaining`; a stage only runs when one of its inputs
/// changed, so manual entries in derived fields survive until then. Zero or
/// empty results never overwrite an existing value, except that an empty
/// `payment_done` always clears `payment_remaining`.
pub struct DerivationEngine;

impl DerivationEngine {
    /// Run the pipeline for `changes`, returning them extended with what the
    /// stages themselves changed
    pub fn run(items: &LineItemStore, totals: &mut Totals, mut changes: ChangeSet) -> ChangeSet {
        if changes.items && Self::recompute_subtotal(items, totals) {
            changes.subtotal = true;
        }

        if changes.affects_tax() && Self::recompute_tax(totals) {
            changes.tax_amount = true;
        }

        if changes.affects_final() {
            Self::recompute_final_and_remaining(totals);
        }

        changes
    }

    /// Subtotal := Σ item amounts when that sum is positive.
    ///
    /// Returns whether the subtotal text changed.
    pub fn recompute_subtotal(items: &LineItemStore, totals: &mut Totals) -> bool {
        let candidate = items.sum_amounts();
        if candidate <= Decimal::ZERO {
            return false;
        }

        write_if_changed(&mut totals.subtotal, format_plain(candidate))
    }

    /// Tax amount := subtotal × percent / 100 when both are non-zero
    pub fn recompute_tax(totals: &mut Totals) -> bool {
        if !is_nonzero(&totals.subtotal) || !is_nonzero(&totals.tax_percent) {
            return false;
        }

        let subtotal = amount_or_zero(&totals.subtotal);
        let percent = amount_or_zero(&totals.tax_percent);
        let tax = subtotal
            .checked_mul(percent)
            .and_then(|product| product.checked_div(Decimal::ONE_HUNDRED));

        match tax {
            Some(tax) => write_if_changed(&mut totals.tax_amount, format_fixed(tax)),
            None => false,
        }
    }

    /// Final := subtotal + tax unless it prints as `0.00`; remaining follows
    /// payment done, and is cleared when payment done is empty
    pub fn recompute_final_and_remaining(totals: &mut Totals) -> bool {
        let subtotal = amount_or_zero(&totals.subtotal);
        let tax = amount_or_zero(&totals.tax_amount);
        let advance = amount_or_zero(&totals.advance_payment);
        let done = amount_or_zero(&totals.payment_done);

        let mut changed = false;
        let gross = subtotal.checked_add(tax);

        if let Some(gross) = gross {
            let final_amount = format_fixed(gross);
            if final_amount != "0.00" {
                changed |= write_if_changed(&mut totals.final_amount, final_amount);
            }
        }

        let remaining = if totals.payment_done.is_empty() {
            Some(String::new())
        } else {
            gross
                .zip(advance.checked_add(done))
                .and_then(|(gross, paid)| gross.checked_sub(paid))
                .map(format_fixed)
        };

        if let Some(remaining) = remaining {
            changed |= write_if_changed(&mut totals.payment_remaining, remaining);
        }

        changed
    }
}

/// Overwrite `slot`, reporting whether the text differs
pub(crate) fn write_if_changed(slot: &mut String, value: String) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
