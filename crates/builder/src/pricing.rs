//! Threshold-discount pricing over the current selection.

use bundle_core::Money;

use crate::config::BundleConfig;
use crate::selection::SelectionSet;

/// Sum of selected prices (zero for an empty selection).
pub fn subtotal(selection: &SelectionSet) -> Money {
    selection.prices().sum()
}

/// `subtotal * discount% / 100` once `selected_count` reaches the threshold,
/// zero before. Cheap and expensive items count the same.
pub fn discount(config: &BundleConfig, selected_count: usize, subtotal: Money) -> Money {
    if config.threshold_met(selected_count) {
        subtotal.percent(config.discount_percentage())
    } else {
        Money::ZERO
    }
}

/// Subtotal, discount and total for one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pricing {
    pub subtotal: Money,
    pub discount: Money,
    pub total: Money,
    /// Whether the threshold discount applies (independent of its amount,
    /// which is zero for a 0% config or free items).
    pub discount_applied: bool,
}

impl Pricing {
    pub fn compute(config: &BundleConfig, selection: &SelectionSet) -> Self {
        let subtotal = subtotal(selection);
        let discount = discount(config, selection.len(), subtotal);
        Self {
            subtotal,
            discount,
            total: subtotal - discount,
            discount_applied: config.threshold_met(selection.len()),
        }
    }

    /// What the shopper saves; always equal to the discount.
    pub fn savings(&self) -> Money {
        self.discount
    }
}
