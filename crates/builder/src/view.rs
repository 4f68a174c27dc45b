//! Derived UI state.
//!
//! [`BundleView::derive`] is a pure function of the config, the registered
//! controls and the selection.
//! The controller calls it after every mutation and hands the whole view to
//! the renderer, so no displayed value is ever patched incrementally.

use bundle_core::{Money, ProductId};

use crate::config::BundleConfig;
use crate::pricing::Pricing;
use crate::registry::ControlRegistry;
use crate::selection::SelectionSet;

pub const EMPTY_SIDEBAR_MESSAGE: &str = "Select products to build your bundle";
pub const CART_UNLOCKED_LABEL: &str = "Add Bundle to Cart";
pub const CONTROL_ADDED_LABEL: &str = "Added ✓";
pub const CONTROL_ADD_LABEL: &str = "Add to Bundle";

/// Progress toward the unlock threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub selected: usize,
    pub required: usize,
    /// `min(selected / required, 1.0)`.
    pub ratio: f64,
    /// `"{selected}/{required} added"`.
    pub label: String,
}

impl Progress {
    pub fn derive(config: &BundleConfig, selected: usize) -> Self {
        let required = config.required_item_count();
        Self {
            selected,
            required,
            ratio: (selected as f64 / required as f64).min(1.0),
            label: format!("{selected}/{required} added"),
        }
    }

    /// Ratio as a percentage, for width-style progress bars.
    pub fn percent(&self) -> f64 {
        self.ratio * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub price: Money,
    pub price_label: String,
}

/// Sidebar listing of the selected products (each with a remove control).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sidebar {
    Empty,
    Items(Vec<SidebarItem>),
}

impl Sidebar {
    pub fn derive(selection: &SelectionSet) -> Self {
        if selection.is_empty() {
            return Sidebar::Empty;
        }
        Sidebar::Items(
            selection
                .iter()
                .map(|(id, snapshot)| SidebarItem {
                    id: id.clone(),
                    name: snapshot.name.clone(),
                    image: snapshot.image.clone(),
                    price: snapshot.price,
                    price_label: snapshot.price.to_string(),
                })
                .collect(),
        )
    }

    /// Placeholder text shown while nothing is selected.
    pub fn empty_message(&self) -> Option<&'static str> {
        match self {
            Sidebar::Empty => Some(EMPTY_SIDEBAR_MESSAGE),
            Sidebar::Items(_) => None,
        }
    }

    pub fn items(&self) -> &[SidebarItem] {
        match self {
            Sidebar::Empty => &[],
            Sidebar::Items(items) => items.as_slice(),
        }
    }
}

/// Pricing fields as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingView {
    pub subtotal: Money,
    pub discount: Money,
    pub total: Money,
    /// Discount banner and line are shown only once the threshold is met.
    pub discount_visible: bool,
    pub subtotal_label: String,
    pub discount_label: String,
    pub total_label: String,
}

impl From<Pricing> for PricingView {
    fn from(pricing: Pricing) -> Self {
        Self {
            subtotal: pricing.subtotal,
            discount: pricing.discount,
            total: pricing.total,
            discount_visible: pricing.discount_applied,
            subtotal_label: pricing.subtotal.to_string(),
            discount_label: format!("-{}", pricing.discount),
            total_label: pricing.total.to_string(),
        }
    }
}

/// State of the "add to cart" control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartButton {
    pub enabled: bool,
    pub label: String,
}

impl CartButton {
    pub fn derive(config: &BundleConfig, selected: usize) -> Self {
        if config.threshold_met(selected) {
            return Self {
                enabled: true,
                label: CART_UNLOCKED_LABEL.to_string(),
            };
        }
        let remaining = config.remaining(selected);
        let noun = if remaining == 1 { "item" } else { "items" };
        Self {
            enabled: false,
            label: format!("Add {remaining} more {noun} to unlock"),
        }
    }
}

/// State of one product card's add/remove control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductControl {
    pub selected: bool,
    pub label: &'static str,
}

impl ProductControl {
    pub fn derive(selection: &SelectionSet, id: &ProductId) -> Self {
        let selected = selection.contains(id);
        Self {
            selected,
            label: if selected { CONTROL_ADDED_LABEL } else { CONTROL_ADD_LABEL },
        }
    }
}

/// Everything the widget displays, derived in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleView {
    pub progress: Progress,
    pub sidebar: Sidebar,
    pub pricing: PricingView,
    pub cart_button: CartButton,
    /// Registered controls in registration order, then any selected product
    /// that was never registered.
    pub controls: Vec<(ProductId, ProductControl)>,
}

impl BundleView {
    pub fn derive(config: &BundleConfig, registry: &ControlRegistry, selection: &SelectionSet) -> Self {
        let selected = selection.len();
        let unregistered = selection.iter().map(|(id, _)| id).filter(|id| !registry.contains(id));
        let controls = registry
            .ids()
            .chain(unregistered)
            .map(|id| (id.clone(), ProductControl::derive(selection, id)))
            .collect();

        Self {
            progress: Progress::derive(config, selected),
            sidebar: Sidebar::derive(selection),
            pricing: Pricing::compute(config, selection).into(),
            cart_button: CartButton::derive(config, selected),
            controls,
        }
    }

    /// Rendered state of one product control, if the view carries it.
    pub fn control(&self, id: &ProductId) -> Option<&ProductControl> {
        self.controls
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, control)| control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductSnapshot;

    fn pick(selection: &mut SelectionSet, raw: &str, cents: u64) {
        selection.toggle(
            ProductId::new(raw).unwrap(),
            ProductSnapshot::new(raw.to_uppercase(), Money::from_cents(cents), format!("/img/{raw}.png")),
        );
    }

    #[test]
    fn empty_view() {
        let view = BundleView::derive(&BundleConfig::default(), &ControlRegistry::new(), &SelectionSet::new());
        assert_eq!(view.progress.label, "0/3 added");
        assert_eq!(view.progress.ratio, 0.0);
        assert_eq!(view.sidebar, Sidebar::Empty);
        assert_eq!(view.sidebar.empty_message(), Some(EMPTY_SIDEBAR_MESSAGE));
        assert_eq!(view.pricing.subtotal_label, "$0.00");
        assert!(!view.pricing.discount_visible);
        assert!(!view.cart_button.enabled);
        assert_eq!(view.cart_button.label, "Add 3 more items to unlock");
    }

    #[test]
    fn two_item_view_asks_for_one_more_item() {
        let mut selection = SelectionSet::new();
        pick(&mut selection, "a", 1000);
        pick(&mut selection, "b", 2000);

        let view = BundleView::derive(&BundleConfig::default(), &ControlRegistry::new(), &selection);
        assert_eq!(view.progress.label, "2/3 added");
        assert!((view.progress.percent() - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(view.pricing.total_label, "$30.00");
        assert!(!view.cart_button.enabled);
        assert_eq!(view.cart_button.label, "Add 1 more item to unlock");
    }

    #[test]
    fn unlocked_view_shows_discount() {
        let mut selection = SelectionSet::new();
        pick(&mut selection, "a", 1000);
        pick(&mut selection, "b", 2000);
        pick(&mut selection, "c", 1500);

        let view = BundleView::derive(&BundleConfig::default(), &ControlRegistry::new(), &selection);
        assert_eq!(view.progress.ratio, 1.0);
        assert!(view.pricing.discount_visible);
        assert_eq!(view.pricing.discount_label, "-$13.50");
        assert_eq!(view.pricing.total_label, "$31.50");
        assert!(view.cart_button.enabled);
        assert_eq!(view.cart_button.label, CART_UNLOCKED_LABEL);

        let names: Vec<&str> = view.sidebar.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(view.sidebar.items()[2].price_label, "$15.00");
    }

    #[test]
    fn progress_ratio_caps_at_one() {
        let progress = Progress::derive(&BundleConfig::default(), 5);
        assert_eq!(progress.ratio, 1.0);
        assert_eq!(progress.label, "5/3 added");
    }

    #[test]
    fn control_labels_follow_selection() {
        let mut selection = SelectionSet::new();
        pick(&mut selection, "a", 1000);
        let a = ProductId::new("a").unwrap();
        let b = ProductId::new("b").unwrap();

        assert_eq!(
            ProductControl::derive(&selection, &a),
            ProductControl { selected: true, label: CONTROL_ADDED_LABEL }
        );
        assert_eq!(ProductControl::derive(&selection, &b).label, CONTROL_ADD_LABEL);
    }

    #[test]
    fn view_carries_every_registered_control() {
        let mut registry = ControlRegistry::new();
        for raw in ["a", "b"] {
            registry
                .register(ProductId::new(raw).unwrap(), ProductSnapshot::new(raw, Money::from_cents(100), "/img.png"))
                .unwrap();
        }
        let mut selection = SelectionSet::new();
        pick(&mut selection, "b", 100);
        pick(&mut selection, "loose", 100);

        let view = BundleView::derive(&BundleConfig::default(), &registry, &selection);
        let controls: Vec<(&str, &str)> = view
            .controls
            .iter()
            .map(|(id, control)| (id.as_str(), control.label))
            .collect();
        assert_eq!(
            controls,
            vec![("a", CONTROL_ADD_LABEL), ("b", CONTROL_ADDED_LABEL), ("loose", CONTROL_ADDED_LABEL)]
        );
        assert!(view.control(&ProductId::new("missing").unwrap()).is_none());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the cart unlocks exactly when the threshold is met.
            #[test]
            fn cart_enabled_iff_threshold_met(selected in 0usize..20, required in 1usize..10) {
                let config = BundleConfig::new(required, 30).unwrap();
                let button = CartButton::derive(&config, selected);
                prop_assert_eq!(button.enabled, selected >= required);
                if !button.enabled {
                    let remaining = required - selected;
                    let expected_prefix = format!("Add {remaining} more item");
                    prop_assert!(button.label.starts_with(&expected_prefix));
                    prop_assert_eq!(button.label.contains("items"), remaining != 1);
                }
            }
        }
    }
}
