use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bundle_core::{Money, ProductId};
use bundle_events::Event;

use crate::summary::BundleSummary;

/// Event: ProductSelected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSelected {
    pub product_id: ProductId,
    pub name: String,
    pub price: Money,
    /// Selection size after the change.
    pub selected_count: usize,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductDeselected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDeselected {
    pub product_id: ProductId,
    /// Selection size after the change.
    pub selected_count: usize,
    pub occurred_at: DateTime<Utc>,
}

/// Event: BundleCommitted (the cart system's input).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleCommitted {
    pub summary: BundleSummary,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BundleEvent {
    ProductSelected(ProductSelected),
    ProductDeselected(ProductDeselected),
    BundleCommitted(BundleCommitted),
}

impl Event for BundleEvent {
    fn event_type(&self) -> &'static str {
        match self {
            BundleEvent::ProductSelected(_) => "bundle.product.selected",
            BundleEvent::ProductDeselected(_) => "bundle.product.deselected",
            BundleEvent::BundleCommitted(_) => "bundle.committed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            BundleEvent::ProductSelected(e) => e.occurred_at,
            BundleEvent::ProductDeselected(e) => e.occurred_at,
            BundleEvent::BundleCommitted(e) => e.occurred_at,
        }
    }
}
