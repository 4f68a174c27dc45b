//! Product controls registered by the host, keyed by product id.
//!
//! The host registers each product card once, with the snapshot read from its
//! markup. User actions then arrive as typed [`Interaction`]s carrying only the
//! id; nothing is looked up through strings embedded in generated markup.

use bundle_core::{DomainError, DomainResult, ProductId};

use crate::product::ProductSnapshot;

/// A user action on the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// Click on a product card's add/remove control.
    Toggle(ProductId),
    /// Click on a sidebar item's remove control.
    Remove(ProductId),
    /// Click on the "add bundle to cart" control.
    AddToCart,
}

/// Registered product controls, in registration order (card order on the page).
#[derive(Debug, Clone, Default)]
pub struct ControlRegistry {
    controls: Vec<(ProductId, ProductSnapshot)>,
}

impl ControlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the control for `id`. Each id may be registered once.
    pub fn register(&mut self, id: ProductId, snapshot: ProductSnapshot) -> DomainResult<()> {
        if self.contains(&id) {
            return Err(DomainError::conflict(format!("product control {id} already registered")));
        }
        self.controls.push((id, snapshot));
        Ok(())
    }

    pub fn get(&self, id: &ProductId) -> DomainResult<&ProductSnapshot> {
        self.controls
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, snapshot)| snapshot)
            .ok_or_else(|| DomainError::not_found(format!("product control {id}")))
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.controls.iter().any(|(existing, _)| existing == id)
    }

    /// Registered product ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &ProductId> {
        self.controls.iter().map(|(id, _)| id)
    }
}
