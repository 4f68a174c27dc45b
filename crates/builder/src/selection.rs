//! The selection store: the single source of truth for everything the
//! builder displays.

use bundle_core::{Money, ProductId};

use crate::product::{BundleLine, ProductSnapshot};

/// Result of toggling a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Selected,
    Deselected,
}

/// Selected products keyed by id, in the order they were selected.
///
/// An id appears at most once. Bundles hold a handful of items, so lookups
/// are linear scans over a `Vec`, which also keeps insertion order for free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    entries: Vec<(ProductId, ProductSnapshot)>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &ProductId) -> Option<&ProductSnapshot> {
        self.position(id).map(|i| &self.entries[i].1)
    }

    /// Deselect `id` if selected, otherwise select it with `snapshot`.
    pub fn toggle(&mut self, id: ProductId, snapshot: ProductSnapshot) -> Toggle {
        if self.remove(&id).is_some() {
            Toggle::Deselected
        } else {
            self.entries.push((id, snapshot));
            Toggle::Selected
        }
    }

    /// Remove `id` if present; returns the snapshot it was selected with.
    pub fn remove(&mut self, id: &ProductId) -> Option<ProductSnapshot> {
        self.position(id).map(|i| self.entries.remove(i).1)
    }

    /// Selected products in selection order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, &ProductSnapshot)> {
        self.entries.iter().map(|(id, snapshot)| (id, snapshot))
    }

    pub fn prices(&self) -> impl Iterator<Item = Money> + '_ {
        self.entries.iter().map(|(_, snapshot)| snapshot.price)
    }

    /// Committable lines in selection order.
    pub fn lines(&self) -> Vec<BundleLine> {
        self.iter()
            .map(|(id, snapshot)| BundleLine {
                id: id.clone(),
                name: snapshot.name.clone(),
                price: snapshot.price,
            })
            .collect()
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.entries.iter().position(|(existing, _)| existing == id)
    }
}
