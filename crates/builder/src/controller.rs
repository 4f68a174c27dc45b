//! The bundle builder controller.
//!
//! Owns the selection and drives the render/publish cycle:
//!
//! ```text
//! interaction -> mutate SelectionSet -> publish event -> derive BundleView -> render
//! ```
//!
//! Every mutation re-derives the whole view from the selection. Nothing
//! displayed is cached between interactions.

use chrono::Utc;

use bundle_core::{CommitId, DomainResult, Money, ProductId};
use bundle_events::{Event, EventBus, EventEnvelope};

use crate::config::BundleConfig;
use crate::event::{BundleCommitted, BundleEvent, ProductDeselected, ProductSelected};
use crate::pricing::{self, Pricing};
use crate::product::ProductSnapshot;
use crate::registry::{ControlRegistry, Interaction};
use crate::render::Renderer;
use crate::selection::{SelectionSet, Toggle};
use crate::summary::{BundleSummary, Notification};
use crate::view::{BundleView, CartButton, ProductControl, Progress};

/// Result of dispatching an [`Interaction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Toggled(Toggle),
    /// Whether the product was selected before the removal.
    Removed(bool),
    /// `None` when the bundle was below the threshold.
    Committed(Option<BundleSummary>),
}

/// Owned, single-threaded bundle builder.
///
/// - `R`: where views and notifications go
/// - `B`: where selection changes and committed bundles are published
///
/// All operations take `&mut self` and finish their render before returning,
/// so renders never overlap.
#[derive(Debug)]
pub struct BundleController<R, B> {
    config: BundleConfig,
    selection: SelectionSet,
    registry: ControlRegistry,
    renderer: R,
    bus: B,
    next_sequence: u64,
}

impl<R, B> BundleController<R, B>
where
    R: Renderer,
    B: EventBus<EventEnvelope<BundleEvent>>,
{
    /// Create an empty builder and render its initial view.
    pub fn new(config: BundleConfig, renderer: R, bus: B) -> Self {
        let mut controller = Self {
            config,
            selection: SelectionSet::new(),
            registry: ControlRegistry::new(),
            renderer,
            bus,
            next_sequence: 1,
        };
        controller.refresh();
        controller
    }

    pub fn config(&self) -> &BundleConfig {
        &self.config
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn registry(&self) -> &ControlRegistry {
        &self.registry
    }

    /// Register a product control so it can be driven through [`Self::dispatch`].
    ///
    /// Re-renders so the new control shows up in the view.
    pub fn register_product(&mut self, id: ProductId, snapshot: ProductSnapshot) -> DomainResult<()> {
        self.registry.register(id, snapshot)?;
        self.refresh();
        Ok(())
    }

    /// Select `id` with `snapshot`, or deselect it if already selected.
    pub fn toggle_product(&mut self, id: ProductId, snapshot: ProductSnapshot) -> Toggle {
        let name = snapshot.name.clone();
        let price = snapshot.price;
        let toggle = self.selection.toggle(id.clone(), snapshot);

        tracing::debug!(
            "{:?} product {} ({}/{} selected)",
            toggle,
            id,
            self.selection.len(),
            self.config.required_item_count()
        );

        let selected_count = self.selection.len();
        let occurred_at = Utc::now();
        let event = match toggle {
            Toggle::Selected => BundleEvent::ProductSelected(ProductSelected {
                product_id: id,
                name,
                price,
                selected_count,
                occurred_at,
            }),
            Toggle::Deselected => BundleEvent::ProductDeselected(ProductDeselected {
                product_id: id,
                selected_count,
                occurred_at,
            }),
        };
        self.publish(event);
        self.refresh();
        toggle
    }

    /// Deselect `id` if selected. Re-renders either way.
    pub fn remove_product(&mut self, id: &ProductId) -> bool {
        let removed = self.selection.remove(id).is_some();

        if removed {
            tracing::debug!(
                "Removed product {} ({}/{} selected)",
                id,
                self.selection.len(),
                self.config.required_item_count()
            );
            self.publish(BundleEvent::ProductDeselected(ProductDeselected {
                product_id: id.clone(),
                selected_count: self.selection.len(),
                occurred_at: Utc::now(),
            }));
        }

        self.refresh();
        removed
    }

    pub fn compute_subtotal(&self) -> Money {
        pricing::subtotal(&self.selection)
    }

    pub fn compute_discount(&self, subtotal: Money) -> Money {
        pricing::discount(&self.config, self.selection.len(), subtotal)
    }

    pub fn compute_total(&self) -> Money {
        self.pricing().total
    }

    pub fn pricing(&self) -> Pricing {
        Pricing::compute(&self.config, &self.selection)
    }

    pub fn progress(&self) -> Progress {
        Progress::derive(&self.config, self.selection.len())
    }

    pub fn cart_button(&self) -> CartButton {
        CartButton::derive(&self.config, self.selection.len())
    }

    pub fn control(&self, id: &ProductId) -> ProductControl {
        ProductControl::derive(&self.selection, id)
    }

    pub fn view(&self) -> BundleView {
        BundleView::derive(&self.config, &self.registry, &self.selection)
    }

    /// Commit the bundle to the cart.
    ///
    /// Below the threshold this does nothing and returns `None`. Otherwise the
    /// summary is logged, published as [`BundleEvent::BundleCommitted`] and
    /// shown as a notification. The selection stays as it is.
    pub fn commit(&mut self) -> Option<BundleSummary> {
        if !self.config.threshold_met(self.selection.len()) {
            tracing::debug!(
                "Ignoring commit below threshold ({}/{} selected)",
                self.selection.len(),
                self.config.required_item_count()
            );
            return None;
        }

        let occurred_at = Utc::now();
        let summary = BundleSummary::capture(&self.config, &self.selection, CommitId::new(), occurred_at);

        tracing::info!(
            "Bundle {} added to cart: {} items, subtotal {}, saved {}, total {}",
            summary.commit_id,
            summary.item_count(),
            summary.subtotal,
            summary.savings,
            summary.total
        );

        self.publish(BundleEvent::BundleCommitted(BundleCommitted {
            summary: summary.clone(),
            occurred_at,
        }));
        self.renderer.notify(&Notification::for_summary(&summary));

        Some(summary)
    }

    /// Route a user action to the matching operation.
    ///
    /// Only `Toggle` can fail: its product must have been registered first.
    pub fn dispatch(&mut self, interaction: Interaction) -> DomainResult<Outcome> {
        match interaction {
            Interaction::Toggle(id) => {
                let snapshot = self.registry.get(&id)?.clone();
                Ok(Outcome::Toggled(self.toggle_product(id, snapshot)))
            }
            Interaction::Remove(id) => Ok(Outcome::Removed(self.remove_product(&id))),
            Interaction::AddToCart => Ok(Outcome::Committed(self.commit())),
        }
    }

    fn refresh(&mut self) {
        let view = self.view();
        self.renderer.render(&view);
    }

    fn publish(&mut self, event: BundleEvent) {
        let event_type = event.event_type();
        let envelope = EventEnvelope::wrap(self.next_sequence, event);
        self.next_sequence += 1;

        // The local state change already happened; a consumer being down
        // must not undo or block it.
        if let Err(e) = self.bus.publish(envelope) {
            tracing::warn!("Failed to publish {}: {:?}", event_type, e);
        }
    }
}
