//! Bundle builder domain module.
//!
//! Users toggle products into a bundle, the builder tracks progress toward a
//! minimum item count, prices the bundle with a threshold discount and commits
//! it to the cart. Everything the UI shows is recomputed from the selection on
//! every change; rendering itself sits behind the [`Renderer`] trait.

pub mod config;
pub mod controller;
pub mod event;
pub mod pricing;
pub mod product;
pub mod registry;
pub mod render;
pub mod selection;
pub mod summary;
pub mod view;

pub use config::BundleConfig;
pub use controller::{BundleController, Outcome};
pub use event::{BundleCommitted, BundleEvent, ProductDeselected, ProductSelected};
pub use pricing::Pricing;
pub use product::{BundleLine, ProductSnapshot};
pub use registry::{ControlRegistry, Interaction};
pub use render::{RecordingRenderer, Renderer, TracingRenderer};
pub use selection::{SelectionSet, Toggle};
pub use summary::{BundleSummary, Notification};
pub use view::{BundleView, CartButton, PricingView, ProductControl, Progress, Sidebar, SidebarItem};
