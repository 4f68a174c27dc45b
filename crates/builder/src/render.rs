//! Rendering boundary.
//!
//! The builder never touches a concrete UI. It derives a complete
//! [`BundleView`] and hands it over; what "rendering" means (DOM updates, a
//! terminal redraw, a test recorder) is up to the implementation.

use crate::summary::Notification;
use crate::view::BundleView;

pub trait Renderer {
    /// Replace everything on screen with `view`.
    fn render(&mut self, view: &BundleView);

    /// Show a transient confirmation after a commit.
    fn notify(&mut self, notification: &Notification);
}

impl<R> Renderer for &mut R
where
    R: Renderer + ?Sized,
{
    fn render(&mut self, view: &BundleView) {
        (**self).render(view)
    }

    fn notify(&mut self, notification: &Notification) {
        (**self).notify(notification)
    }
}

impl<R> Renderer for Box<R>
where
    R: Renderer + ?Sized,
{
    fn render(&mut self, view: &BundleView) {
        (**self).render(view)
    }

    fn notify(&mut self, notification: &Notification) {
        (**self).notify(notification)
    }
}

/// Headless renderer: logs each view through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRenderer;

impl Renderer for TracingRenderer {
    fn render(&mut self, view: &BundleView) {
        tracing::debug!(
            progress = %view.progress.label,
            items = view.sidebar.items().len(),
            subtotal = %view.pricing.subtotal_label,
            discount = %view.pricing.discount_label,
            total = %view.pricing.total_label,
            cart_enabled = view.cart_button.enabled,
            "bundle view: {}",
            view.cart_button.label
        );
    }

    fn notify(&mut self, notification: &Notification) {
        tracing::info!(
            "{} {} ({})",
            notification.title,
            notification.message,
            notification.total_line
        );
    }
}

/// Keeps every view and notification it receives, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    views: Vec<BundleView>,
    notifications: Vec<Notification>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn views(&self) -> &[BundleView] {
        &self.views
    }

    pub fn last_view(&self) -> Option<&BundleView> {
        self.views.last()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, view: &BundleView) {
        self.views.push(view.clone());
    }

    fn notify(&mut self, notification: &Notification) {
        self.notifications.push(notification.clone());
    }
}
