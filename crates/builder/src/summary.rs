//! What a commit produces: the summary handed to the cart and the
//! confirmation shown to the shopper.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bundle_core::{CommitId, Money};

use crate::config::BundleConfig;
use crate::pricing::Pricing;
use crate::product::BundleLine;
use crate::selection::SelectionSet;

pub const NOTIFICATION_TITLE: &str = "Bundle Added to Cart!";
/// How long the confirmation stays fully visible.
pub const NOTIFICATION_DISMISS_AFTER: Duration = Duration::from_millis(3000);
/// Length of the exit transition that follows.
pub const NOTIFICATION_EXIT_TRANSITION: Duration = Duration::from_millis(300);

/// Immutable snapshot of a committed bundle.
///
/// Amounts serialize as decimal dollars (`"total": 31.5`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleSummary {
    pub commit_id: CommitId,
    pub committed_at: DateTime<Utc>,
    /// Products in selection order.
    pub products: Vec<BundleLine>,
    #[serde(with = "bundle_core::money::dollars")]
    pub subtotal: Money,
    #[serde(with = "bundle_core::money::dollars")]
    pub discount: Money,
    #[serde(with = "bundle_core::money::dollars")]
    pub total: Money,
    #[serde(with = "bundle_core::money::dollars")]
    pub savings: Money,
}

impl BundleSummary {
    pub fn capture(
        config: &BundleConfig,
        selection: &SelectionSet,
        commit_id: CommitId,
        committed_at: DateTime<Utc>,
    ) -> Self {
        let pricing = Pricing::compute(config, selection);
        Self {
            commit_id,
            committed_at,
            products: selection.lines(),
            subtotal: pricing.subtotal,
            discount: pricing.discount,
            total: pricing.total,
            savings: pricing.savings(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.products.len()
    }
}

/// Transient confirmation shown after a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    /// `"3 items • Saved $13.50"`.
    pub message: String,
    /// `"Total: $31.50"`.
    pub total_line: String,
    pub dismiss_after: Duration,
    pub exit_transition: Duration,
}

impl Notification {
    pub fn for_summary(summary: &BundleSummary) -> Self {
        let count = summary.item_count();
        let noun = if count == 1 { "item" } else { "items" };
        Self {
            title: NOTIFICATION_TITLE,
            message: format!("{count} {noun} • Saved {}", summary.savings),
            total_line: format!("Total: {}", summary.total),
            dismiss_after: NOTIFICATION_DISMISS_AFTER,
            exit_transition: NOTIFICATION_EXIT_TRANSITION,
        }
    }

    /// Time from showing the notification until it is gone.
    pub fn lifetime(&self) -> Duration {
        self.dismiss_after + self.exit_transition
    }
}
