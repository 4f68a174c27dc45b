//! Bundle configuration: unlock threshold and discount rate.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use bundle_core::{DomainError, DomainResult};

pub const DEFAULT_REQUIRED_ITEM_COUNT: usize = 3;
pub const DEFAULT_DISCOUNT_PERCENTAGE: u8 = 30;

/// Fixed at construction; never mutated by the builder.
///
/// Invariants (checked by every constructor, including deserialization):
/// - `required_item_count > 0`
/// - `discount_percentage <= 100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawBundleConfig")]
pub struct BundleConfig {
    required_item_count: usize,
    discount_percentage: u8,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBundleConfig {
    #[serde(default = "default_required_item_count")]
    required_item_count: usize,
    #[serde(default = "default_discount_percentage")]
    discount_percentage: u8,
}

fn default_required_item_count() -> usize {
    DEFAULT_REQUIRED_ITEM_COUNT
}

fn default_discount_percentage() -> u8 {
    DEFAULT_DISCOUNT_PERCENTAGE
}

impl TryFrom<RawBundleConfig> for BundleConfig {
    type Error = DomainError;

    fn try_from(raw: RawBundleConfig) -> Result<Self, Self::Error> {
        Self::new(raw.required_item_count, raw.discount_percentage)
    }
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            required_item_count: DEFAULT_REQUIRED_ITEM_COUNT,
            discount_percentage: DEFAULT_DISCOUNT_PERCENTAGE,
        }
    }
}

impl BundleConfig {
    pub fn new(required_item_count: usize, discount_percentage: u8) -> DomainResult<Self> {
        if required_item_count == 0 {
            return Err(DomainError::validation("required item count must be positive"));
        }
        if discount_percentage > 100 {
            return Err(DomainError::validation(format!(
                "discount percentage must be within 0..=100 (got {discount_percentage})"
            )));
        }
        Ok(Self {
            required_item_count,
            discount_percentage,
        })
    }

    /// Parse and validate a JSON config such as
    /// `{"requiredItemCount": 3, "discountPercentage": 30}`.
    ///
    /// Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("bundle config: {e}")))
    }

    /// Load a JSON config from disk (host-side convenience).
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading bundle config {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing bundle config {}", path.display()))
    }

    pub fn required_item_count(&self) -> usize {
        self.required_item_count
    }

    pub fn discount_percentage(&self) -> u8 {
        self.discount_percentage
    }

    /// Whether `selected_count` items unlock the cart and the discount.
    pub fn threshold_met(&self, selected_count: usize) -> bool {
        selected_count >= self.required_item_count
    }

    /// Items still missing before the threshold is met (0 once met).
    pub fn remaining(&self, selected_count: usize) -> usize {
        self.required_item_count.saturating_sub(selected_count)
    }
}
