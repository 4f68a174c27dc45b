use serde::{Deserialize, Serialize};

use bundle_core::{DomainResult, Money, ProductId};

/// Product as it looked when the user selected it.
///
/// The builder never re-reads the catalog; sidebar entries and commit
/// summaries are built from this snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub name: String,
    pub price: Money,
    /// Image reference (URL or asset path) shown as the sidebar thumbnail.
    pub image: String,
}

impl ProductSnapshot {
    pub fn new(name: impl Into<String>, price: Money, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            image: image.into(),
        }
    }

    /// Build a snapshot from the text a product card carries in markup.
    ///
    /// Fails if `price` is not a non-negative decimal with at most two
    /// fractional digits.
    pub fn from_markup(name: &str, price: &str, image: &str) -> DomainResult<Self> {
        Ok(Self::new(name.trim(), price.parse()?, image.trim()))
    }
}

/// One committed product line: `{id, name, price}`, price in dollars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleLine {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "bundle_core::money::dollars")]
    pub price: Money,
}
