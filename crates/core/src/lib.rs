//! `bundle-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no rendering, no IO).

pub mod error;
pub mod id;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use id::{CommitId, ProductId};
pub use money::Money;
