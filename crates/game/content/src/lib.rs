//! Data-driven content definitions and loaders.
//!
//! This crate houses the static fragment catalog and the starter layout, and
//! provides loaders for their RON data files:
//! - Fragment templates (display name, element, rarity per template id)
//! - Starter layouts (template ids to place when a profile has no snapshot)
//!
//! Content is consumed by the runtime catalog oracle and never appears in slot
//! state except as the attributes copied onto placed items.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CatalogFile, CatalogLoader, ContentFactory, LayoutLoader, LoadResult, StarterLayout,
};
