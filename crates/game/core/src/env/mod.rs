//! Traits describing read-only reference data.
//!
//! The item catalog maps a fragment's permanent template id to its display
//! attributes. It is owned outside the core and consumed through
//! [`ItemCatalog`].
mod items;

pub use items::{CatalogEntry, ItemCatalog};
