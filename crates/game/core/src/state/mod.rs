//! Authoritative slot state representation.
//!
//! This module owns the item value types, slot addressing, and the
//! [`SlotStore`] that holds every placed fragment. Other layers read the store
//! freely but mutate it exclusively through the transfer engine.
mod error;
mod snapshot;
mod store;
pub mod types;

pub use error::StoreError;
pub use snapshot::SlotSnapshot;
pub use store::{ContainerObserver, SlotChange, SlotStore};
pub use types::{ContainerKind, ElementType, InstanceId, Item, Rarity, SlotRef, TemplateId};
