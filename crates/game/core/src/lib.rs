//! Slot domain shared by the runtime and clients.
//!
//! `game-core` defines the fragment item model, the three fixed-capacity
//! containers, and the transfer rules between them. All slot mutation flows
//! through [`engine::TransferEngine`]; supporting crates depend on the types
//! re-exported here. Nothing in this crate performs I/O.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use config::SlotConfig;
pub use engine::{
    DeleteOutcome, DeleteRequest, Destination, InstanceKeyer, MoveOutcome, MoveResult, NullSink,
    PolicyRule, Rekey, SnapshotSink, TransferEngine, TransferError,
};
pub use env::{CatalogEntry, ItemCatalog};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use state::{
    ContainerKind, ContainerObserver, ElementType, InstanceId, Item, Rarity, SlotChange,
    SlotRef, SlotSnapshot, SlotStore, StoreError, TemplateId,
};
