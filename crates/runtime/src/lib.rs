//! Runtime services around the slot transfer engine.
//!
//! This crate wires the pure `game-core` engine to the outside world:
//! snapshot repositories, fire-and-forget persistence, the catalog oracle, and
//! a topic-based event bus. Consumers call [`SessionBuilder::build`] and drive
//! the returned [`Session`]'s engine from their input layer.
//!
//! Modules are organized by responsibility:
//! - [`session`] assembles a session from configuration
//! - [`api`] exposes the error types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
//! - `workers` keeps background persistence internal to the crate
pub mod api;
pub mod config;
pub mod events;
pub mod oracle;
pub mod repository;
pub mod session;

mod workers;

pub use api::{Result, RuntimeError};
pub use config::RuntimeConfig;
pub use events::{BusObserver, ContainerEvent, Event, EventBus, SyncEvent, Topic};
pub use oracle::CatalogOracleImpl;
pub use repository::{
    FileSnapshotRepository, InMemorySnapshotRepo, RepositoryError, SnapshotRepository,
};
pub use session::{Session, SessionBuilder};
pub use workers::PersistenceSync;
