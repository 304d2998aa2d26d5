//! Repository layer for dynamic runtime data
//!
//! Repositories hold the persisted slot snapshot: the data that CHANGES while
//! the player rearranges fragments. Static content (the fragment catalog) is
//! handled by oracles, not repositories.

mod error;
pub mod file;
pub mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSnapshotRepository;
pub use memory::InMemorySnapshotRepo;
pub use traits::SnapshotRepository;
