//! Worker tasks that back the runtime.
//!
//! The sync worker persists snapshots off the input path so the transfer
//! engine never waits on storage.

mod sync;

pub use sync::PersistenceSync;
