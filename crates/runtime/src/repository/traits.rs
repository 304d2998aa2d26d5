//! Repository contract for saving and loading the slot snapshot.

use async_trait::async_trait;
use game_core::SlotSnapshot;

use super::Result;

/// Durable store for the latest slot snapshot.
///
/// Each save carries the full state, so implementations keep only the most
/// recent snapshot. Saves for an older revision than one already stored are
/// accepted and ignored (last write by revision wins).
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Persist `snapshot`.
    async fn save(&self, snapshot: &SlotSnapshot) -> Result<()>;

    /// Load the most recently saved snapshot, if any.
    async fn load(&self) -> Result<Option<SlotSnapshot>>;
}
