//! In-memory SnapshotRepository implementation for tests and local runs.

use std::sync::RwLock;

use async_trait::async_trait;
use game_core::SlotSnapshot;

use crate::repository::{RepositoryError, Result, SnapshotRepository};

/// In-memory implementation of SnapshotRepository.
///
/// Keeps the latest snapshot plus the revision of every accepted save, for
/// tests that assert on sync traffic.
#[derive(Debug, Default)]
pub struct InMemorySnapshotRepo {
    latest: RwLock<Option<SlotSnapshot>>,
    saved_revisions: RwLock<Vec<u64>>,
}

impl InMemorySnapshotRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an already persisted snapshot.
    pub fn with_snapshot(snapshot: SlotSnapshot) -> Self {
        Self {
            latest: RwLock::new(Some(snapshot)),
            saved_revisions: RwLock::new(Vec::new()),
        }
    }

    /// Revisions of every save that replaced the stored snapshot, in order.
    pub fn saved_revisions(&self) -> Result<Vec<u64>> {
        let revisions = self
            .saved_revisions
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(revisions.clone())
    }
}

#[async_trait]
impl SnapshotRepository for InMemorySnapshotRepo {
    async fn save(&self, snapshot: &SlotSnapshot) -> Result<()> {
        let mut latest = self
            .latest
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        if latest
            .as_ref()
            .is_some_and(|stored| stored.revision > snapshot.revision)
        {
            tracing::debug!(revision = snapshot.revision, "ignoring stale snapshot");
            return Ok(());
        }

        *latest = Some(snapshot.clone());
        self.saved_revisions
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?
            .push(snapshot.revision);
        Ok(())
    }

    async fn load(&self) -> Result<Option<SlotSnapshot>> {
        let latest = self
            .latest
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(latest.clone())
    }
}
