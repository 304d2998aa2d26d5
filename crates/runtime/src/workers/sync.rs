//! Fire-and-forget snapshot persistence.
//!
//! [`PersistenceSync`] is the transfer engine's [`SnapshotSink`]. Every
//! submitted snapshot is saved on its own task; the result is published on
//! the [`Topic::Sync`](crate::events::Topic::Sync) topic and never fed back
//! into the slot store. Overlapping saves are neither queued nor coalesced.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use game_core::{SlotSnapshot, SnapshotSink};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::api::{Result, RuntimeError};
use crate::events::{Event, EventBus, SyncEvent};
use crate::repository::SnapshotRepository;

pub struct PersistenceSync {
    repository: Arc<dyn SnapshotRepository>,
    bus: EventBus,
    runtime: Handle,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl PersistenceSync {
    pub fn new(repository: Arc<dyn SnapshotRepository>, bus: EventBus, runtime: Handle) -> Self {
        Self {
            repository,
            bus,
            runtime,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Builds a sync bound to the tokio runtime of the calling task.
    pub fn on_current_runtime(repository: Arc<dyn SnapshotRepository>, bus: EventBus) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| RuntimeError::NoAsyncRuntime)?;
        Ok(Self::new(repository, bus, runtime))
    }

    /// Waits for every save submitted so far.
    ///
    /// Used at shutdown and in tests; normal operation never waits.
    pub async fn flush(&self) -> Result<()> {
        let pending = match self.pending.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => return Ok(()),
        };

        for task in pending {
            task.await.map_err(RuntimeError::WorkerJoin)?;
        }
        Ok(())
    }

    async fn save(repository: Arc<dyn SnapshotRepository>, bus: EventBus, snapshot: SlotSnapshot) {
        let revision = snapshot.revision;
        let digest = hex::encode(snapshot.digest());

        let event = match repository.save(&snapshot).await {
            Ok(()) => {
                debug!(revision, %digest, "snapshot synced");
                SyncEvent::Saved {
                    revision,
                    digest,
                    at: Utc::now(),
                }
            }
            Err(error) => {
                warn!(revision, %digest, %error, "snapshot sync failed");
                SyncEvent::Failed {
                    revision,
                    digest,
                    error: error.to_string(),
                    at: Utc::now(),
                }
            }
        };

        bus.publish(Event::Sync(event));
    }
}

impl SnapshotSink for PersistenceSync {
    fn submit(&self, snapshot: SlotSnapshot) {
        let task = self.runtime.spawn(Self::save(
            Arc::clone(&self.repository),
            self.bus.clone(),
            snapshot,
        ));

        match self.pending.lock() {
            Ok(mut pending) => {
                pending.retain(|task| !task.is_finished());
                pending.push(task);
            }
            Err(_) => warn!("sync task list poisoned; save will not be awaited on flush"),
        }
    }
}

impl std::fmt::Debug for PersistenceSync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pending = self.pending.lock().map(|pending| pending.len()).unwrap_or(0);
        f.debug_struct("PersistenceSync")
            .field("pending", &pending)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Topic;
    use crate::repository::{InMemorySnapshotRepo, RepositoryError};
    use async_trait::async_trait;

    struct OfflineRepo;

    #[async_trait]
    impl SnapshotRepository for OfflineRepo {
        async fn save(&self, _snapshot: &SlotSnapshot) -> crate::repository::Result<()> {
            Err(RepositoryError::Unavailable("offline".to_string()))
        }

        async fn load(&self) -> crate::repository::Result<Option<SlotSnapshot>> {
            Ok(None)
        }
    }

    fn at_revision(revision: u64) -> SlotSnapshot {
        SlotSnapshot {
            revision,
            ..SlotSnapshot::empty()
        }
    }

    #[tokio::test]
    async fn each_submit_saves_and_reports() {
        let repo = Arc::new(InMemorySnapshotRepo::new());
        let bus = EventBus::new();
        let mut events = bus.subscribe(Topic::Sync);
        let sync = PersistenceSync::on_current_runtime(repo.clone(), bus).unwrap();

        sync.submit(at_revision(1));
        sync.submit(at_revision(2));
        sync.flush().await.unwrap();

        let mut revisions = vec![
            events.recv().await.unwrap(),
            events.recv().await.unwrap(),
        ]
        .into_iter()
        .map(|event| match event {
            Event::Sync(sync) => {
                assert!(!sync.is_failure());
                sync.revision()
            }
            other => panic!("unexpected event {other:?}"),
        })
        .collect::<Vec<_>>();
        revisions.sort_unstable();

        assert_eq!(revisions, vec![1, 2]);
        assert_eq!(repo.load().await.unwrap().map(|s| s.revision), Some(2));
    }

    #[tokio::test]
    async fn failures_are_published_not_raised() {
        let bus = EventBus::new();
        let mut events = bus.subscribe(Topic::Sync);
        let sync = PersistenceSync::on_current_runtime(Arc::new(OfflineRepo), bus).unwrap();

        sync.submit(at_revision(7));
        sync.flush().await.unwrap();

        let Event::Sync(SyncEvent::Failed { revision, error, .. }) = events.recv().await.unwrap()
        else {
            panic!("expected a failure event");
        };
        assert_eq!(revision, 7);
        assert!(error.contains("offline"));
    }

    #[test]
    fn requires_a_tokio_runtime() {
        let err = PersistenceSync::on_current_runtime(Arc::new(OfflineRepo), EventBus::new())
            .unwrap_err();
        assert!(matches!(err, RuntimeError::NoAsyncRuntime));
    }
}
