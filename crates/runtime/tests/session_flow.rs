use std::sync::Arc;

use game_core::{ContainerKind, MoveOutcome, SlotRef};
use runtime::{
    Event, FileSnapshotRepository, InMemorySnapshotRepo, RuntimeConfig, SessionBuilder,
    SnapshotRepository, SyncEvent, Topic,
};

fn config_in(dir: &std::path::Path) -> RuntimeConfig {
    RuntimeConfig {
        snapshot_path: dir.join("slots.json"),
        ..RuntimeConfig::default()
    }
}

/// End-to-end session flow
///
/// 1. A new profile starts from the bundled starter layout
/// 2. Claiming a TempHold fragment publishes container events and one sync
/// 3. The saved snapshot matches the store
#[tokio::test]
async fn claim_is_published_and_persisted() {
    let dir = tempfile::tempdir().expect("temp dir");
    let repo = Arc::new(InMemorySnapshotRepo::new());

    let mut session = SessionBuilder::new(config_in(dir.path()))
        .repository(repo.clone())
        .build()
        .await
        .expect("session should build from bundled content");

    let mut containers = session.bus.subscribe(Topic::Containers);
    let mut sync = session.bus.subscribe(Topic::Sync);

    let occupied_before = session.engine.store().occupied(ContainerKind::Inventory);
    let outcome = session
        .engine
        .move_item(SlotRef::temp_hold(0), ContainerKind::Inventory)
        .expect("claim should succeed");
    let MoveOutcome::Moved { to, rekeyed, .. } = outcome else {
        panic!("expected a plain move, got {outcome:?}");
    };
    assert_eq!(rekeyed.len(), 1);
    assert_eq!(to, SlotRef::inventory(occupied_before));

    // Destination write first, then the vacated origin.
    for expected in [to, SlotRef::temp_hold(0)] {
        match containers.recv().await.expect("container event") {
            Event::Containers(event) => assert_eq!(event.slot, expected),
            other => panic!("unexpected event {other:?}"),
        }
    }

    session.sync.flush().await.expect("flush");
    let Event::Sync(SyncEvent::Saved { revision, digest, .. }) = sync.recv().await.expect("sync event")
    else {
        panic!("expected a saved event");
    };
    assert_eq!(revision, session.engine.store().revision());

    let saved = repo.load().await.unwrap().expect("snapshot saved");
    assert_eq!(saved, session.engine.store().snapshot());
    assert_eq!(digest.len(), 64);
}

#[tokio::test]
async fn file_repository_restores_previous_session() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = config_in(dir.path());

    let snapshot = {
        let mut session = SessionBuilder::new(config.clone())
            .build()
            .await
            .expect("first session");
        session
            .engine
            .move_item(SlotRef::inventory(0), SlotRef::combination(2))
            .expect("move should succeed");
        session.sync.flush().await.expect("flush");
        session.engine.store().snapshot()
    };

    let session = SessionBuilder::new(config.clone())
        .build()
        .await
        .expect("second session");
    assert_eq!(session.engine.store().snapshot(), snapshot);
    assert!(session.engine.store().get(SlotRef::combination(2)).is_some());

    let repo = FileSnapshotRepository::new(&config.snapshot_path).unwrap();
    assert_eq!(repo.load().await.unwrap(), Some(snapshot));
}

#[tokio::test]
async fn missing_catalog_file_is_a_content_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = RuntimeConfig {
        catalog_path: Some(dir.path().join("missing.ron")),
        ..config_in(dir.path())
    };

    let err = SessionBuilder::new(config)
        .repository(Arc::new(InMemorySnapshotRepo::new()))
        .build()
        .await
        .err()
        .expect("catalog is missing");
    assert!(matches!(err, runtime::RuntimeError::Content(_)));
}
