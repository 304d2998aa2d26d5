use crate::state::SlotSnapshot;

/// Receives a snapshot after every committed mutation.
///
/// Implementations must return immediately; durable storage happens
/// elsewhere and failures are surfaced out of band. The engine never waits on
/// or reverts because of a sink.
pub trait SnapshotSink: Send + Sync {
    fn submit(&self, snapshot: SlotSnapshot);
}

/// Sink that drops every snapshot.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn submit(&self, _snapshot: SlotSnapshot) {}
}
