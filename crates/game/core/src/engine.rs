//! Slot transfer pipeline.
//!
//! The [`TransferEngine`] is the only writer of the [`SlotStore`]. It
//! validates a `(origin, destination)` pair, plans every write the move
//! needs, commits them as one batch, and hands the resulting snapshot to the
//! [`SnapshotSink`]. Deletion is split in two: a drop on the delete target only
//! produces a [`DeleteRequest`], and [`TransferEngine::confirm_delete`] removes
//! the item once the player has confirmed.

mod errors;
mod keyer;
mod outcome;
mod sink;
mod transfer;

pub use errors::{PolicyRule, TransferError};
pub use keyer::InstanceKeyer;
pub use outcome::{
    DeleteOutcome, DeleteRequest, Destination, MoveOutcome, MoveResult, Rekey,
};
pub use sink::{NullSink, SnapshotSink};

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::SlotConfig;
use crate::env::ItemCatalog;
use crate::error::{ErrorContext, GameError};
use crate::state::{SlotRef, SlotStore};

use transfer::Plan;

/// Transfer engine that owns the slot store and applies moves and deletes.
pub struct TransferEngine {
    store: SlotStore,
    sink: Arc<dyn SnapshotSink>,
    catalog: Option<Arc<dyn ItemCatalog>>,
    keyer: InstanceKeyer,
}

impl TransferEngine {
    /// Creates an engine over `store` that reports snapshots to `sink`.
    pub fn new(store: SlotStore, sink: Arc<dyn SnapshotSink>) -> Self {
        Self::with_config(store, sink, &SlotConfig::default())
    }

    pub fn with_config(store: SlotStore, sink: Arc<dyn SnapshotSink>, config: &SlotConfig) -> Self {
        Self {
            store,
            sink,
            catalog: None,
            keyer: InstanceKeyer::new(config.rekey_prefix.clone()),
        }
    }

    /// Attaches the catalog used to refresh display attributes of re-keyed items.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Arc<dyn ItemCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn store(&self) -> &SlotStore {
        &self.store
    }

    /// Mutable store access for observer registration and backend placement.
    pub fn store_mut(&mut self) -> &mut SlotStore {
        &mut self.store
    }

    /// Moves the item at `origin` to `destination`.
    ///
    /// On success the store is updated in a single commit and the new
    /// snapshot is submitted to the sink. Every error leaves the store
    /// untouched.
    pub fn move_item(&mut self, origin: SlotRef, destination: impl Into<Destination>) -> MoveResult {
        let destination = destination.into();

        match self.plan(origin, destination) {
            Ok(Plan::Unchanged) => Ok(MoveOutcome::Unchanged),
            Ok(Plan::Delete(request)) => {
                debug!(
                    origin = %request.origin,
                    instance = %request.item.instance_id,
                    "delete requested, awaiting confirmation"
                );
                Ok(MoveOutcome::DeleteRequested(request))
            }
            Ok(Plan::Commit { writes, outcome }) => {
                self.store.commit(writes)?;
                self.sink.submit(self.store.snapshot());
                debug!(
                    revision = self.store.revision(),
                    ?outcome,
                    "move committed"
                );
                Ok(outcome)
            }
            Err(error) => {
                if matches!(error, TransferError::InvalidDestination { .. }) {
                    warn!(%origin, ?destination, code = error.error_code(), "{}", error);
                } else {
                    debug!(%origin, ?destination, code = error.error_code(), "{}", error);
                }
                Err(error)
            }
        }
    }

    /// Routes the item at `origin` into delete confirmation.
    pub fn request_delete(&mut self, origin: SlotRef) -> MoveResult {
        self.move_item(origin, SlotRef::DELETE_TARGET)
    }

    /// Removes the item named by a confirmed [`DeleteRequest`].
    ///
    /// Fails with [`TransferError::StaleDeleteRequest`] if the slot no longer
    /// holds the requested instance.
    pub fn confirm_delete(&mut self, request: &DeleteRequest) -> Result<DeleteOutcome, TransferError> {
        let still_there = self
            .store
            .get(request.origin)
            .is_some_and(|item| item.instance_id == request.item.instance_id);
        if !still_there {
            return Err(TransferError::StaleDeleteRequest {
                instance_id: request.item.instance_id.clone(),
                origin: request.origin,
                context: ErrorContext::new(self.store.revision()).with_origin(request.origin),
            });
        }

        self.store.set(request.origin, None)?;
        self.sink.submit(self.store.snapshot());
        info!(
            slot = %request.origin,
            instance = %request.item.instance_id,
            "fragment deleted"
        );

        Ok(DeleteOutcome {
            removed: request.item.clone(),
            slot: request.origin,
            revision: self.store.revision(),
        })
    }
}

impl std::fmt::Debug for TransferEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransferEngine")
            .field("store", &self.store)
            .field("keyer", &self.keyer)
            .field("has_catalog", &self.catalog.is_some())
            .finish()
    }
}
