use crate::state::{ContainerKind, InstanceId, Item, SlotRef};

use super::TransferError;

/// Result of [`super::TransferEngine::move_item`]; failures are plain values.
pub type MoveResult = Result<MoveOutcome, TransferError>;

/// Where a moved item should land.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    /// A specific cell.
    Slot(SlotRef),
    /// The first free storage cell of a container.
    FirstFree(ContainerKind),
}

impl From<SlotRef> for Destination {
    fn from(slot: SlotRef) -> Self {
        Self::Slot(slot)
    }
}

impl From<ContainerKind> for Destination {
    fn from(kind: ContainerKind) -> Self {
        Self::FirstFree(kind)
    }
}

/// A fresh instance id assigned when an item is promoted out of TempHold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rekey {
    pub previous: InstanceId,
    pub current: InstanceId,
}

/// Pending removal that needs explicit player confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteRequest {
    pub item: Item,
    pub origin: SlotRef,
}

/// Successful outcomes of a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Origin and destination were the same slot.
    Unchanged,

    /// Item moved into an empty slot.
    Moved {
        from: SlotRef,
        to: SlotRef,
        /// Instance id replacement applied to any item that left TempHold.
        rekeyed: Vec<Rekey>,
    },

    /// Destination was occupied; its item was relocated to `displaced_to`.
    Swapped {
        from: SlotRef,
        to: SlotRef,
        displaced_to: SlotRef,
        rekeyed: Vec<Rekey>,
    },

    /// Destination was the delete target; nothing changed yet.
    DeleteRequested(DeleteRequest),
}

impl MoveOutcome {
    /// Returns true if the store was written.
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Moved { .. } | Self::Swapped { .. })
    }
}

/// Confirmed removal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub removed: Item,
    pub slot: SlotRef,
    pub revision: u64,
}
