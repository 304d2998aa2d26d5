//! Slot store errors.
//!
//! Errors related to store construction, backend placement, and raw writes.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{ContainerKind, InstanceId, SlotRef};

/// Errors that occur during slot store operations.
///
/// These errors indicate capacity limits, bad addresses, or snapshots that
/// break the store invariants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StoreError {
    /// Address does not exist in its container.
    #[error("slot {slot} is out of range (container has {addresses} cells)")]
    SlotOutOfRange {
        /// The invalid address.
        slot: SlotRef,
        /// Number of cells in the container.
        addresses: usize,
    },

    /// An item was written to the delete target.
    #[error("slot {slot} is the delete target and cannot hold items")]
    NotStorage {
        /// The non-storage address.
        slot: SlotRef,
    },

    /// Container is full (max capacity reached).
    #[error("{kind} is full (max: {max})")]
    ContainerFull {
        /// Container that rejected the item.
        kind: ContainerKind,
        /// Maximum capacity.
        max: usize,
    },

    /// The same instance was found in two slots.
    #[error("instance {instance_id} appears in both {first} and {second}")]
    DuplicateInstance {
        /// Offending instance id.
        instance_id: InstanceId,
        /// First slot holding the instance.
        first: SlotRef,
        /// Second slot holding the instance.
        second: SlotRef,
    },

    /// A backend placement reused a live instance id.
    #[error("instance {instance_id} is already placed in {slot}")]
    AlreadyPlaced {
        /// Offending instance id.
        instance_id: InstanceId,
        /// Slot already holding the instance.
        slot: SlotRef,
    },

    /// A snapshot container did not have the expected number of cells.
    #[error("{kind} snapshot has {found} cells, expected {expected}")]
    LayoutMismatch {
        /// Container with the wrong length.
        kind: ContainerKind,
        /// Expected cell count.
        expected: usize,
        /// Cell count found in the snapshot.
        found: usize,
    },
}

impl GameError for StoreError {
    fn severity(&self) -> ErrorSeverity {
        use StoreError::*;
        match self {
            // Capacity and addressing errors reject the input
            SlotOutOfRange { .. }
            | NotStorage { .. }
            | ContainerFull { .. }
            | AlreadyPlaced { .. } => {
                ErrorSeverity::Validation
            }

            // A duplicated instance or malformed layout means the source data is corrupt
            DuplicateInstance { .. } | LayoutMismatch { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use StoreError::*;
        match self {
            SlotOutOfRange { .. } => "STORE_SLOT_OUT_OF_RANGE",
            NotStorage { .. } => "STORE_NOT_STORAGE",
            ContainerFull { .. } => "STORE_CONTAINER_FULL",
            DuplicateInstance { .. } => "STORE_DUPLICATE_INSTANCE",
            AlreadyPlaced { .. } => "STORE_ALREADY_PLACED",
            LayoutMismatch { .. } => "STORE_LAYOUT_MISMATCH",
        }
    }
}
