use std::fmt;

use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::state::{ContainerKind, InstanceId, SlotRef, StoreError};

/// Business rules that reject structurally valid moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolicyRule {
    /// TempHold fragments must be claimed into the inventory before combining.
    TempHoldToCombination,
}

impl PolicyRule {
    /// Short guidance shown to the player.
    pub const fn guidance(self) -> &'static str {
        match self {
            Self::TempHoldToCombination => {
                "claim the fragment into your inventory before combining it"
            }
        }
    }

    /// Returns the rule a `from → to` transfer breaks, if any.
    pub const fn check(from: ContainerKind, to: ContainerKind) -> Option<Self> {
        match (from, to) {
            (ContainerKind::TempHold, ContainerKind::Combination) => {
                Some(Self::TempHoldToCombination)
            }
            _ => None,
        }
    }
}

impl fmt::Display for PolicyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::TempHoldToCombination => "temp_hold → combination",
        };
        write!(f, "{}", label)
    }
}

/// Reasons a transfer was rejected.
///
/// Every variant leaves the store untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransferError {
    #[error("no item at {origin}")]
    NoItemAtOrigin {
        origin: SlotRef,
        context: ErrorContext,
    },

    #[error("{destination} is not a valid slot")]
    InvalidDestination {
        destination: SlotRef,
        context: ErrorContext,
    },

    #[error("{container} has no free slot")]
    TargetFull {
        container: ContainerKind,
        context: ErrorContext,
    },

    #[error("move {rule} is not allowed: {}", .rule.guidance())]
    PolicyViolation {
        rule: PolicyRule,
        context: ErrorContext,
    },

    #[error("delete request for {instance_id} no longer matches {origin}")]
    StaleDeleteRequest {
        instance_id: InstanceId,
        origin: SlotRef,
        context: ErrorContext,
    },

    #[error("slot store rejected the commit")]
    Store(#[source] StoreError),
}

impl From<StoreError> for TransferError {
    fn from(error: StoreError) -> Self {
        Self::Store(error)
    }
}

impl GameError for TransferError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoItemAtOrigin { .. }
            | Self::InvalidDestination { .. }
            | Self::PolicyViolation { .. } => ErrorSeverity::Validation,
            Self::TargetFull { .. } | Self::StaleDeleteRequest { .. } => {
                ErrorSeverity::Recoverable
            }
            // Plans are validated before commit, so a store rejection is a bug
            Self::Store(_) => ErrorSeverity::Internal,
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::NoItemAtOrigin { context, .. }
            | Self::InvalidDestination { context, .. }
            | Self::TargetFull { context, .. }
            | Self::PolicyViolation { context, .. }
            | Self::StaleDeleteRequest { context, .. } => Some(context),
            Self::Store(_) => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoItemAtOrigin { .. } => "TRANSFER_NO_ITEM_AT_ORIGIN",
            Self::InvalidDestination { .. } => "TRANSFER_INVALID_DESTINATION",
            Self::TargetFull { .. } => "TRANSFER_TARGET_FULL",
            Self::PolicyViolation { .. } => "TRANSFER_POLICY_VIOLATION",
            Self::StaleDeleteRequest { .. } => "TRANSFER_STALE_DELETE_REQUEST",
            Self::Store(error) => error.error_code(),
        }
    }
}
