//! Event types for different topics.

use chrono::{DateTime, Utc};
use game_core::SlotRef;
use serde::{Deserialize, Serialize};

/// A slot was written; re-read the store and redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerEvent {
    pub slot: SlotRef,
    pub revision: u64,
}

/// Outcome of one fire-and-forget snapshot save.
///
/// `digest` is the hex SHA-256 of the snapshot contents, so a consumer can
/// tell which snapshot a late result refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncEvent {
    Saved {
        revision: u64,
        digest: String,
        at: DateTime<Utc>,
    },
    Failed {
        revision: u64,
        digest: String,
        error: String,
        at: DateTime<Utc>,
    },
}

impl SyncEvent {
    pub fn revision(&self) -> u64 {
        match self {
            Self::Saved { revision, .. } | Self::Failed { revision, .. } => *revision,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
