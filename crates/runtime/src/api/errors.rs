//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from repositories, content loading, and snapshot restore so
//! clients can bubble them up with consistent context.
use thiserror::Error;

use game_core::StoreError;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("persisted snapshot cannot be restored")]
    Restore(#[source] StoreError),

    #[error("failed to load content: {0}")]
    Content(String),

    #[error("persistence sync must be created inside a tokio runtime")]
    NoAsyncRuntime,

    #[error("sync task join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}
