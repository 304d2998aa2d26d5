//! Delete confirmation prompt.
use async_trait::async_trait;

/// The player's answer to a delete prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("confirmation prompt was closed")]
    Closed,

    #[error("confirmation prompt failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Asks the player whether a fragment should really be destroyed.
///
/// Implementations show `display_name` in a modal and resolve once the player
/// answers. An error is treated as a cancellation.
#[async_trait]
pub trait ConfirmationPrompt: Send + Sync {
    async fn confirm(&self, display_name: &str) -> Result<Confirmation, PromptError>;
}
