//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::Session;

/// Frontend abstraction for UI layers.
///
/// A frontend takes ownership of an assembled [`Session`], wraps its engine in
/// an [`crate::InteractionController`], and drives it until the user quits.
#[async_trait]
pub trait Frontend: Send {
    async fn run(&mut self, session: Session) -> Result<()>;
}
