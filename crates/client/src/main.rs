//! Fragment slot client binary.
//!
//! Composition root: loads configuration, initialises logging, assembles the
//! runtime session and hands it to the terminal frontend.
//!
//! ```bash
//! FRAGMENT_SNAPSHOT_PATH=/tmp/slots.json cargo run -p fragment-client
//! ```

use anyhow::Result;
use client_frontend_core::{Frontend, FrontendConfig};
use fragment_client::{TerminalFrontend, logging};
use runtime::{RuntimeConfig, SessionBuilder};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();

    let _log_guard = logging::setup_logging()?;

    tracing::info!("Starting fragment client");
    tracing::info!("Snapshot path: {}", runtime_config.snapshot_path.display());

    let session = SessionBuilder::new(runtime_config).build().await?;

    let mut frontend = TerminalFrontend::new(frontend_config);
    frontend.run(session).await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
