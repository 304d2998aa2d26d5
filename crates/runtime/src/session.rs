//! Session assembly.
//!
//! [`SessionBuilder`] loads the catalog, restores the last persisted snapshot
//! (or builds the starter layout for a new profile), and wires the transfer
//! engine to the event bus and the persistence sync.

use std::sync::Arc;

use game_content::{CatalogLoader, ContentFactory, LayoutLoader};
use game_core::{SlotConfig, SlotStore, TransferEngine};
use tracing::info;

use crate::api::{Result, RuntimeError};
use crate::config::RuntimeConfig;
use crate::events::{BusObserver, EventBus};
use crate::oracle::CatalogOracleImpl;
use crate::repository::{FileSnapshotRepository, SnapshotRepository};
use crate::workers::PersistenceSync;

/// A ready-to-drive slot session.
///
/// The engine is handed to whoever owns input handling; the bus and sync stay
/// shared.
pub struct Session {
    pub engine: TransferEngine,
    pub bus: EventBus,
    pub catalog: Arc<CatalogOracleImpl>,
    pub sync: Arc<PersistenceSync>,
}

/// Builder for [`Session`] with flexible configuration.
pub struct SessionBuilder {
    config: RuntimeConfig,
    slot_config: SlotConfig,
    repository: Option<Arc<dyn SnapshotRepository>>,
    catalog: Option<CatalogOracleImpl>,
    starter: Option<SlotStore>,
}

impl SessionBuilder {
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            config,
            slot_config: SlotConfig::default(),
            repository: None,
            catalog: None,
            starter: None,
        }
    }

    pub fn slot_config(mut self, slot_config: SlotConfig) -> Self {
        self.slot_config = slot_config;
        self
    }

    /// Use `repository` instead of the file repository at `snapshot_path`.
    pub fn repository(mut self, repository: Arc<dyn SnapshotRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Use `catalog` instead of loading one.
    pub fn catalog(mut self, catalog: CatalogOracleImpl) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Store used when the repository holds no snapshot.
    pub fn starter_store(mut self, store: SlotStore) -> Self {
        self.starter = Some(store);
        self
    }

    /// Builds the session. Must be called inside a tokio runtime.
    pub async fn build(self) -> Result<Session> {
        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => load_catalog(&self.config)?,
        };
        let repository = match self.repository {
            Some(repository) => repository,
            None => Arc::new(FileSnapshotRepository::new(&self.config.snapshot_path)?),
        };

        let mut store = match repository.load().await? {
            Some(snapshot) => {
                info!(revision = snapshot.revision, "restored slot snapshot");
                SlotStore::from_snapshot(&snapshot).map_err(RuntimeError::Restore)?
            }
            None => match self.starter {
                Some(store) => store,
                None => {
                    info!("no saved snapshot, using starter layout");
                    load_starter(&self.config, &catalog)?
                }
            },
        };

        let bus = EventBus::with_capacity(self.config.event_buffer_size);
        store.add_observer(Box::new(BusObserver::new(bus.clone())));

        let sync = Arc::new(PersistenceSync::on_current_runtime(repository, bus.clone())?);
        let catalog = Arc::new(catalog);
        let engine = TransferEngine::with_config(store, sync.clone(), &self.slot_config)
            .with_catalog(catalog.clone());

        info!(
            templates = catalog.len(),
            items = engine.store().items().count(),
            "session ready"
        );

        Ok(Session {
            engine,
            bus,
            catalog,
            sync,
        })
    }
}

fn load_catalog(config: &RuntimeConfig) -> Result<CatalogOracleImpl> {
    let entries = match &config.catalog_path {
        Some(path) => CatalogLoader::load(path),
        None => CatalogLoader::bundled(),
    }
    .map_err(|e| RuntimeError::Content(format!("{e:#}")))?;

    Ok(CatalogOracleImpl::from_entries(entries))
}

fn load_starter(config: &RuntimeConfig, catalog: &CatalogOracleImpl) -> Result<SlotStore> {
    use game_core::ItemCatalog;

    let layout = match &config.starter_path {
        Some(path) => LayoutLoader::load(path),
        None => ContentFactory::bundled().load_starter_layout(),
    }
    .map_err(|e| RuntimeError::Content(format!("{e:#}")))?;

    layout
        .build_store(&catalog.all_entries())
        .map_err(|e| RuntimeError::Content(format!("{e:#}")))
}
