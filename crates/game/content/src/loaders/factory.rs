//! Content factory for loading fragment content from a data directory.

use std::path::PathBuf;

use game_core::{CatalogEntry, SlotStore};

use crate::loaders::{CatalogLoader, LayoutLoader, LoadResult, StarterLayout};

/// Content factory that loads all fragment content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── catalog.ron
/// └── starter.ron
/// ```
///
/// A factory without a data directory serves the bundled files.
pub struct ContentFactory {
    data_dir: Option<PathBuf>,
}

impl ContentFactory {
    /// Creates a content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
        }
    }

    /// Creates a content factory that only serves bundled content.
    pub fn bundled() -> Self {
        Self { data_dir: None }
    }

    /// Load the fragment catalog from `catalog.ron`.
    pub fn load_catalog(&self) -> LoadResult<Vec<CatalogEntry>> {
        match &self.data_dir {
            Some(dir) => CatalogLoader::load(&dir.join("catalog.ron")),
            None => CatalogLoader::bundled(),
        }
    }

    /// Load the starter layout from `starter.ron`.
    pub fn load_starter_layout(&self) -> LoadResult<StarterLayout> {
        match &self.data_dir {
            Some(dir) => LayoutLoader::load(&dir.join("starter.ron")),
            None => LayoutLoader::bundled(),
        }
    }

    /// Builds the store a new profile starts with.
    pub fn starter_store(&self) -> LoadResult<SlotStore> {
        let catalog = self.load_catalog()?;
        self.load_starter_layout()?.build_store(&catalog)
    }
}
