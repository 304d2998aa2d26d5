//! Content loaders for reading fragment data from files.
//!
//! Each loader parses one RON file into game-core types. Bundled copies of the
//! default files are compiled in so a binary runs without a data directory.

pub mod catalog;
pub mod factory;
pub mod layout;

pub use catalog::{CatalogFile, CatalogLoader};
pub use factory::ContentFactory;
pub use layout::{LayoutLoader, StarterLayout};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
