//! Fragment catalog loader.

use std::collections::HashSet;
use std::path::Path;

use game_core::CatalogEntry;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub entries: Vec<CatalogEntry>,
}

/// Loader for the fragment catalog.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load catalog entries from a RON file.
    ///
    /// Duplicate template ids are rejected.
    pub fn load(path: &Path) -> LoadResult<Vec<CatalogEntry>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Catalog compiled into the crate.
    pub fn bundled() -> LoadResult<Vec<CatalogEntry>> {
        Self::parse(include_str!("../../data/catalog.ron"))
    }

    pub fn parse(content: &str) -> LoadResult<Vec<CatalogEntry>> {
        let catalog: CatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for entry in &catalog.entries {
            if !seen.insert(entry.template_id.clone()) {
                anyhow::bail!("Duplicate template id in catalog: {}", entry.template_id);
            }
        }

        Ok(catalog.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{ElementType, Rarity};

    #[test]
    fn bundled_catalog_parses() {
        let entries = CatalogLoader::bundled().expect("bundled catalog is valid");
        assert!(entries.len() >= 6);

        let ember = entries
            .iter()
            .find(|entry| entry.template_id.as_str() == "ember")
            .expect("ember template");
        assert_eq!(ember.element, ElementType::Fire);
        assert_eq!(ember.rarity, Rarity::Common);
    }

    #[test]
    fn duplicate_template_ids_are_rejected() {
        let content = r#"(
            entries: [
                (template_id: "a", display_name: "A", element: Fire, rarity: Common),
                (template_id: "a", display_name: "A again", element: Dark, rarity: Rare),
            ],
        )"#;

        let err = CatalogLoader::parse(content).unwrap_err();
        assert!(err.to_string().contains("Duplicate template id"));
    }
}
