//! Starter layout loader.

use std::path::Path;

use anyhow::Context;
use game_core::{CatalogEntry, ContainerKind, InstanceId, SlotStore};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Template ids to place into each container of a fresh profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StarterLayout {
    #[serde(default)]
    pub inventory: Vec<String>,
    #[serde(default)]
    pub combination: Vec<String>,
    #[serde(default)]
    pub temp_hold: Vec<String>,
}

impl StarterLayout {
    fn templates(&self, kind: ContainerKind) -> &[String] {
        match kind {
            ContainerKind::Inventory => &self.inventory,
            ContainerKind::Combination => &self.combination,
            ContainerKind::TempHold => &self.temp_hold,
        }
    }

    /// Builds a store with one freshly minted item per listed template.
    ///
    /// Instance ids have the form `starter-{template}-{n}`. Every template
    /// must exist in `catalog`.
    pub fn build_store(&self, catalog: &[CatalogEntry]) -> LoadResult<SlotStore> {
        let mut store = SlotStore::new();
        let mut serial = 0u32;

        for kind in ContainerKind::ALL {
            for template in self.templates(kind) {
                let entry = catalog
                    .iter()
                    .find(|entry| entry.template_id.as_str() == template)
                    .ok_or_else(|| anyhow::anyhow!("Unknown template in starter layout: {}", template))?;

                serial += 1;
                let item = entry.instantiate(InstanceId::new(format!("starter-{}-{}", template, serial)));
                store
                    .place(kind, item)
                    .with_context(|| format!("Starter layout overflows {}", kind))?;
            }
        }

        Ok(store)
    }
}

/// Loader for starter layouts.
pub struct LayoutLoader;

impl LayoutLoader {
    pub fn load(path: &Path) -> LoadResult<StarterLayout> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Layout compiled into the crate.
    pub fn bundled() -> LoadResult<StarterLayout> {
        Self::parse(include_str!("../../data/starter.ron"))
    }

    pub fn parse(content: &str) -> LoadResult<StarterLayout> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse starter layout RON: {}", e))
    }
}
