//! [`game_core::ItemCatalog`] backed by an in-memory map.
use game_core::{CatalogEntry, ItemCatalog, TemplateId};
use std::collections::HashMap;

/// ItemCatalog implementation with static fragment templates
#[derive(Debug, Clone, Default)]
pub struct CatalogOracleImpl {
    entries: HashMap<TemplateId, CatalogEntry>,
}

impl CatalogOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut oracle = Self::new();
        for entry in entries {
            oracle.add_entry(entry);
        }
        oracle
    }

    /// Add a template, replacing any entry with the same id
    pub fn add_entry(&mut self, entry: CatalogEntry) {
        self.entries.insert(entry.template_id.clone(), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ItemCatalog for CatalogOracleImpl {
    fn lookup(&self, template_id: &TemplateId) -> Option<CatalogEntry> {
        self.entries.get(template_id).cloned()
    }

    fn all_entries(&self) -> Vec<CatalogEntry> {
        let mut entries: Vec<_> = self.entries.values().cloned().collect();
        entries.sort_by(|a, b| a.template_id.cmp(&b.template_id));
        entries
    }
}
