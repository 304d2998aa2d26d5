use crate::state::{ElementType, InstanceId, Item, Rarity, TemplateId};

/// Read-only lookup from template id to display attributes.
pub trait ItemCatalog: Send + Sync {
    fn lookup(&self, template_id: &TemplateId) -> Option<CatalogEntry>;

    /// Returns all entries available in this catalog.
    fn all_entries(&self) -> Vec<CatalogEntry>;
}

/// Display attributes of one fragment template.
///
/// # Design: Template + Instance
///
/// - The catalog holds one entry per template id
/// - Placed [`Item`]s copy these attributes and add their own instance id
/// - Re-keyed items re-resolve their attributes here when the template is known
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogEntry {
    pub template_id: TemplateId,
    pub display_name: String,
    pub element: ElementType,
    pub rarity: Rarity,
}

impl CatalogEntry {
    pub fn new(
        template_id: impl Into<TemplateId>,
        display_name: impl Into<String>,
        element: ElementType,
        rarity: Rarity,
    ) -> Self {
        Self {
            template_id: template_id.into(),
            display_name: display_name.into(),
            element,
            rarity,
        }
    }

    /// Builds an item instance of this template.
    pub fn instantiate(&self, instance_id: impl Into<InstanceId>) -> Item {
        Item {
            instance_id: instance_id.into(),
            template_id: self.template_id.clone(),
            element: self.element,
            rarity: self.rarity,
            display_name: self.display_name.clone(),
        }
    }

    /// Copies this entry's display attributes onto `item`, keeping its ids.
    pub fn apply_to(&self, item: &mut Item) {
        item.display_name.clone_from(&self.display_name);
        item.element = self.element;
        item.rarity = self.rarity;
    }
}
