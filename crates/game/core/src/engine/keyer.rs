use crate::state::{InstanceId, SlotStore, TemplateId};

/// Mints instance ids for items promoted out of TempHold.
///
/// Ids have the form `{prefix}-{template}-{n}` with a monotonically
/// increasing `n`; candidates already live in the store are skipped.
#[derive(Clone, Debug)]
pub struct InstanceKeyer {
    prefix: String,
    next: u64,
}

impl InstanceKeyer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Returns an id no live item carries and that `reserved` does not contain.
    pub fn mint(
        &mut self,
        template_id: &TemplateId,
        store: &SlotStore,
        reserved: &[InstanceId],
    ) -> InstanceId {
        loop {
            let candidate = InstanceId::new(format!("{}-{}-{}", self.prefix, template_id, self.next));
            self.next += 1;
            if !store.contains_instance(&candidate) && !reserved.contains(&candidate) {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ContainerKind, ElementType, Item, Rarity};

    #[test]
    fn mint_skips_live_ids() {
        let mut store = SlotStore::new();
        store
            .place(
                ContainerKind::Inventory,
                Item::new("frag-ember-1", "ember", ElementType::Fire, Rarity::Common, "Ember"),
            )
            .unwrap();

        let mut keyer = InstanceKeyer::new("frag");
        let template = TemplateId::new("ember");
        let first = keyer.mint(&template, &store, &[]);
        assert_eq!(first.as_str(), "frag-ember-2");

        let second = keyer.mint(&template, &store, std::slice::from_ref(&InstanceId::new("frag-ember-3")));
        assert_eq!(second.as_str(), "frag-ember-4");
    }
}
