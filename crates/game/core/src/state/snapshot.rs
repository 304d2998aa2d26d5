//! Immutable copies of the slot store handed to persistence.

use sha2::{Digest, Sha256};

use crate::state::{ContainerKind, InstanceId, Item, SlotRef};

/// Deep copy of every container at one store revision.
///
/// Each container is stored at its full address width (the inventory
/// includes the always-empty delete target cell).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotSnapshot {
    /// Store revision this snapshot was taken at.
    pub revision: u64,
    pub inventory: Vec<Option<Item>>,
    pub combination: Vec<Option<Item>>,
    pub temp_hold: Vec<Option<Item>>,
}

impl SlotSnapshot {
    /// Snapshot of an empty store at revision 0.
    pub fn empty() -> Self {
        Self {
            revision: 0,
            inventory: vec![None; ContainerKind::Inventory.addresses()],
            combination: vec![None; ContainerKind::Combination.addresses()],
            temp_hold: vec![None; ContainerKind::TempHold.addresses()],
        }
    }

    pub fn container(&self, kind: ContainerKind) -> &[Option<Item>] {
        match kind {
            ContainerKind::Inventory => &self.inventory,
            ContainerKind::Combination => &self.combination,
            ContainerKind::TempHold => &self.temp_hold,
        }
    }

    pub(crate) fn container_mut(&mut self, kind: ContainerKind) -> &mut Vec<Option<Item>> {
        match kind {
            ContainerKind::Inventory => &mut self.inventory,
            ContainerKind::Combination => &mut self.combination,
            ContainerKind::TempHold => &mut self.temp_hold,
        }
    }

    /// Iterates over occupied cells in container order, then index order.
    pub fn items(&self) -> impl Iterator<Item = (SlotRef, &Item)> {
        ContainerKind::ALL.into_iter().flat_map(move |kind| {
            self.container(kind)
                .iter()
                .enumerate()
                .filter_map(move |(index, cell)| {
                    cell.as_ref().map(|item| (SlotRef::new(kind, index), item))
                })
        })
    }

    /// Instance ids of every placed item, sorted.
    pub fn instance_ids(&self) -> Vec<InstanceId> {
        let mut ids: Vec<InstanceId> = self
            .items()
            .map(|(_, item)| item.instance_id.clone())
            .collect();
        ids.sort();
        ids
    }

    pub fn occupied(&self, kind: ContainerKind) -> usize {
        self.container(kind).iter().flatten().count()
    }

    /// SHA-256 over a canonical encoding of the occupied cells.
    ///
    /// The revision is excluded, so two snapshots with identical contents
    /// share a digest.
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for (slot, item) in self.items() {
            hasher.update([slot.kind as u8]);
            hasher.update((slot.index as u32).to_le_bytes());
            write_field(&mut hasher, item.instance_id.as_str());
            write_field(&mut hasher, item.template_id.as_str());
            write_field(&mut hasher, item.element.into());
            write_field(&mut hasher, item.rarity.into());
            write_field(&mut hasher, &item.display_name);
        }
        hasher.finalize().into()
    }
}

fn write_field(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u32).to_le_bytes());
    hasher.update(value.as_bytes());
}
