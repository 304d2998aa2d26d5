//! Container kinds and slot addressing.

use std::fmt;

use crate::config::SlotConfig;

/// The three fixed-capacity slot arrays.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContainerKind {
    /// Main fragment inventory. One index is the delete target.
    Inventory,
    /// Staging area whose full occupancy enables a backend combine.
    Combination,
    /// Ephemeral holding area for freshly awarded fragments.
    TempHold,
}

impl ContainerKind {
    pub const ALL: [Self; 3] = [Self::Inventory, Self::Combination, Self::TempHold];

    /// Number of addressable cells, including non-storage ones.
    pub const fn addresses(self) -> usize {
        match self {
            Self::Inventory => SlotConfig::INVENTORY_SLOTS,
            Self::Combination => SlotConfig::COMBINATION_SLOTS,
            Self::TempHold => SlotConfig::TEMP_HOLD_SLOTS,
        }
    }

    /// Maximum number of items the container can hold.
    pub const fn capacity(self) -> usize {
        match self {
            Self::Inventory => SlotConfig::INVENTORY_SLOTS - 1,
            Self::Combination | Self::TempHold => self.addresses(),
        }
    }

    /// Ephemeral containers discard a slot once its item leaves.
    pub const fn is_ephemeral(self) -> bool {
        matches!(self, Self::TempHold)
    }

    /// Container a plain tap sends an item to.
    ///
    /// Inventory and Combination feed each other; TempHold items are claimed
    /// into the inventory.
    pub const fn tap_target(self) -> Self {
        match self {
            Self::Inventory => Self::Combination,
            Self::Combination | Self::TempHold => Self::Inventory,
        }
    }

    /// Returns true if `index` addresses a cell that can hold an item.
    pub const fn is_storage_index(self, index: usize) -> bool {
        match self {
            Self::Inventory => {
                index < SlotConfig::INVENTORY_SLOTS && index != SlotConfig::DELETE_TARGET_INDEX
            }
            Self::Combination | Self::TempHold => index < self.addresses(),
        }
    }

    /// Storage indices in ascending order.
    pub fn storage_indices(self) -> impl Iterator<Item = usize> {
        (0..self.addresses()).filter(move |&index| self.is_storage_index(index))
    }
}

/// Address of one cell: `(container, index)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotRef {
    pub kind: ContainerKind,
    pub index: usize,
}

impl SlotRef {
    /// The reserved inventory cell that routes items into delete confirmation.
    pub const DELETE_TARGET: Self = Self {
        kind: ContainerKind::Inventory,
        index: SlotConfig::DELETE_TARGET_INDEX,
    };

    pub const fn new(kind: ContainerKind, index: usize) -> Self {
        Self { kind, index }
    }

    pub const fn inventory(index: usize) -> Self {
        Self::new(ContainerKind::Inventory, index)
    }

    pub const fn combination(index: usize) -> Self {
        Self::new(ContainerKind::Combination, index)
    }

    pub const fn temp_hold(index: usize) -> Self {
        Self::new(ContainerKind::TempHold, index)
    }

    #[inline]
    pub const fn is_delete_target(self) -> bool {
        matches!(self.kind, ContainerKind::Inventory)
            && self.index == SlotConfig::DELETE_TARGET_INDEX
    }

    /// Returns true if the address exists, storage or delete target.
    #[inline]
    pub const fn is_addressable(self) -> bool {
        self.index < self.kind.addresses()
    }

    #[inline]
    pub const fn is_storage(self) -> bool {
        self.kind.is_storage_index(self.index)
    }
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.kind, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_target_is_addressable_but_not_storage() {
        let target = SlotRef::DELETE_TARGET;
        assert!(target.is_addressable());
        assert!(!target.is_storage());
        assert!(target.is_delete_target());
        assert_eq!(ContainerKind::Inventory.storage_indices().count(), 11);
    }

    #[test]
    fn capacities_match_layout() {
        assert_eq!(ContainerKind::Inventory.capacity(), 11);
        assert_eq!(ContainerKind::Combination.capacity(), 5);
        assert_eq!(ContainerKind::TempHold.capacity(), 9);
        assert!(!SlotRef::combination(5).is_addressable());
    }

    #[test]
    fn tap_targets_pair_primary_containers() {
        assert_eq!(ContainerKind::Inventory.tap_target(), ContainerKind::Combination);
        assert_eq!(ContainerKind::Combination.tap_target(), ContainerKind::Inventory);
        assert_eq!(ContainerKind::TempHold.tap_target(), ContainerKind::Inventory);
    }

    #[test]
    fn slot_display_names_container() {
        assert_eq!(SlotRef::temp_hold(3).to_string(), "temp_hold[3]");
        assert_eq!(
            "combination".parse::<ContainerKind>(),
            Ok(ContainerKind::Combination)
        );
    }
}
