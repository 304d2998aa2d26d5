/// Slot layout constants and tunable engine parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotConfig {
    /// Prefix used when minting instance ids for re-keyed items.
    pub rekey_prefix: String,
}

impl SlotConfig {
    // ===== compile-time constants used as type parameters =====
    /// Addressable inventory cells, including the reserved delete target.
    pub const INVENTORY_SLOTS: usize = 12;
    /// Inventory index that acts as the delete target rather than storage.
    pub const DELETE_TARGET_INDEX: usize = Self::INVENTORY_SLOTS - 1;
    pub const COMBINATION_SLOTS: usize = 5;
    pub const TEMP_HOLD_SLOTS: usize = 9;
    /// Upper bound over every container, used as the backing array size.
    pub const MAX_CONTAINER_SLOTS: usize = Self::INVENTORY_SLOTS;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_REKEY_PREFIX: &'static str = "frag";

    pub fn new() -> Self {
        Self {
            rekey_prefix: Self::DEFAULT_REKEY_PREFIX.to_owned(),
        }
    }

    pub fn with_rekey_prefix(prefix: impl Into<String>) -> Self {
        Self {
            rekey_prefix: prefix.into(),
        }
    }
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self::new()
    }
}
