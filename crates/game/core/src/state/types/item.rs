//! Item-related state types.
//!
//! This module contains the DNA fragment value object and its identifiers:
//! - InstanceId: identity of one placed fragment
//! - TemplateId: permanent catalog reference shared by every copy of a fragment
//! - Item: the immutable value held by a slot

use std::fmt;

/// Identity of a single placed fragment.
///
/// Unique across all containers at any time (see [`crate::state::SlotStore`]).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct InstanceId(String);

impl InstanceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InstanceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Reference to a catalog entry stored outside the core (lookup via [`crate::env::ItemCatalog`]).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TemplateId(String);

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TemplateId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Elemental affinity of a fragment.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementType {
    Fire,
    Water,
    Earth,
    Wind,
    Light,
    Dark,
}

/// Rarity tier of a fragment.
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
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// A DNA fragment held by exactly one slot.
///
/// Items never change once placed, except for re-keying (a fresh
/// [`InstanceId`] with the same [`TemplateId`]) when promoted out of the
/// temporary hold.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub instance_id: InstanceId,
    pub template_id: TemplateId,
    pub element: ElementType,
    pub rarity: Rarity,
    pub display_name: String,
}

impl Item {
    pub fn new(
        instance_id: impl Into<InstanceId>,
        template_id: impl Into<TemplateId>,
        element: ElementType,
        rarity: Rarity,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            template_id: template_id.into(),
            element,
            rarity,
            display_name: display_name.into(),
        }
    }

    /// Returns a copy of this item carrying a different instance id.
    #[must_use]
    pub fn rekeyed(&self, instance_id: InstanceId) -> Self {
        Self {
            instance_id,
            ..self.clone()
        }
    }
}

impl From<String> for InstanceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<String> for TemplateId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
