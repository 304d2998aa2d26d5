//! Value types shared by the slot store and the transfer engine.

mod item;
mod slot;

pub use item::{ElementType, InstanceId, Item, Rarity, TemplateId};
pub use slot::{ContainerKind, SlotRef};
