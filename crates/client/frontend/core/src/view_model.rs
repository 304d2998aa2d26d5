//! View-model snapshots derived from the slot store and gesture state.
use game_core::{ContainerKind, ElementType, InstanceId, Rarity, SlotRef, SlotStore};

use crate::gesture::GestureState;
use crate::message::{MessageEntry, MessageLog};

/// High-level snapshot used by presentation layers.
#[derive(Clone, Debug)]
pub struct SlotViewModel {
    pub revision: u64,
    pub mode: GestureState,
    pub containers: Vec<ContainerView>,
    /// Every combination slot is filled.
    pub combination_ready: bool,
    /// Display name of the fragment awaiting delete confirmation.
    pub delete_prompt: Option<String>,
    pub messages: Vec<MessageEntry>,
}

impl SlotViewModel {
    pub fn build(
        store: &SlotStore,
        mode: &GestureState,
        delete_prompt: Option<&str>,
        messages: &MessageLog,
        message_limit: usize,
    ) -> Self {
        let reviewing = matches!(mode, GestureState::ReviewMode);
        let carried = match mode {
            GestureState::Dragging { carried, .. } => Some(carried),
            _ => None,
        };

        Self {
            revision: store.revision(),
            mode: mode.clone(),
            containers: ContainerKind::ALL
                .into_iter()
                .map(|kind| ContainerView::from_store(store, kind, reviewing, carried))
                .collect(),
            combination_ready: store.is_combination_ready(),
            delete_prompt: delete_prompt.map(str::to_owned),
            messages: collect_messages(messages, message_limit),
        }
    }

    pub fn container(&self, kind: ContainerKind) -> Option<&ContainerView> {
        self.containers.iter().find(|view| view.kind == kind)
    }
}

#[derive(Clone, Debug)]
pub struct ContainerView {
    pub kind: ContainerKind,
    pub occupied: usize,
    pub capacity: usize,
    pub slots: Vec<SlotView>,
}

impl ContainerView {
    fn from_store(
        store: &SlotStore,
        kind: ContainerKind,
        reviewing: bool,
        carried: Option<&InstanceId>,
    ) -> Self {
        let slots = store
            .cells(kind)
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let slot = SlotRef::new(kind, index);
                let item = cell.as_ref().map(|item| ItemView {
                    instance_id: item.instance_id.clone(),
                    display_name: item.display_name.clone(),
                    element: item.element,
                    rarity: item.rarity,
                });
                SlotView {
                    slot,
                    is_delete_target: slot.is_delete_target(),
                    shows_delete_affordance: reviewing && item.is_some(),
                    is_carried: item
                        .as_ref()
                        .is_some_and(|view| Some(&view.instance_id) == carried),
                    item,
                }
            })
            .collect();

        Self {
            kind,
            occupied: store.occupied(kind),
            capacity: kind.capacity(),
            slots,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SlotView {
    pub slot: SlotRef,
    pub item: Option<ItemView>,
    pub is_delete_target: bool,
    /// Review mode badge.
    pub shows_delete_affordance: bool,
    /// The item is being dragged.
    pub is_carried: bool,
}

#[derive(Clone, Debug)]
pub struct ItemView {
    pub instance_id: InstanceId,
    pub display_name: String,
    pub element: ElementType,
    pub rarity: Rarity,
}

fn collect_messages(log: &MessageLog, limit: usize) -> Vec<MessageEntry> {
    let mut messages: Vec<_> = log.recent(limit).cloned().collect();
    messages.reverse();
    messages
}

#[cfg(test)]
mod tests {
    use game_core::Item;

    use super::*;

    #[test]
    fn review_mode_marks_occupied_slots_only() {
        let mut store = SlotStore::new();
        store
            .place(
                ContainerKind::Inventory,
                Item::new("a", "ember", ElementType::Fire, Rarity::Common, "Ember"),
            )
            .expect("empty inventory has room");

        let view = SlotViewModel::build(
            &store,
            &GestureState::ReviewMode,
            None,
            &MessageLog::new(4),
            4,
        );
        let inventory = view
            .container(ContainerKind::Inventory)
            .expect("inventory is always present");

        assert!(inventory.slots[0].shows_delete_affordance);
        assert!(!inventory.slots[1].shows_delete_affordance);
        assert!(inventory.slots.last().is_some_and(|slot| slot.is_delete_target));
        assert!(!view.combination_ready);
    }
}
