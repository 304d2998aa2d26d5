//! Authoritative in-memory slot state.
//!
//! [`SlotStore`] owns every placed [`Item`]. Writes go through
//! [`SlotStore::commit`], which applies a whole batch before any observer is
//! told about it, so a swap is never observed half-applied.

use arrayvec::ArrayVec;

use crate::config::SlotConfig;
use crate::state::{ContainerKind, InstanceId, Item, SlotRef, SlotSnapshot, StoreError};

/// Notification emitted once per written slot after a commit.
///
/// Carries no diff; observers re-read the store and redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotChange {
    pub slot: SlotRef,
    pub revision: u64,
}

/// Receives container change notifications (the view renderer seam).
pub trait ContainerObserver: Send {
    fn containers_changed(&self, change: &SlotChange);
}

type Cells = ArrayVec<Option<Item>, { SlotConfig::MAX_CONTAINER_SLOTS }>;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Container {
    cells: Cells,
}

impl Container {
    fn empty(kind: ContainerKind) -> Self {
        let mut cells = Cells::new();
        for _ in 0..kind.addresses() {
            cells.push(None);
        }
        Self { cells }
    }

    fn occupied(&self) -> usize {
        self.cells.iter().flatten().count()
    }
}

/// The three fixed-capacity containers plus their observer list.
pub struct SlotStore {
    inventory: Container,
    combination: Container,
    temp_hold: Container,
    revision: u64,
    observers: Vec<Box<dyn ContainerObserver>>,
}

impl SlotStore {
    pub fn new() -> Self {
        Self {
            inventory: Container::empty(ContainerKind::Inventory),
            combination: Container::empty(ContainerKind::Combination),
            temp_hold: Container::empty(ContainerKind::TempHold),
            revision: 0,
            observers: Vec::new(),
        }
    }

    /// Rebuilds a store from a persisted snapshot.
    ///
    /// Rejects snapshots with the wrong container widths, items on the delete
    /// target, or an instance present in more than one slot.
    pub fn from_snapshot(snapshot: &SlotSnapshot) -> Result<Self, StoreError> {
        let mut store = Self::new();
        let mut seen: Vec<(&InstanceId, SlotRef)> = Vec::new();

        for kind in ContainerKind::ALL {
            let cells = snapshot.container(kind);
            if cells.len() != kind.addresses() {
                return Err(StoreError::LayoutMismatch {
                    kind,
                    expected: kind.addresses(),
                    found: cells.len(),
                });
            }

            for (index, cell) in cells.iter().enumerate() {
                let Some(item) = cell else { continue };
                let slot = SlotRef::new(kind, index);
                if !slot.is_storage() {
                    return Err(StoreError::NotStorage { slot });
                }
                if let Some((_, first)) = seen.iter().find(|(id, _)| **id == item.instance_id) {
                    return Err(StoreError::DuplicateInstance {
                        instance_id: item.instance_id.clone(),
                        first: *first,
                        second: slot,
                    });
                }
                seen.push((&item.instance_id, slot));
                store.container_mut(kind).cells[index] = Some(item.clone());
            }
        }

        store.revision = snapshot.revision;
        Ok(store)
    }

    /// Registers an observer for change notifications.
    pub fn add_observer(&mut self, observer: Box<dyn ContainerObserver>) {
        self.observers.push(observer);
    }

    /// Monotonic counter bumped by every commit.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, slot: SlotRef) -> Option<&Item> {
        self.container(slot.kind).cells.get(slot.index)?.as_ref()
    }

    /// Cells of one container, including non-storage ones.
    pub fn cells(&self, kind: ContainerKind) -> &[Option<Item>] {
        &self.container(kind).cells
    }

    /// First free storage index in `kind`, scanning upwards and skipping `excluded`.
    pub fn find_free_index(&self, kind: ContainerKind, excluded: &[usize]) -> Option<usize> {
        let container = self.container(kind);
        kind.storage_indices()
            .filter(|index| !excluded.contains(index))
            .find(|&index| container.cells[index].is_none())
    }

    pub fn occupied(&self, kind: ContainerKind) -> usize {
        self.container(kind).occupied()
    }

    /// Returns true if no container holds an item.
    pub fn is_empty(&self) -> bool {
        ContainerKind::ALL
            .into_iter()
            .all(|kind| self.occupied(kind) == 0)
    }

    /// Full Combination occupancy: the backend combine may be triggered.
    pub fn is_combination_ready(&self) -> bool {
        self.occupied(ContainerKind::Combination) == ContainerKind::Combination.capacity()
    }

    pub fn contains_instance(&self, instance_id: &InstanceId) -> bool {
        self.locate(instance_id).is_some()
    }

    /// Slot currently holding `instance_id`.
    pub fn locate(&self, instance_id: &InstanceId) -> Option<SlotRef> {
        self.items()
            .find(|(_, item)| &item.instance_id == instance_id)
            .map(|(slot, _)| slot)
    }

    /// Iterates over occupied cells in container order, then index order.
    pub fn items(&self) -> impl Iterator<Item = (SlotRef, &Item)> {
        ContainerKind::ALL.into_iter().flat_map(move |kind| {
            self.container(kind)
                .cells
                .iter()
                .enumerate()
                .filter_map(move |(index, cell)| {
                    cell.as_ref().map(|item| (SlotRef::new(kind, index), item))
                })
        })
    }

    /// Deep copy of all containers at the current revision.
    pub fn snapshot(&self) -> SlotSnapshot {
        let mut snapshot = SlotSnapshot {
            revision: self.revision,
            ..SlotSnapshot::default()
        };
        for kind in ContainerKind::ALL {
            *snapshot.container_mut(kind) = self.container(kind).cells.to_vec();
        }
        snapshot
    }

    /// Places a backend-created item into the first free slot of `kind`.
    ///
    /// Used for reward claims and combination results, which arrive from the
    /// backend already minted. Not a transfer path.
    pub fn place(&mut self, kind: ContainerKind, item: Item) -> Result<SlotRef, StoreError> {
        if let Some(slot) = self.locate(&item.instance_id) {
            return Err(StoreError::AlreadyPlaced {
                instance_id: item.instance_id,
                slot,
            });
        }
        let index = self
            .find_free_index(kind, &[])
            .ok_or(StoreError::ContainerFull {
                kind,
                max: kind.capacity(),
            })?;
        let slot = SlotRef::new(kind, index);
        self.commit(vec![(slot, Some(item))])?;
        Ok(slot)
    }

    /// Total overwrite of a single slot.
    pub(crate) fn set(&mut self, slot: SlotRef, item: Option<Item>) -> Result<(), StoreError> {
        self.commit(vec![(slot, item)])
    }

    /// Applies every write, bumps the revision once, then notifies observers
    /// once per written slot.
    ///
    /// All addresses are validated up front; on error nothing is written.
    pub(crate) fn commit(&mut self, writes: Vec<(SlotRef, Option<Item>)>) -> Result<(), StoreError> {
        for (slot, item) in &writes {
            if !slot.is_addressable() {
                return Err(StoreError::SlotOutOfRange {
                    slot: *slot,
                    addresses: slot.kind.addresses(),
                });
            }
            if item.is_some() && !slot.is_storage() {
                return Err(StoreError::NotStorage { slot: *slot });
            }
        }

        let slots: Vec<SlotRef> = writes.iter().map(|(slot, _)| *slot).collect();
        for (slot, item) in writes {
            self.container_mut(slot.kind).cells[slot.index] = item;
        }
        self.revision += 1;

        for slot in slots {
            let change = SlotChange {
                slot,
                revision: self.revision,
            };
            for observer in &self.observers {
                observer.containers_changed(&change);
            }
        }
        Ok(())
    }

    fn container(&self, kind: ContainerKind) -> &Container {
        match kind {
            ContainerKind::Inventory => &self.inventory,
            ContainerKind::Combination => &self.combination,
            ContainerKind::TempHold => &self.temp_hold,
        }
    }

    fn container_mut(&mut self, kind: ContainerKind) -> &mut Container {
        match kind {
            ContainerKind::Inventory => &mut self.inventory,
            ContainerKind::Combination => &mut self.combination,
            ContainerKind::TempHold => &mut self.temp_hold,
        }
    }
}

impl Default for SlotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SlotStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotStore")
            .field("inventory", &self.inventory)
            .field("combination", &self.combination)
            .field("temp_hold", &self.temp_hold)
            .field("revision", &self.revision)
            .field("observers", &self.observers.len())
            .finish()
    }
}
