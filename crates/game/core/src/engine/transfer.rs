//! Move planning.
//!
//! Planning reads the store, checks every rule, and produces the full list of
//! writes before anything is committed, so a rejected move never leaves a
//! partial write behind.

use crate::error::ErrorContext;
use crate::state::{ContainerKind, Item, SlotRef};

use super::{
    DeleteRequest, Destination, MoveOutcome, PolicyRule, Rekey, TransferEngine, TransferError,
};

pub(super) enum Plan {
    Unchanged,
    Delete(DeleteRequest),
    Commit {
        writes: Vec<(SlotRef, Option<Item>)>,
        outcome: MoveOutcome,
    },
}

/// Items leaving TempHold for a permanent container get a fresh instance id.
const fn requires_rekey(from: ContainerKind, to: ContainerKind) -> bool {
    matches!(from, ContainerKind::TempHold)
        && matches!(to, ContainerKind::Inventory | ContainerKind::Combination)
}

impl TransferEngine {
    pub(super) fn plan(
        &mut self,
        origin: SlotRef,
        destination: Destination,
    ) -> Result<Plan, TransferError> {
        let context = ErrorContext::new(self.store.revision()).with_origin(origin);

        let destination = match destination {
            Destination::Slot(slot) => slot,
            Destination::FirstFree(kind) => {
                // Only a literal slot-to-itself move is a no-op on an empty origin.
                if self.store.get(origin).is_none() {
                    return Err(TransferError::NoItemAtOrigin { origin, context });
                }
                if let Some(rule) = PolicyRule::check(origin.kind, kind) {
                    return Err(TransferError::PolicyViolation { rule, context });
                }
                match self.store.find_free_index(kind, &[]) {
                    Some(index) => SlotRef::new(kind, index),
                    None => {
                        return Err(TransferError::TargetFull {
                            container: kind,
                            context,
                        });
                    }
                }
            }
        };
        let context = context.with_destination(destination);

        if origin == destination {
            return Ok(Plan::Unchanged);
        }

        let Some(moving) = self.store.get(origin).cloned() else {
            return Err(TransferError::NoItemAtOrigin { origin, context });
        };

        if !destination.is_addressable() {
            return Err(TransferError::InvalidDestination {
                destination,
                context,
            });
        }

        if destination.is_delete_target() {
            return Ok(Plan::Delete(DeleteRequest {
                item: moving,
                origin,
            }));
        }

        if let Some(rule) = PolicyRule::check(origin.kind, destination.kind) {
            return Err(TransferError::PolicyViolation { rule, context });
        }

        let displaced = self.store.get(destination).cloned();
        let mut rekeyed = Vec::new();

        let Some(displaced) = displaced else {
            let moving = self.admit(moving, origin.kind, destination.kind, &mut rekeyed);
            return Ok(Plan::Commit {
                writes: vec![(destination, Some(moving)), (origin, None)],
                outcome: MoveOutcome::Moved {
                    from: origin,
                    to: destination,
                    rekeyed,
                },
            });
        };

        // Swap. An ephemeral origin gives up its slot when the item leaves it
        // for another container, so the displaced item takes the next free one.
        let displaced_to = if origin.kind.is_ephemeral() && origin.kind != destination.kind {
            match self.store.find_free_index(origin.kind, &[origin.index]) {
                Some(index) => SlotRef::new(origin.kind, index),
                None => {
                    return Err(TransferError::TargetFull {
                        container: origin.kind,
                        context,
                    });
                }
            }
        } else {
            origin
        };

        if let Some(rule) = PolicyRule::check(destination.kind, displaced_to.kind) {
            return Err(TransferError::PolicyViolation { rule, context });
        }

        let moving = self.admit(moving, origin.kind, destination.kind, &mut rekeyed);
        let displaced = self.admit(displaced, destination.kind, displaced_to.kind, &mut rekeyed);

        let mut writes = vec![(destination, Some(moving))];
        if displaced_to != origin {
            writes.push((origin, None));
        }
        writes.push((displaced_to, Some(displaced)));

        Ok(Plan::Commit {
            writes,
            outcome: MoveOutcome::Swapped {
                from: origin,
                to: destination,
                displaced_to,
                rekeyed,
            },
        })
    }

    /// Applies the re-keying rule to an item crossing from `from` into `to`.
    fn admit(
        &mut self,
        item: Item,
        from: ContainerKind,
        to: ContainerKind,
        rekeyed: &mut Vec<Rekey>,
    ) -> Item {
        if !requires_rekey(from, to) {
            return item;
        }

        let reserved: Vec<_> = rekeyed.iter().map(|rekey| rekey.current.clone()).collect();
        let instance_id = self.keyer.mint(&item.template_id, &self.store, &reserved);

        let mut promoted = item.rekeyed(instance_id.clone());
        if let Some(entry) = self
            .catalog
            .as_ref()
            .and_then(|catalog| catalog.lookup(&item.template_id))
        {
            entry.apply_to(&mut promoted);
        }

        rekeyed.push(Rekey {
            previous: item.instance_id,
            current: instance_id,
        });
        promoted
    }
}
