use game_core::{ContainerObserver, SlotChange};

use super::{ContainerEvent, Event, EventBus};

/// Forwards slot store notifications onto the [`crate::events::Topic::Containers`] topic.
#[derive(Debug, Clone)]
pub struct BusObserver {
    bus: EventBus,
}

impl BusObserver {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }
}

impl ContainerObserver for BusObserver {
    fn containers_changed(&self, change: &SlotChange) {
        self.bus.publish(Event::Containers(ContainerEvent {
            slot: change.slot,
            revision: change.revision,
        }));
    }
}
