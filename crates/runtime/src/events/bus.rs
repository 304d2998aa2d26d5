//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{ContainerEvent, SyncEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Slot store changes (redraw notifications)
    Containers,
    /// Persistence sync results
    Sync,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Containers(ContainerEvent),
    Sync(SyncEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Containers(_) => Topic::Containers,
            Event::Sync(_) => Topic::Sync,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. There is one broadcast channel per topic, created
/// up front, so publishing and subscribing need no lock.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

struct Channels {
    containers: broadcast::Sender<Event>,
    sync: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: Arc::new(Channels {
                containers: broadcast::channel(capacity).0,
                sync: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();

        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Containers => &self.channels.containers,
            Topic::Sync => &self.channels.sync,
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("containers_subscribers", &self.channels.containers.receiver_count())
            .field("sync_subscribers", &self.channels.sync.receiver_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::SlotRef;

    #[tokio::test]
    async fn subscribers_only_see_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut containers = bus.subscribe(Topic::Containers);
        let mut sync = bus.subscribe(Topic::Sync);

        bus.publish(Event::Containers(ContainerEvent {
            slot: SlotRef::combination(1),
            revision: 4,
        }));

        let event = containers.recv().await.unwrap();
        assert!(matches!(event, Event::Containers(ContainerEvent { revision: 4, .. })));
        assert!(sync.try_recv().is_err());
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        let bus = EventBus::new();
        bus.publish(Event::Containers(ContainerEvent {
            slot: SlotRef::inventory(0),
            revision: 1,
        }));
    }
}
