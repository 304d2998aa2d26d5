//! Utilities for reacting to runtime events inside UI layers.
use runtime::{Event, SyncEvent};

use crate::message::{MessageEntry, MessageLevel, MessageLog};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
}

/// Default consumer: container changes trigger a redraw and failed syncs
/// become warnings in the message log.
#[derive(Clone, Debug)]
pub struct SlotEventConsumer {
    log: MessageLog,
}

impl SlotEventConsumer {
    pub fn new(log: MessageLog) -> Self {
        Self { log }
    }
}

impl EventConsumer for SlotEventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact {
        match event {
            Event::Containers(_) => EventImpact::redraw(),
            Event::Sync(SyncEvent::Failed {
                revision, error, ..
            }) => {
                self.log.push(MessageEntry::new(
                    format!("could not save your fragments ({error}); progress is kept locally"),
                    Some(*revision),
                    MessageLevel::Warning,
                ));
                EventImpact::redraw()
            }
            Event::Sync(SyncEvent::Saved { .. }) => EventImpact::none(),
        }
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }
}
