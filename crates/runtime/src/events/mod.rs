//! Topic-based event bus for runtime events.
//!
//! Slot changes and persistence results are published to separate topics so
//! a view only redrawing containers never sees sync traffic, and vice versa.

mod bus;
mod observer;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use observer::BusObserver;
pub use types::{ContainerEvent, SyncEvent};
