//! Cross-frontend primitives for driving the fragment slots.
//!
//! Houses the interaction controller, gesture primitives, message logging,
//! event handling, and view-model types that the terminal client and future
//! graphical clients can reuse.
pub mod config;
pub mod controller;
pub mod event;
pub mod frontend;
pub mod gesture;
pub mod interaction;
pub mod message;
pub mod prompt;
pub mod view_model;

pub use config::{ChannelConfig, FrontendConfig, GestureConfig, MessageConfig};
pub use controller::{Feedback, InteractionController};
pub use event::{EventConsumer, EventImpact, SlotEventConsumer};
pub use frontend::Frontend;
pub use gesture::{GestureState, HitTarget, LongPressTimer, Point, PointerEvent};
pub use interaction::{InteractionLoop, SlotRenderer};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use prompt::{Confirmation, ConfirmationPrompt, PromptError};
pub use view_model::{ContainerView, ItemView, SlotView, SlotViewModel};
