//! Pointer primitives and the gesture state machine's states.
//!
//! Frontends translate their native input (mouse, touch, terminal commands)
//! into [`PointerEvent`]s; the [`crate::InteractionController`] turns those
//! into transfer intents.

use game_core::{InstanceId, SlotRef};
use tokio::time::Instant;

/// Pointer position in view coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// What lies under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// A slot cell, including the inventory's delete target.
    Slot(SlotRef),
    /// The delete badge shown on an occupied slot in review mode.
    DeleteAffordance(SlotRef),
    /// An open modal dialog.
    Modal,
    /// Anything else.
    Outside,
}

/// Raw pointer input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down {
        target: HitTarget,
        position: Point,
        time: Instant,
    },
    Move {
        target: HitTarget,
        position: Point,
        time: Instant,
    },
    Up {
        target: HitTarget,
        position: Point,
        time: Instant,
    },
    Leave {
        target: HitTarget,
        position: Point,
        time: Instant,
    },
}

impl PointerEvent {
    pub fn target(&self) -> HitTarget {
        match self {
            Self::Down { target, .. }
            | Self::Move { target, .. }
            | Self::Up { target, .. }
            | Self::Leave { target, .. } => *target,
        }
    }

    pub fn position(&self) -> Point {
        match self {
            Self::Down { position, .. }
            | Self::Move { position, .. }
            | Self::Up { position, .. }
            | Self::Leave { position, .. } => *position,
        }
    }

    pub fn time(&self) -> Instant {
        match self {
            Self::Down { time, .. }
            | Self::Move { time, .. }
            | Self::Up { time, .. }
            | Self::Leave { time, .. } => *time,
        }
    }
}

/// Gesture state.
///
/// `Dragging` remembers only the carried item's instance id; the item itself
/// stays owned by the slot store until the drop commits.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureState {
    Idle,
    PointerDown {
        slot: SlotRef,
        started: Instant,
        origin: Point,
    },
    Dragging {
        origin: SlotRef,
        carried: InstanceId,
        position: Point,
    },
    /// Every occupied slot shows a delete affordance.
    ReviewMode,
}

impl GestureState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::PointerDown { .. } => "pointer_down",
            Self::Dragging { .. } => "dragging",
            Self::ReviewMode => "review_mode",
        }
    }
}

/// The single outstanding long-press timer.
///
/// The token changes every time a timer is armed, so a firing that belongs to
/// an earlier gesture is recognised and ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LongPressTimer {
    pub token: u64,
    pub deadline: Instant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0);
    }
}
