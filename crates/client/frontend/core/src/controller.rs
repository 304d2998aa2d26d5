//! Interaction Mode Controller.
//!
//! Classifies pointer input into transfer intents and is the only caller of
//! [`TransferEngine::move_item`] and [`TransferEngine::confirm_delete`] in a
//! running client. The controller never mutates slots itself.

use game_core::{
    DeleteOutcome, DeleteRequest, InstanceId, MoveOutcome, MoveResult, SlotRef, SlotStore,
    TransferEngine, TransferError,
};
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::config::GestureConfig;
use crate::gesture::{GestureState, HitTarget, LongPressTimer, Point, PointerEvent};
use crate::message::{MessageEntry, MessageLevel};
use crate::prompt::{Confirmation, ConfirmationPrompt};

/// What a handled input did, for message logging and redraw decisions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    None,
    Pressed(SlotRef),
    DragStarted { origin: SlotRef },
    DragCancelled,
    Moved(MoveOutcome),
    Rejected(TransferError),
    ReviewEntered,
    ReviewExited,
    /// A delete prompt must be shown before anything else is handled.
    ConfirmDelete(DeleteRequest),
    Deleted(DeleteOutcome),
    DeleteCancelled,
}

impl Feedback {
    pub fn requires_redraw(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Player-facing message, if this feedback deserves one.
    pub fn message(&self) -> Option<MessageEntry> {
        match self {
            Self::Moved(MoveOutcome::Moved { rekeyed, .. })
            | Self::Moved(MoveOutcome::Swapped { rekeyed, .. })
                if !rekeyed.is_empty() =>
            {
                Some(MessageEntry::info("fragment claimed"))
            }
            Self::Rejected(error) => rejection_message(error),
            Self::Deleted(outcome) => Some(MessageEntry::new(
                format!("{} deleted", outcome.removed.display_name),
                Some(outcome.revision),
                MessageLevel::Info,
            )),
            Self::DeleteCancelled => Some(MessageEntry::info("delete cancelled")),
            _ => None,
        }
    }
}

fn rejection_message(error: &TransferError) -> Option<MessageEntry> {
    match error {
        TransferError::TargetFull { container, .. } => {
            Some(MessageEntry::warning(format!("{container} is full")))
        }
        TransferError::PolicyViolation { rule, .. } => {
            Some(MessageEntry::warning(rule.guidance()))
        }
        TransferError::StaleDeleteRequest { .. } => Some(MessageEntry::warning(
            "that fragment has moved; delete cancelled",
        )),
        TransferError::Store(error) => Some(MessageEntry::new(
            error.to_string(),
            None,
            MessageLevel::Error,
        )),
        // Silent: the drop simply snaps back
        TransferError::NoItemAtOrigin { .. } | TransferError::InvalidDestination { .. } => None,
    }
}

#[derive(Debug)]
struct PendingDelete {
    request: DeleteRequest,
    from_review: bool,
}

/// Gesture state machine wrapped around the transfer engine.
#[derive(Debug)]
pub struct InteractionController {
    engine: TransferEngine,
    gestures: GestureConfig,
    state: GestureState,
    timer: Option<LongPressTimer>,
    next_token: u64,
    pending_delete: Option<PendingDelete>,
}

impl InteractionController {
    pub fn new(engine: TransferEngine, gestures: GestureConfig) -> Self {
        Self {
            engine,
            gestures,
            state: GestureState::Idle,
            timer: None,
            next_token: 0,
            pending_delete: None,
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn store(&self) -> &SlotStore {
        self.engine.store()
    }

    pub fn engine(&self) -> &TransferEngine {
        &self.engine
    }

    pub fn into_engine(self) -> TransferEngine {
        self.engine
    }

    /// The outstanding long-press timer, if a press is being held.
    pub fn long_press_timer(&self) -> Option<LongPressTimer> {
        self.timer
    }

    /// The delete awaiting confirmation, if any.
    pub fn pending_delete(&self) -> Option<&DeleteRequest> {
        self.pending_delete.as_ref().map(|pending| &pending.request)
    }

    /// Feeds one pointer event through the state machine.
    ///
    /// While a delete prompt is open all pointer input is ignored.
    pub fn handle(&mut self, event: PointerEvent) -> Feedback {
        if self.pending_delete.is_some() {
            debug!(?event, "pointer input ignored while a delete prompt is open");
            return Feedback::None;
        }

        // A hold that outlived its deadline is a long press even if the timer
        // has not been delivered yet.
        if let Some(timer) = self.timer
            && matches!(self.state, GestureState::PointerDown { .. })
            && event.time() >= timer.deadline
        {
            return self.enter_review();
        }

        let state = std::mem::replace(&mut self.state, GestureState::Idle);
        let feedback = match state {
            GestureState::Idle => self.on_idle(event),
            GestureState::PointerDown {
                slot,
                started,
                origin,
            } => self.on_pointer_down(slot, started, origin, event),
            GestureState::Dragging {
                origin,
                carried,
                position,
            } => self.on_dragging(origin, carried, position, event),
            GestureState::ReviewMode => self.on_review(event),
        };
        debug!(state = self.state.name(), ?feedback, "pointer event handled");
        feedback
    }

    /// Delivers a long-press timer firing. Stale or cancelled timers are ignored.
    pub fn on_long_press(&mut self, token: u64, now: Instant) -> Feedback {
        match self.timer {
            Some(timer)
                if timer.token == token
                    && now >= timer.deadline
                    && matches!(self.state, GestureState::PointerDown { .. }) =>
            {
                self.enter_review()
            }
            _ => {
                debug!(token, "stale long-press timer ignored");
                Feedback::None
            }
        }
    }

    /// Answers the open delete prompt.
    ///
    /// Only [`Confirmation::Confirmed`] removes the fragment. Afterwards the
    /// controller returns to review mode if the delete started there and
    /// anything is left to review.
    pub fn resolve_delete(&mut self, confirmation: Confirmation) -> Feedback {
        let Some(pending) = self.pending_delete.take() else {
            debug!("no delete awaiting confirmation");
            return Feedback::None;
        };

        let feedback = match confirmation {
            Confirmation::Confirmed => match self.engine.confirm_delete(&pending.request) {
                Ok(outcome) => Feedback::Deleted(outcome),
                Err(error) => Feedback::Rejected(error),
            },
            Confirmation::Cancelled => Feedback::DeleteCancelled,
        };

        self.state = if pending.from_review && !self.engine.store().is_empty() {
            GestureState::ReviewMode
        } else {
            GestureState::Idle
        };
        feedback
    }

    /// Shows the open delete prompt and applies the answer.
    pub async fn confirm_pending(&mut self, prompt: &dyn ConfirmationPrompt) -> Feedback {
        let Some(display_name) = self
            .pending_delete
            .as_ref()
            .map(|pending| pending.request.item.display_name.clone())
        else {
            return Feedback::None;
        };

        let answer = match prompt.confirm(&display_name).await {
            Ok(answer) => answer,
            Err(error) => {
                warn!(%error, "delete prompt failed; treating as cancelled");
                Confirmation::Cancelled
            }
        };
        self.resolve_delete(answer)
    }

    fn on_idle(&mut self, event: PointerEvent) -> Feedback {
        match event {
            PointerEvent::Down {
                target: HitTarget::Slot(slot),
                position,
                time,
            } if self.engine.store().get(slot).is_some() => {
                self.arm_timer(time);
                self.state = GestureState::PointerDown {
                    slot,
                    started: time,
                    origin: position,
                };
                Feedback::Pressed(slot)
            }
            _ => Feedback::None,
        }
    }

    fn on_pointer_down(
        &mut self,
        slot: SlotRef,
        started: Instant,
        origin: Point,
        event: PointerEvent,
    ) -> Feedback {
        match event {
            PointerEvent::Move { position, .. }
                if position.distance_to(origin) > self.gestures.drag_threshold =>
            {
                self.timer = None;
                match self.engine.store().get(slot) {
                    Some(item) => {
                        self.state = GestureState::Dragging {
                            origin: slot,
                            carried: item.instance_id.clone(),
                            position,
                        };
                        Feedback::DragStarted { origin: slot }
                    }
                    None => Feedback::None,
                }
            }
            PointerEvent::Move { .. } => {
                self.state = GestureState::PointerDown {
                    slot,
                    started,
                    origin,
                };
                Feedback::None
            }
            PointerEvent::Up { .. } => {
                self.timer = None;
                self.tap(slot)
            }
            PointerEvent::Leave { .. } => {
                self.timer = None;
                Feedback::None
            }
            PointerEvent::Down { .. } => {
                self.timer = None;
                self.on_idle(event)
            }
        }
    }

    fn on_dragging(
        &mut self,
        origin: SlotRef,
        carried: InstanceId,
        position: Point,
        event: PointerEvent,
    ) -> Feedback {
        match event {
            PointerEvent::Move { position, .. } => {
                self.state = GestureState::Dragging {
                    origin,
                    carried,
                    position,
                };
                Feedback::None
            }
            PointerEvent::Down { .. } => {
                self.state = GestureState::Dragging {
                    origin,
                    carried,
                    position,
                };
                Feedback::None
            }
            PointerEvent::Up {
                target: HitTarget::Slot(destination),
                ..
            } => {
                let result = self.engine.move_item(origin, destination);
                self.apply(result, false)
            }
            PointerEvent::Up { .. } | PointerEvent::Leave { .. } => Feedback::DragCancelled,
        }
    }

    fn on_review(&mut self, event: PointerEvent) -> Feedback {
        self.state = GestureState::ReviewMode;
        let PointerEvent::Up { target, .. } = event else {
            return Feedback::None;
        };

        match target {
            HitTarget::DeleteAffordance(slot) => {
                let result = self.engine.request_delete(slot);
                self.apply(result, true)
            }
            HitTarget::Slot(slot) if self.engine.store().get(slot).is_some() => Feedback::None,
            HitTarget::Modal => Feedback::None,
            HitTarget::Slot(_) | HitTarget::Outside => {
                self.state = GestureState::Idle;
                Feedback::ReviewExited
            }
        }
    }

    /// Tap: move to the first free slot of the paired container.
    fn tap(&mut self, slot: SlotRef) -> Feedback {
        let result = self.engine.move_item(slot, slot.kind.tap_target());
        self.apply(result, false)
    }

    fn apply(&mut self, result: MoveResult, from_review: bool) -> Feedback {
        match result {
            Ok(MoveOutcome::DeleteRequested(request)) => {
                self.pending_delete = Some(PendingDelete {
                    request: request.clone(),
                    from_review,
                });
                Feedback::ConfirmDelete(request)
            }
            Ok(MoveOutcome::Unchanged) => Feedback::None,
            Ok(outcome) => Feedback::Moved(outcome),
            Err(error) => Feedback::Rejected(error),
        }
    }

    fn arm_timer(&mut self, now: Instant) {
        self.next_token = self.next_token.wrapping_add(1);
        self.timer = Some(LongPressTimer {
            token: self.next_token,
            deadline: now + self.gestures.long_press,
        });
    }

    fn enter_review(&mut self) -> Feedback {
        self.timer = None;
        self.state = GestureState::ReviewMode;
        debug!("entered review mode");
        Feedback::ReviewEntered
    }
}
