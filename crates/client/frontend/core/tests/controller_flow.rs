//! Gesture classification and delete gating through the interaction controller.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use client_frontend_core::{
    Confirmation, ConfirmationPrompt, Feedback, GestureConfig, GestureState, HitTarget,
    InteractionController, MessageLevel, Point, PointerEvent, PromptError,
};
use game_core::{
    ContainerKind, ElementType, Item, MoveOutcome, NullSink, Rarity, SlotRef, SlotStore,
    TransferEngine, TransferError,
};
use tokio::time::Instant;

fn item(id: &str, template: &str) -> Item {
    Item::new(id, template, ElementType::Fire, Rarity::Common, template)
}

fn controller_with(items: &[(ContainerKind, Item)]) -> InteractionController {
    let mut store = SlotStore::new();
    for (kind, item) in items {
        store.place(*kind, item.clone()).expect("fixture fits");
    }
    InteractionController::new(
        TransferEngine::new(store, Arc::new(NullSink)),
        GestureConfig::default(),
    )
}

fn down(target: HitTarget, at: Instant) -> PointerEvent {
    PointerEvent::Down {
        target,
        position: Point::new(10.0, 10.0),
        time: at,
    }
}

fn move_to(x: f32, at: Instant) -> PointerEvent {
    PointerEvent::Move {
        target: HitTarget::Outside,
        position: Point::new(x, 10.0),
        time: at,
    }
}

fn up(target: HitTarget, at: Instant) -> PointerEvent {
    PointerEvent::Up {
        target,
        position: Point::new(10.0, 10.0),
        time: at,
    }
}

fn slot(slot: SlotRef) -> HitTarget {
    HitTarget::Slot(slot)
}

fn id_at(controller: &InteractionController, slot: SlotRef) -> Option<String> {
    controller
        .store()
        .get(slot)
        .map(|item| item.instance_id.as_str().to_owned())
}

/// Long-presses `target` and returns the controller in review mode.
fn enter_review(controller: &mut InteractionController, target: SlotRef, t0: Instant) {
    controller.handle(down(slot(target), t0));
    let timer = controller.long_press_timer().expect("press arms a timer");
    assert_eq!(
        controller.on_long_press(timer.token, timer.deadline),
        Feedback::ReviewEntered
    );
}

struct ScriptedPrompt {
    answer: Result<Confirmation, ()>,
    asked: std::sync::Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    fn new(answer: Result<Confirmation, ()>) -> Self {
        Self {
            answer,
            asked: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ConfirmationPrompt for ScriptedPrompt {
    async fn confirm(&self, display_name: &str) -> Result<Confirmation, PromptError> {
        self.asked.lock().unwrap().push(display_name.to_owned());
        self.answer.map_err(|()| PromptError::Closed)
    }
}

#[test]
fn tap_moves_inventory_item_to_first_free_combination_slot() {
    let mut controller = controller_with(&[(ContainerKind::Inventory, item("a", "ember"))]);
    let t0 = Instant::now();

    assert_eq!(
        controller.handle(down(slot(SlotRef::inventory(0)), t0)),
        Feedback::Pressed(SlotRef::inventory(0))
    );
    let feedback = controller.handle(up(slot(SlotRef::inventory(0)), t0 + Duration::from_millis(80)));

    assert!(matches!(
        feedback,
        Feedback::Moved(MoveOutcome::Moved { to, .. }) if to == SlotRef::combination(0)
    ));
    assert_eq!(controller.state(), &GestureState::Idle);
    assert!(controller.long_press_timer().is_none());
    assert_eq!(id_at(&controller, SlotRef::combination(0)).as_deref(), Some("a"));
}

#[test]
fn tap_on_temp_hold_claims_into_inventory() {
    let mut controller = controller_with(&[(ContainerKind::TempHold, item("drop-1", "spark"))]);
    let t0 = Instant::now();

    controller.handle(down(slot(SlotRef::temp_hold(0)), t0));
    let feedback = controller.handle(up(slot(SlotRef::temp_hold(0)), t0 + Duration::from_millis(50)));

    assert_eq!(
        feedback.message().map(|m| m.text),
        Some("fragment claimed".to_owned())
    );
    assert_eq!(id_at(&controller, SlotRef::inventory(0)).as_deref(), Some("frag-spark-1"));
}

#[test]
fn press_on_empty_slot_stays_idle() {
    let mut controller = controller_with(&[]);
    let feedback = controller.handle(down(slot(SlotRef::inventory(3)), Instant::now()));

    assert_eq!(feedback, Feedback::None);
    assert_eq!(controller.state(), &GestureState::Idle);
    assert!(controller.long_press_timer().is_none());
}

#[test]
fn small_jitter_does_not_start_a_drag() {
    let mut controller = controller_with(&[(ContainerKind::Inventory, item("a", "ember"))]);
    let t0 = Instant::now();

    controller.handle(down(slot(SlotRef::inventory(0)), t0));
    controller.handle(move_to(14.0, t0 + Duration::from_millis(20)));

    assert!(matches!(controller.state(), GestureState::PointerDown { .. }));
    assert!(controller.long_press_timer().is_some());
}

#[test]
fn drag_cancels_the_long_press_timer() {
    let mut controller = controller_with(&[
        (ContainerKind::Inventory, item("a", "ember")),
        (ContainerKind::Inventory, item("b", "tide")),
    ]);
    let t0 = Instant::now();

    controller.handle(down(slot(SlotRef::inventory(0)), t0));
    let timer = controller.long_press_timer().expect("press arms a timer");
    assert_eq!(
        controller.handle(move_to(40.0, t0 + Duration::from_millis(100))),
        Feedback::DragStarted {
            origin: SlotRef::inventory(0)
        }
    );
    assert!(controller.long_press_timer().is_none());

    // The timer fires late; the drag must win.
    assert_eq!(controller.on_long_press(timer.token, timer.deadline), Feedback::None);
    assert!(matches!(controller.state(), GestureState::Dragging { .. }));

    let feedback = controller.handle(up(slot(SlotRef::inventory(1)), t0 + Duration::from_millis(600)));
    assert!(matches!(feedback, Feedback::Moved(MoveOutcome::Swapped { .. })));
    assert_eq!(id_at(&controller, SlotRef::inventory(0)).as_deref(), Some("b"));
    assert_eq!(id_at(&controller, SlotRef::inventory(1)).as_deref(), Some("a"));
}

#[test]
fn timer_from_an_earlier_press_is_ignored() {
    let mut controller = controller_with(&[(ContainerKind::Inventory, item("a", "ember"))]);
    let t0 = Instant::now();

    controller.handle(down(slot(SlotRef::inventory(0)), t0));
    let first = controller.long_press_timer().expect("press arms a timer");
    controller.handle(PointerEvent::Leave {
        target: HitTarget::Outside,
        position: Point::default(),
        time: t0 + Duration::from_millis(30),
    });

    controller.handle(down(slot(SlotRef::inventory(0)), t0 + Duration::from_millis(60)));
    let second = controller.long_press_timer().expect("second press arms a timer");
    assert_ne!(first.token, second.token);

    assert_eq!(controller.on_long_press(first.token, second.deadline), Feedback::None);
    assert!(matches!(controller.state(), GestureState::PointerDown { .. }));
    assert_eq!(
        controller.on_long_press(second.token, second.deadline),
        Feedback::ReviewEntered
    );
}

#[test]
fn release_after_the_deadline_counts_as_long_press() {
    let mut controller = controller_with(&[(ContainerKind::Inventory, item("a", "ember"))]);
    let t0 = Instant::now();

    controller.handle(down(slot(SlotRef::inventory(0)), t0));
    let feedback = controller.handle(up(slot(SlotRef::inventory(0)), t0 + Duration::from_millis(400)));

    assert_eq!(feedback, Feedback::ReviewEntered);
    assert_eq!(controller.state(), &GestureState::ReviewMode);
    assert_eq!(id_at(&controller, SlotRef::inventory(0)).as_deref(), Some("a"));
}

#[test]
fn drop_outside_any_slot_changes_nothing() {
    let mut controller = controller_with(&[(ContainerKind::Inventory, item("a", "ember"))]);
    let t0 = Instant::now();

    controller.handle(down(slot(SlotRef::inventory(0)), t0));
    controller.handle(move_to(50.0, t0 + Duration::from_millis(10)));
    let feedback = controller.handle(up(HitTarget::Outside, t0 + Duration::from_millis(20)));

    assert_eq!(feedback, Feedback::DragCancelled);
    assert_eq!(controller.state(), &GestureState::Idle);
    assert_eq!(controller.store().revision(), 0);
}

#[test]
fn dragging_temp_hold_into_combination_shows_guidance() {
    let mut controller = controller_with(&[(ContainerKind::TempHold, item("drop-1", "spark"))]);
    let t0 = Instant::now();

    controller.handle(down(slot(SlotRef::temp_hold(0)), t0));
    controller.handle(move_to(80.0, t0 + Duration::from_millis(10)));
    let feedback = controller.handle(up(slot(SlotRef::combination(0)), t0 + Duration::from_millis(20)));

    assert!(matches!(
        feedback,
        Feedback::Rejected(TransferError::PolicyViolation { .. })
    ));
    let message = feedback.message().expect("policy violations are explained");
    assert_eq!(message.level, MessageLevel::Warning);
    assert_eq!(controller.state(), &GestureState::Idle);
    assert_eq!(controller.store().revision(), 0);
}

#[test]
fn tapping_into_a_full_combination_reports_container_full() {
    let mut items: Vec<_> = (0..5)
        .map(|n| (ContainerKind::Combination, item(&format!("c{n}"), "tide")))
        .collect();
    items.push((ContainerKind::Inventory, item("a", "ember")));
    let mut controller = controller_with(&items);
    let t0 = Instant::now();

    controller.handle(down(slot(SlotRef::inventory(0)), t0));
    let feedback = controller.handle(up(slot(SlotRef::inventory(0)), t0 + Duration::from_millis(40)));

    let message = feedback.message().expect("full container is reported");
    assert_eq!(message.text, "combination is full");
    assert_eq!(id_at(&controller, SlotRef::inventory(0)).as_deref(), Some("a"));
}

#[test]
fn review_mode_delete_requires_confirmation() {
    let mut controller = controller_with(&[
        (ContainerKind::Inventory, item("a", "ember")),
        (ContainerKind::Inventory, item("b", "tide")),
    ]);
    let t0 = Instant::now();
    enter_review(&mut controller, SlotRef::inventory(0), t0);

    let later = t0 + Duration::from_secs(1);
    let feedback = controller.handle(up(HitTarget::DeleteAffordance(SlotRef::inventory(1)), later));
    assert!(matches!(feedback, Feedback::ConfirmDelete(ref request) if request.origin == SlotRef::inventory(1)));

    // The modal swallows everything else.
    assert_eq!(controller.handle(up(HitTarget::Outside, later)), Feedback::None);
    assert_eq!(id_at(&controller, SlotRef::inventory(1)).as_deref(), Some("b"));

    assert_eq!(
        controller.resolve_delete(Confirmation::Cancelled),
        Feedback::DeleteCancelled
    );
    assert_eq!(id_at(&controller, SlotRef::inventory(1)).as_deref(), Some("b"));
    assert_eq!(controller.state(), &GestureState::ReviewMode);

    controller.handle(up(HitTarget::DeleteAffordance(SlotRef::inventory(1)), later));
    let feedback = controller.resolve_delete(Confirmation::Confirmed);
    assert!(matches!(feedback, Feedback::Deleted(ref outcome) if outcome.revision == 1));
    assert!(controller.store().get(SlotRef::inventory(1)).is_none());
    assert_eq!(controller.state(), &GestureState::ReviewMode);

    assert_eq!(
        controller.handle(up(HitTarget::Outside, later)),
        Feedback::ReviewExited
    );
    assert_eq!(controller.state(), &GestureState::Idle);
}

#[test]
fn resolving_without_a_request_does_nothing() {
    let mut controller = controller_with(&[(ContainerKind::Inventory, item("a", "ember"))]);

    assert_eq!(controller.resolve_delete(Confirmation::Confirmed), Feedback::None);
    assert_eq!(id_at(&controller, SlotRef::inventory(0)).as_deref(), Some("a"));
}

#[test]
fn deleting_the_last_fragment_leaves_review_mode() {
    let mut controller = controller_with(&[(ContainerKind::Combination, item("c", "ember"))]);
    let t0 = Instant::now();
    enter_review(&mut controller, SlotRef::combination(0), t0);

    controller.handle(up(
        HitTarget::DeleteAffordance(SlotRef::combination(0)),
        t0 + Duration::from_secs(1),
    ));
    controller.resolve_delete(Confirmation::Confirmed);

    assert!(controller.store().is_empty());
    assert_eq!(controller.state(), &GestureState::Idle);
}

#[test]
fn dropping_on_the_delete_target_opens_the_prompt() {
    let mut controller = controller_with(&[(ContainerKind::Inventory, item("a", "ember"))]);
    let t0 = Instant::now();

    controller.handle(down(slot(SlotRef::inventory(0)), t0));
    controller.handle(move_to(90.0, t0 + Duration::from_millis(10)));
    let feedback = controller.handle(up(slot(SlotRef::DELETE_TARGET), t0 + Duration::from_millis(20)));

    assert!(matches!(feedback, Feedback::ConfirmDelete(_)));
    assert!(controller.pending_delete().is_some());
    assert_eq!(controller.store().revision(), 0);

    controller.resolve_delete(Confirmation::Confirmed);
    assert!(controller.store().is_empty());
    assert_eq!(controller.state(), &GestureState::Idle);
}

#[tokio::test]
async fn prompt_answers_drive_the_delete() {
    let mut controller = controller_with(&[
        (ContainerKind::Inventory, item("a", "ember")),
        (ContainerKind::Inventory, item("b", "tide")),
    ]);
    let t0 = Instant::now();
    enter_review(&mut controller, SlotRef::inventory(0), t0);
    controller.handle(up(
        HitTarget::DeleteAffordance(SlotRef::inventory(0)),
        t0 + Duration::from_secs(1),
    ));

    let prompt = ScriptedPrompt::new(Ok(Confirmation::Confirmed));
    let feedback = controller.confirm_pending(&prompt).await;

    assert!(matches!(feedback, Feedback::Deleted(_)));
    assert_eq!(prompt.asked.lock().unwrap().as_slice(), ["ember"]);
    assert!(controller.store().get(SlotRef::inventory(0)).is_none());
}

#[tokio::test]
async fn failed_prompt_counts_as_cancel() {
    let mut controller = controller_with(&[(ContainerKind::Inventory, item("a", "ember"))]);
    let t0 = Instant::now();
    enter_review(&mut controller, SlotRef::inventory(0), t0);
    controller.handle(up(
        HitTarget::DeleteAffordance(SlotRef::inventory(0)),
        t0 + Duration::from_secs(1),
    ));

    let feedback = controller.confirm_pending(&ScriptedPrompt::new(Err(()))).await;

    assert_eq!(feedback, Feedback::DeleteCancelled);
    assert_eq!(id_at(&controller, SlotRef::inventory(0)).as_deref(), Some("a"));
    assert!(controller.pending_delete().is_none());
}
