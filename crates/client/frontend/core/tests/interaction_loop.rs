//! The async loop racing pointer input against the long-press deadline.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use client_frontend_core::{
    Confirmation, ConfirmationPrompt, EventConsumer, GestureConfig, GestureState, HitTarget, InteractionController,
    InteractionLoop, MessageLog, Point, PointerEvent, PromptError, SlotEventConsumer, SlotRenderer,
    SlotViewModel,
};
use game_core::{ContainerKind, ElementType, Item, NullSink, Rarity, SlotRef, SlotStore, TransferEngine};
use runtime::EventBus;
use tokio::sync::mpsc;
use tokio::time::Instant;

#[derive(Clone, Default)]
struct RecordingRenderer {
    modes: Arc<Mutex<Vec<&'static str>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    messages: Arc<Mutex<Vec<Vec<String>>>>,
}

impl SlotRenderer for RecordingRenderer {
    fn render(&mut self, view: &SlotViewModel) -> anyhow::Result<()> {
        self.modes.lock().unwrap().push(view.mode.name());
        if let Some(name) = &view.delete_prompt {
            self.prompts.lock().unwrap().push(name.clone());
        }
        self.messages
            .lock()
            .unwrap()
            .push(view.messages.iter().map(|entry| entry.text.clone()).collect());
        Ok(())
    }
}

struct AlwaysConfirm;

#[async_trait]
impl ConfirmationPrompt for AlwaysConfirm {
    async fn confirm(&self, _display_name: &str) -> Result<Confirmation, PromptError> {
        Ok(Confirmation::Confirmed)
    }
}

fn controller() -> InteractionController {
    let mut store = SlotStore::new();
    for (id, template) in [("a", "ember"), ("b", "tide")] {
        store
            .place(
                ContainerKind::Inventory,
                Item::new(id, template, ElementType::Water, Rarity::Rare, template),
            )
            .expect("fixture fits");
    }
    InteractionController::new(
        TransferEngine::new(store, Arc::new(NullSink)),
        GestureConfig::default(),
    )
}

fn pointer(target: HitTarget) -> (HitTarget, Point, Instant) {
    (target, Point::new(5.0, 5.0), Instant::now())
}

fn down(target: HitTarget) -> PointerEvent {
    let (target, position, time) = pointer(target);
    PointerEvent::Down {
        target,
        position,
        time,
    }
}

fn up(target: HitTarget) -> PointerEvent {
    let (target, position, time) = pointer(target);
    PointerEvent::Up {
        target,
        position,
        time,
    }
}

#[tokio::test(start_paused = true)]
async fn held_press_enters_review_and_deletes_after_confirmation() {
    let (tx, rx) = mpsc::channel(8);
    let bus = EventBus::new();
    let renderer = RecordingRenderer::default();
    let interaction = InteractionLoop::new(
        controller(),
        SlotEventConsumer::new(MessageLog::new(16)),
        renderer.clone(),
        Arc::new(AlwaysConfirm),
        rx,
        &bus,
    );
    let task = tokio::spawn(interaction.run());

    tx.send(down(HitTarget::Slot(SlotRef::inventory(0)))).await.unwrap();
    tokio::time::sleep(Duration::from_millis(500)).await;
    tx.send(up(HitTarget::DeleteAffordance(SlotRef::inventory(1))))
        .await
        .unwrap();
    drop(tx);

    let (controller, consumer) = task.await.unwrap().unwrap();
    assert_eq!(controller.state(), &GestureState::ReviewMode);
    assert!(controller.store().get(SlotRef::inventory(1)).is_none());
    assert!(controller.store().get(SlotRef::inventory(0)).is_some());
    assert!(
        consumer
            .message_log()
            .iter()
            .any(|entry| entry.text == "tide deleted")
    );
    assert!(renderer.modes.lock().unwrap().contains(&"review_mode"));
    assert_eq!(renderer.prompts.lock().unwrap().as_slice(), ["tide"]);
}

#[tokio::test(start_paused = true)]
async fn quick_release_is_a_tap_not_a_long_press() {
    let (tx, rx) = mpsc::channel(8);
    let bus = EventBus::new();
    let interaction = InteractionLoop::new(
        controller(),
        SlotEventConsumer::new(MessageLog::new(16)),
        RecordingRenderer::default(),
        Arc::new(AlwaysConfirm),
        rx,
        &bus,
    );
    let task = tokio::spawn(interaction.run());

    tx.send(down(HitTarget::Slot(SlotRef::inventory(0)))).await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    tx.send(up(HitTarget::Slot(SlotRef::inventory(0)))).await.unwrap();
    tokio::time::sleep(Duration::from_secs(1)).await;
    drop(tx);

    let (controller, _) = task.await.unwrap().unwrap();
    assert_eq!(controller.state(), &GestureState::Idle);
    assert_eq!(
        controller
            .store()
            .get(SlotRef::combination(0))
            .map(|item| item.instance_id.as_str()),
        Some("a")
    );
}

#[tokio::test(start_paused = true)]
async fn rendered_messages_respect_the_limit() {
    let (tx, rx) = mpsc::channel(8);
    let bus = EventBus::new();
    let renderer = RecordingRenderer::default();
    let interaction = InteractionLoop::new(
        controller(),
        SlotEventConsumer::new(MessageLog::new(16)),
        renderer.clone(),
        Arc::new(AlwaysConfirm),
        rx,
        &bus,
    )
    .with_message_limit(1);
    let task = tokio::spawn(interaction.run());

    tx.send(down(HitTarget::Slot(SlotRef::inventory(0)))).await.unwrap();
    tokio::time::sleep(Duration::from_millis(500)).await;
    for index in [1, 0] {
        tx.send(up(HitTarget::DeleteAffordance(SlotRef::inventory(index))))
            .await
            .unwrap();
    }
    drop(tx);

    let (controller, consumer) = task.await.unwrap().unwrap();
    assert_eq!(controller.state(), &GestureState::Idle);
    assert_eq!(consumer.message_log().len(), 2);

    let rendered = renderer.messages.lock().unwrap();
    assert!(rendered.iter().all(|messages| messages.len() <= 1));
    assert_eq!(
        rendered.last().map(Vec::as_slice),
        Some(["ember deleted".to_owned()].as_slice())
    );

    let engine = controller.into_engine();
    assert!(engine.store().is_empty());
    assert_eq!(engine.store().revision(), 2);
}
