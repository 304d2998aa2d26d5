//! Async interaction loop.
//!
//! Multiplexes pointer input, the long-press deadline, and runtime events,
//! feeding the first two to the [`InteractionController`] and the last to an
//! [`EventConsumer`]. Delete prompts are awaited inline, so no other input is
//! processed while one is open.

use std::sync::Arc;

use anyhow::Result;
use runtime::{Event as RuntimeEvent, EventBus, Topic};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::mpsc;
use tokio::time::{self, Instant};
use tracing::{info, warn};

use crate::controller::{Feedback, InteractionController};
use crate::event::EventConsumer;
use crate::gesture::PointerEvent;
use crate::prompt::ConfirmationPrompt;
use crate::view_model::SlotViewModel;

/// Draws view models. Rendering itself is out of this crate's scope.
pub trait SlotRenderer: Send {
    fn render(&mut self, view: &SlotViewModel) -> Result<()>;
}

pub struct InteractionLoop<C, R>
where
    C: EventConsumer,
    R: SlotRenderer,
{
    controller: InteractionController,
    consumer: C,
    renderer: R,
    prompt: Arc<dyn ConfirmationPrompt>,
    input: mpsc::Receiver<PointerEvent>,
    containers: Option<broadcast::Receiver<RuntimeEvent>>,
    sync: Option<broadcast::Receiver<RuntimeEvent>>,
    message_limit: usize,
}

impl<C, R> InteractionLoop<C, R>
where
    C: EventConsumer,
    R: SlotRenderer,
{
    pub fn new(
        controller: InteractionController,
        consumer: C,
        renderer: R,
        prompt: Arc<dyn ConfirmationPrompt>,
        input: mpsc::Receiver<PointerEvent>,
        bus: &EventBus,
    ) -> Self {
        Self {
            controller,
            consumer,
            renderer,
            prompt,
            input,
            containers: Some(bus.subscribe(Topic::Containers)),
            sync: Some(bus.subscribe(Topic::Sync)),
            message_limit: 8,
        }
    }

    pub fn with_message_limit(mut self, limit: usize) -> Self {
        self.message_limit = limit;
        self
    }

    /// Runs until the input channel closes, then hands back the controller
    /// and consumer.
    pub async fn run(mut self) -> Result<(InteractionController, C)> {
        self.render()?;

        loop {
            let timer = self.controller.long_press_timer();
            let deadline = timer.map_or_else(Instant::now, |timer| timer.deadline);

            tokio::select! {
                event = self.input.recv() => {
                    let Some(event) = event else {
                        info!("input closed; leaving interaction loop");
                        break;
                    };
                    let feedback = self.controller.handle(event);
                    self.after(feedback).await?;
                }
                _ = time::sleep_until(deadline), if timer.is_some() => {
                    if let Some(timer) = timer {
                        let feedback = self.controller.on_long_press(timer.token, Instant::now());
                        self.after(feedback).await?;
                    }
                }
                result = next_event(&mut self.containers) => {
                    self.on_runtime_event(result, Topic::Containers)?;
                }
                result = next_event(&mut self.sync) => {
                    self.on_runtime_event(result, Topic::Sync)?;
                }
            }
        }

        Ok((self.controller, self.consumer))
    }

    async fn after(&mut self, feedback: Feedback) -> Result<()> {
        self.record(&feedback);
        if matches!(feedback, Feedback::ConfirmDelete(_)) {
            self.render()?;
            let resolved = self.controller.confirm_pending(self.prompt.as_ref()).await;
            self.record(&resolved);
            self.render()?;
        } else if feedback.requires_redraw() {
            self.render()?;
        }
        Ok(())
    }

    fn record(&mut self, feedback: &Feedback) {
        if let Some(message) = feedback.message() {
            self.consumer.message_log_mut().push(message);
        }
    }

    fn on_runtime_event(
        &mut self,
        result: Result<RuntimeEvent, RecvError>,
        topic: Topic,
    ) -> Result<()> {
        match result {
            Ok(event) => {
                if self.consumer.on_event(&event).requires_redraw {
                    self.render()?;
                }
            }
            Err(RecvError::Closed) => {
                warn!(?topic, "event stream closed");
                match topic {
                    Topic::Containers => self.containers = None,
                    Topic::Sync => self.sync = None,
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!(?topic, skipped, "dropped stale events");
                self.render()?;
            }
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let view = SlotViewModel::build(
            self.controller.store(),
            self.controller.state(),
            self.controller
                .pending_delete()
                .map(|request| request.item.display_name.as_str()),
            self.consumer.message_log(),
            self.message_limit,
        );
        self.renderer.render(&view)
    }
}

async fn next_event(
    receiver: &mut Option<broadcast::Receiver<RuntimeEvent>>,
) -> Result<RuntimeEvent, RecvError> {
    match receiver {
        Some(receiver) => receiver.recv().await,
        None => std::future::pending().await,
    }
}
