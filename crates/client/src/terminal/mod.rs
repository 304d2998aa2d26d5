//! Terminal frontend.
mod command;
mod prompt;
mod render;

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use client_frontend_core::{
    Frontend, FrontendConfig, GestureConfig, InteractionController, InteractionLoop, MessageLog,
    PointerEvent, SlotEventConsumer,
};
use runtime::Session;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info};

pub use command::Command;
use prompt::{AnswerSlot, LinePrompt};
use render::TextRenderer;

pub struct TerminalFrontend {
    config: FrontendConfig,
}

impl TerminalFrontend {
    pub fn new(config: FrontendConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Frontend for TerminalFrontend {
    async fn run(&mut self, session: Session) -> Result<()> {
        let Session { engine, bus, sync, .. } = session;

        let (input_tx, input_rx) = mpsc::channel(self.config.channels.input_buffer);
        let answers = AnswerSlot::default();
        let reader = tokio::spawn(read_commands(
            input_tx,
            answers.clone(),
            self.config.gestures.clone(),
        ));

        println!("{}", command::USAGE);
        let interaction = InteractionLoop::new(
            InteractionController::new(engine, self.config.gestures.clone()),
            SlotEventConsumer::new(MessageLog::new(self.config.messages.capacity)),
            TextRenderer::new(std::io::stdout()),
            Arc::new(LinePrompt::new(answers)),
            input_rx,
            &bus,
        );
        let (controller, _) = interaction.run().await?;

        reader.await.context("command reader panicked")??;
        sync.flush().await?;
        info!(revision = controller.store().revision(), "session closed");
        Ok(())
    }
}

/// Reads stdin until `quit` or EOF, turning commands into pointer events.
async fn read_commands(
    input: mpsc::Sender<PointerEvent>,
    answers: AnswerSlot,
    gestures: GestureConfig,
) -> Result<()> {
    let result = forward_lines(&input, &answers, &gestures).await;
    answers.close();
    result
}

async fn forward_lines(
    input: &mpsc::Sender<PointerEvent>,
    answers: &AnswerSlot,
    gestures: &GestureConfig,
) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let Some(line) = answers.offer(line) else {
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                println!("{message}; type `help` for commands");
                continue;
            }
        };
        debug!(?command, "command");

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", command::USAGE),
            gesture => {
                for (delay, template) in command::gesture(gesture, gestures) {
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    if input.send(template.at(Instant::now())).await.is_err() {
                        return Ok(());
                    }
                }
            }
        }
    }

    Ok(())
}
