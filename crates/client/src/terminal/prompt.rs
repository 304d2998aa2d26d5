//! Delete confirmation answered on the command line.
use std::io::Write;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use client_frontend_core::{Confirmation, ConfirmationPrompt, PromptError};
use tokio::sync::oneshot;

/// Hand-off point between the line reader and an open prompt.
///
/// While a prompt is waiting, the next typed line is its answer instead of a
/// command.
#[derive(Clone, Debug, Default)]
pub struct AnswerSlot {
    waiting: Arc<Mutex<Option<oneshot::Sender<String>>>>,
}

impl AnswerSlot {
    /// Gives `line` to the open prompt; returns it back if none is open.
    pub fn offer(&self, line: String) -> Option<String> {
        let sender = self.waiting.lock().ok().and_then(|mut waiting| waiting.take());
        match sender {
            Some(sender) => sender.send(line).err(),
            None => Some(line),
        }
    }

    /// Cancels any open prompt; used once input has ended.
    pub fn close(&self) {
        if let Ok(mut waiting) = self.waiting.lock() {
            waiting.take();
        }
    }

    fn open(&self) -> Result<oneshot::Receiver<String>, PromptError> {
        let (tx, rx) = oneshot::channel();
        let mut waiting = self.waiting.lock().map_err(|_| PromptError::Closed)?;
        *waiting = Some(tx);
        Ok(rx)
    }
}

#[derive(Debug)]
pub struct LinePrompt {
    answers: AnswerSlot,
}

impl LinePrompt {
    pub fn new(answers: AnswerSlot) -> Self {
        Self { answers }
    }
}

#[async_trait]
impl ConfirmationPrompt for LinePrompt {
    async fn confirm(&self, display_name: &str) -> Result<Confirmation, PromptError> {
        let answer = self.answers.open()?;
        {
            let mut out = std::io::stdout().lock();
            write!(out, "Delete {display_name}? This cannot be undone. [y/N] ")?;
            out.flush()?;
        }

        let line = answer.await.map_err(|_| PromptError::Closed)?;
        Ok(parse_answer(&line))
    }
}

fn parse_answer(line: &str) -> Confirmation {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Confirmation::Confirmed,
        _ => Confirmation::Cancelled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_explicit_yes_confirms() {
        assert_eq!(parse_answer(" Y "), Confirmation::Confirmed);
        assert_eq!(parse_answer("yes"), Confirmation::Confirmed);
        assert_eq!(parse_answer(""), Confirmation::Cancelled);
        assert_eq!(parse_answer("tap inv:0"), Confirmation::Cancelled);
    }

    #[tokio::test]
    async fn lines_go_to_an_open_prompt_first() {
        let slot = AnswerSlot::default();
        assert_eq!(slot.offer("tap inv:0".into()), Some("tap inv:0".into()));

        let answer = slot.open().expect("slot is usable");
        assert_eq!(slot.offer("y".into()), None);
        assert_eq!(answer.await.ok().as_deref(), Some("y"));
    }
}
