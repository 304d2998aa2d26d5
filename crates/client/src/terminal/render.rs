//! Plain-text board rendering.
use std::io::Write;

use anyhow::Result;
use client_frontend_core::{
    ContainerView, GestureState, MessageEntry, MessageLevel, SlotRenderer, SlotViewModel,
};

/// Prints the board and any new messages after every redraw.
pub struct TextRenderer<W: Write + Send> {
    out: W,
    last_message: Option<MessageEntry>,
}

impl<W: Write + Send> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_message: None,
        }
    }

    fn write_container(&mut self, view: &ContainerView) -> Result<()> {
        write!(self.out, "{:<12}", view.kind.to_string())?;
        for slot in &view.slots {
            let label = match (&slot.item, slot.is_delete_target) {
                (Some(item), _) => item.display_name.clone(),
                (None, true) => "trash".to_owned(),
                (None, false) => "·".to_owned(),
            };
            let badge = if slot.shows_delete_affordance { "x" } else { "" };
            let carried = if slot.is_carried { "*" } else { "" };
            write!(self.out, " [{}{label}{badge}]", carried)?;
        }
        writeln!(self.out, "  {}/{}", view.occupied, view.capacity)?;
        Ok(())
    }

    fn new_messages<'a>(&self, messages: &'a [MessageEntry]) -> &'a [MessageEntry] {
        let start = self
            .last_message
            .as_ref()
            .and_then(|last| messages.iter().rposition(|entry| entry == last))
            .map_or(0, |index| index + 1);
        &messages[start..]
    }
}

impl<W: Write + Send> SlotRenderer for TextRenderer<W> {
    fn render(&mut self, view: &SlotViewModel) -> Result<()> {
        let mode = match view.mode {
            GestureState::ReviewMode => "review (del <slot> to remove, done to finish)",
            _ => view.mode.name(),
        };
        writeln!(self.out, "── rev {} · {mode}", view.revision)?;
        for container in &view.containers {
            self.write_container(container)?;
        }
        if view.combination_ready {
            writeln!(self.out, "combination ready")?;
        }

        let fresh = self.new_messages(&view.messages).to_vec();
        for entry in &fresh {
            let prefix = match entry.level {
                MessageLevel::Info => "",
                MessageLevel::Warning => "warning: ",
                MessageLevel::Error => "error: ",
            };
            writeln!(self.out, "{prefix}{}", entry.text)?;
        }
        if let Some(last) = fresh.last() {
            self.last_message = Some(last.clone());
        }

        self.out.flush()?;
        Ok(())
    }
}
