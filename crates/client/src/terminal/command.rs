//! Typed commands and their pointer-event translation.
use std::str::FromStr;
use std::time::Duration;

use client_frontend_core::{GestureConfig, HitTarget, Point, PointerEvent};
use game_core::{ContainerKind, SlotRef};
use tokio::time::Instant;

pub const USAGE: &str = "\
commands:
  tap <slot>            tap a fragment (inventory <-> combination, temp_hold -> inventory)
  drag <slot> <slot>    drag a fragment onto another slot (`trash` is the delete target)
  hold <slot>           long-press to enter review mode
  del <slot>            in review mode, tap a fragment's delete badge
  done                  tap outside to leave review mode
  quit                  save and exit
slots: inv:<n>, comb:<n>, temp:<n>, trash";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Tap(SlotRef),
    Drag { from: SlotRef, to: SlotRef },
    Hold(SlotRef),
    Delete(SlotRef),
    Done,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<_> = line.split_whitespace().collect();
        match words.as_slice() {
            ["tap", slot] => Ok(Self::Tap(parse_slot(slot)?)),
            ["drag", from, to] => Ok(Self::Drag {
                from: parse_slot(from)?,
                to: parse_slot(to)?,
            }),
            ["hold", slot] => Ok(Self::Hold(parse_slot(slot)?)),
            ["del", slot] => Ok(Self::Delete(parse_slot(slot)?)),
            ["done"] => Ok(Self::Done),
            ["help"] | ["?"] => Ok(Self::Help),
            ["quit"] | ["exit"] => Ok(Self::Quit),
            _ => Err(format!("unrecognised command `{}`", line.trim())),
        }
    }
}

fn parse_slot(token: &str) -> Result<SlotRef, String> {
    if token.eq_ignore_ascii_case("trash") {
        return Ok(SlotRef::DELETE_TARGET);
    }

    let (kind, index) = token
        .split_once(':')
        .ok_or_else(|| format!("slot `{token}` should look like inv:3"))?;
    let kind = match kind.to_ascii_lowercase().as_str() {
        "inv" => ContainerKind::Inventory,
        "comb" => ContainerKind::Combination,
        "temp" => ContainerKind::TempHold,
        other => ContainerKind::from_str(other).map_err(|_| format!("unknown container `{kind}`"))?,
    };
    let index = index
        .parse()
        .map_err(|_| format!("slot index `{index}` is not a number"))?;
    Ok(SlotRef::new(kind, index))
}

/// Pointer events for a gesture command.
///
/// Each event is stamped when it is sent, so a held press really spans the
/// long-press interval.
pub fn gesture(command: Command, gestures: &GestureConfig) -> Vec<(Duration, PointerTemplate)> {
    let origin = Point::new(0.0, 0.0);
    let away = Point::new(gestures.drag_threshold + 1.0, 0.0);

    match command {
        Command::Tap(slot) => vec![
            (Duration::ZERO, PointerTemplate::down(HitTarget::Slot(slot), origin)),
            (Duration::ZERO, PointerTemplate::up(HitTarget::Slot(slot), origin)),
        ],
        Command::Drag { from, to } => vec![
            (Duration::ZERO, PointerTemplate::down(HitTarget::Slot(from), origin)),
            (Duration::ZERO, PointerTemplate::moved(HitTarget::Outside, away)),
            (Duration::ZERO, PointerTemplate::up(HitTarget::Slot(to), away)),
        ],
        Command::Hold(slot) => vec![
            (Duration::ZERO, PointerTemplate::down(HitTarget::Slot(slot), origin)),
            (
                gestures.long_press + Duration::from_millis(50),
                PointerTemplate::up(HitTarget::Slot(slot), origin),
            ),
        ],
        Command::Delete(slot) => vec![(
            Duration::ZERO,
            PointerTemplate::up(HitTarget::DeleteAffordance(slot), origin),
        )],
        Command::Done => vec![(Duration::ZERO, PointerTemplate::up(HitTarget::Outside, origin))],
        Command::Help | Command::Quit => Vec::new(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Down,
    Move,
    Up,
}

/// A pointer event waiting for its timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerTemplate {
    phase: Phase,
    target: HitTarget,
    position: Point,
}

impl PointerTemplate {
    fn down(target: HitTarget, position: Point) -> Self {
        Self {
            phase: Phase::Down,
            target,
            position,
        }
    }

    fn moved(target: HitTarget, position: Point) -> Self {
        Self {
            phase: Phase::Move,
            target,
            position,
        }
    }

    fn up(target: HitTarget, position: Point) -> Self {
        Self {
            phase: Phase::Up,
            target,
            position,
        }
    }

    pub fn at(self, time: Instant) -> PointerEvent {
        let Self {
            target, position, ..
        } = self;
        match self.phase {
            Phase::Down => PointerEvent::Down {
                target,
                position,
                time,
            },
            Phase::Move => PointerEvent::Move {
                target,
                position,
                time,
            },
            Phase::Up => PointerEvent::Up {
                target,
                position,
                time,
            },
        }
    }
}
