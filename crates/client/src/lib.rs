//! Line-oriented terminal client for the fragment slots.
//!
//! Typed commands are translated into pointer events, so the terminal drives
//! exactly the same gesture state machine a touch frontend would.

pub mod logging;
mod terminal;

pub use terminal::{Command, TerminalFrontend};
