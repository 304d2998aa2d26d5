//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (terminal driver, future GUI).

use std::env;
use std::time::Duration;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub channels: ChannelConfig,
    pub messages: MessageConfig,
    pub gestures: GestureConfig,
}

impl FrontendConfig {
    pub const fn new(
        channels: ChannelConfig,
        messages: MessageConfig,
        gestures: GestureConfig,
    ) -> Self {
        Self {
            channels,
            messages,
            gestures,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FRAGMENT_INPUT_BUFFER` - Pointer event queue size (default: 32)
    /// - `FRAGMENT_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `FRAGMENT_LONG_PRESS_MS` - Hold time before review mode (default: 350)
    /// - `FRAGMENT_DRAG_THRESHOLD` - Movement in px that turns a press into a drag (default: 6.0)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("FRAGMENT_INPUT_BUFFER") {
            config.channels.input_buffer = capacity.max(1);
        }

        if let Some(capacity) = read_env::<usize>("FRAGMENT_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        if let Some(millis) = read_env::<u64>("FRAGMENT_LONG_PRESS_MS") {
            config.gestures.long_press = Duration::from_millis(millis.max(1));
        }
        if let Some(threshold) =
            read_env::<f32>("FRAGMENT_DRAG_THRESHOLD").filter(|value| value.is_finite())
        {
            config.gestures.drag_threshold = threshold.max(0.0);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct ChannelConfig {
    pub input_buffer: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self { input_buffer: 32 }
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

/// Thresholds that classify a pointer press.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureConfig {
    /// Hold time without movement that enters review mode.
    pub long_press: Duration,
    /// Distance the pointer must travel before a press becomes a drag.
    pub drag_threshold: f32,
}

impl GestureConfig {
    pub const DEFAULT_LONG_PRESS: Duration = Duration::from_millis(350);
    pub const DEFAULT_DRAG_THRESHOLD: f32 = 6.0;
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            long_press: Self::DEFAULT_LONG_PRESS,
            drag_threshold: Self::DEFAULT_DRAG_THRESHOLD,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
