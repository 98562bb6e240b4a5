#![allow(clippy::unreadable_literal)]

use crate::color::{Rgb, rgb_from_u32};

/// Side of the square LED matrix
pub const MATRIX_SIZE: usize = 5;

/// Number of LEDs on the strip
pub const LED_COUNT: usize = MATRIX_SIZE * MATRIX_SIZE;

/// Number of symbols the player has to memorize
pub const SEQUENCE_LENGTH: usize = 7;

/// Idle time after a frame before the strip accepts the next one
pub const LATCH_DELAY_US: u32 = 100;

/// Timings and colors of a game round
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Delay between the two samples of a button
    pub settle_ms: u32,
    /// Pause between two scans of the buttons
    pub poll_interval_ms: u32,
    /// How long the welcome banner stays on screen
    pub welcome_ms: u32,
    /// How long the generated sequence stays on screen
    pub memorize_ms: u32,
    /// How long a feedback LED stays lit after a press
    pub feedback_ms: u32,
    /// How long the result is shown
    pub result_ms: u32,
    /// Pause between two rounds
    pub round_pause_ms: u32,
    /// Color of the win pattern
    pub success_color: Rgb,
    /// Color of the lose pattern
    pub failure_color: Rgb,
}

impl GameConfig {
    pub const DEFAULT: Self = Self {
        settle_ms: 20,
        poll_interval_ms: 1,
        welcome_ms: 8000,
        memorize_ms: 5000,
        feedback_ms: 500,
        result_ms: 3000,
        round_pause_ms: 5000,
        success_color: rgb_from_u32(0x00A000),
        failure_color: rgb_from_u32(0xA00000),
    };
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
