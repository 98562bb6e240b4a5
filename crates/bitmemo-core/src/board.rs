//! Board support abstraction
//!
//! A [`Board`] names the concrete hardware types, [`BoardParts`] carries the
//! initialized instances into [`crate::MemoryGame`].

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};
use rand_core::RngCore;

use crate::{display::TextDisplay, driver::LedTransmitter, matrix::MatrixDriver};

/// Hardware the game runs on
pub trait Board {
    /// Claimed channel driving the LED matrix
    type Transmitter: LedTransmitter;
    /// Blocking delay source
    type Delay: DelayNs;
    /// Push button input
    type Button: InputPin;
    /// Feedback LED output
    type Led: OutputPin;
    /// Status text display
    type Display: TextDisplay;
    /// Entropy for sequence generation
    type Rng: RngCore;
}

/// Initialized peripherals of a [`Board`]
pub struct BoardParts<B: Board> {
    pub matrix: MatrixDriver<B::Transmitter, B::Delay>,
    /// Button entering `0`
    pub button_zero: B::Button,
    /// Button entering `1`
    pub button_one: B::Button,
    pub success_led: B::Led,
    pub failure_led: B::Led,
    pub display: B::Display,
    pub rng: B::Rng,
    pub delay: B::Delay,
}
