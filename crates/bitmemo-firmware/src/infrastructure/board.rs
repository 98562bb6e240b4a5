use esp_hal::{
    delay::Delay,
    gpio::{Input, Output},
};

use bitmemo_core::{Board, SpiLedTransmitter};

use crate::infrastructure::drivers::{EspRandom, LedSpi, OledDisplay};

/// ESP32 game board
pub(crate) struct EspBoard;

impl Board for EspBoard {
    type Transmitter = SpiLedTransmitter<LedSpi>;
    type Delay = Delay;
    type Button = Input<'static>;
    type Led = Output<'static>;
    type Display = OledDisplay;
    type Rng = EspRandom;
}
