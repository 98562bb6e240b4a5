mod led_spi;
mod oled;
mod random;

pub(crate) use led_spi::{EspSpiPool, LedSpi};
pub(crate) use oled::OledDisplay;
pub(crate) use random::EspRandom;
