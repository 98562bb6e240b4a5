//! WS2812 output over an SPI bus
//!
//! With the bus clocked at 3.2 MHz every protocol bit takes four SPI bits:
//! `1000` for a zero and `1110` for a one. One SPI byte therefore carries two
//! protocol bits, and each color byte becomes four SPI bytes. A frame ends
//! with a run of zero bytes that holds the line low for the strip reset.

use embedded_hal::spi::SpiBus;

use crate::driver::LedTransmitter;

/// SPI clock the encoding is designed for
pub const SPI_FREQUENCY_KHZ: u32 = 3200;

/// Zero bytes closing a frame, 125 us of low line at 3.2 MHz
pub const RESET_LINE: [u8; 50] = [0; 50];

/// SPI bytes for every pair of protocol bits (00, 01, 10, 11)
const PATTERNS: [u8; 4] = [0b1000_1000, 0b1000_1110, 0b1110_1000, 0b1110_1110];

/// Expand one color byte into its SPI waveform, most significant bit first
#[inline]
pub const fn encode(byte: u8) -> [u8; 4] {
    let mut out = [0_u8; 4];
    let mut i = 0;
    while i < 4 {
        let pair = (byte >> (6 - 2 * i)) & 0b11;
        out[i] = PATTERNS[pair as usize];
        i += 1;
    }
    out
}

/// [`LedTransmitter`] writing the encoded waveform to an SPI bus
pub struct SpiLedTransmitter<B: SpiBus> {
    bus: B,
}

impl<B: SpiBus> SpiLedTransmitter<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: SpiBus> LedTransmitter for SpiLedTransmitter<B> {
    fn put_blocking(&mut self, byte: u8) {
        let _ = self.bus.write(&encode(byte));
    }

    fn flush(&mut self) {
        let _ = self.bus.write(&RESET_LINE);
        let _ = self.bus.flush();
    }
}
