//! Addressable LED matrix
//!
//! [`PixelBuffer`] is the in-memory frame, [`MatrixDriver`] owns it together
//! with the claimed transmitter and serializes it to the strip.

use embedded_hal::delay::DelayNs;
use log::{debug, warn};

use crate::{
    color::{BLACK, Rgb, grb_bytes},
    config::{LATCH_DELAY_US, LED_COUNT, MATRIX_SIZE},
    driver::{LedTransmitter, TransmitterPool},
    error::MatrixError,
};

/// Convert a (row, column) coordinate into a strip index
///
/// The strip is expected to be wired row by row, index 0 in the top left
/// corner.
#[inline]
pub const fn index_of(row: usize, col: usize) -> usize {
    assert!(row < MATRIX_SIZE && col < MATRIX_SIZE, "matrix coordinate out of range");
    row * MATRIX_SIZE + col
}

/// Frame of the whole strip in transmission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: [Rgb; LED_COUNT],
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelBuffer {
    /// Create a buffer with every pixel off
    pub const fn new() -> Self {
        Self {
            pixels: [BLACK; LED_COUNT],
        }
    }

    /// Get the pixel at `index`
    ///
    /// # Panics
    /// If `index` is not below [`LED_COUNT`].
    pub fn get(&self, index: usize) -> Rgb {
        assert!(index < LED_COUNT, "pixel index {index} out of range");
        self.pixels[index]
    }

    /// Set the pixel at `index`
    ///
    /// # Panics
    /// If `index` is not below [`LED_COUNT`].
    pub fn set(&mut self, index: usize, color: Rgb) {
        assert!(index < LED_COUNT, "pixel index {index} out of range");
        self.pixels[index] = color;
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.pixels.fill(BLACK);
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Bytes of the frame in wire order: pixel by pixel, green, red, blue
    pub fn grb_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.pixels.iter().flat_map(|pixel| grb_bytes(*pixel))
    }
}

/// Driver for the 5x5 WS2812 matrix
///
/// Generic over the transmitter and the delay used for the latch gap.
pub struct MatrixDriver<T: LedTransmitter, D: DelayNs> {
    transmitter: T,
    delay: D,
    pixels: PixelBuffer,
}

impl<T: LedTransmitter, D: DelayNs> MatrixDriver<T, D> {
    /// Claim a transmitter for `pin` and create a driver with a blank buffer
    ///
    /// # Arguments
    /// * `pool` - Channels available on the board
    /// * `pin` - Data line of the strip
    /// * `delay` - Delay source for the latch gap
    pub fn new<P>(pool: &mut P, pin: P::Pin, delay: D) -> Result<Self, MatrixError>
    where
        P: TransmitterPool<Transmitter = T>,
    {
        let Some(transmitter) = pool.claim(pin) else {
            warn!("No LED transmission channel left to claim");
            return Err(MatrixError::NoFreeChannel);
        };
        debug!("LED transmission channel claimed");

        Ok(Self::from_transmitter(transmitter, delay))
    }

    /// Create a driver on top of an already claimed transmitter
    pub fn from_transmitter(transmitter: T, delay: D) -> Self {
        Self {
            transmitter,
            delay,
            pixels: PixelBuffer::new(),
        }
    }

    /// Write a pixel without transmitting it
    ///
    /// # Panics
    /// If `index` is not below [`LED_COUNT`].
    pub fn set(&mut self, index: usize, r: u8, g: u8, b: u8) {
        self.pixels.set(index, Rgb { r, g, b });
    }

    /// Turn every pixel off without transmitting
    pub fn clear(&mut self) {
        self.pixels.clear();
    }

    /// Send the whole buffer to the strip
    ///
    /// Returns only after the line stayed idle for the latch gap, so the next
    /// commit always starts a new frame.
    pub fn commit(&mut self) {
        for byte in self.pixels.grb_bytes() {
            self.transmitter.put_blocking(byte);
        }
        self.transmitter.flush();
        self.delay.delay_us(LATCH_DELAY_US);
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }
}
