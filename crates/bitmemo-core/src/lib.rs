#![no_std]

//! Binary memory game core
//!
//! Architecture layers:
//! - `matrix` - Pixel buffer and the addressable LED matrix driver
//! - `driver` - Transmission abstraction (`LedTransmitter` plus a claim pool)
//! - `spi` - WS2812 transmitter on top of an `embedded-hal` SPI bus
//! - `pattern` - Fixed 5x5 result bitmaps
//! - `input` - Debounced push buttons and feedback LEDs
//! - `sequence` - Binary sequences generated and typed during a round
//! - `engine` - Round state machine
//!
//! Everything is generic over `embedded-hal` traits, so the same engine runs
//! on the board and against fakes on the host.

pub mod board;
pub mod color;
pub mod config;
pub mod display;
pub mod driver;
pub mod engine;
pub mod error;
pub mod input;
pub mod matrix;
pub mod pattern;
pub mod sequence;
pub mod spi;

pub use board::{Board, BoardParts};
pub use color::Rgb;
pub use config::{GameConfig, LED_COUNT, MATRIX_SIZE, SEQUENCE_LENGTH};
pub use display::TextDisplay;
pub use driver::{LedTransmitter, TransmitterPool};
pub use engine::{MemoryGame, RoundOutcome, RoundState};
pub use error::MatrixError;
pub use input::{DebouncedButton, FeedbackLeds};
pub use matrix::{MatrixDriver, PixelBuffer, index_of};
pub use pattern::Pattern;
pub use sequence::{Sequence, Symbol, UserSequence};
pub use spi::SpiLedTransmitter;
