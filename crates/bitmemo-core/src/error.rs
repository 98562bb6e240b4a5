//! Error types for the LED matrix

use core::fmt;

/// Error type for matrix initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Every transmission channel of the board is already taken
    NoFreeChannel,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::NoFreeChannel => write!(f, "No free LED transmission channel"),
        }
    }
}

impl core::error::Error for MatrixError {}
