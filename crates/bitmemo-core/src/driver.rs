//! LED transmission abstraction layer
//!
//! The matrix driver never talks to a peripheral directly. It claims a
//! transmitter from a [`TransmitterPool`] once and then pushes raw bytes
//! through it.

/// Serial output connected to the LED strip data line
pub trait LedTransmitter {
    /// Send one byte, blocking until the hardware accepted it
    fn put_blocking(&mut self, byte: u8);

    /// End the frame: drive the reset level and wait for the line to drain
    ///
    /// Called once after the last byte of every frame.
    fn flush(&mut self) {}
}

impl<T: LedTransmitter + ?Sized> LedTransmitter for &mut T {
    fn put_blocking(&mut self, byte: u8) {
        T::put_blocking(self, byte);
    }

    fn flush(&mut self) {
        T::flush(self);
    }
}

/// Set of transmission channels a board can hand out
///
/// Implement this trait to support different hardware platforms.
pub trait TransmitterPool {
    /// Output pin the claimed channel is routed to
    type Pin;
    /// Channel handed out by [`TransmitterPool::claim`]
    type Transmitter: LedTransmitter;

    /// Take an unused channel and bind it to `pin`
    ///
    /// Returns `None` when every channel is already in use.
    fn claim(&mut self, pin: Self::Pin) -> Option<Self::Transmitter>;
}
