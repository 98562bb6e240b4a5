//! Push buttons and feedback LEDs
//!
//! Buttons are wired to ground with a pull-up, so a pressed button reads low.

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};

/// Push button filtered against contact bounce
///
/// A press is reported only when two samples taken `settle_ms` apart both
/// read active. There is no edge latching: callers use
/// [`DebouncedButton::wait_release`] to avoid counting a held button twice.
pub struct DebouncedButton<P: InputPin> {
    pin: P,
    settle_ms: u32,
    poll_interval_ms: u32,
}

impl<P: InputPin> DebouncedButton<P> {
    /// Create a new debounced button
    ///
    /// # Arguments
    /// * `pin` - Input line of the button
    /// * `settle_ms` - Delay between the two samples
    /// * `poll_interval_ms` - Pause between checks while waiting for release
    pub fn new(pin: P, settle_ms: u32, poll_interval_ms: u32) -> Self {
        Self {
            pin,
            settle_ms,
            poll_interval_ms,
        }
    }

    /// Check whether the button is held down
    ///
    /// Blocks for the settle delay when the first sample reads active.
    pub fn is_pressed<D: DelayNs>(&mut self, delay: &mut D) -> bool {
        if !self.is_active() {
            return false;
        }
        delay.delay_ms(self.settle_ms);
        self.is_active()
    }

    /// Block until the button is no longer pressed
    ///
    /// Waiting is unbounded: it lasts as long as the player holds the button.
    pub fn wait_release<D: DelayNs>(&mut self, delay: &mut D) {
        while self.is_pressed(delay) {
            delay.delay_ms(self.poll_interval_ms);
        }
    }

    fn is_active(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }
}

/// Pair of discrete LEDs telling whether the last symbol was right
pub struct FeedbackLeds<O: OutputPin> {
    success: O,
    failure: O,
}

impl<O: OutputPin> FeedbackLeds<O> {
    pub fn new(success: O, failure: O) -> Self {
        Self { success, failure }
    }

    /// Light exactly one of the two LEDs
    pub fn show(&mut self, correct: bool) {
        let _ = self.success.set_state(correct.into());
        let _ = self.failure.set_state((!correct).into());
    }

    pub fn off(&mut self) {
        let _ = self.success.set_low();
        let _ = self.failure.set_low();
    }
}
