//! Simulated board shared by the integration tests.
//!
//! Time only moves when the code under test sleeps on [`SimDelay`], so a whole
//! round runs instantly while button presses are still scripted in
//! milliseconds.

#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    convert::Infallible,
    marker::PhantomData,
    rc::Rc,
};

use bitmemo_core::{
    Board, BoardParts, LED_COUNT, LedTransmitter, MatrixDriver, TextDisplay, TransmitterPool,
};
use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, InputPin, OutputPin},
};
use rand_core::RngCore;

/// Give up on a simulation that runs longer than this (simulated time).
pub const SIMULATION_LIMIT_MS: u64 = 10 * 60 * 1000;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Simulated monotonic clock in nanoseconds.
#[derive(Debug, Clone, Default)]
pub struct SimClock(Rc<Cell<u64>>);

impl SimClock {
    pub fn now_ns(&self) -> u64 {
        self.0.get()
    }

    pub fn now_ms(&self) -> u64 {
        self.0.get() / 1_000_000
    }

    pub fn advance_ns(&self, ns: u64) {
        let now = self.0.get() + ns;
        assert!(
            now <= SIMULATION_LIMIT_MS * 1_000_000,
            "simulation exceeded {SIMULATION_LIMIT_MS} ms, is the input script complete?"
        );
        self.0.set(now);
    }
}

/// Delay that advances the simulated clock.
#[derive(Debug, Clone)]
pub struct SimDelay {
    clock: SimClock,
}

impl SimDelay {
    pub fn new(clock: &SimClock) -> Self {
        Self {
            clock: clock.clone(),
        }
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance_ns(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.clock.advance_ns(u64::from(us) * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.clock.advance_ns(u64::from(ms) * 1_000_000);
    }
}

/// Button held down (line low) during the scripted intervals, in ms.
#[derive(Debug, Clone)]
pub struct SimButton {
    clock: SimClock,
    held: Rc<RefCell<Vec<(u64, u64)>>>,
}

impl SimButton {
    pub fn new(clock: &SimClock) -> Self {
        Self {
            clock: clock.clone(),
            held: Rc::default(),
        }
    }

    /// Hold the button from `start_ms` (inclusive) to `end_ms` (exclusive).
    pub fn hold(&self, start_ms: u64, end_ms: u64) {
        self.held.borrow_mut().push((start_ms, end_ms));
    }
}

impl ErrorType for SimButton {
    type Error = Infallible;
}

impl InputPin for SimButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        let now = self.clock.now_ms();
        Ok(self
            .held
            .borrow()
            .iter()
            .any(|(start, end)| (*start..*end).contains(&now)))
    }
}

/// Output pin remembering every level written to it, with the time of the
/// write in ms.
#[derive(Debug, Clone)]
pub struct SimLed {
    clock: SimClock,
    writes: Rc<RefCell<Vec<(u64, bool)>>>,
}

impl SimLed {
    pub fn new(clock: &SimClock) -> Self {
        Self {
            clock: clock.clone(),
            writes: Rc::default(),
        }
    }

    pub fn writes(&self) -> Vec<bool> {
        self.writes.borrow().iter().map(|(_, level)| *level).collect()
    }

    /// Levels written while turning the LED on or off for a feedback,
    /// grouped in (shown, cleared) pairs.
    pub fn feedback_pairs(&self) -> Vec<(bool, bool)> {
        self.writes()
            .chunks(2)
            .map(|pair| (pair[0], pair.get(1).copied().unwrap_or(true)))
            .collect()
    }

    /// How long the LED stayed lit each time it was switched on, in ms.
    pub fn lit_durations_ms(&self) -> Vec<u64> {
        let writes = self.writes.borrow();
        let mut durations = Vec::new();
        let mut lit_since = None;
        for (at, level) in writes.iter() {
            match (*level, lit_since) {
                (true, None) => lit_since = Some(*at),
                (false, Some(since)) => {
                    durations.push(at - since);
                    lit_since = None;
                }
                _ => {}
            }
        }
        durations
    }

    fn record(&self, level: bool) {
        self.writes.borrow_mut().push((self.clock.now_ms(), level));
    }
}

impl ErrorType for SimLed {
    type Error = Infallible;
}

impl OutputPin for SimLed {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.record(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.record(true);
        Ok(())
    }
}

/// Display keeping every screen it was asked to show, with the time it
/// appeared in ms.
#[derive(Debug, Clone)]
pub struct SimDisplay {
    clock: SimClock,
    screens: Rc<RefCell<Vec<(u64, [String; 3])>>>,
}

impl SimDisplay {
    pub fn new(clock: &SimClock) -> Self {
        Self {
            clock: clock.clone(),
            screens: Rc::default(),
        }
    }

    pub fn screens(&self) -> Vec<[String; 3]> {
        self.screens
            .borrow()
            .iter()
            .map(|(_, screen)| screen.clone())
            .collect()
    }

    pub fn last(&self) -> Option<[String; 3]> {
        self.screens.borrow().last().map(|(_, screen)| screen.clone())
    }

    pub fn contains(&self, lines: [&str; 3]) -> bool {
        self.shown_at(lines).is_some()
    }

    /// Time the first screen with exactly these lines appeared.
    pub fn shown_at(&self, lines: [&str; 3]) -> Option<u64> {
        self.screens
            .borrow()
            .iter()
            .find(|(_, screen)| screen.iter().zip(lines).all(|(a, b)| a == b))
            .map(|(at, _)| *at)
    }
}

impl TextDisplay for SimDisplay {
    fn show(&mut self, lines: [&str; 3]) {
        self.screens
            .borrow_mut()
            .push((self.clock.now_ms(), lines.map(ToString::to_string)));
    }
}

/// Byte sent over the simulated LED line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentByte {
    pub at_ns: u64,
    pub value: u8,
}

/// Transmitter recording every byte with its timestamp.
#[derive(Debug, Clone)]
pub struct SimTransmitter {
    clock: SimClock,
    sent: Rc<RefCell<Vec<SentByte>>>,
    flushed_at: Rc<RefCell<Vec<usize>>>,
}

impl SimTransmitter {
    pub fn new(clock: &SimClock) -> Self {
        Self {
            clock: clock.clone(),
            sent: Rc::default(),
            flushed_at: Rc::default(),
        }
    }

    /// Byte count on the line at every end of frame.
    pub fn flushed_at(&self) -> Vec<usize> {
        self.flushed_at.borrow().clone()
    }

    pub fn sent(&self) -> Vec<SentByte> {
        self.sent.borrow().clone()
    }

    /// Every transmitted frame, split on the strip length.
    pub fn frames(&self) -> Vec<Vec<u8>> {
        self.sent
            .borrow()
            .chunks(LED_COUNT * 3)
            .map(|frame| frame.iter().map(|byte| byte.value).collect())
            .collect()
    }
}

impl LedTransmitter for SimTransmitter {
    fn put_blocking(&mut self, byte: u8) {
        // A byte takes 8 protocol bits of 1.25 us on the wire.
        self.clock.advance_ns(10_000);
        self.sent.borrow_mut().push(SentByte {
            at_ns: self.clock.now_ns(),
            value: byte,
        });
    }

    fn flush(&mut self) {
        let count = self.sent.borrow().len();
        self.flushed_at.borrow_mut().push(count);
    }
}

/// Pool handing out a fixed number of transmitters on the same clock.
#[derive(Debug)]
pub struct SimPool {
    clock: SimClock,
    free: usize,
    claimed_pins: Vec<u8>,
}

impl SimPool {
    pub fn new(clock: &SimClock, free: usize) -> Self {
        Self {
            clock: clock.clone(),
            free,
            claimed_pins: Vec::new(),
        }
    }

    pub fn claimed_pins(&self) -> &[u8] {
        &self.claimed_pins
    }
}

impl TransmitterPool for SimPool {
    type Pin = u8;
    type Transmitter = SimTransmitter;

    fn claim(&mut self, pin: u8) -> Option<SimTransmitter> {
        if self.free == 0 {
            return None;
        }
        self.free -= 1;
        self.claimed_pins.push(pin);
        Some(SimTransmitter::new(&self.clock))
    }
}

/// Board made of simulated parts, generic over the random source.
pub struct SimBoard<R>(PhantomData<R>);

impl<R: RngCore> Board for SimBoard<R> {
    type Transmitter = SimTransmitter;
    type Delay = SimDelay;
    type Button = SimButton;
    type Led = SimLed;
    type Display = SimDisplay;
    type Rng = R;
}

/// Handles kept by a test to script and observe a simulated board.
pub struct SimHandles {
    pub clock: SimClock,
    pub transmitter: SimTransmitter,
    pub button_zero: SimButton,
    pub button_one: SimButton,
    pub success_led: SimLed,
    pub failure_led: SimLed,
    pub display: SimDisplay,
}

impl SimHandles {
    /// Script one press per character of `input`, starting at `start_ms`,
    /// one second apart, each held for `hold_ms`.
    pub fn type_sequence(&self, input: &str, start_ms: u64, hold_ms: u64) {
        for (i, symbol) in input.chars().enumerate() {
            let at = start_ms + 1_000 * i as u64;
            match symbol {
                '0' => self.button_zero.hold(at, at + hold_ms),
                '1' => self.button_one.hold(at, at + hold_ms),
                other => panic!("unexpected symbol {other:?}"),
            }
        }
    }
}

pub fn sim_board<R: RngCore>(rng: R) -> (BoardParts<SimBoard<R>>, SimHandles) {
    let clock = SimClock::default();
    let transmitter = SimTransmitter::new(&clock);
    let sim = SimHandles {
        clock: clock.clone(),
        transmitter: transmitter.clone(),
        button_zero: SimButton::new(&clock),
        button_one: SimButton::new(&clock),
        success_led: SimLed::new(&clock),
        failure_led: SimLed::new(&clock),
        display: SimDisplay::new(&clock),
    };
    let parts = BoardParts {
        matrix: MatrixDriver::from_transmitter(transmitter, SimDelay::new(&clock)),
        button_zero: sim.button_zero.clone(),
        button_one: sim.button_one.clone(),
        success_led: sim.success_led.clone(),
        failure_led: sim.failure_led.clone(),
        display: sim.display.clone(),
        rng,
        delay: SimDelay::new(&clock),
    };
    (parts, sim)
}
