//! Memory game engine - round state machine
//!
//! One round:
//! - blanks the matrix and generates a fresh sequence
//! - shows the sequence, then the input prompt
//! - captures one symbol per debounced press, with per-symbol feedback
//! - compares the typed sequence and shows the result on the matrix
//!
//! Everything blocks on the board delay; there is no timeout on player input.

use embedded_hal::delay::DelayNs;
use log::{debug, info};

use crate::{
    board::{Board, BoardParts},
    color::Rgb,
    config::GameConfig,
    display::{self, TextDisplay},
    input::{DebouncedButton, FeedbackLeds},
    matrix::MatrixDriver,
    pattern::Pattern,
    sequence::{Sequence, Symbol, UserSequence},
};

/// Round state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the next round
    Idle,
    /// Sequence is on screen
    Displaying,
    /// Waiting for the symbol at the given position
    Capturing(usize),
    /// Comparing both sequences
    Scoring,
    /// Result is on the matrix
    ResultShown,
}

/// Result of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Win,
    Lose,
}

impl RoundOutcome {
    pub const fn pattern(self) -> Pattern {
        match self {
            RoundOutcome::Win => Pattern::Win,
            RoundOutcome::Lose => Pattern::Lose,
        }
    }

    pub const fn color(self, config: &GameConfig) -> Rgb {
        match self {
            RoundOutcome::Win => config.success_color,
            RoundOutcome::Lose => config.failure_color,
        }
    }

    const fn message(self) -> [&'static str; 3] {
        match self {
            RoundOutcome::Win => display::SUCCESS,
            RoundOutcome::Lose => display::FAILURE,
        }
    }
}

/// Binary memory game
///
/// Owns every peripheral of the board for the lifetime of the program.
pub struct MemoryGame<B: Board> {
    matrix: MatrixDriver<B::Transmitter, B::Delay>,
    button_zero: DebouncedButton<B::Button>,
    button_one: DebouncedButton<B::Button>,
    feedback: FeedbackLeds<B::Led>,
    display: B::Display,
    rng: B::Rng,
    delay: B::Delay,
    config: GameConfig,
    state: RoundState,
    sequence: Sequence,
    input: UserSequence,
}

impl<B: Board> MemoryGame<B> {
    pub fn new(parts: BoardParts<B>, config: GameConfig) -> Self {
        Self {
            matrix: parts.matrix,
            button_zero: DebouncedButton::new(
                parts.button_zero,
                config.settle_ms,
                config.poll_interval_ms,
            ),
            button_one: DebouncedButton::new(
                parts.button_one,
                config.settle_ms,
                config.poll_interval_ms,
            ),
            feedback: FeedbackLeds::new(parts.success_led, parts.failure_led),
            display: parts.display,
            rng: parts.rng,
            delay: parts.delay,
            config,
            state: RoundState::Idle,
            sequence: Sequence::default(),
            input: UserSequence::new(),
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Sequence of the current (or last) round
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Symbols typed in the current (or last) round
    pub fn user_sequence(&self) -> &UserSequence {
        &self.input
    }

    pub fn matrix(&self) -> &MatrixDriver<B::Transmitter, B::Delay> {
        &self.matrix
    }

    /// Show the startup banner
    pub fn show_welcome(&mut self) {
        self.display.show(display::WELCOME);
        self.delay.delay_ms(self.config.welcome_ms);
    }

    /// Play rounds forever, pausing between them
    pub fn run(&mut self) -> ! {
        loop {
            self.play_round();
            self.delay.delay_ms(self.config.round_pause_ms);
        }
    }

    /// Play one full round and return its outcome
    pub fn play_round(&mut self) -> RoundOutcome {
        self.set_state(RoundState::Idle);
        Pattern::Blank.render(&mut self.matrix, Rgb::default());

        self.present_sequence();
        self.capture();
        let outcome = self.score();
        self.show_result(outcome);
        outcome
    }

    fn present_sequence(&mut self) {
        self.sequence = Sequence::generate(&mut self.rng);
        self.input.clear();
        self.set_state(RoundState::Displaying);
        info!("New sequence: {}", self.sequence);

        let text = self.sequence.to_text();
        self.display
            .show([display::MEMORIZE_TITLE, text.as_str(), display::MEMORIZE_HINT]);
        self.delay.delay_ms(self.config.memorize_ms);
        self.display.show(display::PROMPT);
    }

    fn capture(&mut self) {
        while !self.input.is_complete() {
            self.set_state(RoundState::Capturing(self.input.len()));

            if self.button_zero.is_pressed(&mut self.delay) {
                self.accept(Symbol::Zero);
                self.button_zero.wait_release(&mut self.delay);
            }
            // Both buttons may be scanned in one pass, the zero button wins.
            if !self.input.is_complete() && self.button_one.is_pressed(&mut self.delay) {
                self.accept(Symbol::One);
                self.button_one.wait_release(&mut self.delay);
            }

            self.delay.delay_ms(self.config.poll_interval_ms);
        }
        info!("Typed sequence: {}", self.input);
    }

    fn accept(&mut self, symbol: Symbol) {
        let index = self.input.len();
        if self.input.push(symbol).is_err() {
            return;
        }

        let typed = self.input.to_text();
        self.display
            .show([display::PROMPT[0], display::PROMPT[1], typed.as_str()]);
        debug!("Typed so far: {}", typed);

        self.feedback.show(self.sequence.get(index) == Some(symbol));
        self.delay.delay_ms(self.config.feedback_ms);
        self.feedback.off();
    }

    fn score(&mut self) -> RoundOutcome {
        self.set_state(RoundState::Scoring);
        if self.sequence.matches(&self.input) {
            RoundOutcome::Win
        } else {
            RoundOutcome::Lose
        }
    }

    fn show_result(&mut self, outcome: RoundOutcome) {
        info!("Round finished: {:?}", outcome);
        self.display.show(outcome.message());
        outcome
            .pattern()
            .render(&mut self.matrix, outcome.color(&self.config));
        self.set_state(RoundState::ResultShown);

        self.delay.delay_ms(self.config.result_ms);
        Pattern::Blank.render(&mut self.matrix, Rgb::default());
        self.display.show(display::EMPTY);
    }

    fn set_state(&mut self, state: RoundState) {
        if self.state != state {
            debug!("Round state: {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }
}
