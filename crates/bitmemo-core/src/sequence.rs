//! Binary sequences of a round

use core::fmt;

use heapless::{String, Vec};
use rand_core::RngCore;

use crate::config::SEQUENCE_LENGTH;

/// One binary symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Zero,
    One,
}

impl Symbol {
    /// Take the lowest bit of a random word
    pub const fn from_bit(word: u32) -> Self {
        if word & 1 == 0 { Symbol::Zero } else { Symbol::One }
    }

    pub const fn as_char(self) -> char {
        match self {
            Symbol::Zero => '0',
            Symbol::One => '1',
        }
    }

    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Symbol::Zero),
            '1' => Some(Symbol::One),
            _ => None,
        }
    }
}

/// Text form of a sequence, one character per symbol
pub type SequenceText = String<SEQUENCE_LENGTH>;

fn to_text(symbols: &[Symbol]) -> SequenceText {
    let mut text = SequenceText::new();
    for symbol in symbols {
        // Never more symbols than the text capacity.
        let _ = text.push(symbol.as_char());
    }
    text
}

/// Sequence the player has to reproduce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    symbols: [Symbol; SEQUENCE_LENGTH],
}

impl Sequence {
    /// Draw every symbol independently from `rng`
    pub fn generate<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut symbols = [Symbol::Zero; SEQUENCE_LENGTH];
        for symbol in &mut symbols {
            *symbol = Symbol::from_bit(rng.next_u32());
        }
        Self { symbols }
    }

    /// Parse a sequence of exactly [`SEQUENCE_LENGTH`] `0`/`1` characters
    pub fn parse(text: &str) -> Option<Self> {
        let mut symbols = [Symbol::Zero; SEQUENCE_LENGTH];
        let mut chars = text.chars();
        for symbol in &mut symbols {
            *symbol = Symbol::from_char(chars.next()?)?;
        }
        if chars.next().is_some() {
            return None;
        }
        Some(Self { symbols })
    }

    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.symbols.get(index).copied()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Exact match: same length, same symbols in the same order
    pub fn matches(&self, input: &UserSequence) -> bool {
        self.symbols() == input.symbols()
    }

    pub fn to_text(&self) -> SequenceText {
        to_text(&self.symbols)
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self {
            symbols: [Symbol::Zero; SEQUENCE_LENGTH],
        }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Symbols typed by the player so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSequence {
    symbols: Vec<Symbol, SEQUENCE_LENGTH>,
}

impl UserSequence {
    pub const fn new() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    /// Append a symbol, giving it back when the sequence is already full
    pub fn push(&mut self, symbol: Symbol) -> Result<(), Symbol> {
        self.symbols.push(symbol)
    }

    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.symbols.is_full()
    }

    pub fn to_text(&self) -> SequenceText {
        to_text(&self.symbols)
    }
}

impl fmt::Display for UserSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
