//! Result patterns shown on the matrix

use embedded_hal::delay::DelayNs;

use crate::{
    color::Rgb,
    config::MATRIX_SIZE,
    driver::LedTransmitter,
    matrix::{MatrixDriver, index_of},
};

/// Lit cells of the matrix, row by row
pub type Bitmap = [[bool; MATRIX_SIZE]; MATRIX_SIZE];

/// Build a bitmap from one 5-bit mask per row, most significant bit first
const fn bitmap(rows: [u8; MATRIX_SIZE]) -> Bitmap {
    let mut cells = [[false; MATRIX_SIZE]; MATRIX_SIZE];
    let mut row = 0;
    while row < MATRIX_SIZE {
        let mut col = 0;
        while col < MATRIX_SIZE {
            cells[row][col] = rows[row] & (1 << (MATRIX_SIZE - 1 - col)) != 0;
            col += 1;
        }
        row += 1;
    }
    cells
}

const BLANK: Bitmap = bitmap([0b00000, 0b00000, 0b00000, 0b00000, 0b00000]);

const LOSE: Bitmap = bitmap([
    0b10001, //
    0b01010, //
    0b00100, //
    0b01010, //
    0b10001, //
]);

const WIN: Bitmap = bitmap([
    0b11111, //
    0b10001, //
    0b10001, //
    0b10001, //
    0b11111, //
]);

/// Fixed 5x5 patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Everything off
    Blank,
    /// Hollow square along the border
    Win,
    /// Diagonal cross
    Lose,
}

impl Pattern {
    pub const fn bitmap(self) -> &'static Bitmap {
        match self {
            Pattern::Blank => &BLANK,
            Pattern::Win => &WIN,
            Pattern::Lose => &LOSE,
        }
    }

    /// Number of lit cells
    pub fn lit_cells(self) -> usize {
        self.bitmap()
            .iter()
            .flatten()
            .filter(|lit| **lit)
            .count()
    }

    /// Whether the cell at (row, col) is lit
    pub fn is_lit(self, row: usize, col: usize) -> bool {
        self.bitmap()[row][col]
    }

    /// Replace the whole frame with this pattern and transmit it
    pub fn render<T, D>(self, matrix: &mut MatrixDriver<T, D>, color: Rgb)
    where
        T: LedTransmitter,
        D: DelayNs,
    {
        matrix.clear();
        for (row, cells) in self.bitmap().iter().enumerate() {
            for (col, lit) in cells.iter().enumerate() {
                if *lit {
                    matrix.set(index_of(row, col), color.r, color.g, color.b);
                }
            }
        }
        matrix.commit();
    }
}
