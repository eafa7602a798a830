//! Shared deterministic types for the word-grid engine.
//!
//! These types define stable contracts between core components and the outer
//! layers (config files, CLI). They must not depend on external state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side length of the square board.
pub const BOARD_SIDE: usize = 10;
/// Number of cells on the board, indexed row-major.
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// Direction a letter run is read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// Board index of the cell at `offset` along row/column `line`.
    pub fn cell(self, line: usize, offset: usize) -> usize {
        match self {
            Axis::Horizontal => line * BOARD_SIDE + offset,
            Axis::Vertical => offset * BOARD_SIDE + line,
        }
    }

    /// The ten board indices of row/column `line`, in board order.
    pub fn line_indices(self, line: usize) -> [usize; BOARD_SIDE] {
        std::array::from_fn(|offset| self.cell(line, offset))
    }
}

/// Shortest run length that may be judged a word.
///
/// Serialized as the bare integer (`2` or `3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MinWordLength {
    #[default]
    Two,
    Three,
}

impl MinWordLength {
    pub fn get(self) -> usize {
        match self {
            MinWordLength::Two => 2,
            MinWordLength::Three => 3,
        }
    }
}

impl TryFrom<u8> for MinWordLength {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(MinWordLength::Two),
            3 => Ok(MinWordLength::Three),
            other => Err(format!("min word length must be 2 or 3, got {}", other)),
        }
    }
}

impl From<MinWordLength> for u8 {
    fn from(value: MinWordLength) -> Self {
        value.get() as u8
    }
}

impl fmt::Display for MinWordLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Win rules for the active game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub min_word_length: MinWordLength,
    /// Tiles that must be on the board for a win.
    pub win_tile_count: usize,
}

impl Rules {
    /// Full game: every one of the twelve dice must be placed.
    pub const FULL_WIN_TILES: usize = 12;
    /// Reduced demo mode.
    pub const DEMO_WIN_TILES: usize = 3;

    pub fn full(min_word_length: MinWordLength) -> Self {
        Self {
            min_word_length,
            win_tile_count: Self::FULL_WIN_TILES,
        }
    }

    pub fn demo(min_word_length: MinWordLength) -> Self {
        Self {
            min_word_length,
            win_tile_count: Self::DEMO_WIN_TILES,
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::full(MinWordLength::default())
    }
}
