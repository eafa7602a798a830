//! The 10×10 board store.
//!
//! Cells are indexed `0..100` row-major (`row = index / 10`, `col = index % 10`).
//! Each cell holds one uppercase letter or nothing.

use std::fmt;
use std::str::FromStr;

use crate::core::types::{BOARD_SIDE, CELL_COUNT};

/// Rejected board mutation or malformed board layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell {0} is outside the board")]
    OutOfBounds(usize),

    #[error("'{0}' is not a letter")]
    NotALetter(char),

    #[error("cell {0} is already occupied")]
    Occupied(usize),

    #[error("invalid board layout: {0}")]
    Layout(String),
}

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<char>; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Row-major board index for `(row, col)`, if both are on the board.
    pub fn index_of(row: usize, col: usize) -> Option<usize> {
        (row < BOARD_SIDE && col < BOARD_SIDE).then_some(row * BOARD_SIDE + col)
    }

    pub fn row_of(index: usize) -> usize {
        index / BOARD_SIDE
    }

    pub fn col_of(index: usize) -> usize {
        index % BOARD_SIDE
    }

    /// Letter at `index`; `None` for empty or out-of-range cells.
    pub fn get(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Put `letter` (uppercased) into an empty cell.
    pub fn place(&mut self, index: usize, letter: char) -> Result<(), BoardError> {
        if index >= CELL_COUNT {
            return Err(BoardError::OutOfBounds(index));
        }
        if !letter.is_ascii_alphabetic() {
            return Err(BoardError::NotALetter(letter));
        }
        if self.cells[index].is_some() {
            return Err(BoardError::Occupied(index));
        }
        self.cells[index] = Some(letter.to_ascii_uppercase());
        Ok(())
    }

    /// Empty the cell at `index`, returning the letter it held.
    pub fn remove(&mut self, index: usize) -> Result<Option<char>, BoardError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::OutOfBounds(index))?;
        Ok(cell.take())
    }

    pub fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Occupied indices in ascending order.
    pub fn occupied_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.map(|_| index))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Nearest empty cell to `index` by Manhattan distance (lowest index on ties).
    pub fn nearest_empty(&self, index: usize) -> Option<usize> {
        let (row, col) = (Self::row_of(index), Self::col_of(index));
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .min_by_key(|(candidate, _)| {
                Self::row_of(*candidate).abs_diff(row) + Self::col_of(*candidate).abs_diff(col)
            })
            .map(|(candidate, _)| candidate)
    }

    /// Text layout: ten lines of ten characters, `.` for empty cells.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(CELL_COUNT + BOARD_SIDE);
        for row in self.cells.chunks(BOARD_SIDE) {
            out.extend(row.iter().map(|cell| cell.unwrap_or('.')));
            out.push('\n');
        }
        out
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{})", self.render())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse a layout written by [`Board::render`]. `.` and space are empty
    /// cells; letters are uppercased. Short rows are padded with empty cells.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = text
            .trim_end_matches(['\n', '\r'])
            .lines()
            .collect();
        if lines.len() != BOARD_SIDE {
            return Err(BoardError::Layout(format!(
                "expected {} rows, found {}",
                BOARD_SIDE,
                lines.len()
            )));
        }

        let mut board = Board::new();
        for (row, line) in lines.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() > BOARD_SIDE {
                return Err(BoardError::Layout(format!(
                    "row {} has {} columns, expected {}",
                    row,
                    chars.len(),
                    BOARD_SIDE
                )));
            }
            for (col, ch) in chars.into_iter().enumerate() {
                match ch {
                    '.' | ' ' => {}
                    letter => board.place(row * BOARD_SIDE + col, letter)?,
                }
            }
        }
        Ok(board)
    }
}
