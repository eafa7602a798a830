//! Per-tile validity derived from a board scan.
//!
//! A tile is valid iff it sits in at least one valid run and in no invalid run
//! on either axis. One bad crossing word poisons the tile even when its other
//! axis spells a word; an isolated tile is never valid.

use crate::core::board::Board;
use crate::core::scanner::BoardScan;
use crate::core::types::{Axis, CELL_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlights {
    valid: [bool; CELL_COUNT],
}

impl Highlights {
    pub fn is_valid(&self, index: usize) -> bool {
        self.valid.get(index).copied().unwrap_or(false)
    }

    pub fn valid_count(&self) -> usize {
        self.valid.iter().filter(|valid| **valid).count()
    }
}

/// Resolve the validity of every occupied cell of `board`.
pub fn resolve(board: &Board, scan: &BoardScan) -> Highlights {
    let mut valid = [false; CELL_COUNT];
    for index in board.occupied_indices() {
        valid[index] = tile_is_valid(scan, index);
    }
    Highlights { valid }
}

fn tile_is_valid(scan: &BoardScan, index: usize) -> bool {
    let poisoned = Axis::ALL
        .iter()
        .any(|axis| scan.coverage(*axis).in_invalid_run(index));
    !poisoned && scan.in_any_valid_run(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scanner::scan_board;
    use crate::core::types::MinWordLength;
    use crate::test_support::{board_from_rows, dictionary};

    fn highlights(rows: &[(usize, &str)], words: &[&str]) -> (Board, Highlights) {
        let board = board_from_rows(rows);
        let scan = scan_board(&board, &dictionary(words), MinWordLength::Two);
        let highlights = resolve(&board, &scan);
        (board, highlights)
    }

    #[test]
    fn valid_horizontal_word_lights_every_tile() {
        let (_, highlights) = highlights(&[(4, "..CAT")], &["CAT"]);
        assert!([42, 43, 44].iter().all(|index| highlights.is_valid(*index)));
        assert_eq!(highlights.valid_count(), 3);
    }

    #[test]
    fn isolated_tile_is_never_valid() {
        let (_, highlights) = highlights(&[(5, ".....A")], &["A"]);
        assert!(!highlights.is_valid(55));
        assert_eq!(highlights.valid_count(), 0);
    }

    #[test]
    fn invalid_crossing_word_poisons_tile() {
        // CAT across row 0; column 0 reads "CX" which is not a word.
        let (_, highlights) = highlights(&[(0, "CAT"), (1, "X")], &["CAT"]);
        assert!(!highlights.is_valid(0));
        assert!(!highlights.is_valid(10));
        assert!(highlights.is_valid(1));
        assert!(highlights.is_valid(2));
    }

    #[test]
    fn valid_crossing_word_keeps_tile_valid() {
        let (_, highlights) = highlights(&[(0, "CAT"), (1, "O")], &["CAT", "CO"]);
        assert!([0, 1, 2, 10].iter().all(|index| highlights.is_valid(*index)));
        assert_eq!(highlights.valid_count(), 4);
    }

    #[test]
    fn unknown_row_stays_invalid_even_when_columns_spell_words() {
        // Row 0 "ZZQX" is unknown; each column pairs with row 1 into known words.
        let (_, highlights) = highlights(
            &[(0, "ZZQX"), (1, "AAIA")],
            &["ZA", "QI", "XA", "AAIA"],
        );
        for index in 0..4 {
            assert!(!highlights.is_valid(index), "tile {} should be poisoned", index);
        }
        for index in 10..14 {
            assert!(highlights.is_valid(index), "tile {} should be valid", index);
        }
    }

    #[test]
    fn empty_cells_are_never_valid() {
        let (board, highlights) = highlights(&[(0, "AT")], &["AT"]);
        assert!(!board.is_occupied(2));
        assert!(!highlights.is_valid(2));
        assert!(!highlights.is_valid(CELL_COUNT));
    }
}
