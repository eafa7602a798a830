//! Recover the full word through a cell.

use crate::core::board::Board;
use crate::core::scanner::BoardScan;
use crate::core::types::{Axis, BOARD_SIDE, CELL_COUNT};

/// Word of the valid run containing `index`, horizontal first.
///
/// Returns `None` when the cell is in no valid run on either axis.
pub fn word_at(board: &Board, scan: &BoardScan, index: usize) -> Option<String> {
    Axis::ALL
        .into_iter()
        .find(|axis| scan.coverage(*axis).in_valid_run(index))
        .map(|axis| sequence_through(board, index, axis))
}

/// Letters of the contiguous run through `index` along `axis`.
///
/// Callers must only ask about cells known to sit in a run; an empty cell
/// yields an empty string.
pub fn sequence_through(board: &Board, index: usize, axis: Axis) -> String {
    if !board.is_occupied(index) {
        return String::new();
    }
    let mut start = index;
    while let Some(prev) = step_back(start, axis).filter(|cell| board.is_occupied(*cell)) {
        start = prev;
    }
    let mut end = index;
    while let Some(next) = step_forward(end, axis).filter(|cell| board.is_occupied(*cell)) {
        end = next;
    }

    let stride = match axis {
        Axis::Horizontal => 1,
        Axis::Vertical => BOARD_SIDE,
    };
    (start..=end)
        .step_by(stride)
        .filter_map(|cell| board.get(cell))
        .collect()
}

fn step_back(index: usize, axis: Axis) -> Option<usize> {
    match axis {
        Axis::Horizontal => (index % BOARD_SIDE > 0).then(|| index - 1),
        Axis::Vertical => index.checked_sub(BOARD_SIDE),
    }
}

fn step_forward(index: usize, axis: Axis) -> Option<usize> {
    match axis {
        Axis::Horizontal => (index % BOARD_SIDE + 1 < BOARD_SIDE).then(|| index + 1),
        Axis::Vertical => Some(index + BOARD_SIDE).filter(|next| *next < CELL_COUNT),
    }
}
