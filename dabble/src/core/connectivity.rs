//! Single-component connectivity of occupied cells.

use std::collections::VecDeque;

use crate::core::board::Board;
use crate::core::types::{BOARD_SIDE, CELL_COUNT};

/// Orthogonal neighbours of `index` that lie on the board.
///
/// Horizontal steps never wrap across rows: 9 and 10 are not neighbours.
pub fn neighbors(index: usize) -> impl Iterator<Item = usize> {
    let col = index % BOARD_SIDE;
    let up = index.checked_sub(BOARD_SIDE);
    let down = Some(index + BOARD_SIDE).filter(|n| *n < CELL_COUNT);
    let left = (col > 0).then(|| index - 1);
    let right = (col + 1 < BOARD_SIDE).then(|| index + 1);
    [up, down, left, right].into_iter().flatten()
}

/// True iff every occupied cell is reachable from every other through
/// up/down/left/right steps over occupied cells.
///
/// An empty board is not connected; a single tile is.
pub fn is_connected(board: &Board) -> bool {
    let occupied = board.occupied_indices();
    let Some(&start) = occupied.first() else {
        return false;
    };
    component_size(board, start) == occupied.len()
}

/// Number of occupied cells reachable from `start` (breadth-first).
pub fn component_size(board: &Board, start: usize) -> usize {
    if !board.is_occupied(start) {
        return 0;
    }
    let mut visited = [false; CELL_COUNT];
    let mut queue = VecDeque::from([start]);
    visited[start] = true;
    let mut count = 0;

    while let Some(current) = queue.pop_front() {
        count += 1;
        for next in neighbors(current) {
            if board.is_occupied(next) && !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }
    count
}
