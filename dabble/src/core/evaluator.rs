//! Win and word-discovery evaluation after a board change.
//!
//! [`evaluate`] is a pure function of the board, the word list, and the rules:
//! it rescans from scratch on every call. [`Session`] holds the only memory
//! carried between calls (last announced word, whether the win already fired)
//! so that repeated refreshes never re-announce the same event.

use crate::core::board::Board;
use crate::core::connectivity::is_connected;
use crate::core::dictionary::WordList;
use crate::core::highlight::{Highlights, resolve};
use crate::core::scanner::{BoardScan, scan_board};
use crate::core::types::Rules;
use crate::core::word::word_at;

/// Snapshot of the board after one scan/resolve/connectivity pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub scan: BoardScan,
    pub highlights: Highlights,
    /// Occupied cell count.
    pub occupied: usize,
    pub connected: bool,
    /// Win condition holds for this board. Firing is tracked by [`Session`].
    pub won: bool,
    /// Word through the changed cell, if that cell sits in a valid run.
    pub word_at_change: Option<String>,
}

impl Evaluation {
    pub fn valid_count(&self) -> usize {
        self.highlights.valid_count()
    }
}

/// Evaluate `board` after the cell `changed` was mutated (`None` for a
/// global refresh such as a min-length toggle or a cleared board).
pub fn evaluate<W: WordList + ?Sized>(
    board: &Board,
    words: &W,
    rules: &Rules,
    changed: Option<usize>,
) -> Evaluation {
    let scan = scan_board(board, words, rules.min_word_length);
    let highlights = resolve(board, &scan);
    let occupied = board.occupied_count();
    let connected = is_connected(board);
    let won = occupied == rules.win_tile_count && highlights.valid_count() == occupied && connected;
    let word_at_change = changed.and_then(|index| word_at(board, &scan, index));

    Evaluation {
        scan,
        highlights,
        occupied,
        connected,
        won,
        word_at_change,
    }
}

/// Notification-worthy outcome of a refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    WordDiscovered(String),
    GameWon,
}

/// Cross-refresh memory for event de-duplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    last_word: Option<String>,
    won: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn last_word(&self) -> Option<&str> {
        self.last_word.as_deref()
    }

    /// Events newly produced by `evaluation`, word before win.
    pub fn observe(&mut self, evaluation: &Evaluation) -> Vec<GameEvent> {
        let mut events = Vec::new();

        let fresh_word = evaluation
            .word_at_change
            .as_ref()
            .filter(|word| self.last_word.as_ref() != Some(*word));
        if let Some(word) = fresh_word {
            self.last_word = Some(word.clone());
            events.push(GameEvent::WordDiscovered(word.clone()));
        }

        if evaluation.won && !self.won {
            self.won = true;
            events.push(GameEvent::GameWon);
        }

        events
    }
}
