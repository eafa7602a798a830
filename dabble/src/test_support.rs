//! Test-only helpers for constructing boards, word lists, and notifiers.

use std::time::Duration;

use anyhow::Result;

use crate::core::board::Board;
use crate::core::dictionary::Dictionary;
use crate::core::types::BOARD_SIDE;
use crate::game::Notifier;

/// Build a board from `(row, text)` pairs. Text starts at column 0 and uses
/// `.` for empty cells.
pub fn board_from_rows(rows: &[(usize, &str)]) -> Board {
    let mut board = Board::new();
    for (row, text) in rows {
        for (col, ch) in text.chars().enumerate() {
            if ch == '.' {
                continue;
            }
            board
                .place(row * BOARD_SIDE + col, ch)
                .expect("fixture cell must be a free, on-board letter");
        }
    }
    board
}

/// Dictionary containing exactly `words`.
pub fn dictionary(words: &[&str]) -> Dictionary {
    words.iter().copied().collect()
}

/// Notification captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    Word(String),
    Won,
}

/// Notifier that records every event in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub events: Vec<Recorded>,
    pub elapsed: Vec<Duration>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn words(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Recorded::Word(word) => Some(word.as_str()),
                Recorded::Won => None,
            })
            .collect()
    }

    pub fn wins(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, Recorded::Won))
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn word_discovered(&mut self, word: &str) -> Result<()> {
        self.events.push(Recorded::Word(word.to_string()));
        Ok(())
    }

    fn game_won(&mut self, elapsed: Duration) -> Result<()> {
        self.events.push(Recorded::Won);
        self.elapsed.push(elapsed);
        Ok(())
    }
}
