//! One-shot evaluation of a board layout for `dabble check`.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::board::Board;
use crate::core::dictionary::WordList;
use crate::core::evaluator::{Evaluation, evaluate};
use crate::core::highlight::Highlights;
use crate::core::types::{BOARD_SIDE, Rules};

/// Evaluated layout plus the words it spells.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub board: Board,
    pub evaluation: Evaluation,
    pub win_tile_count: usize,
}

impl CheckReport {
    pub fn is_won(&self) -> bool {
        self.evaluation.won
    }

    /// Distinct valid words in scan order (rows, then columns).
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = Vec::new();
        for run in self.evaluation.scan.valid_runs() {
            if !words.contains(&run.text.as_str()) {
                words.push(run.text.as_str());
            }
        }
        words
    }

    /// Highlighted grid followed by a one-line summary.
    pub fn render(&self) -> String {
        let mut out = render_highlights(&self.board, &self.evaluation.highlights);
        let _ = writeln!(
            out,
            "tiles={}/{} valid={} connected={} won={}",
            self.evaluation.occupied,
            self.win_tile_count,
            self.evaluation.valid_count(),
            self.evaluation.connected,
            self.evaluation.won
        );
        let words = self.words();
        if !words.is_empty() {
            let _ = writeln!(out, "words={}", words.join(","));
        }
        out
    }
}

/// Grid with valid tiles uppercase, invalid tiles lowercase, `.` for empty.
pub fn render_highlights(board: &Board, highlights: &Highlights) -> String {
    let mut out = String::new();
    out.push_str("  0123456789\n");
    for row in 0..BOARD_SIDE {
        let _ = write!(out, "{} ", row);
        for col in 0..BOARD_SIDE {
            let index = row * BOARD_SIDE + col;
            let ch = match board.get(index) {
                None => '.',
                Some(letter) if highlights.is_valid(index) => letter,
                Some(letter) => letter.to_ascii_lowercase(),
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Parse and evaluate a layout.
pub fn check_layout<W: WordList + ?Sized>(
    layout: &str,
    words: &W,
    rules: &Rules,
) -> Result<CheckReport> {
    let board: Board = layout.parse().context("parse board layout")?;
    let evaluation = evaluate(&board, words, rules, None);
    debug!(
        occupied = evaluation.occupied,
        valid = evaluation.valid_count(),
        won = evaluation.won,
        "layout checked"
    );
    Ok(CheckReport {
        board,
        evaluation,
        win_tile_count: rules.win_tile_count,
    })
}

/// Read a layout file and evaluate it.
pub fn check_file<W: WordList + ?Sized>(
    path: &Path,
    words: &W,
    rules: &Rules,
) -> Result<CheckReport> {
    let layout =
        fs::read_to_string(path).with_context(|| format!("read board {}", path.display()))?;
    check_layout(&layout, words, rules).with_context(|| format!("check {}", path.display()))
}
