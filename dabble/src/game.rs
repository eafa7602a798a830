//! Orchestration for one round of play.
//!
//! A [`Game`] owns the board, the tray of unplaced dice, and the session
//! memory. Every mutation runs one full synchronous evaluation pass and hands
//! any new events to a [`Notifier`] before returning.

use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use tracing::{debug, info, warn};

use crate::core::board::Board;
use crate::core::dice::Die;
use crate::core::dictionary::WordList;
use crate::core::evaluator::{Evaluation, GameEvent, Session, evaluate};
use crate::core::types::{CELL_COUNT, MinWordLength, Rules};
use crate::core::word::word_at;

/// Receiver of word-discovery and win notifications.
pub trait Notifier {
    fn word_discovered(&mut self, word: &str) -> Result<()>;
    fn game_won(&mut self, elapsed: Duration) -> Result<()>;
}

/// Elapsed play time for the current round; frozen on win.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    started_at: Instant,
    stopped: Option<Duration>,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
            stopped: None,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.stopped.unwrap_or_else(|| self.started_at.elapsed())
    }

    /// Freeze the clock; later calls keep the first stop time.
    pub fn stop(&mut self) -> Duration {
        *self.stopped.get_or_insert_with(|| self.started_at.elapsed())
    }
}

/// `MM:SS`, minutes not capped at 59.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Fail when `dice` holds fewer dice than a win needs on the board.
pub fn ensure_winnable(dice: &[Die], rules: &Rules) -> Result<()> {
    if dice.len() < rules.win_tile_count {
        bail!(
            "tray has {} dice but a win needs {} tiles on the board",
            dice.len(),
            rules.win_tile_count
        );
    }
    Ok(())
}

pub struct Game<W: WordList> {
    words: W,
    rules: Rules,
    board: Board,
    tray: Vec<Die>,
    placed: [Option<Die>; CELL_COUNT],
    session: Session,
    clock: Clock,
    evaluation: Evaluation,
}

impl<W: WordList> Game<W> {
    /// Start a round with every die in the tray and an empty board.
    pub fn new(words: W, rules: Rules, dice: Vec<Die>) -> Self {
        let board = Board::new();
        let evaluation = evaluate(&board, &words, &rules, None);
        Self {
            words,
            rules,
            board,
            tray: dice,
            placed: [None; CELL_COUNT],
            session: Session::new(),
            clock: Clock::start(),
            evaluation,
        }
    }

    /// Replace the dice and reset board, session, and clock.
    pub fn new_round(&mut self, dice: Vec<Die>) {
        info!(dice = dice.len(), "starting new round");
        self.board.clear();
        self.tray = dice;
        self.placed = [None; CELL_COUNT];
        self.session = Session::new();
        self.clock = Clock::start();
        self.evaluation = evaluate(&self.board, &self.words, &self.rules, None);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Dice not on the board, in tray order.
    pub fn tray(&self) -> &[Die] {
        &self.tray
    }

    /// Die occupying `index`, if any.
    pub fn die_at(&self, index: usize) -> Option<Die> {
        self.placed.get(index).copied().flatten()
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Result of the most recent evaluation pass.
    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    pub fn is_won(&self) -> bool {
        self.session.has_won()
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    /// Word through `index` if the cell is in a valid run (horizontal first).
    pub fn word_at(&self, index: usize) -> Option<String> {
        word_at(&self.board, &self.evaluation.scan, index)
    }

    /// Drop the tray die `die_id` onto `target`.
    ///
    /// An occupied target redirects to the nearest empty cell. Returns the
    /// landing cell, or `None` when the board is full and the die stays in
    /// the tray.
    pub fn drop_die<N: Notifier>(
        &mut self,
        die_id: usize,
        target: usize,
        notifier: &mut N,
    ) -> Result<Option<usize>> {
        self.ensure_playable()?;
        if target >= CELL_COUNT {
            bail!("cell {} is outside the board", target);
        }
        let Some(slot) = self.tray.iter().position(|die| die.id == die_id) else {
            bail!("die {} is not in the tray", die_id);
        };

        let landing = if self.board.is_occupied(target) {
            self.board.nearest_empty(target)
        } else {
            Some(target)
        };
        let Some(index) = landing else {
            debug!(die_id, target, "board full, die stays in tray");
            self.refresh(None, notifier)?;
            return Ok(None);
        };

        let die = self.tray[slot];
        self.board.place(index, die.letter)?;
        self.tray.remove(slot);
        self.placed[index] = Some(die);
        debug!(die_id, target, index, letter = %die.letter, "die placed");
        self.refresh(Some(index), notifier)?;
        Ok(Some(index))
    }

    /// Lift the die at `index` back into the tray.
    pub fn pick_up<N: Notifier>(&mut self, index: usize, notifier: &mut N) -> Result<Die> {
        self.ensure_playable()?;
        let Some(die) = self.die_at(index) else {
            bail!("no die at cell {}", index);
        };
        self.board.remove(index)?;
        self.placed[index] = None;
        self.tray.push(die);
        debug!(index, die_id = die.id, "die picked up");
        self.refresh(None, notifier)?;
        Ok(die)
    }

    /// Return every placed die to the tray, keeping the rolled letters.
    pub fn clear_board<N: Notifier>(&mut self, notifier: &mut N) -> Result<usize> {
        self.ensure_playable()?;
        let returned: Vec<Die> = self.placed.iter_mut().filter_map(Option::take).collect();
        let count = returned.len();
        self.tray.extend(returned);
        self.board.clear();
        info!(returned = count, "board cleared");
        self.refresh(None, notifier)?;
        Ok(count)
    }

    /// Change the minimum word length and rescan immediately.
    pub fn set_min_word_length<N: Notifier>(
        &mut self,
        min_word_length: MinWordLength,
        notifier: &mut N,
    ) -> Result<()> {
        info!(%min_word_length, "minimum word length changed");
        self.rules.min_word_length = min_word_length;
        self.refresh(None, notifier)
    }

    fn ensure_playable(&self) -> Result<()> {
        if self.session.has_won() {
            bail!("round already won; start a new round");
        }
        Ok(())
    }

    fn refresh<N: Notifier>(&mut self, changed: Option<usize>, notifier: &mut N) -> Result<()> {
        self.evaluation = evaluate(&self.board, &self.words, &self.rules, changed);
        debug!(
            occupied = self.evaluation.occupied,
            valid = self.evaluation.valid_count(),
            connected = self.evaluation.connected,
            "board evaluated"
        );

        let events = self.session.observe(&self.evaluation);
        if events.contains(&GameEvent::GameWon) {
            let elapsed = self.clock.stop();
            info!(elapsed = %format_elapsed(elapsed), "round won");
        }

        // Deliver every event; report the first failure.
        let mut first_error = None;
        for event in events {
            let delivered = match event {
                GameEvent::WordDiscovered(word) => {
                    info!(%word, "word discovered");
                    notifier.word_discovered(&word)
                }
                GameEvent::GameWon => notifier.game_won(self.clock.elapsed()),
            };
            if let Err(err) = delivered {
                let error = format!("{:#}", err);
                warn!(%error, "notification failed");
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err.context("deliver game notifications")),
            None => Ok(()),
        }
    }
}
