//! Line-oriented play session for `dabble play`.
//!
//! Reads one command per line, applies it to a [`Game`], and writes the board,
//! tray, and notifications to the output. Command errors are reported inline
//! and do not end the session.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::check::render_highlights;
use crate::core::board::Board;
use crate::core::dice::{Die, dice_from_letters, roll_dice};
use crate::core::dictionary::WordList;
use crate::core::types::{MinWordLength, Rules};
use crate::game::{Game, Notifier, ensure_winnable, format_elapsed};
use crate::io::config::persist_min_word_length;
use crate::io::paths::DabblePaths;
use crate::io::stats::{load_stats, record_played, record_won};

const HELP: &str = "\
commands:
  tray                      list dice not on the board
  place <slot> <row> <col>  drop a tray die (slot from `tray`) onto the board
  remove <row> <col>        return a placed die to the tray
  clear                     return every placed die to the tray
  min <2|3>                 set the minimum word length
  word <row> <col>          show the word through a valid tile
  show                      print the board
  new                       roll a new round
  stats                     show games played and won
  quit                      leave
";

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    Tray,
    Place { slot: usize, row: usize, col: usize },
    Remove { row: usize, col: usize },
    Clear,
    Min(MinWordLength),
    Word { row: usize, col: usize },
    Show,
    New,
    Stats,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<PlayCommand>> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = parts.collect();

    let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("tray", []) => PlayCommand::Tray,
        ("place", [slot, row, col]) => PlayCommand::Place {
            slot: parse_number(slot, "slot")?,
            row: parse_number(row, "row")?,
            col: parse_number(col, "col")?,
        },
        ("remove", [row, col]) => PlayCommand::Remove {
            row: parse_number(row, "row")?,
            col: parse_number(col, "col")?,
        },
        ("clear", []) => PlayCommand::Clear,
        ("min", [value]) => {
            let value: u8 = value
                .parse()
                .with_context(|| format!("invalid min word length '{}'", value))?;
            PlayCommand::Min(MinWordLength::try_from(value).map_err(|err| anyhow!(err))?)
        }
        ("word", [row, col]) => PlayCommand::Word {
            row: parse_number(row, "row")?,
            col: parse_number(col, "col")?,
        },
        ("show", []) => PlayCommand::Show,
        ("new", []) => PlayCommand::New,
        ("stats", []) => PlayCommand::Stats,
        ("help" | "?", []) => PlayCommand::Help,
        ("quit" | "exit", []) => PlayCommand::Quit,
        (other, _) => bail!("unknown command or wrong arguments: '{}' (try `help`)", other),
    };
    Ok(Some(command))
}

fn parse_number(raw: &str, what: &str) -> Result<usize> {
    raw.parse()
        .with_context(|| format!("invalid {} '{}'", what, raw))
}

fn cell(row: usize, col: usize) -> Result<usize> {
    Board::index_of(row, col).ok_or_else(|| anyhow!("({}, {}) is off the board", row, col))
}

/// Options for [`run_play`].
#[derive(Debug, Clone)]
pub struct PlayOptions {
    /// Seed for dice rolls; random when unset.
    pub seed: Option<u64>,
    /// Fixed tray letters instead of rolled dice.
    pub letters: Option<String>,
    pub paths: DabblePaths,
}

/// Counts reported when the session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaySummary {
    pub rounds: u32,
    pub wins: u32,
}

/// Notifier that queues messages for the console and records wins.
struct ConsoleNotifier {
    stats_path: PathBuf,
    messages: Vec<String>,
    wins: u32,
}

impl Notifier for ConsoleNotifier {
    fn word_discovered(&mut self, word: &str) -> Result<()> {
        self.messages.push(format!("word found: {}", word));
        Ok(())
    }

    fn game_won(&mut self, elapsed: Duration) -> Result<()> {
        self.wins += 1;
        self.messages
            .push(format!("solved! time {}", format_elapsed(elapsed)));
        record_won(&self.stats_path).context("record win")?;
        Ok(())
    }
}

enum Flow {
    Continue,
    Quit,
}

struct PlaySession<'a, W: WordList, O: Write> {
    game: Game<W>,
    notifier: ConsoleNotifier,
    rng: StdRng,
    options: &'a PlayOptions,
    output: O,
    rounds: u32,
}

fn deal(rng: &mut StdRng, options: &PlayOptions, rules: &Rules) -> Result<Vec<Die>> {
    let dice = match &options.letters {
        Some(letters) => dice_from_letters(letters),
        None => roll_dice(rng),
    };
    ensure_winnable(&dice, rules)?;
    Ok(dice)
}

impl<W: WordList, O: Write> PlaySession<'_, W, O> {
    fn execute(&mut self, command: PlayCommand) -> Result<Flow> {
        let notifier = &mut self.notifier;
        match command {
            PlayCommand::Tray => self.write_tray()?,
            PlayCommand::Place { slot, row, col } => {
                let target = cell(row, col)?;
                let die = slot
                    .checked_sub(1)
                    .and_then(|slot| self.game.tray().get(slot).copied())
                    .ok_or_else(|| anyhow!("no die in tray slot {}", slot))?;
                match self.game.drop_die(die.id, target, notifier)? {
                    Some(index) => writeln!(
                        self.output,
                        "placed {} at {} {}",
                        die.letter,
                        Board::row_of(index),
                        Board::col_of(index)
                    )?,
                    None => writeln!(self.output, "board full; {} stays in the tray", die.letter)?,
                }
                self.write_board()?;
            }
            PlayCommand::Remove { row, col } => {
                let die = self.game.pick_up(cell(row, col)?, notifier)?;
                writeln!(self.output, "returned {} to the tray", die.letter)?;
                self.write_board()?;
            }
            PlayCommand::Clear => {
                let count = self.game.clear_board(notifier)?;
                writeln!(self.output, "returned {} dice to the tray", count)?;
                self.write_board()?;
            }
            PlayCommand::Min(min_word_length) => {
                self.game.set_min_word_length(min_word_length, notifier)?;
                persist_min_word_length(&self.options.paths.config_path, min_word_length)?;
                writeln!(self.output, "minimum word length is now {}", min_word_length)?;
                self.write_board()?;
            }
            PlayCommand::Word { row, col } => match self.game.word_at(cell(row, col)?) {
                Some(word) => writeln!(self.output, "word: {}", word)?,
                None => writeln!(self.output, "no valid word at {} {}", row, col)?,
            },
            PlayCommand::Show => self.write_board()?,
            PlayCommand::New => self.new_round()?,
            PlayCommand::Stats => {
                let stats = load_stats(&self.options.paths.stats_path)?;
                writeln!(
                    self.output,
                    "played={} won={} win%={}",
                    stats.played,
                    stats.won,
                    stats.win_percent()
                )?;
            }
            PlayCommand::Help => write!(self.output, "{}", HELP)?,
            PlayCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn new_round(&mut self) -> Result<()> {
        let dice = deal(&mut self.rng, self.options, self.game.rules())?;
        self.game.new_round(dice);
        record_played(&self.options.paths.stats_path)?;
        self.rounds += 1;
        writeln!(self.output, "round {}", self.rounds)?;
        self.write_tray()?;
        self.write_board()
    }

    fn write_tray(&mut self) -> Result<()> {
        let slots: Vec<String> = self
            .game
            .tray()
            .iter()
            .enumerate()
            .map(|(slot, die)| format!("{}:{}", slot + 1, die.letter))
            .collect();
        writeln!(self.output, "tray: {}", slots.join(" "))?;
        Ok(())
    }

    fn write_board(&mut self) -> Result<()> {
        let evaluation = self.game.evaluation();
        write!(
            self.output,
            "{}",
            render_highlights(self.game.board(), &evaluation.highlights)
        )?;
        writeln!(
            self.output,
            "tiles={}/{} valid={} connected={} time={}",
            evaluation.occupied,
            self.game.rules().win_tile_count,
            evaluation.valid_count(),
            evaluation.connected,
            format_elapsed(self.game.elapsed())
        )?;
        Ok(())
    }

    fn flush_messages(&mut self) -> Result<()> {
        for message in self.notifier.messages.drain(..) {
            writeln!(self.output, "{}", message)?;
        }
        Ok(())
    }
}

/// Run a play session until `quit` or end of input.
pub fn run_play<W: WordList, R: BufRead, O: Write>(
    words: W,
    rules: Rules,
    options: &PlayOptions,
    input: R,
    output: O,
) -> Result<PlaySummary> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let dice = deal(&mut rng, options, &rules)?;
    let mut session = PlaySession {
        game: Game::new(words, rules, dice),
        notifier: ConsoleNotifier {
            stats_path: options.paths.stats_path.clone(),
            messages: Vec::new(),
            wins: 0,
        },
        rng,
        options,
        output,
        rounds: 1,
    };
    record_played(&options.paths.stats_path)?;
    session.write_tray()?;
    session.write_board()?;

    for line in input.lines() {
        let line = line.context("read command")?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(session.output, "error: {:#}", err)?;
                continue;
            }
        };
        debug!(?command, "play command");
        let flow = session.execute(command);
        session.flush_messages()?;
        match flow {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(err) => writeln!(session.output, "error: {:#}", err)?,
        }
    }
    session.output.flush().context("flush output")?;

    Ok(PlaySummary {
        rounds: session.rounds,
        wins: session.notifier.wins,
    })
}
