//! Word-grid dice puzzle.
//!
//! Settings and stats live in `.dabble/` under the game root; the word list
//! defaults to `words.txt` next to it.

use std::io::{BufReader, stdin, stdout};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use dabble::check::check_file;
use dabble::core::types::{MinWordLength, Rules};
use dabble::exit_codes;
use dabble::io::config::{ConfigOverrides, DabbleConfig, apply_overrides, load_config};
use dabble::io::dictionary::load_dictionary_or_empty;
use dabble::io::init::{InitOptions, init_dabble};
use dabble::io::paths::DabblePaths;
use dabble::io::stats::{load_stats, reset_stats};
use dabble::logging;
use dabble::play::{PlayOptions, run_play};

#[derive(Parser)]
#[command(name = "dabble", version, about = "Word-grid dice puzzle")]
struct Cli {
    /// Game root holding `.dabble/` and the word list.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create `.dabble/` with default config and zeroed stats.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
    /// Evaluate a board layout file; exits 0 when it is a win, 2 when not.
    Check {
        board: PathBuf,
        #[command(flatten)]
        rules: RuleArgs,
    },
    /// Play interactively on stdin/stdout.
    Play {
        /// Seed for dice rolls.
        #[arg(long)]
        seed: Option<u64>,
        /// Use these tray letters instead of rolling.
        #[arg(long)]
        letters: Option<String>,
        #[command(flatten)]
        rules: RuleArgs,
    },
    /// Show played/won counts.
    Stats {
        /// Zero the counters.
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Args, Debug, Default)]
struct RuleArgs {
    /// Shortest run judged as a word (2 or 3).
    #[arg(long, value_parser = parse_min_word_length)]
    min_word_length: Option<MinWordLength>,
    /// Tiles on the board required for a win.
    #[arg(long, conflicts_with = "demo")]
    win_tiles: Option<usize>,
    /// Three-tile demo round.
    #[arg(long)]
    demo: bool,
    /// Word list path.
    #[arg(long)]
    dictionary: Option<PathBuf>,
}

impl RuleArgs {
    fn overrides(&self) -> ConfigOverrides {
        let win_tile_count = if self.demo {
            Some(Rules::DEMO_WIN_TILES)
        } else {
            self.win_tiles
        };
        ConfigOverrides {
            min_word_length: self.min_word_length,
            win_tile_count,
            dictionary_path: self.dictionary.clone(),
        }
    }
}

fn parse_min_word_length(raw: &str) -> Result<MinWordLength, String> {
    let value: u8 = raw
        .parse()
        .map_err(|_| format!("expected 2 or 3, got '{}'", raw))?;
    MinWordLength::try_from(value)
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let paths = DabblePaths::new(&cli.root);
    match cli.command {
        Command::Init { force } => cmd_init(&cli.root, force),
        Command::Check { board, rules } => cmd_check(&paths, &board, &rules),
        Command::Play {
            seed,
            letters,
            rules,
        } => cmd_play(paths, seed, letters, &rules),
        Command::Stats { reset } => cmd_stats(&paths, reset),
    }
}

fn load_effective_config(paths: &DabblePaths, rules: &RuleArgs) -> Result<DabbleConfig> {
    let cfg = load_config(&paths.config_path)?;
    let cfg = apply_overrides(cfg, &rules.overrides())?;
    debug!(?cfg, "effective config");
    Ok(cfg)
}

fn cmd_init(root: &Path, force: bool) -> Result<i32> {
    let paths = init_dabble(root, &InitOptions { force })?;
    println!("init: created {}", paths.state_dir.display());
    Ok(exit_codes::OK)
}

fn cmd_check(paths: &DabblePaths, board: &Path, rules: &RuleArgs) -> Result<i32> {
    let cfg = load_effective_config(paths, rules)?;
    let words = load_dictionary_or_empty(&cfg.dictionary_path_in(&paths.root));
    let report = check_file(board, &words, &cfg.rules())?;
    print!("{}", report.render());
    if report.is_won() {
        Ok(exit_codes::OK)
    } else {
        Ok(exit_codes::NOT_WON)
    }
}

fn cmd_play(
    paths: DabblePaths,
    seed: Option<u64>,
    letters: Option<String>,
    rules: &RuleArgs,
) -> Result<i32> {
    let cfg = load_effective_config(&paths, rules)?;
    let words = load_dictionary_or_empty(&cfg.dictionary_path_in(&paths.root));
    let options = PlayOptions {
        seed,
        letters,
        paths,
    };
    let summary = run_play(
        words,
        cfg.rules(),
        &options,
        BufReader::new(stdin()),
        stdout(),
    )?;
    println!("bye: rounds={} wins={}", summary.rounds, summary.wins);
    Ok(exit_codes::OK)
}

fn cmd_stats(paths: &DabblePaths, reset: bool) -> Result<i32> {
    let stats = if reset {
        reset_stats(&paths.stats_path)?
    } else {
        load_stats(&paths.stats_path)?
    };
    println!(
        "played={} won={} win%={}",
        stats.played,
        stats.won,
        stats.win_percent()
    );
    Ok(exit_codes::OK)
}
