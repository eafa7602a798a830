//! Game configuration stored under `.dabble/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::dice::DICE_FACES;
use crate::core::scanner::MIN_RUN_LENGTH;
use crate::core::types::{MinWordLength, Rules};

/// Game configuration (TOML).
///
/// Intended to be edited by humans. Missing fields fall back to the full
/// twelve-dice game with two-letter words allowed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DabbleConfig {
    /// Shortest run judged as a word (2 or 3).
    pub min_word_length: MinWordLength,

    /// Tiles that must be on the board for a win (12 full game, 3 demo).
    pub win_tile_count: usize,

    /// Newline-separated word list, relative to the game root unless absolute.
    pub dictionary_path: PathBuf,
}

impl Default for DabbleConfig {
    fn default() -> Self {
        Self {
            min_word_length: MinWordLength::default(),
            win_tile_count: Rules::FULL_WIN_TILES,
            dictionary_path: PathBuf::from("words.txt"),
        }
    }
}

impl DabbleConfig {
    pub fn validate(&self) -> Result<()> {
        // A lone tile never forms a run, so fewer tiles can never win.
        if self.win_tile_count < MIN_RUN_LENGTH {
            return Err(anyhow!(
                "win_tile_count must be at least {}, got {}",
                MIN_RUN_LENGTH,
                self.win_tile_count
            ));
        }
        if self.win_tile_count > DICE_FACES.len() {
            return Err(anyhow!(
                "win_tile_count {} exceeds the {} dice in play",
                self.win_tile_count,
                DICE_FACES.len()
            ));
        }
        if self.dictionary_path.as_os_str().is_empty() {
            return Err(anyhow!("dictionary_path must be non-empty"));
        }
        Ok(())
    }

    pub fn rules(&self) -> Rules {
        Rules {
            min_word_length: self.min_word_length,
            win_tile_count: self.win_tile_count,
        }
    }

    /// Dictionary location resolved against `root`.
    pub fn dictionary_path_in(&self, root: &Path) -> PathBuf {
        if self.dictionary_path.is_absolute() {
            self.dictionary_path.clone()
        } else {
            root.join(&self.dictionary_path)
        }
    }
}

/// Per-invocation overrides (CLI flags).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub min_word_length: Option<MinWordLength>,
    pub win_tile_count: Option<usize>,
    pub dictionary_path: Option<PathBuf>,
}

/// Apply overrides to the base config and re-validate.
pub fn apply_overrides(mut base: DabbleConfig, overrides: &ConfigOverrides) -> Result<DabbleConfig> {
    if let Some(min_word_length) = overrides.min_word_length {
        base.min_word_length = min_word_length;
    }
    if let Some(win_tile_count) = overrides.win_tile_count {
        base.win_tile_count = win_tile_count;
    }
    if let Some(dictionary_path) = &overrides.dictionary_path {
        base.dictionary_path = dictionary_path.clone();
    }
    base.validate()?;
    Ok(base)
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `DabbleConfig::default()`.
pub fn load_config(path: &Path) -> Result<DabbleConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = DabbleConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DabbleConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    debug!(path = %path.display(), min_word_length = %cfg.min_word_length, win_tile_count = cfg.win_tile_count, "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &DabbleConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

/// Persist a new minimum word length, leaving other settings untouched.
pub fn persist_min_word_length(path: &Path, min_word_length: MinWordLength) -> Result<()> {
    let mut cfg = load_config(path)?;
    cfg.min_word_length = min_word_length;
    write_config(path, &cfg)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
