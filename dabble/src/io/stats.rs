//! Played/won counters stored in `.dabble/stats.json`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    pub played: u32,
    pub won: u32,
}

impl Stats {
    /// Rounded win rate in percent; 0 when nothing was played.
    pub fn win_percent(&self) -> u32 {
        if self.played == 0 {
            return 0;
        }
        ((f64::from(self.won) / f64::from(self.played)) * 100.0).round() as u32
    }
}

/// Load stats; a missing file means nothing has been played yet.
pub fn load_stats(path: &Path) -> Result<Stats> {
    if !path.exists() {
        return Ok(Stats::default());
    }
    let contents =
        fs::read_to_string(path).with_context(|| format!("read stats {}", path.display()))?;
    let stats: Stats = serde_json::from_str(&contents)
        .with_context(|| format!("parse stats {}", path.display()))?;
    Ok(stats)
}

/// Atomically write stats to disk (temp file + rename).
pub fn write_stats(path: &Path, stats: &Stats) -> Result<()> {
    debug!(path = %path.display(), played = stats.played, won = stats.won, "writing stats");
    let mut buf = serde_json::to_string_pretty(stats)?;
    buf.push('\n');
    write_atomic(path, &buf)
}

pub fn record_played(path: &Path) -> Result<Stats> {
    update(path, |stats| stats.played += 1)
}

pub fn record_won(path: &Path) -> Result<Stats> {
    update(path, |stats| stats.won += 1)
}

pub fn reset_stats(path: &Path) -> Result<Stats> {
    let stats = Stats::default();
    write_stats(path, &stats)?;
    Ok(stats)
}

fn update(path: &Path, change: impl FnOnce(&mut Stats)) -> Result<Stats> {
    let mut stats = load_stats(path)?;
    change(&mut stats);
    write_stats(path, &stats)?;
    Ok(stats)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("stats path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp stats {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace stats {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_percent_rounds_and_handles_zero() {
        assert_eq!(Stats::default().win_percent(), 0);
        assert_eq!(Stats { played: 3, won: 2 }.win_percent(), 67);
        assert_eq!(Stats { played: 4, won: 4 }.win_percent(), 100);
    }

    #[test]
    fn record_updates_accumulate() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("state").join("stats.json");

        record_played(&path).expect("played");
        record_played(&path).expect("played");
        let stats = record_won(&path).expect("won");
        assert_eq!(stats, Stats { played: 2, won: 1 });
        assert_eq!(load_stats(&path).expect("load"), stats);

        let reset = reset_stats(&path).expect("reset");
        assert_eq!(reset, Stats::default());
        assert_eq!(load_stats(&path).expect("load"), Stats::default());
    }

    /// Guards against accidental changes to the on-disk format.
    #[test]
    fn stats_format_is_stable() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("stats.json");
        write_stats(&path, &Stats { played: 5, won: 2 }).expect("write");
        let contents = fs::read_to_string(&path).expect("read");
        assert_eq!(contents, "{\n  \"played\": 5,\n  \"won\": 2\n}\n");
    }
}
