//! Initialization helpers for `.dabble/` scaffolding.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use super::config::{DabbleConfig, write_config};
use super::paths::DabblePaths;
use super::stats::{Stats, write_stats};

/// Options for `init_dabble`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite existing config and stats.
    pub force: bool,
}

/// Create `.dabble/` with default config and zeroed stats in `root`.
///
/// Fails if `.dabble/` already exists unless `options.force` is set.
pub fn init_dabble(root: &Path, options: &InitOptions) -> Result<DabblePaths> {
    let paths = DabblePaths::new(root);
    if paths.state_dir.exists() && !paths.state_dir.is_dir() {
        return Err(anyhow!("dabble init: .dabble exists but is not a directory"));
    }
    if paths.state_dir.exists() && !options.force {
        return Err(anyhow!(
            "dabble init: .dabble already exists (use --force to overwrite)"
        ));
    }

    fs::create_dir_all(&paths.state_dir)
        .with_context(|| format!("create directory {}", paths.state_dir.display()))?;
    write_config(&paths.config_path, &DabbleConfig::default())?;
    write_stats(&paths.stats_path, &Stats::default())?;

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::config::load_config;
    use crate::io::stats::{load_stats, record_played};

    #[test]
    fn init_creates_expected_layout() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = init_dabble(temp.path(), &InitOptions { force: false }).expect("init");

        assert!(paths.state_dir.is_dir());
        assert!(paths.config_path.is_file());
        assert!(paths.stats_path.is_file());
        assert_eq!(
            load_config(&paths.config_path).expect("config"),
            DabbleConfig::default()
        );
        assert_eq!(load_stats(&paths.stats_path).expect("stats"), Stats::default());
    }

    #[test]
    fn init_without_force_refuses_existing_state_dir() {
        let temp = tempfile::tempdir().expect("tempdir");
        init_dabble(temp.path(), &InitOptions { force: false }).expect("init");
        let err = init_dabble(temp.path(), &InitOptions { force: false }).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn init_with_force_resets_stats() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = init_dabble(temp.path(), &InitOptions { force: false }).expect("init");
        record_played(&paths.stats_path).expect("played");

        init_dabble(temp.path(), &InitOptions { force: true }).expect("re-init");
        assert_eq!(load_stats(&paths.stats_path).expect("stats"), Stats::default());
    }
}
