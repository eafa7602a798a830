//! Canonical paths within `.dabble/` for a game root.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DabblePaths {
    pub root: PathBuf,
    pub state_dir: PathBuf,
    pub config_path: PathBuf,
    pub stats_path: PathBuf,
}

impl DabblePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let state_dir = root.join(".dabble");
        Self {
            root: root.clone(),
            state_dir: state_dir.clone(),
            config_path: state_dir.join("config.toml"),
            stats_path: state_dir.join("stats.json"),
        }
    }
}
