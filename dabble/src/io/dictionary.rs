//! Word list loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::core::dictionary::Dictionary;

/// Load a newline-separated word list.
pub fn load_dictionary(path: &Path) -> Result<Dictionary> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read dictionary {}", path.display()))?;
    let dictionary = Dictionary::from_text(&contents);
    info!(path = %path.display(), words = dictionary.len(), "dictionary loaded");
    Ok(dictionary)
}

/// Load a word list, falling back to an empty one when it cannot be read.
///
/// Against an empty dictionary nothing is ever valid; play can continue.
pub fn load_dictionary_or_empty(path: &Path) -> Dictionary {
    match load_dictionary(path) {
        Ok(dictionary) => dictionary,
        Err(err) => {
            let error = format!("{:#}", err);
            warn!(%error, "could not load dictionary; no word will validate");
            Dictionary::new()
        }
    }
}
