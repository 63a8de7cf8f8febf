//! The `lexdrill validate` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use lexdrill_core::import::{load_pack_directory, parse_word_pack, validate_word_pack, WordPack};

use crate::config::LexdrillConfig;
use crate::session;

pub fn execute(config: &LexdrillConfig, path: PathBuf) -> Result<()> {
    let packs = load_packs(&path)?;

    // Compare against the current words when there is a data file; nothing
    // is written back.
    let state = if config.data_file.exists() {
        Some(session::load_state(config)?)
    } else {
        None
    };

    let mut total_warnings = 0;

    for pack in &packs {
        println!(
            "Word pack: {} ({} words, list {})",
            pack.name,
            pack.words.len(),
            pack.list
        );
        if !pack.description.is_empty() {
            println!("  {}", pack.description);
        }

        let warnings = validate_word_pack(pack, state.as_ref().map(|s| &s.store));
        for w in &warnings {
            let prefix = w
                .word
                .as_ref()
                .map(|word| format!("  [{word}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All word packs valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}

/// A single pack file, or every pack under a directory.
pub fn load_packs(path: &Path) -> Result<Vec<WordPack>> {
    if path.is_dir() {
        load_pack_directory(path)
    } else {
        Ok(vec![parse_word_pack(path)?])
    }
}
