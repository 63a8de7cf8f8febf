//! The `lexdrill import` command.

use std::path::PathBuf;

use anyhow::Result;

use lexdrill_core::import::{apply_word_pack, validate_word_pack};

use crate::commands::validate::load_packs;
use crate::config::LexdrillConfig;
use crate::session::Session;

pub fn execute(config: &LexdrillConfig, path: PathBuf) -> Result<()> {
    let packs = load_packs(&path)?;
    if packs.is_empty() {
        anyhow::bail!("no word packs found in {}", path.display());
    }

    let mut session = Session::open(config)?;

    for pack in &packs {
        if !pack.description.is_empty() {
            println!("{}: {}", pack.name, pack.description);
        }
        let warnings = validate_word_pack(pack, Some(&session.state.store));
        for w in &warnings {
            tracing::warn!(pack = %pack.name, word = ?w.word, "{}", w.message);
        }

        let summary = apply_word_pack(&mut session.state.store, pack);
        println!(
            "{}: added {} word(s) to {}",
            pack.name,
            summary.added.len(),
            pack.list
        );
        for (word, reason) in &summary.rejected {
            println!("  skipped '{word}': {reason}");
        }
    }

    session.close()
}
