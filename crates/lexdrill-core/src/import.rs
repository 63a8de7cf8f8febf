//! TOML word pack parser.
//!
//! A word pack adds a batch of words to one list:
//!
//! ```toml
//! [pack]
//! list = "Animals"
//!
//! [[words]]
//! word = "cat"
//! meanings = ["feline", "kitty"]
//! ```

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::ValidationError;
use crate::quiz::MIN_DISTINCT_MEANINGS;
use crate::store::WordStore;

#[derive(Debug, Deserialize)]
struct TomlPackFile {
    pack: TomlPackHeader,
    #[serde(default)]
    words: Vec<TomlWord>,
}

#[derive(Debug, Deserialize)]
struct TomlPackHeader {
    list: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlWord {
    word: String,
    #[serde(default)]
    meanings: Vec<String>,
}

/// A parsed word pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPack {
    /// Display name; the list name when the file gives none.
    pub name: String,
    pub description: String,
    /// List every word is added to.
    pub list: String,
    pub words: Vec<PackWord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackWord {
    pub word: String,
    pub meanings: Vec<String>,
}

/// Parse a word pack file.
pub fn parse_word_pack(path: &Path) -> Result<WordPack> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read word pack: {}", path.display()))?;

    parse_word_pack_str(&content, path)
}

/// Parse word pack TOML. `source_path` is only used in error messages.
pub fn parse_word_pack_str(content: &str, source_path: &Path) -> Result<WordPack> {
    let parsed: TomlPackFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let TomlPackHeader {
        list,
        name,
        description,
    } = parsed.pack;

    let words = parsed
        .words
        .into_iter()
        .map(|w| PackWord {
            word: w.word,
            meanings: w.meanings,
        })
        .collect();

    Ok(WordPack {
        name: name.unwrap_or_else(|| list.clone()),
        description,
        list,
        words,
    })
}

/// Recursively load every `.toml` word pack under a directory.
///
/// Files that fail to parse are skipped with a warning.
pub fn load_pack_directory(dir: &Path) -> Result<Vec<WordPack>> {
    let mut packs = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            packs.extend(load_pack_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_word_pack(&path) {
                Ok(pack) => packs.push(pack),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(packs)
}

/// A problem found while validating a word pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The word concerned, if the warning is about one entry.
    pub word: Option<String>,
    pub message: String,
}

/// Check a pack for entries that would be rejected or are suspicious.
///
/// When a store is given, words it already holds are reported too.
pub fn validate_word_pack(pack: &WordPack, store: Option<&WordStore>) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if pack.list.trim().is_empty() {
        warnings.push(ValidationWarning {
            word: None,
            message: "pack has no target list".into(),
        });
    }

    if pack.words.is_empty() {
        warnings.push(ValidationWarning {
            word: None,
            message: "pack contains no words".into(),
        });
    }

    let mut seen = HashSet::new();
    for entry in &pack.words {
        let word = entry.word.trim();
        if word.is_empty() {
            warnings.push(ValidationWarning {
                word: None,
                message: "entry has an empty word".into(),
            });
            continue;
        }
        if !seen.insert(word) {
            warnings.push(ValidationWarning {
                word: Some(word.to_string()),
                message: format!("duplicate word in pack: {word}"),
            });
        }
        if entry.meanings.iter().all(|m| m.trim().is_empty()) {
            warnings.push(ValidationWarning {
                word: Some(word.to_string()),
                message: "no meanings given".into(),
            });
        }
        if store.is_some_and(|s| s.contains(word)) {
            warnings.push(ValidationWarning {
                word: Some(word.to_string()),
                message: "already in the word list".into(),
            });
        }
    }

    let distinct: HashSet<&str> = pack
        .words
        .iter()
        .flat_map(|w| w.meanings.iter())
        .map(|m| m.trim())
        .filter(|m| !m.is_empty())
        .collect();
    if !pack.words.is_empty() && distinct.len() < MIN_DISTINCT_MEANINGS {
        warnings.push(ValidationWarning {
            word: None,
            message: format!(
                "only {} distinct meanings; a list needs {MIN_DISTINCT_MEANINGS} to be quizzed",
                distinct.len()
            ),
        });
    }

    warnings
}

/// Result of applying a word pack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: Vec<String>,
    pub rejected: Vec<(String, ValidationError)>,
}

/// Add every acceptable entry of `pack` to the store.
///
/// Entries rejected by `WordStore::add_word` are skipped and reported; the
/// rest of the pack still goes in.
pub fn apply_word_pack(store: &mut WordStore, pack: &WordPack) -> ImportSummary {
    let mut summary = ImportSummary::default();
    for entry in &pack.words {
        let word = entry.word.trim();
        match store.add_word(word, &entry.meanings, &pack.list) {
            Ok(()) => summary.added.push(word.to_string()),
            Err(e) => {
                tracing::warn!(word, error = %e, "skipping pack entry");
                summary.rejected.push((word.to_string(), e));
            }
        }
    }
    tracing::info!(
        pack = %pack.name,
        list = %pack.list,
        added = summary.added.len(),
        rejected = summary.rejected.len(),
        "applied word pack"
    );
    summary
}
