//! The persisted root object and JSON file persistence.
//!
//! Records on disk are positional arrays: a word is
//! `[meanings, correct, total, list]`, a login is `[[y, m, d, h], correct,
//! total]`. The `Persisted*` types mirror that layout exactly and are
//! converted to and from the typed model by `AppState`.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::ledger::LoginLedger;
use crate::model::{DisplayMode, LoginEntry, Timestamp, WordRecord};
use crate::profile::UserProfile;
use crate::store::WordStore;

/// Root of the data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedRoot {
    #[serde(rename = "User")]
    pub user: PersistedUser,
    #[serde(rename = "Login info", default)]
    pub login_info: PersistedLoginInfo,
    #[serde(rename = "WordList", default)]
    pub word_list: IndexMap<String, PersistedWord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedUser {
    pub name: String,
    pub goal: u32,
    #[serde(default)]
    pub list: String,
    #[serde(default)]
    pub mode: DisplayMode,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedLoginInfo {
    #[serde(rename = "last login", default)]
    pub last_login: Option<PersistedLogin>,
    #[serde(rename = "all logins", default)]
    pub all_logins: Vec<PersistedLogin>,
}

/// `[year, month, day, hour]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedTime(pub i32, pub u32, pub u32, pub u32);

/// `[time, correct answers, total answers]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedLogin(pub PersistedTime, pub u32, pub u32);

/// `[meanings, correct count, total count, list name]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedWord(pub Vec<String>, pub u32, pub u32, pub String);

impl From<PersistedLogin> for LoginEntry {
    fn from(PersistedLogin(PersistedTime(y, m, d, h), correct, total): PersistedLogin) -> Self {
        LoginEntry {
            timestamp: Timestamp::new(y, m, d, h),
            correct_answers: correct,
            total_answers: total,
        }
    }
}

impl From<&LoginEntry> for PersistedLogin {
    fn from(e: &LoginEntry) -> Self {
        let t = e.timestamp;
        PersistedLogin(
            PersistedTime(t.year, t.month, t.day, t.hour),
            e.correct_answers,
            e.total_answers,
        )
    }
}

/// Everything one session works on.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: WordStore,
    pub ledger: LoginLedger,
    pub profile: UserProfile,
}

impl AppState {
    /// A fresh state with no words and no history.
    pub fn new(profile: UserProfile) -> Self {
        Self {
            store: WordStore::new(),
            ledger: LoginLedger::new(),
            profile,
        }
    }

    /// Build the typed state from a root object.
    ///
    /// Words without meanings or with more correct than total answers are
    /// rejected. An active list that has no members is cleared.
    pub fn load_from(root: PersistedRoot) -> Result<Self> {
        let PersistedRoot {
            user,
            login_info,
            word_list,
        } = root;

        let mut words = IndexMap::with_capacity(word_list.len());
        for (word, PersistedWord(meanings, correct, total, list)) in word_list {
            anyhow::ensure!(!meanings.is_empty(), "word '{word}' has no meanings");
            anyhow::ensure!(
                correct <= total,
                "word '{word}' has {correct} correct answers out of {total}"
            );
            words.insert(
                word,
                WordRecord {
                    meanings,
                    correct_count: correct,
                    total_count: total,
                    list_name: list,
                },
            );
        }
        let store = WordStore::from_records(words);

        let ledger = LoginLedger::from_parts(
            login_info.last_login.map(LoginEntry::from),
            login_info
                .all_logins
                .into_iter()
                .map(LoginEntry::from)
                .collect(),
        );

        let mut profile =
            UserProfile::new(user.name, user.goal).context("invalid user profile")?;
        profile.display_mode = user.mode;
        profile.active_list = user.list;
        profile.reconcile_active_list(&store);

        tracing::debug!(
            words = store.len(),
            logins = ledger.entries().len(),
            "loaded state"
        );
        Ok(Self {
            store,
            ledger,
            profile,
        })
    }

    /// The root object for this state, in the same shape `load_from` reads.
    pub fn snapshot_to(&self) -> PersistedRoot {
        PersistedRoot {
            user: PersistedUser {
                name: self.profile.name.clone(),
                goal: self.profile.daily_goal,
                list: self.profile.active_list.clone(),
                mode: self.profile.display_mode,
            },
            login_info: PersistedLoginInfo {
                last_login: self.ledger.last_login().map(PersistedLogin::from),
                all_logins: self
                    .ledger
                    .entries()
                    .iter()
                    .map(PersistedLogin::from)
                    .collect(),
            },
            word_list: self
                .store
                .records()
                .iter()
                .map(|(word, r)| {
                    (
                        word.clone(),
                        PersistedWord(
                            r.meanings.clone(),
                            r.correct_count,
                            r.total_count,
                            r.list_name.clone(),
                        ),
                    )
                })
                .collect(),
        }
    }

    /// Parse a data file's contents.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let root: PersistedRoot =
            serde_json::from_str(content).context("failed to parse data file JSON")?;
        Self::load_from(root)
    }

    /// Load state from a JSON data file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read data file {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("failed to load data file {}", path.display()))
    }

    /// Save state as JSON, replacing `path` atomically.
    ///
    /// The snapshot is written to a temporary file in the same directory and
    /// renamed over the target, so readers see either the old or the new file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;

        let json =
            serde_json::to_string_pretty(&self.snapshot_to()).context("failed to serialize state")?;

        let mut tmp = NamedTempFile::new_in(parent)
            .with_context(|| format!("failed to create temp file in {}", parent.display()))?;
        tmp.write_all(json.as_bytes()).context("failed to write state")?;
        tmp.as_file().sync_all().context("failed to flush state")?;
        tmp.persist(path)
            .with_context(|| format!("failed to write data file {}", path.display()))?;

        tracing::info!(path = %path.display(), words = self.store.len(), "saved state");
        Ok(())
    }
}
