//! The word store and its list index.
//!
//! `WordStore` owns every `WordRecord`. The list index maps a list name to
//! the keys of its member words and is derived data: removing the last word
//! from a list leaves an empty entry behind until `rebuild_index` runs.
//! Callers that enumerate lists for display rebuild first.

use indexmap::{IndexMap, IndexSet};

use crate::error::ValidationError;
use crate::model::WordRecord;

/// Words keyed by their text, plus the list-name index.
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    words: IndexMap<String, WordRecord>,
    lists: IndexMap<String, IndexSet<String>>,
}

impl WordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from persisted records and derive the index.
    pub fn from_records(words: IndexMap<String, WordRecord>) -> Self {
        let mut store = Self {
            words,
            lists: IndexMap::new(),
        };
        store.rebuild_index();
        store
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<&WordRecord> {
        self.words.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// All records in insertion order.
    pub fn records(&self) -> &IndexMap<String, WordRecord> {
        &self.words
    }

    /// Insert a new word into `list_name`.
    ///
    /// Blank meanings are dropped and the rest trimmed. Nothing is mutated
    /// unless every check passes.
    pub fn add_word<I, S>(
        &mut self,
        word: &str,
        meanings: I,
        list_name: &str,
    ) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let word = word.trim();
        if word.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.words.contains_key(word) {
            return Err(ValidationError::DuplicateWord(word.to_string()));
        }
        let meanings: Vec<String> = meanings
            .into_iter()
            .map(|m| m.as_ref().trim().to_string())
            .filter(|m| !m.is_empty())
            .collect();
        if meanings.is_empty() {
            return Err(ValidationError::EmptyMeanings);
        }
        let list_name = list_name.trim();
        if list_name.is_empty() {
            return Err(ValidationError::NoListSelected);
        }

        self.words
            .insert(word.to_string(), WordRecord::new(meanings, list_name));
        self.lists
            .entry(list_name.to_string())
            .or_default()
            .insert(word.to_string());
        tracing::debug!(word, list = list_name, "added word");
        Ok(())
    }

    /// Delete a word. Its list entry stays behind if this empties it.
    pub fn remove_word(&mut self, word: &str) -> Result<WordRecord, ValidationError> {
        let record = self
            .words
            .shift_remove(word)
            .ok_or_else(|| ValidationError::NotFound(word.to_string()))?;
        if let Some(members) = self.lists.get_mut(&record.list_name) {
            members.shift_remove(word);
        }
        tracing::debug!(word, list = %record.list_name, "removed word");
        Ok(record)
    }

    /// Register an empty list.
    ///
    /// A stale empty entry under the same name is reused silently.
    pub fn create_list(&mut self, name: &str) -> Result<(), ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.member_count(name) > 0 {
            return Err(ValidationError::DuplicateList(name.to_string()));
        }
        self.lists.entry(name.to_string()).or_default();
        Ok(())
    }

    /// Delete a list and orphan its members. Returns the orphaned words.
    pub fn remove_list(&mut self, name: &str) -> Result<Vec<String>, ValidationError> {
        let members = self
            .lists
            .shift_remove(name)
            .ok_or_else(|| ValidationError::NotFound(name.to_string()))?;
        let orphaned: Vec<String> = members.into_iter().collect();
        for word in &orphaned {
            if let Some(record) = self.words.get_mut(word) {
                record.list_name.clear();
            }
        }
        tracing::debug!(list = name, orphaned = orphaned.len(), "removed list");
        Ok(orphaned)
    }

    /// Move a word, orphaned or not, into `list_name`.
    pub fn assign_to_list(&mut self, word: &str, list_name: &str) -> Result<(), ValidationError> {
        let list_name = list_name.trim();
        if list_name.is_empty() {
            return Err(ValidationError::NoListSelected);
        }
        let record = self
            .words
            .get_mut(word)
            .ok_or_else(|| ValidationError::NotFound(word.to_string()))?;
        if let Some(members) = self.lists.get_mut(&record.list_name) {
            members.shift_remove(word);
        }
        record.list_name = list_name.to_string();
        self.lists
            .entry(list_name.to_string())
            .or_default()
            .insert(word.to_string());
        Ok(())
    }

    /// Count one scored answer against `word`.
    pub fn record_answer(
        &mut self,
        word: &str,
        correct: bool,
    ) -> Result<&WordRecord, ValidationError> {
        let record = self
            .words
            .get_mut(word)
            .ok_or_else(|| ValidationError::NotFound(word.to_string()))?;
        record.record_answer(correct);
        Ok(record)
    }

    /// Recompute the list index from the word records.
    ///
    /// Empty lists, including freshly created placeholders, disappear.
    pub fn rebuild_index(&mut self) {
        let before = self.lists.len();
        let mut lists: IndexMap<String, IndexSet<String>> = IndexMap::new();
        for (word, record) in &self.words {
            if record.is_orphan() {
                continue;
            }
            lists
                .entry(record.list_name.clone())
                .or_default()
                .insert(word.clone());
        }
        self.lists = lists;
        tracing::debug!(before, after = self.lists.len(), "rebuilt list index");
    }

    /// Lists as the index currently holds them, with member counts.
    ///
    /// Lists emptied since the last rebuild are still reported.
    pub fn lists(&self) -> impl Iterator<Item = (&str, usize)> {
        self.lists
            .iter()
            .map(|(name, members)| (name.as_str(), members.len()))
    }

    /// Whether the index holds an entry for `name`, empty or not.
    pub fn has_list(&self, name: &str) -> bool {
        self.lists.contains_key(name)
    }

    pub fn member_count(&self, name: &str) -> usize {
        self.lists.get(name).map_or(0, IndexSet::len)
    }

    /// Member words of a list with their records, in insertion order.
    pub fn members(&self, name: &str) -> Vec<(&str, &WordRecord)> {
        let Some(members) = self.lists.get(name) else {
            return Vec::new();
        };
        members
            .iter()
            .filter_map(|w| self.words.get_key_value(w))
            .map(|(w, r)| (w.as_str(), r))
            .collect()
    }

    /// Words not assigned to any list.
    pub fn orphans(&self) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .filter(|(_, r)| r.is_orphan())
            .map(|(w, _)| w.as_str())
    }
}
