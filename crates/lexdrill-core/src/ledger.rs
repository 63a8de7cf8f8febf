//! Login history with a one-week retention window.
//!
//! Pruning compares day-of-month numbers within the current month and year
//! only. An entry from an earlier month is never pruned by the rule, and on
//! the first seven days of a month `today.day - 7` is not positive so nothing
//! is removed at all. Retention therefore stretches past seven days around
//! month boundaries.

use chrono::{Datelike, NaiveDate};

use crate::model::{LoginEntry, Timestamp};

/// Days of history kept by `prune`.
pub const RETENTION_DAYS: i64 = 7;

/// Ordered login history, oldest first, plus a copy of the newest entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginLedger {
    last_login: Option<LoginEntry>,
    entries: Vec<LoginEntry>,
}

impl LoginLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(last_login: Option<LoginEntry>, entries: Vec<LoginEntry>) -> Self {
        Self {
            last_login,
            entries,
        }
    }

    pub fn last_login(&self) -> Option<&LoginEntry> {
        self.last_login.as_ref()
    }

    pub fn entries(&self) -> &[LoginEntry] {
        &self.entries
    }

    /// Entries recorded on the given calendar day.
    pub fn entries_on(&self, day: NaiveDate) -> impl Iterator<Item = &LoginEntry> {
        self.entries.iter().filter(move |e| e.timestamp.is_on(day))
    }

    /// Drop the leading entries older than the retention window.
    ///
    /// Stops at the first entry that does not qualify. Returns how many
    /// entries were removed.
    pub fn prune(&mut self, today: NaiveDate) -> usize {
        let cutoff = today.day() as i64 - RETENTION_DAYS;
        let expired = self
            .entries
            .iter()
            .take_while(|e| {
                e.timestamp.year == today.year()
                    && e.timestamp.month == today.month()
                    && (e.timestamp.day as i64) < cutoff
            })
            .count();
        self.entries.drain(..expired);
        if expired > 0 {
            tracing::info!(expired, kept = self.entries.len(), "pruned login history");
        }
        expired
    }

    /// Record one finished session and make it the last login.
    pub fn append_session(
        &mut self,
        correct_answers: u32,
        total_answers: u32,
        timestamp: Timestamp,
    ) -> LoginEntry {
        let entry = LoginEntry {
            timestamp,
            correct_answers,
            total_answers,
        };
        self.entries.push(entry);
        self.last_login = Some(entry);
        tracing::info!(
            correct = correct_answers,
            total = total_answers,
            at = %timestamp,
            "recorded session"
        );
        entry
    }
}
