//! Mastery classification and answer aggregates.
//!
//! Everything here is a read-only summary over the word store, the login
//! ledger and the running session.

use std::fmt;

use chrono::NaiveDate;

use crate::ledger::LoginLedger;
use crate::model::WordRecord;
use crate::session::SessionContext;
use crate::store::WordStore;

/// Ratios above this are `Learned`.
pub const LEARNED_THRESHOLD: f64 = 0.8;

/// Ratios above this (and not above `LEARNED_THRESHOLD`) are `Familiar`.
pub const FAMILIAR_THRESHOLD: f64 = 0.45;

/// How well a word is known, from its running correctness ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mastery {
    ToLearn,
    Familiar,
    Learned,
}

impl fmt::Display for Mastery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mastery::ToLearn => write!(f, "to learn"),
            Mastery::Familiar => write!(f, "familiar"),
            Mastery::Learned => write!(f, "learned"),
        }
    }
}

/// Bucket a correctness ratio. Both bounds are exclusive from below.
pub fn classify_ratio(p: f64) -> Mastery {
    if p > LEARNED_THRESHOLD {
        Mastery::Learned
    } else if p > FAMILIAR_THRESHOLD {
        Mastery::Familiar
    } else {
        Mastery::ToLearn
    }
}

/// Bucket a word. Unanswered words are `ToLearn`.
pub fn classify(record: &WordRecord) -> Mastery {
    classify_ratio(record.correct_ratio())
}

/// Progress toward the daily goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyProgress {
    /// Correct answers today, this session included.
    pub done: u32,
    pub goal: u32,
}

impl DailyProgress {
    /// Share of the goal reached, capped at 1.
    pub fn fraction(&self) -> f64 {
        if self.goal == 0 {
            return 1.0;
        }
        (self.done as f64 / self.goal as f64).min(1.0)
    }

    pub fn is_met(&self) -> bool {
        self.done >= self.goal
    }
}

/// Correct answers today: this session's plus every ledger entry dated today.
///
/// Only correct answers count, so wrong guesses never inflate progress.
pub fn daily_progress(
    goal: u32,
    session_correct: u32,
    ledger: &LoginLedger,
    today: NaiveDate,
) -> DailyProgress {
    let done = ledger
        .entries_on(today)
        .fold(session_correct, |acc, e| acc.saturating_add(e.correct_answers));
    DailyProgress { done, goal }
}

/// Today's correct and total answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyAccuracy {
    pub correct: u32,
    pub total: u32,
}

impl DailyAccuracy {
    /// Correct share of today's answers; the denominator is at least 1.
    pub fn ratio(&self) -> f64 {
        self.correct as f64 / self.total.max(1) as f64
    }
}

/// Today's answers from the ledger plus the running session.
pub fn daily_accuracy(
    session: &SessionContext,
    ledger: &LoginLedger,
    today: NaiveDate,
) -> DailyAccuracy {
    ledger.entries_on(today).fold(
        DailyAccuracy {
            correct: session.correct(),
            total: session.answered(),
        },
        |acc, e| DailyAccuracy {
            correct: acc.correct.saturating_add(e.correct_answers),
            total: acc.total.saturating_add(e.total_answers),
        },
    )
}

/// Aggregate counters for one list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListStats {
    pub list_name: String,
    pub word_count: usize,
    pub correct: u64,
    pub total: u64,
    /// `correct / total`, or 0 when nothing was answered.
    pub correct_ratio: f64,
}

/// Summed counters over a list's members.
pub fn list_stats(store: &WordStore, list: &str) -> ListStats {
    let members = store.members(list);
    let correct: u64 = members.iter().map(|(_, r)| r.correct_count as u64).sum();
    let total: u64 = members.iter().map(|(_, r)| r.total_count as u64).sum();
    let correct_ratio = if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64
    };
    ListStats {
        list_name: list.to_string(),
        word_count: members.len(),
        correct,
        total,
        correct_ratio,
    }
}

/// Word counts per mastery bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MasteryBreakdown {
    pub learned: usize,
    pub familiar: usize,
    pub to_learn: usize,
}

impl MasteryBreakdown {
    pub fn total(&self) -> usize {
        self.learned + self.familiar + self.to_learn
    }

    fn add(&mut self, mastery: Mastery) {
        match mastery {
            Mastery::Learned => self.learned += 1,
            Mastery::Familiar => self.familiar += 1,
            Mastery::ToLearn => self.to_learn += 1,
        }
    }
}

/// Bucket counts for one list, or for every word when `list` is `None`.
pub fn mastery_breakdown(store: &WordStore, list: Option<&str>) -> MasteryBreakdown {
    let mut breakdown = MasteryBreakdown::default();
    match list {
        Some(name) => {
            for (_, record) in store.members(name) {
                breakdown.add(classify(record));
            }
        }
        None => {
            for record in store.records().values() {
                breakdown.add(classify(record));
            }
        }
    }
    breakdown
}

/// Time-of-day greeting addressed to the first name.
pub fn greeting(name: &str, hour: u32) -> String {
    let part = match hour {
        8..=12 => "Good Morning",
        13..=18 => "Good Afternoon",
        _ => "Good Evening",
    };
    match name.split_whitespace().next() {
        Some(first) => format!("{part}, {first}"),
        None => part.to_string(),
    }
}
