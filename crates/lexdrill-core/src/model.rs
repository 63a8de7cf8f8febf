//! Core data model types for lexdrill.
//!
//! These are the records the rest of the crate passes around: words with
//! their running answer counters, login timestamps, and display settings.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// A single vocabulary word's record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    /// Meanings in the order they were entered. Never empty.
    pub meanings: Vec<String>,
    /// Times this word was answered correctly.
    pub correct_count: u32,
    /// Times this word was answered at all.
    pub total_count: u32,
    /// Owning list; empty when the word is orphaned.
    pub list_name: String,
}

impl WordRecord {
    /// A fresh record with zeroed counters.
    pub fn new(meanings: Vec<String>, list_name: impl Into<String>) -> Self {
        Self {
            meanings,
            correct_count: 0,
            total_count: 0,
            list_name: list_name.into(),
        }
    }

    /// Times this word was answered incorrectly.
    pub fn incorrect_count(&self) -> u32 {
        self.total_count.saturating_sub(self.correct_count)
    }

    /// Running correctness ratio, 0 when never answered.
    pub fn correct_ratio(&self) -> f64 {
        if self.total_count == 0 {
            0.0
        } else {
            self.correct_count as f64 / self.total_count as f64
        }
    }

    pub fn is_orphan(&self) -> bool {
        self.list_name.is_empty()
    }

    /// Count one scored answer. Keeps `correct_count <= total_count`.
    pub fn record_answer(&mut self, correct: bool) {
        self.total_count = self.total_count.saturating_add(1);
        if correct {
            self.correct_count = (self.correct_count + 1).min(self.total_count);
        }
    }
}

/// Wall-clock time at hour resolution, as logins are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
}

impl Timestamp {
    pub fn new(year: i32, month: u32, day: u32, hour: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// The current local time.
    pub fn now() -> Self {
        Self::from(chrono::Local::now().naive_local())
    }

    /// Whether this timestamp falls on the given calendar day.
    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.year == day.year() && self.month == day.month() && self.day == day.day()
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Self::new(dt.year(), dt.month(), dt.day(), dt.hour())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}h",
            self.year, self.month, self.day, self.hour
        )
    }
}

/// One session's aggregate answer counts, appended at shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginEntry {
    pub timestamp: Timestamp,
    pub correct_answers: u32,
    pub total_answers: u32,
}

/// Colour theme preference. Presentation is up to the shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::Light => write!(f, "light"),
            DisplayMode::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(DisplayMode::Light),
            "dark" => Ok(DisplayMode::Dark),
            other => Err(format!("unknown display mode: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_answer_keeps_counters_ordered() {
        let mut w = WordRecord::new(vec!["feline".into()], "Animals");
        w.record_answer(true);
        w.record_answer(false);
        w.record_answer(true);
        assert_eq!(w.correct_count, 2);
        assert_eq!(w.total_count, 3);
        assert_eq!(w.incorrect_count(), 1);
    }

    #[test]
    fn ratio_is_zero_when_unanswered() {
        let w = WordRecord::new(vec!["x".into()], "L");
        assert_eq!(w.correct_ratio(), 0.0);
        assert!(!w.is_orphan());
        assert!(WordRecord::new(vec!["x".into()], "").is_orphan());
    }

    #[test]
    fn timestamp_from_datetime() {
        let dt = NaiveDate::from_ymd_opt(2024, 5, 3)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        let ts = Timestamp::from(dt);
        assert_eq!(ts, Timestamp::new(2024, 5, 3, 14));
        assert!(ts.is_on(NaiveDate::from_ymd_opt(2024, 5, 3).unwrap()));
        assert!(!ts.is_on(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()));
        assert_eq!(ts.to_string(), "2024-05-03 14h");
    }

    #[test]
    fn display_mode_display_and_parse() {
        assert_eq!(DisplayMode::Dark.to_string(), "dark");
        assert_eq!("Light".parse::<DisplayMode>().unwrap(), DisplayMode::Light);
        assert!("sepia".parse::<DisplayMode>().is_err());
        assert_eq!(DisplayMode::Light.toggled(), DisplayMode::Dark);
    }
}
