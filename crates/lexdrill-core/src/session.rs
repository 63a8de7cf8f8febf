//! Per-process session counters.

use crate::ledger::LoginLedger;
use crate::model::{LoginEntry, Timestamp};
use crate::quiz::Outcome;

/// Answer tallies for one process run.
///
/// Created at startup with zeroed counters and consumed by `close`, which
/// writes the totals to the ledger as a single login entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    answered: u32,
    correct: u32,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answered(&self) -> u32 {
        self.answered
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Count one scored answer.
    pub fn record(&mut self, outcome: Outcome) {
        self.answered += 1;
        if outcome == Outcome::Correct {
            self.correct += 1;
        }
    }

    /// End the session by appending its totals to the ledger.
    pub fn close(self, ledger: &mut LoginLedger, at: Timestamp) -> LoginEntry {
        ledger.append_session(self.correct, self.answered, at)
    }
}
