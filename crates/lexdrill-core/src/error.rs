//! Domain error types.
//!
//! Validation errors reject a word-management operation before anything is
//! mutated. State errors signal that the caller drove the quiz state machine
//! out of order. Neither is fatal; only persistence failures abort a session,
//! and those travel as `anyhow::Error` with file context attached.

use thiserror::Error;

/// A rejected word-store or profile operation. The store is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The word key is already present in the store.
    #[error("the word '{0}' is already in your word list")]
    DuplicateWord(String),

    /// No non-blank meaning was supplied.
    #[error("at least one meaning is required")]
    EmptyMeanings,

    /// The word was not assigned to a list.
    #[error("no list selected")]
    NoListSelected,

    /// A list with that name already has members.
    #[error("a list named '{0}' already exists")]
    DuplicateList(String),

    /// The word or list does not exist.
    #[error("'{0}' not found")]
    NotFound(String),

    /// A word key or list name was blank.
    #[error("name must not be blank")]
    EmptyName,

    /// The list exists but has no members to study.
    #[error("the list '{0}' has no words")]
    EmptyList(String),

    /// Daily goals must be at least one answer.
    #[error("daily goal must be positive, got {0}")]
    InvalidGoal(u32),
}

impl ValidationError {
    /// Every validation failure can be corrected by the user and retried.
    pub fn is_recoverable(&self) -> bool {
        true
    }
}

/// A quiz call issued outside the order the state machine allows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// `advance` was called before a correct answer was recorded.
    #[error("answer the current item correctly before moving on")]
    MustAnswerFirst,

    /// There is no item awaiting an answer.
    #[error("no quiz item is ready")]
    ItemNotReady,

    /// The list cannot supply four distinct meanings.
    #[error("the list '{0}' needs at least 4 distinct meanings to be played")]
    NotPlayable(String),

    /// The chosen option slot is out of range or disabled.
    #[error("option slot {0} cannot be selected")]
    SlotUnavailable(usize),
}

impl StateError {
    /// Sequencing errors leave the engine in a consistent state.
    pub fn is_recoverable(&self) -> bool {
        true
    }
}

/// Errors returned by quiz operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    State(#[from] StateError),
}

impl QuizError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            QuizError::Validation(e) => e.is_recoverable(),
            QuizError::State(e) => e.is_recoverable(),
        }
    }
}
