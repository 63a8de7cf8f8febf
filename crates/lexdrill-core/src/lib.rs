//! lexdrill-core: Word store, quiz engine, statistics and login ledger.
//!
//! This crate holds the vocabulary data model and the drilling logic that
//! the `lexdrill` command line tool builds on. It performs no terminal I/O;
//! file access is limited to `persist` and `import`.

pub mod error;
pub mod import;
pub mod ledger;
pub mod model;
pub mod persist;
pub mod profile;
pub mod quiz;
pub mod session;
pub mod statistics;
pub mod store;

pub use error::{QuizError, StateError, ValidationError};
pub use persist::AppState;
pub use quiz::{Outcome, QuizEngine, QuizItem, QuizState};
pub use store::WordStore;
