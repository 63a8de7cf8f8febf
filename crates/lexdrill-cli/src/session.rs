//! One CLI invocation as one study session.
//!
//! `Session::open` loads the data file (or starts fresh), prunes the login
//! history and hands the state to a command. `Session::close` records the
//! session in the ledger and saves.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use lexdrill_core::model::Timestamp;
use lexdrill_core::profile::UserProfile;
use lexdrill_core::session::SessionContext;
use lexdrill_core::AppState;

use crate::config::LexdrillConfig;

pub struct Session {
    pub state: AppState,
    pub context: SessionContext,
    pub today: NaiveDate,
    path: PathBuf,
}

impl Session {
    pub fn open(config: &LexdrillConfig) -> Result<Self> {
        let path = config.data_file.clone();
        let mut state = load_state(config)?;
        let today = Local::now().date_naive();
        state.ledger.prune(today);
        Ok(Self {
            state,
            context: SessionContext::new(),
            today,
            path,
        })
    }

    /// Append this session to the ledger and save the data file.
    pub fn close(self) -> Result<()> {
        let Session {
            mut state,
            context,
            path,
            ..
        } = self;
        context.close(&mut state.ledger, Timestamp::now());
        state.save_json(&path)
    }
}

/// Load the configured data file, or a fresh state if there is none yet.
pub fn load_state(config: &LexdrillConfig) -> Result<AppState> {
    let path = &config.data_file;
    if path.exists() {
        return AppState::load_json(path);
    }
    tracing::info!(path = %path.display(), "no data file yet, starting fresh");
    let profile = UserProfile::new(config.user_name.clone(), config.default_goal)
        .context("invalid profile settings in config")?;
    Ok(AppState::new(profile))
}
