//! The `lexdrill use-list`, `goal` and `mode` commands.

use anyhow::Result;

use crate::config::LexdrillConfig;
use crate::session::Session;

pub fn use_list(config: &LexdrillConfig, name: String) -> Result<()> {
    let mut session = Session::open(config)?;
    let state = &mut session.state;
    state.profile.set_active_list(&state.store, &name)?;
    println!("Now studying {name}.");
    session.close()
}

pub fn goal(config: &LexdrillConfig, goal: u32) -> Result<()> {
    let mut session = Session::open(config)?;
    session.state.profile.set_daily_goal(goal)?;
    println!("Daily goal set to {goal} correct answers.");
    session.close()
}

pub fn mode(config: &LexdrillConfig) -> Result<()> {
    let mut session = Session::open(config)?;
    let mode = session.state.profile.toggle_display_mode();
    println!("Display mode: {mode}");
    session.close()
}
