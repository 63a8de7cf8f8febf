//! The `lexdrill create-list`, `remove-list` and `lists` commands.

use anyhow::Result;
use comfy_table::{Cell, Table};

use lexdrill_core::quiz::is_playable;

use crate::config::LexdrillConfig;
use crate::session::Session;

/// Create a list seeded with its first word. A list lives on disk only
/// through its members, so it is never created empty.
pub fn create(
    config: &LexdrillConfig,
    name: String,
    word: String,
    meanings: Vec<String>,
) -> Result<()> {
    let mut session = Session::open(config)?;
    let store = &mut session.state.store;
    store.create_list(&name)?;
    store.add_word(&word, &meanings, &name)?;
    println!("Created list {} with '{}'", name.trim(), word.trim());
    session.close()
}

pub fn remove(config: &LexdrillConfig, name: String) -> Result<()> {
    let mut session = Session::open(config)?;
    let orphaned = session.state.store.remove_list(&name)?;
    println!("Removed list {name}.");
    if !orphaned.is_empty() {
        println!(
            "{} word(s) no longer belong to a list: {}",
            orphaned.len(),
            orphaned.join(", ")
        );
    }
    if session.state.profile.active_list == name {
        session.state.profile.clear_active_list();
    }
    session.close()
}

pub fn show(config: &LexdrillConfig) -> Result<()> {
    let mut session = Session::open(config)?;
    session.state.store.rebuild_index();
    let store = &session.state.store;

    if store.lists().next().is_none() {
        println!("No lists yet. Create one with `lexdrill create-list NAME WORD MEANING...`.");
    } else {
        let active = &session.state.profile.active_list;
        let mut table = Table::new();
        table.set_header(vec!["List", "Words", "Playable", "Active"]);
        for (name, count) in store.lists() {
            table.add_row(vec![
                Cell::new(name),
                Cell::new(count),
                Cell::new(if is_playable(store, name) { "yes" } else { "no" }),
                Cell::new(if name == active.as_str() { "*" } else { "" }),
            ]);
        }
        println!("{table}");
    }

    let orphans = store.orphans().count();
    if orphans > 0 {
        println!("{orphans} word(s) without a list.");
    }

    session.close()
}
