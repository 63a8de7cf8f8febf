//! Word commands: `add-word`, `remove-word`, `move-word` and `words`.

use anyhow::Result;
use comfy_table::{Cell, Table};

use lexdrill_core::model::WordRecord;
use lexdrill_core::statistics::classify;

use crate::config::LexdrillConfig;
use crate::session::Session;

pub fn add(
    config: &LexdrillConfig,
    list: Option<String>,
    word: String,
    meanings: Vec<String>,
) -> Result<()> {
    let mut session = Session::open(config)?;
    let list = list.unwrap_or_else(|| session.state.profile.active_list.clone());
    session.state.store.add_word(&word, &meanings, &list)?;
    println!("Added '{}' to {list}", word.trim());
    session.close()
}

pub fn remove(config: &LexdrillConfig, word: String) -> Result<()> {
    let mut session = Session::open(config)?;
    let record = session.state.store.remove_word(&word)?;
    println!(
        "Removed '{word}' ({} meaning(s), answered {} time(s))",
        record.meanings.len(),
        record.total_count
    );
    if session
        .state
        .profile
        .reconcile_active_list(&session.state.store)
    {
        println!("The active list is now empty and was deselected.");
    }
    session.close()
}

pub fn move_to(config: &LexdrillConfig, word: String, list: String) -> Result<()> {
    let mut session = Session::open(config)?;
    session.state.store.assign_to_list(&word, &list)?;
    println!("Moved '{word}' to {}", list.trim());
    session
        .state
        .profile
        .reconcile_active_list(&session.state.store);
    session.close()
}

pub fn show(config: &LexdrillConfig, list: Option<String>) -> Result<()> {
    let session = Session::open(config)?;
    let store = &session.state.store;

    let rows: Vec<(&str, &WordRecord)> = match &list {
        Some(name) => store.members(name),
        None => store
            .records()
            .iter()
            .map(|(word, record)| (word.as_str(), record))
            .collect(),
    };

    if rows.is_empty() {
        match &list {
            Some(name) => println!("No words in {name}."),
            None => println!("No words yet. Add some with `lexdrill add-word`."),
        }
    } else {
        print_words(&rows);
    }

    session.close()
}

fn print_words(rows: &[(&str, &WordRecord)]) {
    let mut table = Table::new();
    table.set_header(vec![
        "Word",
        "Meanings",
        "List",
        "Correct",
        "Incorrect",
        "Mastery",
    ]);

    for (word, record) in rows {
        let list = if record.is_orphan() {
            "-"
        } else {
            record.list_name.as_str()
        };
        table.add_row(vec![
            Cell::new(word),
            Cell::new(record.meanings.join(", ")),
            Cell::new(list),
            Cell::new(record.correct_count),
            Cell::new(record.incorrect_count()),
            Cell::new(classify(record)),
        ]);
    }

    println!("{table}");
}
