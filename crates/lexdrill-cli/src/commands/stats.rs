//! The `lexdrill stats` command.

use anyhow::Result;
use chrono::{Local, Timelike};
use comfy_table::{Cell, Table};

use lexdrill_core::statistics::{
    daily_accuracy, daily_progress, greeting, list_stats, mastery_breakdown,
};
use lexdrill_core::ValidationError;

use crate::config::LexdrillConfig;
use crate::session::Session;

pub fn execute(config: &LexdrillConfig, list: Option<String>) -> Result<()> {
    let mut session = Session::open(config)?;
    let state = &mut session.state;
    state.store.rebuild_index();

    println!("{}!", greeting(&state.profile.name, Local::now().hour()));
    if let Some(last) = state.ledger.last_login() {
        println!(
            "Last session: {} ({}/{} correct)",
            last.timestamp, last.correct_answers, last.total_answers
        );
    }

    let progress = daily_progress(
        state.profile.daily_goal,
        session.context.correct(),
        &state.ledger,
        session.today,
    );
    let accuracy = daily_accuracy(&session.context, &state.ledger, session.today);
    println!(
        "Today: {}/{} correct answers toward your goal ({:.0}%)",
        progress.done,
        progress.goal,
        progress.fraction() * 100.0
    );
    println!(
        "Accuracy today: {}/{} ({:.1}%)",
        accuracy.correct,
        accuracy.total,
        accuracy.ratio() * 100.0
    );

    let names: Vec<String> = match &list {
        Some(name) => {
            if !state.store.has_list(name) {
                return Err(ValidationError::NotFound(name.clone()).into());
            }
            vec![name.clone()]
        }
        None => state.store.lists().map(|(name, _)| name.to_string()).collect(),
    };

    let overall = mastery_breakdown(&state.store, list.as_deref());
    println!(
        "Words: {} learned, {} familiar, {} to learn",
        overall.learned, overall.familiar, overall.to_learn
    );

    if !names.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            "List",
            "Words",
            "Correct",
            "Total",
            "Accuracy",
            "Learned",
            "Familiar",
            "To learn",
        ]);

        for name in &names {
            let stats = list_stats(&state.store, name);
            let breakdown = mastery_breakdown(&state.store, Some(name));
            let marker = if *name == state.profile.active_list {
                " *"
            } else {
                ""
            };
            table.add_row(vec![
                Cell::new(format!("{name}{marker}")),
                Cell::new(stats.word_count),
                Cell::new(stats.correct),
                Cell::new(stats.total),
                Cell::new(format!("{:.1}%", stats.correct_ratio * 100.0)),
                Cell::new(breakdown.learned),
                Cell::new(breakdown.familiar),
                Cell::new(breakdown.to_learn),
            ]);
        }

        println!("\n{table}");
    }

    session.close()
}
