//! The `lexdrill quiz` command.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use lexdrill_core::quiz::{QuizItem, OPTION_SLOTS};
use lexdrill_core::statistics::daily_progress;
use lexdrill_core::{Outcome, QuizEngine, QuizError, StateError, ValidationError};

use crate::config::LexdrillConfig;
use crate::session::Session;

pub fn execute(config: &LexdrillConfig, list: Option<String>, rounds: Option<u32>) -> Result<()> {
    let mut session = Session::open(config)?;
    let list = list.unwrap_or_else(|| session.state.profile.active_list.clone());
    if list.trim().is_empty() {
        return Err(ValidationError::NoListSelected.into());
    }

    let mut engine = match config.seed {
        Some(seed) => QuizEngine::seeded(seed),
        None => QuizEngine::from_entropy(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = run(
        &mut session,
        &mut engine,
        &list,
        rounds,
        stdin.lock(),
        stdout.lock(),
    );

    // Answers already given are kept even if the loop failed.
    session.close()?;
    result
}

/// Drive one quiz over `input` until the user quits, input ends or
/// `rounds` correct answers were given.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    engine: &mut QuizEngine,
    list: &str,
    rounds: Option<u32>,
    mut input: R,
    mut out: W,
) -> Result<()> {
    engine.generate_item(&session.state.store, list)?;
    let mut correct_rounds = 0;

    while let Some(item) = engine.current_item() {
        print_item(&mut out, item)?;
        write!(out, "Answer [1-{OPTION_SLOTS}, q to quit]: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let answer = line.trim();
        if answer.eq_ignore_ascii_case("q") {
            break;
        }
        let slot = match answer.parse::<usize>() {
            Ok(n) if (1..=OPTION_SLOTS).contains(&n) => n - 1,
            _ => {
                writeln!(out, "Pick an option between 1 and {OPTION_SLOTS}.")?;
                continue;
            }
        };

        let outcome =
            match engine.score_answer(&mut session.state.store, &mut session.context, slot) {
                Ok(outcome) => outcome,
                Err(QuizError::State(StateError::SlotUnavailable(_))) => {
                    writeln!(out, "That option is not available.")?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

        match outcome {
            Outcome::Correct => {
                writeln!(out, "Correct!\n")?;
                correct_rounds += 1;
                if rounds.is_some_and(|r| correct_rounds >= r) {
                    break;
                }
                engine.advance(&session.state.store)?;
            }
            Outcome::Incorrect => {
                if let Some(item) = engine.current_item() {
                    writeln!(out, "Wrong. The answer was: {}\n", item.correct_answer())?;
                }
                engine.generate_item(&session.state.store, list)?;
            }
        }
    }

    let progress = daily_progress(
        session.state.profile.daily_goal,
        session.context.correct(),
        &session.state.ledger,
        session.today,
    );
    writeln!(
        out,
        "Session: {}/{} correct",
        session.context.correct(),
        session.context.answered()
    )?;
    write!(out, "Daily goal: {}/{}", progress.done, progress.goal)?;
    if progress.is_met() {
        write!(out, " (reached)")?;
    }
    writeln!(out)?;
    Ok(())
}

fn print_item<W: Write>(out: &mut W, item: &QuizItem) -> io::Result<()> {
    writeln!(
        out,
        "{}  (answered correctly {} time(s), incorrectly {} time(s))",
        item.target,
        item.correct_count,
        item.incorrect_count()
    )?;
    for (i, option) in item.options.iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, option.text())?;
    }
    Ok(())
}
