//! lexdrill CLI: personal vocabulary drilling from the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod session;

#[derive(Parser)]
#[command(name = "lexdrill", version, about = "Personal vocabulary drilling")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter config, data file and example word pack
    Init,

    /// Add a word with one or more meanings
    AddWord {
        /// List to add the word to (default: the active list)
        #[arg(long)]
        list: Option<String>,

        /// The word to learn
        word: String,

        /// Its meanings
        #[arg(required = true)]
        meanings: Vec<String>,
    },

    /// Delete a word and its history
    RemoveWord {
        word: String,
    },

    /// Move a word into another list
    MoveWord {
        word: String,

        /// Destination list
        #[arg(long)]
        list: String,
    },

    /// Create a list, starting it with one word
    CreateList {
        name: String,

        /// First word of the list
        word: String,

        /// Its meanings
        #[arg(required = true)]
        meanings: Vec<String>,
    },

    /// Delete a list; its words are kept without a list
    RemoveList {
        name: String,
    },

    /// Show all lists
    Lists,

    /// Show words with their meanings and answer counts
    Words {
        /// Only words in this list
        #[arg(long)]
        list: Option<String>,
    },

    /// Select the list to study by default
    UseList {
        name: String,
    },

    /// Set the daily goal of correct answers
    Goal {
        goal: u32,
    },

    /// Toggle between light and dark display mode
    Mode,

    /// Add the words of a TOML word pack (file or directory)
    Import {
        path: PathBuf,
    },

    /// Check TOML word packs without importing them
    Validate {
        path: PathBuf,
    },

    /// Run a multiple-choice quiz on stdin
    Quiz {
        /// List to quiz (default: the active list)
        #[arg(long)]
        list: Option<String>,

        /// Stop after this many correct answers
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: Option<u32>,
    },

    /// Show progress toward the daily goal and per-list statistics
    Stats {
        /// Only this list
        #[arg(long)]
        list: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lexdrill=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = config::load_config_from(cli.config.as_deref()).and_then(|config| {
        match cli.command {
            Commands::Init => commands::init::execute(&config),
            Commands::AddWord {
                list,
                word,
                meanings,
            } => commands::words::add(&config, list, word, meanings),
            Commands::RemoveWord { word } => commands::words::remove(&config, word),
            Commands::MoveWord { word, list } => commands::words::move_to(&config, word, list),
            Commands::CreateList {
                name,
                word,
                meanings,
            } => commands::lists::create(&config, name, word, meanings),
            Commands::RemoveList { name } => commands::lists::remove(&config, name),
            Commands::Lists => commands::lists::show(&config),
            Commands::Words { list } => commands::words::show(&config, list),
            Commands::UseList { name } => commands::profile::use_list(&config, name),
            Commands::Goal { goal } => commands::profile::goal(&config, goal),
            Commands::Mode => commands::profile::mode(&config),
            Commands::Import { path } => commands::import::execute(&config, path),
            Commands::Validate { path } => commands::validate::execute(&config, path),
            Commands::Quiz { list, rounds } => commands::quiz::execute(&config, list, rounds),
            Commands::Stats { list } => commands::stats::execute(&config, list),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
