//! The `lexdrill init` command.

use std::path::Path;

use anyhow::Result;

use crate::config::LexdrillConfig;
use crate::session;

pub fn execute(config: &LexdrillConfig) -> Result<()> {
    // Create lexdrill.toml
    if Path::new("lexdrill.toml").exists() {
        println!("lexdrill.toml already exists, skipping.");
    } else {
        std::fs::write("lexdrill.toml", SAMPLE_CONFIG)?;
        println!("Created lexdrill.toml");
    }

    // Create the data file
    if config.data_file.exists() {
        println!("{} already exists, skipping.", config.data_file.display());
    } else {
        session::load_state(config)?.save_json(&config.data_file)?;
        println!("Created {}", config.data_file.display());
    }

    // Create example word pack
    std::fs::create_dir_all("packs")?;
    let example_path = Path::new("packs/example.toml");
    if example_path.exists() {
        println!("packs/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_PACK)?;
        println!("Created packs/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit lexdrill.toml with your name and daily goal");
    println!("  2. Run: lexdrill import packs/example.toml");
    println!("  3. Run: lexdrill quiz --list Animals");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# lexdrill configuration

data_file = "./vocabulary.json"
user_name = "${USER}"
default_goal = 20

# Fix the quiz order, e.g. for demos
# seed = 42
"#;

const EXAMPLE_PACK: &str = r#"[pack]
list = "Animals"
name = "Animals"
description = "A small example pack to get started"

[[words]]
word = "cat"
meanings = ["feline", "kitty"]

[[words]]
word = "dog"
meanings = ["canine", "hound"]

[[words]]
word = "cow"
meanings = ["bovine"]

[[words]]
word = "horse"
meanings = ["equine", "steed"]

[[words]]
word = "sheep"
meanings = ["ovine"]
"#;
