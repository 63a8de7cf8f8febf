//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level lexdrill configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexdrillConfig {
    /// JSON file holding words, lists, profile and login history.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Daily goal for a fresh profile.
    #[serde(default = "default_goal")]
    pub default_goal: u32,
    /// Name for a fresh profile.
    #[serde(default = "default_user_name")]
    pub user_name: String,
    /// Fixed quiz seed; drawn from the OS when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("./vocabulary.json")
}
fn default_goal() -> u32 {
    20
}
fn default_user_name() -> String {
    "Learner".to_string()
}

impl Default for LexdrillConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            default_goal: default_goal(),
            user_name: default_user_name(),
            seed: None,
        }
    }
}

/// Expand `${VAR}` references from the environment. Unset variables expand
/// to nothing and an unterminated `${` is kept as written. Expanded values
/// are not scanned again.
fn expand_env_refs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start + 2..].find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        let name = &rest[start + 2..start + 2 + len];
        out.push_str(&std::env::var(name).unwrap_or_default());
        rest = &rest[start + 2 + len + 1..];
    }
    out.push_str(rest);
    out
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. the explicit path, which must exist
/// 2. `lexdrill.toml` in the current directory
/// 3. `~/.config/lexdrill/config.toml`
///
/// `LEXDRILL_DATA_FILE` overrides `data_file` wherever it came from.
pub fn load_config_from(path: Option<&Path>) -> Result<LexdrillConfig> {
    let config_path = match path {
        Some(p) if !p.exists() => anyhow::bail!("config file not found: {}", p.display()),
        Some(p) => Some(p.to_path_buf()),
        None => search_paths().into_iter().find(|p| p.exists()),
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            toml::from_str::<LexdrillConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => LexdrillConfig::default(),
    };

    if let Ok(data_file) = std::env::var("LEXDRILL_DATA_FILE") {
        config.data_file = PathBuf::from(data_file);
    }

    config.data_file = PathBuf::from(expand_env_refs(&config.data_file.to_string_lossy()));
    config.user_name = expand_env_refs(&config.user_name);

    if config.default_goal == 0 {
        anyhow::bail!("default_goal must be positive");
    }

    Ok(config)
}

/// Implicit config locations, most specific first.
fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("lexdrill.toml")];
    if let Some(home) = std::env::var_os("HOME") {
        paths.push(Path::new(&home).join(".config/lexdrill/config.toml"));
    }
    paths
}
