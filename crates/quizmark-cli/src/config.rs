//! Engine configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizmark_core::exam::DEFAULT_DURATION_SECS;

/// Top-level quizmark configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizmarkConfig {
    /// Path to the markdown question document.
    #[serde(default = "default_question_file")]
    pub question_file: PathBuf,
    /// Exam duration handed to clients, in seconds.
    #[serde(default = "default_duration_seconds")]
    pub duration_seconds: u32,
    /// Output directory for attempt records and reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_question_file() -> PathBuf {
    PathBuf::from("questions.md")
}
fn default_duration_seconds() -> u32 {
    DEFAULT_DURATION_SECS
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./quizmark-results")
}

impl Default for QuizmarkConfig {
    fn default() -> Self {
        Self {
            question_file: default_question_file(),
            duration_seconds: default_duration_seconds(),
            output_dir: default_output_dir(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizmark.toml` in the current directory
/// 2. `~/.config/quizmark/config.toml`
///
/// Environment variable override: `QUIZMARK_QUESTION_FILE`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizmarkConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizmark.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizmarkConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            QuizmarkConfig::default()
        }
    };

    if let Ok(file) = std::env::var("QUIZMARK_QUESTION_FILE") {
        config.question_file = PathBuf::from(file);
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizmark"))
}
