//! The `quizmark exam` command.

use std::path::PathBuf;

use anyhow::Result;

use quizmark_core::exam::ExamConfig;
use quizmark_core::parser;

use crate::config::load_config_from;

pub fn execute(
    source: Option<PathBuf>,
    duration: Option<u32>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let source = source.unwrap_or(config.question_file);
    let duration = duration.unwrap_or(config.duration_seconds);

    let sections = parser::load_question_file(&source)?;
    let exam = ExamConfig::from_sections(&sections, duration);

    println!("{}", serde_json::to_string_pretty(&exam)?);

    Ok(())
}
