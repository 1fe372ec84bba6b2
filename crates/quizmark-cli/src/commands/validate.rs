//! The `quizmark validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizmark_core::exam::total_questions;
use quizmark_core::parser;

use crate::config::load_config_from;

pub fn execute(source: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let source = source.unwrap_or(config.question_file);

    let sections = parser::load_question_file(&source)?;

    println!(
        "Question document: {} ({} sections, {} questions)",
        source.display(),
        sections.len(),
        total_questions(&sections)
    );

    let warnings = parser::validate_document(&sections);
    for w in &warnings {
        let prefix = w
            .question_id
            .map(|id| format!("  [Q{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Question document OK.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
