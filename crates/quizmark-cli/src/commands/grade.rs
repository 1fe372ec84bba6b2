//! The `quizmark grade` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizmark_core::parser;
use quizmark_core::report::AttemptRecord;
use quizmark_core::scorer::Submission;
use quizmark_core::statistics::{score_exam, ExamAnalytics};
use quizmark_report::write_html_report;

use crate::config::load_config_from;

pub fn execute(
    source: Option<PathBuf>,
    submission_path: PathBuf,
    format: String,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let source = source.unwrap_or(config.question_file);

    let sections = parser::load_question_file(&source)?;

    let submission_json = std::fs::read_to_string(&submission_path)
        .with_context(|| format!("failed to read submission: {}", submission_path.display()))?;
    let submission: Submission = serde_json::from_str(&submission_json)
        .with_context(|| format!("failed to parse submission: {}", submission_path.display()))?;

    let analytics = score_exam(&sections, &submission);
    let record = AttemptRecord::new(source.display().to_string(), analytics);

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&record.analytics)?);
        }
        "markdown" | "md" => {
            println!("{}", record.to_markdown());
        }
        _ => {
            // text format
            print_summary(&record.analytics);
        }
    }

    if let Some(output_dir) = output {
        std::fs::create_dir_all(&output_dir)
            .with_context(|| format!("failed to create {}", output_dir.display()))?;
        let timestamp = record.created_at.format("%Y-%m-%dT%H%M%S");

        let json_path = output_dir.join(format!("attempt-{timestamp}.json"));
        record.save_json(&json_path)?;
        eprintln!("Attempt saved to: {}", json_path.display());

        let html_path = output_dir.join(format!("attempt-{timestamp}.html"));
        write_html_report(&record, &html_path)?;
        eprintln!("HTML review: {}", html_path.display());
    }

    Ok(())
}

fn print_summary(analytics: &ExamAnalytics) {
    use comfy_table::{Cell, Table};

    println!(
        "Score: {} / {} ({} of {} correct, {} answered, {} missed)",
        analytics.net_score,
        analytics.max_possible_score,
        analytics.correct_count,
        analytics.total_questions,
        analytics.count_answered,
        analytics.count_missed
    );

    let mut table = Table::new();
    table.set_header(vec![
        "Section",
        "Correct",
        "Incorrect",
        "Unanswered",
        "Score",
        "Time",
    ]);

    for section in &analytics.sections {
        table.add_row(vec![
            Cell::new(&section.name),
            Cell::new(format!("{}/{}", section.correct, section.total)),
            Cell::new(section.incorrect),
            Cell::new(section.unanswered),
            Cell::new(section.score),
            Cell::new(format!("{:.1}s", section.time_taken)),
        ]);
    }

    println!("\n{table}");
}
