//! Graded attempt records with JSON persistence.
//!
//! An [`AttemptRecord`] bundles one graded submission (analytics plus a
//! little provenance) so the CLI can save it to disk and the report crate
//! can render it. Records are one-shot files, not a store.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::statistics::ExamAnalytics;

/// A graded attempt, ready to persist or render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// When the attempt was graded.
    pub created_at: DateTime<Utc>,
    /// Summary of the exam the attempt was graded against.
    pub exam: ExamSummary,
    /// The full analytics payload.
    pub analytics: ExamAnalytics,
}

/// Where the questions came from and how big the exam was.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamSummary {
    /// Display form of the question file path.
    pub source: String,
    pub section_count: usize,
    pub question_count: u32,
}

impl AttemptRecord {
    /// Wrap freshly computed analytics in a new record.
    pub fn new(source: impl Into<String>, analytics: ExamAnalytics) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            exam: ExamSummary {
                source: source.into(),
                section_count: analytics.sections.len(),
                question_count: analytics.total_questions,
            },
            analytics,
        }
    }

    /// Save the record as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize attempt")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write attempt to {}", path.display()))?;
        Ok(())
    }

    /// Load a record from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read attempt from {}", path.display()))?;
        let record: AttemptRecord =
            serde_json::from_str(&content).context("failed to parse attempt JSON")?;
        Ok(record)
    }

    /// Format the attempt as a markdown summary.
    pub fn to_markdown(&self) -> String {
        let a = &self.analytics;
        let mut md = String::new();

        md.push_str(&format!(
            "**Score:** {} / {} — {} of {} correct, {} answered, {} missed\n\n",
            a.net_score,
            a.max_possible_score,
            a.correct_count,
            a.total_questions,
            a.count_answered,
            a.count_missed
        ));

        if !a.sections.is_empty() {
            md.push_str("### Sections\n\n");
            md.push_str("| Section | Correct | Incorrect | Unanswered | Score | Time (s) |\n");
            md.push_str("|---------|---------|-----------|------------|-------|----------|\n");
            for s in &a.sections {
                md.push_str(&format!(
                    "| {} | {}/{} | {} | {} | {} | {:.1} |\n",
                    s.name, s.correct, s.total, s.incorrect, s.unanswered, s.score, s.time_taken
                ));
            }
            md.push('\n');
        }

        let wrong: Vec<_> = a
            .question_analysis
            .iter()
            .filter(|q| q.points < 0)
            .collect();
        if !wrong.is_empty() {
            md.push_str("### Incorrect answers\n\n");
            for q in wrong {
                md.push_str(&format!(
                    "- Q{} ({}): answered {}, correct answer {}\n",
                    q.id,
                    q.section,
                    q.user_answer.as_deref().unwrap_or("-"),
                    q.correct_answer.as_deref().unwrap_or("-")
                ));
            }
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;
    use crate::scorer::Submission;
    use crate::statistics::score_exam;

    const SAMPLE_DOC: &str = "# S1\n## Q1\n- [ ] a\n- [x] b\n## Q2\n- [x] c\n- [ ] d\n";

    fn make_record() -> AttemptRecord {
        let sections = parse_document(SAMPLE_DOC);
        let submission = Submission {
            responses: [
                ("1".to_string(), "B".to_string()),
                ("2".to_string(), "B".to_string()),
            ]
            .into(),
            time_log: [("1".to_string(), 20.0)].into(),
        };
        AttemptRecord::new("questions.md", score_exam(&sections, &submission))
    }

    #[test]
    fn summary_matches_analytics() {
        let record = make_record();
        assert_eq!(record.exam.source, "questions.md");
        assert_eq!(record.exam.section_count, 1);
        assert_eq!(record.exam.question_count, 2);
    }

    #[test]
    fn json_roundtrip() {
        let record = make_record();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attempt.json");

        record.save_json(&path).unwrap();
        let loaded = AttemptRecord::load_json(&path).unwrap();

        assert_eq!(loaded.id, record.id);
        assert_eq!(loaded.analytics, record.analytics);
    }

    #[test]
    fn save_creates_parent_directories() {
        let record = make_record();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/attempt.json");

        record.save_json(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(AttemptRecord::load_json(Path::new("no_such_attempt.json")).is_err());
    }

    #[test]
    fn markdown_summary_lists_sections_and_misses() {
        let record = make_record();
        let md = record.to_markdown();

        assert!(md.contains("3 / 8"));
        assert!(md.contains("| S1 | 1/2 |"));
        assert!(md.contains("Incorrect answers"));
        assert!(md.contains("Q2"));
    }
}
