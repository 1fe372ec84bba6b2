//! Client-facing exam configuration.
//!
//! The fetch payload served to a learner before the exam starts. These types
//! carry no correct-answer field at all, so the answer key cannot leak into
//! the payload by accident.

use serde::{Deserialize, Serialize};

use crate::model::{AnswerOption, Section};

/// Default exam duration handed to clients, in seconds (30 minutes).
pub const DEFAULT_DURATION_SECS: u32 = 1800;

/// The exam configuration payload: everything a client needs to present the
/// exam, minus the answer key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamConfig {
    pub sections: Vec<ClientSection>,
    pub total_questions: u32,
    pub duration_seconds: u32,
}

/// A section as presented to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSection {
    pub name: String,
    pub questions: Vec<ClientQuestion>,
}

/// A question as presented to the client. No `correct` field exists here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientQuestion {
    pub id: u32,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

/// Count all questions across a parsed document.
pub fn total_questions(sections: &[Section]) -> u32 {
    sections.iter().map(|s| s.questions.len() as u32).sum()
}

impl ExamConfig {
    /// Build the client payload from a parsed document, stripping answers.
    pub fn from_sections(sections: &[Section], duration_seconds: u32) -> Self {
        let client_sections = sections
            .iter()
            .map(|section| ClientSection {
                name: section.name.clone(),
                questions: section
                    .questions
                    .iter()
                    .map(|q| ClientQuestion {
                        id: q.id,
                        text: q.text.clone(),
                        options: q.options.clone(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            sections: client_sections,
            total_questions: total_questions(sections),
            duration_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    const SAMPLE_DOC: &str = "# S1\n## Q1\n- [ ] a\n- [x] b\n## Q2\n- [x] c\n- [ ] d\n";

    #[test]
    fn payload_never_contains_the_answer_key() {
        let sections = parse_document(SAMPLE_DOC);
        let config = ExamConfig::from_sections(&sections, DEFAULT_DURATION_SECS);

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("correct"));
    }

    #[test]
    fn payload_preserves_structure_and_counts() {
        let sections = parse_document(SAMPLE_DOC);
        let config = ExamConfig::from_sections(&sections, 900);

        assert_eq!(config.total_questions, 2);
        assert_eq!(config.duration_seconds, 900);
        assert_eq!(config.sections.len(), 1);
        assert_eq!(config.sections[0].name, "S1");
        assert_eq!(config.sections[0].questions[0].id, 1);
        assert_eq!(config.sections[0].questions[0].options[1].id, "B");
    }

    #[test]
    fn empty_document_yields_empty_payload() {
        let config = ExamConfig::from_sections(&[], DEFAULT_DURATION_SECS);
        assert!(config.sections.is_empty());
        assert_eq!(config.total_questions, 0);
    }

    #[test]
    fn payload_serializes_camel_case() {
        let sections = parse_document(SAMPLE_DOC);
        let config = ExamConfig::from_sections(&sections, DEFAULT_DURATION_SECS);
        let json = serde_json::to_value(&config).unwrap();

        assert!(json.get("totalQuestions").is_some());
        assert!(json.get("durationSeconds").is_some());
    }
}
