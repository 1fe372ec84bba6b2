//! Markdown question document parser.
//!
//! Parses the line-oriented markdown grammar into sections of questions, and
//! validates parsed documents for structural problems.
//!
//! The grammar is deliberately forgiving: unrecognized lines fold into
//! question text or are dropped, and a missing source file parses to an
//! empty document. Parsing itself never fails.

use std::path::Path;

use crate::error::SourceError;
use crate::model::{option_letter, AnswerOption, Question, Section};

/// Name of the section opened implicitly when a question precedes any
/// top-level heading.
pub const IMPLICIT_SECTION_NAME: &str = "General";

/// Option marker spellings. Exactly these three prefixes are recognized as
/// options; near misses like `- [y]` or `-[x]` are ordinary lines.
const MARKER_CHECKED_LOWER: &str = "- [x]";
const MARKER_CHECKED_UPPER: &str = "- [X]";
const MARKER_UNCHECKED: &str = "- [ ]";

/// Accumulator for the line fold: closed sections plus whatever section and
/// question are still open, and the global question id counter.
struct DocumentBuilder {
    sections: Vec<Section>,
    open_section: Option<Section>,
    open_question: Option<Question>,
    next_id: u32,
}

impl DocumentBuilder {
    fn new() -> Self {
        Self {
            sections: Vec::new(),
            open_section: None,
            open_question: None,
            next_id: 1,
        }
    }

    /// Close the open question, if any, into the open section.
    fn close_question(&mut self) {
        if let Some(question) = self.open_question.take() {
            if let Some(section) = self.open_section.as_mut() {
                section.questions.push(question);
            }
        }
    }

    fn start_section(&mut self, name: &str) {
        self.close_question();
        if let Some(section) = self.open_section.take() {
            self.sections.push(section);
        }
        self.open_section = Some(Section::new(name));
    }

    fn start_question(&mut self, text: &str) {
        self.close_question();
        if self.open_section.is_none() {
            self.open_section = Some(Section::new(IMPLICIT_SECTION_NAME));
        }
        self.open_question = Some(Question {
            id: self.next_id,
            text: text.to_string(),
            options: Vec::new(),
            correct: None,
        });
        self.next_id += 1;
    }

    fn push_option(&mut self, text: &str, is_correct: bool) {
        if let Some(question) = self.open_question.as_mut() {
            let id = option_letter(question.options.len());
            if is_correct {
                // Last marked option wins.
                question.correct = Some(id.clone());
            }
            question.options.push(AnswerOption {
                id,
                text: text.to_string(),
            });
        }
    }

    /// Append a continuation line to the open question's text. Only questions
    /// that have no options yet accept continuations; afterwards stray lines
    /// have no structural effect.
    fn continue_text(&mut self, line: &str) {
        if let Some(question) = self.open_question.as_mut() {
            if question.options.is_empty() {
                question.text.push('\n');
                question.text.push_str(line);
            }
        }
    }

    fn finish(mut self) -> Vec<Section> {
        self.close_question();
        if let Some(section) = self.open_section.take() {
            self.sections.push(section);
        }
        self.sections
    }
}

/// Split an option line into its text and correctness, or `None` if the line
/// is not one of the recognized marker spellings.
fn option_marker(line: &str) -> Option<(&str, bool)> {
    let is_correct = if line.starts_with(MARKER_CHECKED_LOWER) || line.starts_with(MARKER_CHECKED_UPPER)
    {
        true
    } else if line.starts_with(MARKER_UNCHECKED) {
        false
    } else {
        return None;
    };
    Some((line[MARKER_UNCHECKED.len()..].trim(), is_correct))
}

/// Parse a markdown question document into its sections.
///
/// Question ids are assigned sequentially across the whole document starting
/// at 1. This never fails; anything the grammar does not recognize folds
/// into question text or is dropped.
pub fn parse_document(source: &str) -> Vec<Section> {
    let mut builder = DocumentBuilder::new();

    for raw_line in source.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = line.strip_prefix("# ") {
            builder.start_section(name.trim());
        } else if let Some(text) = line.strip_prefix("## ") {
            builder.start_question(text.trim());
        } else if let Some((text, is_correct)) = option_marker(line) {
            builder.push_option(text, is_correct);
        } else {
            builder.continue_text(line);
        }
    }

    builder.finish()
}

/// Read and parse a question document from disk.
///
/// A missing file is not an error: it parses to an empty section list, so
/// callers serve an empty exam instead of failing. Any other read failure is
/// surfaced as [`SourceError::Unreadable`].
pub fn load_question_file(path: &Path) -> Result<Vec<Section>, SourceError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(parse_document(&content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(
                "question file {} not found, serving an empty exam",
                path.display()
            );
            Ok(Vec::new())
        }
        Err(source) => Err(SourceError::Unreadable {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// A warning from question document validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question id (if applicable).
    pub question_id: Option<u32>,
    /// Warning message.
    pub message: String,
}

/// Validate a parsed document for common structural issues.
///
/// These never affect parsing; they exist so authors can catch a heading
/// typo or a forgotten `[x]` before learners do.
pub fn validate_document(sections: &[Section]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for section in sections {
        if section.questions.is_empty() {
            warnings.push(ValidationWarning {
                question_id: None,
                message: format!("section '{}' has no questions", section.name),
            });
        }

        for question in &section.questions {
            if question.options.is_empty() {
                warnings.push(ValidationWarning {
                    question_id: Some(question.id),
                    message: "question has no options".into(),
                });
            } else if question.correct.is_none() {
                warnings.push(ValidationWarning {
                    question_id: Some(question.id),
                    message: "no option is marked correct, so this question can never be scored correct".into(),
                });
            }

            if question.options.len() > 26 {
                warnings.push(ValidationWarning {
                    question_id: Some(question.id),
                    message: format!(
                        "question has {} options; letters past Z use two-letter ids",
                        question.options.len()
                    ),
                });
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_DOC: &str = "# S1\n## Q1\n- [ ] a\n- [x] b\n## Q2\n- [x] c\n- [ ] d\n";

    #[test]
    fn parse_sample_document() {
        let sections = parse_document(SAMPLE_DOC);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "S1");
        assert_eq!(sections[0].questions.len(), 2);

        let q1 = &sections[0].questions[0];
        assert_eq!(q1.id, 1);
        assert_eq!(q1.text, "Q1");
        assert_eq!(q1.options.len(), 2);
        assert_eq!(q1.options[0].id, "A");
        assert_eq!(q1.options[0].text, "a");
        assert_eq!(q1.options[1].id, "B");
        assert_eq!(q1.correct.as_deref(), Some("B"));

        let q2 = &sections[0].questions[1];
        assert_eq!(q2.id, 2);
        assert_eq!(q2.correct.as_deref(), Some("A"));
    }

    #[test]
    fn question_ids_are_global_across_sections() {
        let doc = "# One\n## A?\n- [x] yes\n# Two\n## B?\n- [x] yes\n## C?\n- [x] yes\n";
        let sections = parse_document(doc);
        assert_eq!(sections.len(), 2);
        let ids: Vec<u32> = sections
            .iter()
            .flat_map(|s| s.questions.iter().map(|q| q.id))
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn question_before_heading_opens_general_section() {
        let doc = "## Orphan?\n- [x] yes\n# Named\n## Q\n- [ ] no\n";
        let sections = parse_document(doc);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, IMPLICIT_SECTION_NAME);
        assert_eq!(sections[0].questions[0].text, "Orphan?");
        assert_eq!(sections[1].name, "Named");
    }

    #[test]
    fn multiline_question_text_joins_with_newline() {
        let doc = "# S\n## Given the following code:\nfn main() {}\nwhat does it print?\n- [x] nothing\n";
        let sections = parse_document(doc);
        let q = &sections[0].questions[0];
        assert_eq!(
            q.text,
            "Given the following code:\nfn main() {}\nwhat does it print?"
        );
    }

    #[test]
    fn stray_lines_after_first_option_are_dropped() {
        let doc = "# S\n## Q\n- [ ] a\nthis is not part of the question\n- [x] b\n";
        let sections = parse_document(doc);
        let q = &sections[0].questions[0];
        assert_eq!(q.text, "Q");
        assert_eq!(q.options.len(), 2);
    }

    #[test]
    fn near_miss_option_lines_are_not_options() {
        // `- [y]` and `-[x]` are not marker spellings; before the first real
        // option they fold into the question text.
        let doc = "# S\n## Q\n- [y] not an option\n-[x] also not\n- [x] real\n";
        let sections = parse_document(doc);
        let q = &sections[0].questions[0];
        assert_eq!(q.options.len(), 1);
        assert_eq!(q.options[0].text, "real");
        assert_eq!(q.text, "Q\n- [y] not an option\n-[x] also not");
    }

    #[test]
    fn last_marked_option_wins() {
        let doc = "# S\n## Q\n- [x] first\n- [ ] middle\n- [X] last\n";
        let sections = parse_document(doc);
        assert_eq!(sections[0].questions[0].correct.as_deref(), Some("C"));
    }

    #[test]
    fn uppercase_marker_is_correct() {
        let doc = "# S\n## Q\n- [ ] a\n- [X] b\n";
        let sections = parse_document(doc);
        assert_eq!(sections[0].questions[0].correct.as_deref(), Some("B"));
    }

    #[test]
    fn question_with_no_options_is_retained() {
        let doc = "# S\n## Essay question\n## Next\n- [x] a\n";
        let sections = parse_document(doc);
        assert_eq!(sections[0].questions.len(), 2);
        let essay = &sections[0].questions[0];
        assert!(essay.options.is_empty());
        assert_eq!(essay.correct, None);
    }

    #[test]
    fn no_marked_option_leaves_correct_absent() {
        let doc = "# S\n## Q\n- [ ] a\n- [ ] b\n";
        let sections = parse_document(doc);
        assert_eq!(sections[0].questions[0].correct, None);
    }

    #[test]
    fn whitespace_and_blank_lines_are_tolerated() {
        let doc = "\n  # Padded  \n\n  ## Question?  \n\n  - [x] yes  \n\n";
        let sections = parse_document(doc);
        assert_eq!(sections[0].name, "Padded");
        assert_eq!(sections[0].questions[0].text, "Question?");
        assert_eq!(sections[0].questions[0].options[0].text, "yes");
    }

    #[test]
    fn option_text_survives_round_trip() {
        let doc = "# S\n## Q\n- [ ] plain text\n- [x] text with [brackets] inside\n";
        let sections = parse_document(doc);
        let opts = &sections[0].questions[0].options;
        assert_eq!(opts[0].text, "plain text");
        assert_eq!(opts[1].text, "text with [brackets] inside");
    }

    #[test]
    fn options_outside_any_question_are_ignored() {
        let doc = "# S\n- [x] floating\n## Q\n- [ ] a\n";
        let sections = parse_document(doc);
        assert_eq!(sections[0].questions.len(), 1);
        assert_eq!(sections[0].questions[0].options.len(), 1);
    }

    #[test]
    fn empty_document_parses_to_no_sections() {
        assert!(parse_document("").is_empty());
        assert!(parse_document("\n\n   \n").is_empty());
    }

    #[test]
    fn load_missing_file_yields_empty_exam() {
        let dir = tempfile::tempdir().unwrap();
        let sections = load_question_file(&dir.path().join("nope.md")).unwrap();
        assert!(sections.is_empty());
    }

    #[test]
    fn load_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.md");
        std::fs::write(&path, SAMPLE_DOC).unwrap();

        let sections = load_question_file(&path).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].questions.len(), 2);
    }

    #[test]
    fn validate_flags_structural_issues() {
        let doc = "# Empty\n# S\n## No options\n## Unmarked\n- [ ] a\n- [ ] b\n## Fine\n- [x] a\n";
        let sections = parse_document(doc);
        let warnings = validate_document(&sections);

        assert!(warnings
            .iter()
            .any(|w| w.question_id.is_none() && w.message.contains("no questions")));
        assert!(warnings
            .iter()
            .any(|w| w.question_id == Some(1) && w.message.contains("no options")));
        assert!(warnings
            .iter()
            .any(|w| w.question_id == Some(2) && w.message.contains("marked correct")));
        assert!(!warnings.iter().any(|w| w.question_id == Some(3)));
    }

    #[test]
    fn validate_clean_document_has_no_warnings() {
        let warnings = validate_document(&parse_document(SAMPLE_DOC));
        assert!(warnings.is_empty());
    }
}
