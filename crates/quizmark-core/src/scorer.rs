//! Per-question response evaluation.
//!
//! Judges a learner's submitted answers against the parsed answer key under
//! the +4/−1/0 marking scheme and produces the per-question analysis records
//! revealed after submission.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{AnswerOption, Question};

/// Points awarded for a correct answer.
pub const POINTS_CORRECT: i64 = 4;
/// Points deducted for an incorrect answer.
pub const POINTS_INCORRECT: i64 = -1;
/// Points for an unanswered question.
pub const POINTS_UNANSWERED: i64 = 0;

/// A learner's submitted exam: answers and per-question time, both keyed by
/// the string form of the question id.
///
/// Entries for unknown question ids are simply never looked up. An absent or
/// empty-string answer counts as unanswered; absent time entries count as 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(default)]
    pub responses: HashMap<String, String>,
    #[serde(default)]
    pub time_log: HashMap<String, f64>,
}

impl Submission {
    /// The answer submitted for a question, if any. Empty strings are
    /// treated identically to missing entries.
    pub fn answer_for(&self, question_id: u32) -> Option<&str> {
        self.responses
            .get(&question_id.to_string())
            .map(String::as_str)
            .filter(|answer| !answer.is_empty())
    }

    /// Seconds spent on a question, 0 when unrecorded.
    pub fn time_for(&self, question_id: u32) -> f64 {
        self.time_log
            .get(&question_id.to_string())
            .copied()
            .unwrap_or(0.0)
    }
}

/// Outcome of judging one submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStatus {
    Correct,
    Incorrect,
    Unanswered,
}

impl QuestionStatus {
    /// Points under the +4/−1/0 scheme.
    pub fn points(self) -> i64 {
        match self {
            QuestionStatus::Correct => POINTS_CORRECT,
            QuestionStatus::Incorrect => POINTS_INCORRECT,
            QuestionStatus::Unanswered => POINTS_UNANSWERED,
        }
    }
}

/// Judge a submitted answer against a question's answer key.
///
/// A question whose source never marked an option correct has no key, so no
/// submitted answer can ever be judged correct for it.
pub fn judge(question: &Question, answer: Option<&str>) -> QuestionStatus {
    match answer {
        None => QuestionStatus::Unanswered,
        Some(answer) if question.correct.as_deref() == Some(answer) => QuestionStatus::Correct,
        Some(_) => QuestionStatus::Incorrect,
    }
}

/// Everything revealed about one question after submission, including the
/// correct answer (safe to expose post-submission).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAnalysis {
    pub id: u32,
    /// Name of the section the question belongs to.
    pub section: String,
    pub text: String,
    pub options: Vec<AnswerOption>,
    /// The learner's answer, `None` when unanswered.
    pub user_answer: Option<String>,
    /// The recorded correct option, `None` when the source never marked one.
    pub correct_answer: Option<String>,
    /// Seconds spent on this question.
    pub time_spent: f64,
    pub status: QuestionStatus,
    pub points: i64,
}

/// Evaluate one question against a submission.
pub fn analyze_question(
    question: &Question,
    section_name: &str,
    submission: &Submission,
) -> QuestionAnalysis {
    let answer = submission.answer_for(question.id);
    let status = judge(question, answer);

    QuestionAnalysis {
        id: question.id,
        section: section_name.to_string(),
        text: question.text.clone(),
        options: question.options.clone(),
        user_answer: answer.map(str::to_string),
        correct_answer: question.correct.clone(),
        time_spent: submission.time_for(question.id),
        status,
        points: status.points(),
    }
}
