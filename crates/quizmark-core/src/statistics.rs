//! Section rollups and whole-exam scoring totals.
//!
//! Aggregates per-question evaluations into the analytics payload returned
//! after a submission: per-section counts, timing, and score, plus overall
//! totals under the +4/−1/0 scheme.

use serde::{Deserialize, Serialize};

use crate::model::Section;
use crate::scorer::{analyze_question, QuestionAnalysis, QuestionStatus, Submission, POINTS_CORRECT};

/// Aggregates for one section, accumulated in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStats {
    pub name: String,
    /// Number of questions in the section.
    pub total: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub unanswered: u32,
    /// Cumulative seconds spent in the section.
    pub time_taken: f64,
    /// Average seconds per question, 0 when the section has no questions.
    pub avg_time: f64,
    /// Sum of points earned in the section.
    pub score: i64,
}

/// The full analytics payload for a graded submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamAnalytics {
    pub correct_count: u32,
    pub total_questions: u32,
    /// Questions with any non-empty submitted answer, right or wrong.
    pub count_answered: u32,
    /// Questions left unanswered.
    pub count_missed: u32,
    /// Sum of all points under the +4/−1/0 scheme.
    pub net_score: i64,
    /// Total questions × 4.
    pub max_possible_score: i64,
    pub sections: Vec<SectionStats>,
    pub question_analysis: Vec<QuestionAnalysis>,
}

/// Score a submission against a parsed document.
///
/// Pure: inputs are never mutated, and identical inputs produce identical
/// analytics. Sections are reported in document order; a section with zero
/// questions still appears with zero-valued fields.
pub fn score_exam(sections: &[Section], submission: &Submission) -> ExamAnalytics {
    let mut section_stats = Vec::with_capacity(sections.len());
    let mut question_analysis = Vec::new();

    let mut correct_count = 0u32;
    let mut total_questions = 0u32;
    let mut count_answered = 0u32;
    let mut net_score = 0i64;

    for section in sections {
        let mut stats = SectionStats {
            name: section.name.clone(),
            total: section.questions.len() as u32,
            correct: 0,
            incorrect: 0,
            unanswered: 0,
            time_taken: 0.0,
            avg_time: 0.0,
            score: 0,
        };

        for question in &section.questions {
            let analysis = analyze_question(question, &section.name, submission);

            stats.time_taken += analysis.time_spent;
            stats.score += analysis.points;
            match analysis.status {
                QuestionStatus::Correct => stats.correct += 1,
                QuestionStatus::Incorrect => stats.incorrect += 1,
                QuestionStatus::Unanswered => stats.unanswered += 1,
            }

            question_analysis.push(analysis);
        }

        if stats.total > 0 {
            stats.avg_time = stats.time_taken / f64::from(stats.total);
        }

        correct_count += stats.correct;
        total_questions += stats.total;
        count_answered += stats.correct + stats.incorrect;
        net_score += stats.score;

        section_stats.push(stats);
    }

    ExamAnalytics {
        correct_count,
        total_questions,
        count_answered,
        count_missed: total_questions - count_answered,
        net_score,
        max_possible_score: i64::from(total_questions) * POINTS_CORRECT,
        sections: section_stats,
        question_analysis,
    }
}
