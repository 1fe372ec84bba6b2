//! Core data model types for quizmark.
//!
//! These are the fundamental types that the entire quizmark system uses to
//! represent a parsed question document: sections, questions, and their
//! lettered answer options.

use serde::{Deserialize, Serialize};

/// A named group of questions, produced by one top-level heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Display label, taken from the heading text.
    pub name: String,
    /// Questions in parse order, which is also display order.
    pub questions: Vec<Question>,
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Globally unique id, assigned sequentially across the whole document.
    /// Never reset at section boundaries.
    pub id: u32,
    /// Question body. Continuation lines are joined with `\n`.
    pub text: String,
    /// Answer options in parse order.
    pub options: Vec<AnswerOption>,
    /// Letter of the option marked correct in the source, if any was marked.
    #[serde(default)]
    pub correct: Option<String>,
}

/// One selectable answer choice, identified by a position-derived letter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Letter id assigned by position at parse time (first option is "A").
    pub id: String,
    /// Option label text.
    pub text: String,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            questions: Vec::new(),
        }
    }
}

/// Convert a 0-based option position into its letter id.
///
/// Positions 0..=25 map to "A".."Z". Positions past that extend
/// spreadsheet-style: 26 is "AA", 27 is "AB", and so on, so lettering never
/// runs out.
pub fn option_letter(index: usize) -> String {
    let mut letters = String::new();
    let mut n = index;
    loop {
        letters.insert(0, (b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters
}
