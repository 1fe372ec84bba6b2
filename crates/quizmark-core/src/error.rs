//! Question source error types.
//!
//! Defined in `quizmark-core` so callers can distinguish "no exam
//! configured" (a missing file, which the parser recovers as an empty
//! section list) from a broken deployment without string matching.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a question document from disk.
///
/// A missing file is deliberately not represented here: `load_question_file`
/// recovers it as an empty exam. Anything else (permissions, invalid
/// encoding) is surfaced so the caller can report a real failure.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file exists but could not be read.
    #[error("failed to read question file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// The path of the question file involved.
    pub fn path(&self) -> &std::path::Path {
        match self {
            SourceError::Unreadable { path, .. } => path,
        }
    }
}
