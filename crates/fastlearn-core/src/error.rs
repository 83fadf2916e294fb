//! Session error types.
//!
//! Scoring itself is total (unanswered questions and empty groups degrade
//! to zero accuracy), so the only real failure modes live at the session
//! boundary: starting with nothing to ask, or selecting an option that
//! does not exist.

use thiserror::Error;

/// Errors from driving an assessment session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A session cannot be started over zero questions; a score over an
    /// empty assessment is undefined.
    #[error("an assessment needs at least one question")]
    NoQuestions,

    /// The selected option index does not exist on the current question.
    #[error("option {index} is out of range for question '{question_id}' ({available} options)")]
    OptionOutOfRange {
        question_id: String,
        index: usize,
        available: usize,
    },
}
