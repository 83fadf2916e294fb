//! Assessment session state.
//!
//! An [`AssessmentSession`] owns the question list, the index-aligned
//! answer sheet, and the cursor position while a learner works through an
//! assessment. Scoring is a one-way transition: [`AssessmentSession::finish`]
//! consumes the session, so a scored session cannot be answered further.

use std::time::{Duration, Instant};

use crate::analysis::{analyze, Analysis};
use crate::error::SessionError;
use crate::model::{AnswerSheet, Question};

/// In-progress assessment state.
#[derive(Debug)]
pub struct AssessmentSession {
    questions: Vec<Question>,
    answers: AnswerSheet,
    current: usize,
    started_at: Instant,
}

impl AssessmentSession {
    /// Start a session over the given questions.
    ///
    /// Returns [`SessionError::NoQuestions`] for an empty list; scoring over
    /// zero questions is undefined and must not be reachable.
    pub fn new(questions: Vec<Question>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        let answers = vec![None; questions.len()];
        Ok(Self {
            questions,
            answers,
            current: 0,
            started_at: Instant::now(),
        })
    }

    /// The question the cursor is on.
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    /// Zero-based cursor position.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// The answer recorded for the current question, if any.
    pub fn current_answer(&self) -> Option<usize> {
        self.answers[self.current]
    }

    /// Whether the cursor is on the last question.
    pub fn at_last_question(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// Completion percentage based on cursor position, matching a
    /// "question N of M" progress bar.
    pub fn progress_percent(&self) -> u32 {
        (((self.current + 1) as f64 / self.questions.len() as f64) * 100.0).round() as u32
    }

    /// Record an answer for the current question. Selecting again replaces
    /// the previous choice.
    pub fn select_answer(&mut self, option_index: usize) -> Result<(), SessionError> {
        let question = &self.questions[self.current];
        if option_index >= question.options.len() {
            return Err(SessionError::OptionOutOfRange {
                question_id: question.id.clone(),
                index: option_index,
                available: question.options.len(),
            });
        }
        self.answers[self.current] = Some(option_index);
        Ok(())
    }

    /// Clear the answer for the current question.
    pub fn skip(&mut self) {
        self.answers[self.current] = None;
    }

    /// Move to the next question. Returns `false` when already on the last
    /// question (the caller should finish instead).
    pub fn advance(&mut self) -> bool {
        if self.at_last_question() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Move back to the previous question. Returns `false` at the first.
    pub fn go_back(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Score the session against the wall clock since it started.
    pub fn finish(self) -> Analysis {
        let elapsed = self.started_at.elapsed();
        self.finish_with_elapsed(elapsed)
    }

    /// Score the session with a caller-supplied elapsed time. Unanswered
    /// questions count as incorrect.
    pub fn finish_with_elapsed(self, elapsed: Duration) -> Analysis {
        analyze(&self.questions, &self.answers, elapsed)
    }
}
