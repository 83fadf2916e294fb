//! Core data model types for fastlearn.
//!
//! These are the fundamental types the entire fastlearn system uses to
//! represent questions, question sets, and answer sheets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within its set.
    pub id: String,
    /// The question text shown to the learner.
    pub prompt: String,
    /// Ordered answer options.
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_answer: usize,
    /// Shown after scoring to explain the correct answer.
    #[serde(default)]
    pub explanation: String,
    /// Difficulty level.
    pub difficulty: Difficulty,
    /// Free-form subject label (e.g. "programming", "ai", "general").
    pub category: String,
    /// Whether this question came from a generator rather than a file.
    #[serde(default)]
    pub ai_generated: bool,
}

/// Question difficulty levels, ordered easiest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// A named collection of questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    /// Unique identifier for this set.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of what this set covers.
    #[serde(default)]
    pub description: String,
    /// The questions in this set.
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// One selected option index per question, index-aligned with the question
/// list. `None` means the question was left unanswered.
pub type AnswerSheet = Vec<Option<usize>>;
