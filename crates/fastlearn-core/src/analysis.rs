//! Assessment scoring and analysis.
//!
//! A single pass over the question/answer pairs produces an [`Analysis`]:
//! the overall score, accuracy broken down by category and difficulty, and
//! the strength/weakness/recommendation statements derived from them.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::{Difficulty, Question};

/// A category or difficulty group at or above this accuracy is a strength.
pub const STRONG_ACCURACY: u32 = 80;
/// A category or difficulty group at or below this accuracy is a weakness.
///
/// Accuracies strictly between the two thresholds produce neither a
/// strength nor a weakness statement; "adequate" performance stays silent.
pub const WEAK_ACCURACY: u32 = 50;

/// The result of scoring one completed assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Overall score as a whole percentage in [0, 100].
    pub overall_score: u32,
    /// Number of correctly answered questions.
    pub correct_answers: usize,
    /// Total number of questions.
    pub total_questions: usize,
    /// Elapsed time in whole seconds, as reported by the caller.
    pub time_spent_secs: u64,
    /// Accuracy percentage per category, keyed by category label.
    pub accuracy_by_category: BTreeMap<String, u32>,
    /// Accuracy percentage per difficulty level.
    pub accuracy_by_difficulty: BTreeMap<Difficulty, u32>,
    /// What the learner did well.
    pub strengths: Vec<String>,
    /// Where the learner needs improvement.
    pub weaknesses: Vec<String>,
    /// Suggested next steps.
    pub recommendations: Vec<String>,
}

/// Correct/total tally for one group, in first-appearance order.
struct GroupTally<K> {
    key: K,
    correct: usize,
    total: usize,
}

fn tally<'a, K: PartialEq, I>(pairs: I) -> Vec<GroupTally<K>>
where
    I: Iterator<Item = (K, bool)>,
{
    let mut groups: Vec<GroupTally<K>> = Vec::new();
    for (key, is_correct) in pairs {
        let idx = match groups.iter().position(|g| g.key == key) {
            Some(i) => i,
            None => {
                groups.push(GroupTally {
                    key,
                    correct: 0,
                    total: 0,
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[idx];
        group.total += 1;
        if is_correct {
            group.correct += 1;
        }
    }
    groups
}

/// Whole-number percentage, rounded half up. An empty group is 0, never a
/// division by zero.
fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((correct as f64 / total as f64) * 100.0).round() as u32
}

/// Score an answered assessment.
///
/// `answers` is index-aligned with `questions`; `None` entries are counted
/// as incorrect, never as an error. This is a pure function: identical
/// inputs always produce an identical `Analysis` (the only time involved is
/// the `time_spent` the caller passes in).
///
/// Callers are expected not to invoke this with an empty question list
/// ([`crate::session::AssessmentSession::new`] refuses one); if they do
/// anyway, every accuracy degrades to 0 rather than panicking.
pub fn analyze(questions: &[Question], answers: &[Option<usize>], time_spent: Duration) -> Analysis {
    let is_correct =
        |index: usize| answers.get(index).copied().flatten() == Some(questions[index].correct_answer);

    let correct_answers = (0..questions.len()).filter(|&i| is_correct(i)).count();
    let overall_score = percentage(correct_answers, questions.len());

    let by_category = tally(
        questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.category.as_str(), is_correct(i))),
    );
    let by_difficulty = tally(
        questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.difficulty, is_correct(i))),
    );

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut recommendations = Vec::new();

    for group in &by_category {
        let accuracy = percentage(group.correct, group.total);
        if accuracy >= STRONG_ACCURACY {
            strengths.push(format!(
                "Strong performance in {} ({accuracy}%)",
                group.key
            ));
        } else if accuracy <= WEAK_ACCURACY {
            weaknesses.push(format!(
                "Needs improvement in {} ({accuracy}%)",
                group.key
            ));
            recommendations.push(format!(
                "Focus on {} fundamentals and practice more {}-related questions",
                group.key, group.key
            ));
        }
    }

    for group in &by_difficulty {
        if percentage(group.correct, group.total) <= WEAK_ACCURACY {
            recommendations.push(format!(
                "Practice more {} level questions to build confidence",
                group.key
            ));
        }
    }

    if overall_score >= STRONG_ACCURACY {
        strengths.push("Excellent overall performance!".to_string());
        recommendations.push("Consider advancing to more challenging topics".to_string());
    } else if overall_score <= WEAK_ACCURACY {
        recommendations.push("Review fundamental concepts before moving forward".to_string());
        recommendations.push("Take the assessment again after studying".to_string());
    }

    Analysis {
        overall_score,
        correct_answers,
        total_questions: questions.len(),
        time_spent_secs: time_spent.as_secs_f64().round() as u64,
        accuracy_by_category: by_category
            .iter()
            .map(|g| (g.key.to_string(), percentage(g.correct, g.total)))
            .collect(),
        accuracy_by_difficulty: by_difficulty
            .iter()
            .map(|g| (g.key, percentage(g.correct, g.total)))
            .collect(),
        strengths,
        weaknesses,
        recommendations,
    }
}
