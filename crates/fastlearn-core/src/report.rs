//! Assessment report types with JSON persistence and retake comparison.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::Analysis;

/// A saved record of one scored assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the question set that was run.
    pub question_set: QuestionSetSummary,
    /// The category the assessment focused on.
    pub category: String,
    /// The scoring result.
    pub analysis: Analysis,
}

/// Summary of a question set (without the full question definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSetSummary {
    pub id: String,
    pub name: String,
    pub question_count: usize,
}

impl AssessmentReport {
    pub fn new(question_set: QuestionSetSummary, category: String, analysis: Analysis) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            question_set,
            category,
            analysis,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AssessmentReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Compare this report against an earlier attempt.
    ///
    /// A category counts as improved or declined only when its accuracy
    /// moved by more than `threshold` percentage points.
    pub fn compare(&self, baseline: &AssessmentReport, threshold: u32) -> ProgressReport {
        let mut improved = Vec::new();
        let mut declined = Vec::new();
        let mut unchanged = 0usize;
        let mut new_categories = 0usize;

        for (category, &current) in &self.analysis.accuracy_by_category {
            match baseline.analysis.accuracy_by_category.get(category) {
                Some(&before) => {
                    let delta = current as i64 - before as i64;
                    if delta > threshold as i64 {
                        improved.push(CategoryDelta {
                            category: category.clone(),
                            baseline_accuracy: before,
                            current_accuracy: current,
                            delta,
                        });
                    } else if delta < -(threshold as i64) {
                        declined.push(CategoryDelta {
                            category: category.clone(),
                            baseline_accuracy: before,
                            current_accuracy: current,
                            delta,
                        });
                    } else {
                        unchanged += 1;
                    }
                }
                None => new_categories += 1,
            }
        }

        let dropped_categories = baseline
            .analysis
            .accuracy_by_category
            .keys()
            .filter(|c| !self.analysis.accuracy_by_category.contains_key(*c))
            .count();

        ProgressReport {
            overall_delta: self.analysis.overall_score as i64
                - baseline.analysis.overall_score as i64,
            improved,
            declined,
            unchanged,
            new_categories,
            dropped_categories,
        }
    }
}

/// Result of comparing two assessment reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Change in overall score, in percentage points.
    pub overall_delta: i64,
    /// Categories where accuracy went up.
    pub improved: Vec<CategoryDelta>,
    /// Categories where accuracy went down.
    pub declined: Vec<CategoryDelta>,
    /// Categories with no significant change.
    pub unchanged: usize,
    /// Categories in the current report but not the baseline.
    pub new_categories: usize,
    /// Categories in the baseline but not the current report.
    pub dropped_categories: usize,
}

/// One category's accuracy movement between two attempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDelta {
    pub category: String,
    pub baseline_accuracy: u32,
    pub current_accuracy: u32,
    pub delta: i64,
}

impl ProgressReport {
    /// Format the progress report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Summary:** overall {:+} points, {} improved, {} declined, {} unchanged\n\n",
            self.overall_delta,
            self.improved.len(),
            self.declined.len(),
            self.unchanged
        ));

        let mut table = |title: &str, deltas: &[CategoryDelta]| {
            if deltas.is_empty() {
                return;
            }
            md.push_str(&format!("### {title}\n\n"));
            md.push_str("| Category | Baseline | Current | Delta |\n");
            md.push_str("|----------|----------|---------|-------|\n");
            for d in deltas {
                md.push_str(&format!(
                    "| {} | {}% | {}% | {:+}% |\n",
                    d.category, d.baseline_accuracy, d.current_accuracy, d.delta
                ));
            }
            md.push('\n');
        };

        table("Improved", &self.improved);
        table("Declined", &self.declined);

        md
    }

    /// Returns `true` if any category got worse.
    pub fn has_declines(&self) -> bool {
        !self.declined.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::model::{Difficulty, Question};
    use std::time::Duration;

    fn make_questions(categories: &[&str]) -> Vec<Question> {
        categories
            .iter()
            .enumerate()
            .map(|(i, category)| Question {
                id: format!("q{i}"),
                prompt: format!("question {i}"),
                options: vec!["a".into(), "b".into()],
                correct_answer: 0,
                explanation: String::new(),
                difficulty: Difficulty::Medium,
                category: category.to_string(),
                ai_generated: false,
            })
            .collect()
    }

    fn make_report(categories: &[&str], answers: &[Option<usize>]) -> AssessmentReport {
        let questions = make_questions(categories);
        let analysis = analyze(&questions, answers, Duration::from_secs(10));
        AssessmentReport::new(
            QuestionSetSummary {
                id: "test".into(),
                name: "Test".into(),
                question_count: questions.len(),
            },
            "general".into(),
            analysis,
        )
    }

    #[test]
    fn identical_attempts_are_unchanged() {
        let categories = ["programming", "programming", "general", "general"];
        let answers = vec![Some(0), Some(1), Some(0), Some(0)];
        let baseline = make_report(&categories, &answers);
        let current = make_report(&categories, &answers);

        let progress = current.compare(&baseline, 5);
        assert!(progress.improved.is_empty());
        assert!(progress.declined.is_empty());
        assert_eq!(progress.unchanged, 2);
        assert_eq!(progress.overall_delta, 0);
        assert!(!progress.has_declines());
    }

    #[test]
    fn improvement_and_decline_are_detected() {
        let categories = ["programming", "programming", "general", "general"];
        let baseline = make_report(&categories, &[Some(1), Some(1), Some(0), Some(0)]);
        let current = make_report(&categories, &[Some(0), Some(0), Some(1), Some(1)]);

        let progress = current.compare(&baseline, 5);
        assert_eq!(progress.improved.len(), 1);
        assert_eq!(progress.improved[0].category, "programming");
        assert_eq!(progress.improved[0].delta, 100);
        assert_eq!(progress.declined.len(), 1);
        assert_eq!(progress.declined[0].category, "general");
        assert!(progress.has_declines());
    }

    #[test]
    fn threshold_suppresses_small_movements() {
        // 2 of 3 vs 3 of 3 in one category: 67% -> 100% is above a 50-point
        // threshold only if the move exceeds it.
        let categories = ["general", "general", "general"];
        let baseline = make_report(&categories, &[Some(0), Some(0), Some(1)]);
        let current = make_report(&categories, &[Some(0), Some(0), Some(0)]);

        let progress = current.compare(&baseline, 50);
        assert!(progress.improved.is_empty());
        assert_eq!(progress.unchanged, 1);
    }

    #[test]
    fn new_and_dropped_categories_are_counted() {
        let baseline = make_report(&["general"], &[Some(0)]);
        let current = make_report(&["programming"], &[Some(0)]);

        let progress = current.compare(&baseline, 5);
        assert_eq!(progress.new_categories, 1);
        assert_eq!(progress.dropped_categories, 1);
    }

    #[test]
    fn json_roundtrip() {
        let report = make_report(&["general", "programming"], &[Some(0), Some(1)]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        report.save_json(&path).unwrap();
        let loaded = AssessmentReport::load_json(&path).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.analysis, report.analysis);
    }

    #[test]
    fn markdown_output() {
        let categories = ["programming", "general"];
        let baseline = make_report(&categories, &[Some(1), Some(0)]);
        let current = make_report(&categories, &[Some(0), Some(1)]);

        let md = current.compare(&baseline, 5).to_markdown();
        assert!(md.contains("Improved"));
        assert!(md.contains("Declined"));
        assert!(md.contains("programming"));
    }
}
