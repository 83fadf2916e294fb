//! Markdown report generator.

use std::path::Path;

use anyhow::Result;

use fastlearn_core::report::AssessmentReport;

fn push_section(md: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    md.push_str(&format!("## {title}\n\n"));
    for item in items {
        md.push_str(&format!("- {item}\n"));
    }
    md.push('\n');
}

/// Generate a standalone Markdown document from an assessment report.
pub fn generate_markdown(report: &AssessmentReport) -> String {
    let analysis = &report.analysis;
    let mut md = String::new();

    md.push_str(&format!("# Assessment report: {}\n\n", report.question_set.name));
    md.push_str(&format!(
        "Category: **{}** | Questions: {} | Taken: {}\n\n",
        report.category,
        report.question_set.question_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    md.push_str(&format!(
        "**Score: {}%** ({}/{} correct, {}s)\n\n",
        analysis.overall_score,
        analysis.correct_answers,
        analysis.total_questions,
        analysis.time_spent_secs
    ));

    md.push_str("## Performance by category\n\n");
    md.push_str("| Category | Accuracy |\n|----------|----------|\n");
    for (category, accuracy) in &analysis.accuracy_by_category {
        md.push_str(&format!("| {category} | {accuracy}% |\n"));
    }
    md.push('\n');

    md.push_str("## Performance by difficulty\n\n");
    md.push_str("| Difficulty | Accuracy |\n|------------|----------|\n");
    for (difficulty, accuracy) in &analysis.accuracy_by_difficulty {
        md.push_str(&format!("| {difficulty} | {accuracy}% |\n"));
    }
    md.push('\n');

    push_section(&mut md, "Strengths", &analysis.strengths);
    push_section(&mut md, "Areas for improvement", &analysis.weaknesses);
    push_section(&mut md, "Recommendations", &analysis.recommendations);

    md
}

/// Write a Markdown report to a file.
pub fn write_markdown_report(report: &AssessmentReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, generate_markdown(report))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastlearn_core::analysis::analyze;
    use fastlearn_core::model::{Difficulty, Question};
    use fastlearn_core::report::QuestionSetSummary;
    use std::time::Duration;

    fn sample_report() -> AssessmentReport {
        let questions: Vec<Question> = (0..4)
            .map(|i| Question {
                id: format!("q{i}"),
                prompt: format!("question {i}"),
                options: vec!["a".into(), "b".into()],
                correct_answer: 0,
                explanation: String::new(),
                difficulty: if i < 2 {
                    Difficulty::Easy
                } else {
                    Difficulty::Hard
                },
                category: "general".into(),
                ai_generated: false,
            })
            .collect();
        let answers = vec![Some(0), Some(0), Some(0), Some(0)];
        let analysis = analyze(&questions, &answers, Duration::from_secs(12));
        AssessmentReport::new(
            QuestionSetSummary {
                id: "md".into(),
                name: "Markdown Sample".into(),
                question_count: 4,
            },
            "general".into(),
            analysis,
        )
    }

    #[test]
    fn markdown_contains_tables_and_sections() {
        let md = generate_markdown(&sample_report());
        assert!(md.contains("# Assessment report: Markdown Sample"));
        assert!(md.contains("**Score: 100%** (4/4 correct, 12s)"));
        assert!(md.contains("| general | 100% |"));
        assert!(md.contains("| easy | 100% |"));
        assert!(md.contains("## Strengths"));
        assert!(md.contains("- Excellent overall performance!"));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let md = generate_markdown(&sample_report());
        // A perfect run has no weaknesses section.
        assert!(!md.contains("## Areas for improvement"));
    }

    #[test]
    fn writes_to_nested_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports/latest.md");
        write_markdown_report(&sample_report(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Assessment report"));
    }
}
