//! Terminal rendering of assessment reports and the learning path.

use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::{ContentArrangement, Table};

use fastlearn_core::path::{LearningModule, PathStats};
use fastlearn_core::report::AssessmentReport;

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn push_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("\n{title}:\n"));
    for item in items {
        out.push_str(&format!("  - {item}\n"));
    }
}

/// Render a scored assessment for the terminal.
pub fn render_report(report: &AssessmentReport) -> String {
    let analysis = &report.analysis;
    let mut out = String::new();

    out.push_str(&format!(
        "Assessment complete: {} ({})\n",
        report.question_set.name, report.category
    ));
    out.push_str(&format!(
        "Score: {}% ({}/{} correct) in {}s\n",
        analysis.overall_score,
        analysis.correct_answers,
        analysis.total_questions,
        analysis.time_spent_secs
    ));

    let mut categories = new_table(vec!["Category", "Accuracy"]);
    for (category, accuracy) in &analysis.accuracy_by_category {
        categories.add_row(vec![category.clone(), format!("{accuracy}%")]);
    }
    out.push_str("\nPerformance by category:\n");
    out.push_str(&categories.to_string());
    out.push('\n');

    let mut difficulties = new_table(vec!["Difficulty", "Accuracy"]);
    for (difficulty, accuracy) in &analysis.accuracy_by_difficulty {
        difficulties.add_row(vec![difficulty.to_string(), format!("{accuracy}%")]);
    }
    out.push_str("\nPerformance by difficulty:\n");
    out.push_str(&difficulties.to_string());
    out.push('\n');

    push_list(&mut out, "Strengths", &analysis.strengths);
    push_list(&mut out, "Areas for improvement", &analysis.weaknesses);
    push_list(&mut out, "Recommendations", &analysis.recommendations);

    out
}

/// Render the (possibly filtered) learning path with its stats sidebar
/// numbers.
pub fn render_path(modules: &[&LearningModule], stats: &PathStats) -> String {
    let mut out = String::new();

    if modules.is_empty() {
        out.push_str("No modules found. Try adjusting your search or difficulty filter.\n");
    } else {
        let mut table = new_table(vec!["Module", "Difficulty", "Status", "Progress", "Est. time"]);
        for module in modules {
            table.add_row(vec![
                module.name.clone(),
                module.difficulty.to_string(),
                module.status.to_string(),
                format!("{}%", module.progress),
                format!("{}h", module.estimated_hours),
            ]);
        }
        out.push_str(&table.to_string());
        out.push('\n');
    }

    out.push_str(&format!(
        "\n{} of {} modules shown. {} skipped, {} hours saved ({}% of the path).\n",
        modules.len(),
        stats.total_modules,
        stats.skipped_modules,
        stats.hours_saved,
        stats.skipped_percent
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastlearn_core::analysis::analyze;
    use fastlearn_core::model::{Difficulty, Question};
    use fastlearn_core::path::{default_learning_path, path_stats};
    use fastlearn_core::report::QuestionSetSummary;
    use std::time::Duration;

    fn sample_report() -> AssessmentReport {
        let questions: Vec<Question> = [("programming", 0), ("programming", 0), ("general", 0)]
            .iter()
            .enumerate()
            .map(|(i, (category, correct))| Question {
                id: format!("q{i}"),
                prompt: format!("question {i}"),
                options: vec!["a".into(), "b".into()],
                correct_answer: *correct,
                explanation: String::new(),
                difficulty: Difficulty::Medium,
                category: category.to_string(),
                ai_generated: true,
            })
            .collect();
        let answers = vec![Some(0), Some(0), Some(1)];
        let analysis = analyze(&questions, &answers, Duration::from_secs(21));
        AssessmentReport::new(
            QuestionSetSummary {
                id: "sample".into(),
                name: "Sample".into(),
                question_count: questions.len(),
            },
            "general".into(),
            analysis,
        )
    }

    #[test]
    fn report_contains_score_and_breakdowns() {
        let rendered = render_report(&sample_report());
        assert!(rendered.contains("Score: 67% (2/3 correct) in 21s"));
        assert!(rendered.contains("programming"));
        assert!(rendered.contains("100%"));
        assert!(rendered.contains("Performance by difficulty"));
        assert!(rendered.contains("medium"));
    }

    #[test]
    fn report_lists_strengths_and_weaknesses() {
        let rendered = render_report(&sample_report());
        assert!(rendered.contains("Strengths:"));
        assert!(rendered.contains("Strong performance in programming (100%)"));
        assert!(rendered.contains("Areas for improvement:"));
        assert!(rendered.contains("Needs improvement in general (0%)"));
    }

    #[test]
    fn path_renders_modules_and_stats() {
        let modules = default_learning_path();
        let stats = path_stats(&modules);
        let refs: Vec<&_> = modules.iter().collect();
        let rendered = render_path(&refs, &stats);

        assert!(rendered.contains("JavaScript Basics"));
        assert!(rendered.contains("6 of 6 modules shown"));
        assert!(rendered.contains("2 hours saved (17% of the path)"));
    }

    #[test]
    fn empty_path_has_fallback_message() {
        let modules = default_learning_path();
        let stats = path_stats(&modules);
        let rendered = render_path(&[], &stats);
        assert!(rendered.contains("No modules found"));
    }
}
