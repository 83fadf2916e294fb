//! The `fastlearn assess` command.

use std::io::BufRead;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use fastlearn_core::bank::{parse_question_set, validate_question_set};
use fastlearn_core::config::load_config_from;
use fastlearn_core::generator::{GenerateRequest, QuestionGenerator, TemplateGenerator};
use fastlearn_core::model::Question;
use fastlearn_core::report::{AssessmentReport, QuestionSetSummary};
use fastlearn_core::session::AssessmentSession;

pub async fn execute(
    category: Option<String>,
    question_set: Option<PathBuf>,
    instant: bool,
    format: String,
    output: Option<PathBuf>,
    save: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let category = category.unwrap_or_else(|| config.default_category.clone());

    let (summary, questions) = match question_set {
        Some(path) => {
            let set = parse_question_set(&path)?;
            for warning in validate_question_set(&set) {
                tracing::warn!(
                    question = warning.question_id.as_deref().unwrap_or("-"),
                    "{}",
                    warning.message
                );
            }
            anyhow::ensure!(
                !set.questions.is_empty(),
                "question set '{}' has no questions",
                set.id
            );
            let summary = QuestionSetSummary {
                id: set.id,
                name: set.name,
                question_count: set.questions.len(),
            };
            (summary, set.questions)
        }
        None => {
            let delay = if instant {
                Duration::ZERO
            } else {
                Duration::from_millis(config.generation_delay_ms)
            };
            let generator = TemplateGenerator::new(delay);
            eprintln!("Generating {category} questions...");
            let request = GenerateRequest {
                category: category.clone(),
            };
            let questions = generator.generate(&request).await?;
            let summary = QuestionSetSummary {
                id: format!("generated-{category}"),
                name: format!("Generated {category} assessment"),
                question_count: questions.len(),
            };
            (summary, questions)
        }
    };

    let mut session = AssessmentSession::new(questions)?;
    run_quiz(&mut session)?;
    let analysis = session.finish();

    let report = AssessmentReport::new(summary, category, analysis);

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "markdown" | "md" => println!("{}", fastlearn_report::markdown::generate_markdown(&report)),
        _ => println!("{}", fastlearn_report::text::render_report(&report)),
    }

    let output = output.or_else(|| {
        save.then(|| {
            config
                .output_dir
                .join(format!("assessment-{}.json", report.id))
        })
    });
    if let Some(path) = output {
        report.save_json(&path)?;
        eprintln!("Report saved to {}", path.display());
    }

    Ok(())
}

fn print_question(session: &AssessmentSession) {
    let question = session.current_question();
    eprintln!();
    eprintln!(
        "Question {} of {} [{} / {}]",
        session.position() + 1,
        session.total_questions(),
        question.category,
        question.difficulty
    );
    eprintln!("{}", question.prompt);
    for (i, option) in question.options.iter().enumerate() {
        let marker = if session.current_answer() == Some(i) {
            "*"
        } else {
            " "
        };
        eprintln!(" {marker}{}. {option}", i + 1);
    }
    eprintln!(
        "Answer 1-{}, 's' to skip, 'b' to go back:",
        question.options.len()
    );
}

/// Drive the interactive question loop on stdin/stderr.
///
/// Stdin EOF ends the quiz early; remaining questions stay unanswered and
/// score as incorrect.
fn run_quiz(session: &mut AssessmentSession) -> Result<()> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_question(session);

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim() {
            "b" => {
                if !session.go_back() {
                    eprintln!("Already at the first question.");
                }
            }
            "s" => {
                session.skip();
                if !session.advance() {
                    break;
                }
            }
            input => match input.parse::<usize>() {
                Ok(n) if n >= 1 => match session.select_answer(n - 1) {
                    Ok(()) => {
                        if !session.advance() {
                            break;
                        }
                    }
                    Err(e) => eprintln!("{e}"),
                },
                _ => eprintln!("Unrecognized input '{input}'."),
            },
        }
    }

    Ok(())
}
