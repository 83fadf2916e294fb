//! TOML question-set parser.
//!
//! Loads question sets from TOML files and directories, and validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Difficulty, Question, QuestionSet};

/// Intermediate TOML structure for parsing question-set files.
#[derive(Debug, Deserialize)]
struct TomlQuestionFile {
    question_set: TomlQuestionSetHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestionSetHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    prompt: String,
    options: Vec<String>,
    correct_answer: usize,
    #[serde(default)]
    explanation: String,
    difficulty: String,
    category: String,
}

/// Parse a single TOML file into a `QuestionSet`.
pub fn parse_question_set(path: &Path) -> Result<QuestionSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question set file: {}", path.display()))?;

    parse_question_set_str(&content, path)
}

/// Parse a TOML string into a `QuestionSet` (useful for testing).
pub fn parse_question_set_str(content: &str, source_path: &Path) -> Result<QuestionSet> {
    let parsed: TomlQuestionFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let difficulty: Difficulty = q
                .difficulty
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question '{}': {}", q.id, e))?;

            Ok(Question {
                id: q.id,
                prompt: q.prompt,
                options: q.options,
                correct_answer: q.correct_answer,
                explanation: q.explanation,
                difficulty,
                category: q.category,
                ai_generated: false,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuestionSet {
        id: parsed.question_set.id,
        name: parsed.question_set.name,
        description: parsed.question_set.description,
        questions,
    })
}

/// Recursively load all `.toml` question-set files from a directory.
pub fn load_set_directory(dir: &Path) -> Result<Vec<QuestionSet>> {
    let mut sets = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            sets.extend(load_set_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_question_set(&path) {
                Ok(set) => sets.push(set),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(sets)
}

/// A warning from question-set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Offending question, or `None` for set-level warnings.
    pub question_id: Option<String>,
    pub message: String,
}

/// Check a question set for structural problems that would break or
/// degrade an assessment run over it.
pub fn validate_question_set(set: &QuestionSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if set.questions.is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "set has no questions and cannot be used for an assessment".into(),
        });
    }

    let mut seen_ids: Vec<&str> = Vec::new();
    for question in &set.questions {
        if seen_ids.contains(&question.id.as_str()) {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "duplicate question id".into(),
            });
        } else {
            seen_ids.push(&question.id);
        }

        if question.prompt.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "prompt is empty".into(),
            });
        }

        if question.options.len() < 2 {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!(
                    "only {} option(s); multiple choice needs at least 2",
                    question.options.len()
                ),
            });
        }

        if question.correct_answer >= question.options.len() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!(
                    "correct_answer index {} is out of range ({} options)",
                    question.correct_answer,
                    question.options.len()
                ),
            });
        }

        if question.category.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "category is empty".into(),
            });
        }
    }

    warnings
}
