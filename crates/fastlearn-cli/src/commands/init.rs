//! The `fastlearn init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create fastlearn.toml
    if std::path::Path::new("fastlearn.toml").exists() {
        println!("fastlearn.toml already exists, skipping.");
    } else {
        std::fs::write("fastlearn.toml", SAMPLE_CONFIG)?;
        println!("Created fastlearn.toml");
    }

    // Create example question set
    std::fs::create_dir_all("question-sets")?;
    let example_path = std::path::Path::new("question-sets/example.toml");
    if example_path.exists() {
        println!("question-sets/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUESTION_SET)?;
        println!("Created question-sets/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: fastlearn validate --question-set question-sets/example.toml");
    println!("  2. Run: fastlearn assess --question-set question-sets/example.toml");
    println!("  3. Or generate questions: fastlearn assess --category programming");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# fastlearn configuration

# Category the built-in generator defaults to.
default_category = "general"

# Simulated question-generation delay in milliseconds (0 disables it).
generation_delay_ms = 2000

# Where --save puts JSON reports.
output_dir = "./fastlearn-results"
"#;

const EXAMPLE_QUESTION_SET: &str = r#"[question_set]
id = "example"
name = "Example Question Set"
description = "A simple example question set to get started"

[[questions]]
id = "html_acronym"
prompt = "What does HTML stand for?"
options = [
    "HyperText Markup Language",
    "HighText Machine Language",
    "Hyperlink and Text Markup Language",
    "Home Tool Markup Language",
]
correct_answer = 0
explanation = "HTML is the standard markup language for web pages."
difficulty = "easy"
category = "general"

[[questions]]
id = "rust_ownership"
prompt = "What does Rust's ownership system primarily prevent?"
options = [
    "Use-after-free and data races",
    "Slow compile times",
    "Integer overflow",
    "Stack overflows",
]
correct_answer = 0
explanation = "Ownership and borrowing rule out whole classes of memory bugs at compile time."
difficulty = "medium"
category = "programming"

[[questions]]
id = "overfitting"
prompt = "A model that performs well on training data but poorly on new data is said to be:"
options = ["Overfitting", "Underfitting", "Regularized", "Converged"]
correct_answer = 0
explanation = "Overfitting means the model memorized the training set instead of generalizing."
difficulty = "medium"
category = "ai"
"#;
