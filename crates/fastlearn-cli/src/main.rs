//! fastlearn CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "fastlearn", version, about = "Adaptive learning assessment tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an assessment
    Assess {
        /// Category to generate questions for (e.g. "programming", "ai")
        #[arg(long)]
        category: Option<String>,

        /// Run a TOML question set instead of the built-in generator
        #[arg(long)]
        question_set: Option<PathBuf>,

        /// Skip the simulated generation delay
        #[arg(long)]
        instant: bool,

        /// Output format: text, markdown, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Save the JSON report to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Save the JSON report into the configured output directory
        #[arg(long)]
        save: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show the learning path
    Path {
        /// Filter by module difficulty (beginner, intermediate, advanced, expert)
        #[arg(long)]
        difficulty: Option<String>,

        /// Search modules by name or difficulty label
        #[arg(long)]
        search: Option<String>,
    },

    /// List built-in categories and popular topics
    Categories,

    /// Compare two saved assessment reports
    Compare {
        /// Baseline report JSON
        #[arg(long)]
        baseline: PathBuf,

        /// Current report JSON
        #[arg(long)]
        current: PathBuf,

        /// Minimum accuracy movement (percentage points) to count
        #[arg(long, default_value = "5")]
        threshold: u32,

        /// Exit code 1 if any category declined
        #[arg(long)]
        fail_on_decline: bool,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate question-set TOML files
    Validate {
        /// Path to question-set file or directory
        #[arg(long)]
        question_set: PathBuf,
    },

    /// Create starter config and example question set
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fastlearn=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Assess {
            category,
            question_set,
            instant,
            format,
            output,
            save,
            config,
        } => {
            commands::assess::execute(category, question_set, instant, format, output, save, config)
                .await
        }
        Commands::Path { difficulty, search } => commands::path::execute(difficulty, search),
        Commands::Categories => commands::categories::execute(),
        Commands::Compare {
            baseline,
            current,
            threshold,
            fail_on_decline,
            format,
        } => commands::compare::execute(baseline, current, threshold, fail_on_decline, format),
        Commands::Validate { question_set } => commands::validate::execute(question_set),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
