//! The `fastlearn compare` command.

use std::path::PathBuf;

use anyhow::Result;

use fastlearn_core::report::AssessmentReport;

pub fn execute(
    baseline_path: PathBuf,
    current_path: PathBuf,
    threshold: u32,
    fail_on_decline: bool,
    format: String,
) -> Result<()> {
    let baseline = AssessmentReport::load_json(&baseline_path)?;
    let current = AssessmentReport::load_json(&current_path)?;

    let progress = current.compare(&baseline, threshold);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", progress.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&progress)?);
        }
        _ => {
            println!(
                "Retake comparison: overall {:+} points, {} improved, {} declined, {} unchanged",
                progress.overall_delta,
                progress.improved.len(),
                progress.declined.len(),
                progress.unchanged
            );

            if !progress.improved.is_empty() {
                println!("\nImproved:");
                for d in &progress.improved {
                    println!(
                        "  {} {}% -> {}% ({:+}%)",
                        d.category, d.baseline_accuracy, d.current_accuracy, d.delta
                    );
                }
            }

            if !progress.declined.is_empty() {
                println!("\nDeclined:");
                for d in &progress.declined {
                    println!(
                        "  {} {}% -> {}% ({:+}%)",
                        d.category, d.baseline_accuracy, d.current_accuracy, d.delta
                    );
                }
            }

            if progress.new_categories > 0 {
                println!("\n{} new categor(ies)", progress.new_categories);
            }
            if progress.dropped_categories > 0 {
                println!("{} dropped categor(ies)", progress.dropped_categories);
            }
        }
    }

    if fail_on_decline && progress.has_declines() {
        std::process::exit(1);
    }

    Ok(())
}
