//! The `fastlearn categories` command.

use anyhow::Result;

use fastlearn_core::generator::{BUILT_IN_CATEGORIES, POPULAR_TOPICS};

pub fn execute() -> Result<()> {
    println!("Built-in categories:");
    for category in BUILT_IN_CATEGORIES {
        println!("  {category}");
    }

    println!("\nPopular topics:");
    for (topic, category) in POPULAR_TOPICS {
        println!("  {topic}  (category: {category})");
    }

    println!("\nStart an assessment with: fastlearn assess --category <category>");

    Ok(())
}
