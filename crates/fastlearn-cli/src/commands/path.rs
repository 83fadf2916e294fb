//! The `fastlearn path` command.

use anyhow::Result;

use fastlearn_core::path::{
    default_learning_path, filter_modules, path_stats, ModuleDifficulty, ModuleFilter,
};

pub fn execute(difficulty: Option<String>, search: Option<String>) -> Result<()> {
    let difficulty = difficulty
        .map(|d| {
            d.parse::<ModuleDifficulty>()
                .map_err(|e| anyhow::anyhow!(e))
        })
        .transpose()?;

    let modules = default_learning_path();
    let filter = ModuleFilter {
        difficulty,
        query: search.clone(),
    };
    let filtered = filter_modules(&modules, &filter);
    let stats = path_stats(&modules);

    if let Some(query) = &search {
        println!(
            "Search results for \"{query}\": {} module(s) found\n",
            filtered.len()
        );
    }
    println!("Your learning path, personalized from your assessment results:\n");
    print!("{}", fastlearn_report::text::render_path(&filtered, &stats));

    Ok(())
}
