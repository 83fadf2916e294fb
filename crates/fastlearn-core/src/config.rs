//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level fastlearn configuration, read from `fastlearn.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FastlearnConfig {
    /// Category the generator defaults to.
    #[serde(default = "default_category")]
    pub default_category: String,
    /// Simulated question-generation delay in milliseconds. Cosmetic only;
    /// zero disables it.
    #[serde(default = "default_generation_delay")]
    pub generation_delay_ms: u64,
    /// Directory reports are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_category() -> String {
    "general".to_string()
}
fn default_generation_delay() -> u64 {
    2000
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./fastlearn-results")
}

impl Default for FastlearnConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            generation_delay_ms: default_generation_delay(),
            output_dir: default_output_dir(),
        }
    }
}

/// Load configuration from an explicit path, or from `./fastlearn.toml` if
/// present, falling back to defaults.
pub fn load_config_from(path: Option<&Path>) -> Result<FastlearnConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from("fastlearn.toml");
            if !default.exists() {
                return Ok(FastlearnConfig::default());
            }
            default
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: FastlearnConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    Ok(config)
}
