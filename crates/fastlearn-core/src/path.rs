//! Learning path modules and filtering.
//!
//! The learning path is the static module list shown after an assessment:
//! each module has a status, a progress percentage, and an estimated time
//! cost. Modules the assessment marked as already-known are "skipped",
//! which is where the time-saved numbers come from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a module stands in the learner's path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleStatus {
    /// Assessment showed the learner already knows this.
    Skipped,
    ToLearn,
    InProgress,
    Completed,
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleStatus::Skipped => write!(f, "skipped"),
            ModuleStatus::ToLearn => write!(f, "to-learn"),
            ModuleStatus::InProgress => write!(f, "in-progress"),
            ModuleStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Module difficulty tiers (distinct from question [`crate::model::Difficulty`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleDifficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl fmt::Display for ModuleDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleDifficulty::Beginner => write!(f, "beginner"),
            ModuleDifficulty::Intermediate => write!(f, "intermediate"),
            ModuleDifficulty::Advanced => write!(f, "advanced"),
            ModuleDifficulty::Expert => write!(f, "expert"),
        }
    }
}

impl FromStr for ModuleDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(ModuleDifficulty::Beginner),
            "intermediate" => Ok(ModuleDifficulty::Intermediate),
            "advanced" => Ok(ModuleDifficulty::Advanced),
            "expert" => Ok(ModuleDifficulty::Expert),
            other => Err(format!("unknown module difficulty: {other}")),
        }
    }
}

/// One entry in the learning path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningModule {
    pub id: String,
    pub name: String,
    pub status: ModuleStatus,
    /// Completion percentage in [0, 100].
    pub progress: u32,
    pub estimated_hours: u32,
    pub difficulty: ModuleDifficulty,
}

/// The built-in learning path.
pub fn default_learning_path() -> Vec<LearningModule> {
    let module = |id: &str, name: &str, status, progress, estimated_hours, difficulty| {
        LearningModule {
            id: id.into(),
            name: name.into(),
            status,
            progress,
            estimated_hours,
            difficulty,
        }
    };

    vec![
        module(
            "1",
            "JavaScript Basics",
            ModuleStatus::Skipped,
            100,
            2,
            ModuleDifficulty::Beginner,
        ),
        module(
            "2",
            "React Fundamentals",
            ModuleStatus::ToLearn,
            0,
            4,
            ModuleDifficulty::Intermediate,
        ),
        module(
            "3",
            "Advanced React Patterns",
            ModuleStatus::ToLearn,
            0,
            6,
            ModuleDifficulty::Advanced,
        ),
        module(
            "4",
            "State Management",
            ModuleStatus::ToLearn,
            0,
            5,
            ModuleDifficulty::Intermediate,
        ),
        module(
            "5",
            "Performance Optimization",
            ModuleStatus::ToLearn,
            0,
            8,
            ModuleDifficulty::Expert,
        ),
        module(
            "6",
            "Testing & Deployment",
            ModuleStatus::ToLearn,
            0,
            3,
            ModuleDifficulty::Intermediate,
        ),
    ]
}

/// Filter criteria for the module list.
#[derive(Debug, Clone, Default)]
pub struct ModuleFilter {
    /// Keep only modules at this difficulty.
    pub difficulty: Option<ModuleDifficulty>,
    /// Case-insensitive substring match over name and difficulty label.
    pub query: Option<String>,
}

impl ModuleFilter {
    pub fn matches(&self, module: &LearningModule) -> bool {
        if let Some(difficulty) = self.difficulty {
            if module.difficulty != difficulty {
                return false;
            }
        }
        if let Some(query) = &self.query {
            let query = query.to_lowercase();
            if query.is_empty() {
                return true;
            }
            return module.name.to_lowercase().contains(&query)
                || module.difficulty.to_string().contains(&query);
        }
        true
    }
}

/// Apply a filter to a module list.
pub fn filter_modules<'a>(
    modules: &'a [LearningModule],
    filter: &ModuleFilter,
) -> Vec<&'a LearningModule> {
    modules.iter().filter(|m| filter.matches(m)).collect()
}

/// Headline numbers for the path view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStats {
    pub total_modules: usize,
    pub skipped_modules: usize,
    /// Sum of estimated hours across skipped modules.
    pub hours_saved: u32,
    /// Skipped share of the whole path, as a rounded percentage.
    pub skipped_percent: u32,
}

/// Compute the stats sidebar numbers for a module list.
pub fn path_stats(modules: &[LearningModule]) -> PathStats {
    let skipped: Vec<&LearningModule> = modules
        .iter()
        .filter(|m| m.status == ModuleStatus::Skipped)
        .collect();

    let skipped_percent = if modules.is_empty() {
        0
    } else {
        ((skipped.len() as f64 / modules.len() as f64) * 100.0).round() as u32
    };

    PathStats {
        total_modules: modules.len(),
        skipped_modules: skipped.len(),
        hours_saved: skipped.iter().map(|m| m.estimated_hours).sum(),
        skipped_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_has_six_modules() {
        let modules = default_learning_path();
        assert_eq!(modules.len(), 6);
        assert_eq!(modules[0].status, ModuleStatus::Skipped);
        assert_eq!(modules[0].progress, 100);
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let modules = default_learning_path();
        let filtered = filter_modules(&modules, &ModuleFilter::default());
        assert_eq!(filtered.len(), modules.len());
    }

    #[test]
    fn filter_by_difficulty() {
        let modules = default_learning_path();
        let filter = ModuleFilter {
            difficulty: Some(ModuleDifficulty::Intermediate),
            query: None,
        };
        let filtered = filter_modules(&modules, &filter);
        assert_eq!(filtered.len(), 3);
        assert!(filtered
            .iter()
            .all(|m| m.difficulty == ModuleDifficulty::Intermediate));
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let modules = default_learning_path();
        let filter = ModuleFilter {
            difficulty: None,
            query: Some("REACT".into()),
        };
        let filtered = filter_modules(&modules, &filter);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn search_matches_difficulty_label() {
        let modules = default_learning_path();
        let filter = ModuleFilter {
            difficulty: None,
            query: Some("expert".into()),
        };
        let filtered = filter_modules(&modules, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Performance Optimization");
    }

    #[test]
    fn combined_filters_intersect() {
        let modules = default_learning_path();
        let filter = ModuleFilter {
            difficulty: Some(ModuleDifficulty::Intermediate),
            query: Some("state".into()),
        };
        let filtered = filter_modules(&modules, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "State Management");
    }

    #[test]
    fn no_match_returns_empty() {
        let modules = default_learning_path();
        let filter = ModuleFilter {
            difficulty: None,
            query: Some("quantum chromodynamics".into()),
        };
        assert!(filter_modules(&modules, &filter).is_empty());
    }

    #[test]
    fn stats_count_skipped_modules() {
        let stats = path_stats(&default_learning_path());
        assert_eq!(stats.total_modules, 6);
        assert_eq!(stats.skipped_modules, 1);
        assert_eq!(stats.hours_saved, 2);
        assert_eq!(stats.skipped_percent, 17);
    }

    #[test]
    fn stats_on_empty_path_are_zero() {
        let stats = path_stats(&[]);
        assert_eq!(stats.total_modules, 0);
        assert_eq!(stats.skipped_percent, 0);
    }

    #[test]
    fn status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ModuleStatus::ToLearn).unwrap(),
            "\"to-learn\""
        );
        assert_eq!(ModuleStatus::InProgress.to_string(), "in-progress");
    }
}
