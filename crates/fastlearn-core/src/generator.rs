//! Question generation.
//!
//! The [`QuestionGenerator`] trait is the seam between the assessment flow
//! and whatever produces questions. The built-in [`TemplateGenerator`]
//! fills a fixed set of prompt templates with category-specific wording and
//! simulates generation latency; a real AI backend would implement the same
//! trait.

use std::time::Duration;

use async_trait::async_trait;

use crate::model::{Difficulty, Question};

/// Request for a batch of generated questions.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Category to generate for. Unknown categories fall back to the
    /// general wording.
    pub category: String,
}

/// Trait for question backends.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Human-readable generator name.
    fn name(&self) -> &str;

    /// Generate a batch of questions for the requested category.
    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<Vec<Question>>;
}

/// Category-specific wording for one question template.
struct Fill {
    subject: &'static str,
    detail: &'static str,
    options: [&'static str; 4],
}

/// One question template: shared structure, per-category wording.
struct Template {
    prompt: &'static str,
    explanation: &'static str,
    correct_answer: usize,
    difficulty: Difficulty,
    programming: Fill,
    ai: Fill,
    general: Fill,
}

impl Template {
    fn fill_for(&self, category: &str) -> &Fill {
        match category {
            "programming" => &self.programming,
            "ai" => &self.ai,
            _ => &self.general,
        }
    }
}

/// Built-in categories the template generator has dedicated wording for.
pub const BUILT_IN_CATEGORIES: [&str; 3] = ["programming", "ai", "general"];

/// Suggested starting topics and the category each one maps to.
pub const POPULAR_TOPICS: [(&str, &str); 5] = [
    ("JavaScript", "programming"),
    ("React", "programming"),
    ("Python", "programming"),
    ("Machine Learning", "ai"),
    ("Web Development", "general"),
];

const TEMPLATES: [Template; 6] = [
    Template {
        prompt: "What is the primary advantage of using {subject}?",
        explanation: "This question explores the core benefits of {detail}.",
        correct_answer: 1,
        difficulty: Difficulty::Medium,
        programming: Fill {
            subject: "React hooks",
            detail: "React hooks for state management",
            options: [
                "Better performance optimization",
                "Simplified state management",
                "Enhanced debugging capabilities",
                "Cross-platform compatibility",
            ],
        },
        ai: Fill {
            subject: "machine learning algorithms",
            detail: "machine learning algorithms for data processing",
            options: [
                "Improved data processing",
                "Faster training times",
                "Reduced computational costs",
                "Better generalization",
            ],
        },
        general: Fill {
            subject: "modern web technologies",
            detail: "modern web technologies for user experience",
            options: [
                "Enhanced user experience",
                "Better security",
                "Improved accessibility",
                "Faster loading times",
            ],
        },
    },
    Template {
        prompt: "How does {subject} work in modern applications?",
        explanation: "This question tests understanding of {detail}.",
        correct_answer: 0,
        difficulty: Difficulty::Hard,
        programming: Fill {
            subject: "component re-rendering",
            detail: "React's virtual DOM and rendering optimization",
            options: [
                "Through virtual DOM diffing",
                "By state change detection",
                "Via lifecycle methods",
                "By prop comparison",
            ],
        },
        ai: Fill {
            subject: "neural network training",
            detail: "neural network training fundamentals",
            options: [
                "Via backpropagation algorithms",
                "Through gradient descent",
                "Using activation functions",
                "Via loss function optimization",
            ],
        },
        general: Fill {
            subject: "responsive design",
            detail: "responsive design principles",
            options: [
                "Using CSS media queries",
                "With JavaScript event listeners",
                "Through viewport calculations",
                "With breakpoint systems",
            ],
        },
    },
    Template {
        prompt: "What is the best practice for {subject}?",
        explanation: "This question evaluates knowledge of {detail}.",
        correct_answer: 0,
        difficulty: Difficulty::Medium,
        programming: Fill {
            subject: "handling asynchronous operations",
            detail: "modern async programming patterns",
            options: [
                "Using async/await patterns",
                "Callback functions",
                "Promise chains",
                "Event listeners",
            ],
        },
        ai: Fill {
            subject: "data preprocessing",
            detail: "data preprocessing best practices",
            options: [
                "Normalizing input data",
                "Feature scaling",
                "Data augmentation",
                "Outlier removal",
            ],
        },
        general: Fill {
            subject: "performance optimization",
            detail: "performance optimization techniques",
            options: [
                "Implementing lazy loading",
                "Code splitting",
                "Image compression",
                "Caching strategies",
            ],
        },
    },
    Template {
        prompt: "Which approach is most effective for {subject}?",
        explanation: "This question assesses understanding of {detail}.",
        correct_answer: 0,
        difficulty: Difficulty::Easy,
        programming: Fill {
            subject: "testing React components",
            detail: "comprehensive testing strategies",
            options: [
                "Unit testing with Jest",
                "Integration testing",
                "End-to-end testing",
                "Manual testing",
            ],
        },
        ai: Fill {
            subject: "model validation",
            detail: "robust validation methods",
            options: [
                "Cross-validation techniques",
                "Holdout validation",
                "Bootstrap validation",
                "Single validation set",
            ],
        },
        general: Fill {
            subject: "user experience design",
            detail: "user-centered design approaches",
            options: [
                "User research and testing",
                "A/B testing",
                "Usability studies",
                "Design reviews",
            ],
        },
    },
    Template {
        prompt: "What is the key principle behind {subject}?",
        explanation: "This question explores the fundamental concepts of {detail}.",
        correct_answer: 0,
        difficulty: Difficulty::Hard,
        programming: Fill {
            subject: "functional programming",
            detail: "functional programming principles",
            options: [
                "Immutability and pure functions",
                "Object-oriented design",
                "Procedural programming",
                "Event-driven architecture",
            ],
        },
        ai: Fill {
            subject: "deep learning",
            detail: "deep learning architectures",
            options: [
                "Neural network depth",
                "Supervised learning",
                "Unsupervised learning",
                "Reinforcement learning",
            ],
        },
        general: Fill {
            subject: "progressive enhancement",
            detail: "progressive enhancement strategies",
            options: [
                "Graceful degradation",
                "Mobile-first approach",
                "Responsive design",
                "Accessibility first",
            ],
        },
    },
    Template {
        prompt: "How do you optimize {subject}?",
        explanation: "This question tests knowledge of {detail}.",
        correct_answer: 0,
        difficulty: Difficulty::Medium,
        programming: Fill {
            subject: "bundle size",
            detail: "modern bundling optimization techniques",
            options: [
                "Tree shaking and code splitting",
                "Minification and compression",
                "Dead code elimination",
                "Bundle analysis",
            ],
        },
        ai: Fill {
            subject: "model inference",
            detail: "model performance optimization",
            options: [
                "Model quantization",
                "Batch processing",
                "Model pruning",
                "Hardware acceleration",
            ],
        },
        general: Fill {
            subject: "page load times",
            detail: "web performance best practices",
            options: [
                "Image optimization and CDN",
                "Lazy loading and caching",
                "Server-side rendering",
                "Critical path optimization",
            ],
        },
    },
];

/// The built-in generator: fixed templates, category-conditional wording,
/// and a configurable simulated latency.
pub struct TemplateGenerator {
    latency: Duration,
}

impl TemplateGenerator {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// A generator with no simulated latency, for tests and `--instant`.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl QuestionGenerator for TemplateGenerator {
    fn name(&self) -> &str {
        "template"
    }

    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<Vec<Question>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let questions = TEMPLATES
            .iter()
            .enumerate()
            .map(|(i, template)| {
                let fill = template.fill_for(&request.category);
                Question {
                    id: format!("gen-{}", i + 1),
                    prompt: template.prompt.replace("{subject}", fill.subject),
                    options: fill.options.iter().map(|o| o.to_string()).collect(),
                    correct_answer: template.correct_answer,
                    explanation: template.explanation.replace("{detail}", fill.detail),
                    difficulty: template.difficulty,
                    category: request.category.clone(),
                    ai_generated: true,
                }
            })
            .collect();

        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(category: &str) -> GenerateRequest {
        GenerateRequest {
            category: category.into(),
        }
    }

    #[tokio::test]
    async fn generates_six_questions_per_batch() {
        let generator = TemplateGenerator::instant();
        let questions = generator.generate(&request("programming")).await.unwrap();

        assert_eq!(questions.len(), 6);
        assert!(questions.iter().all(|q| q.options.len() == 4));
        assert!(questions.iter().all(|q| q.ai_generated));
        assert!(questions.iter().all(|q| q.category == "programming"));
        assert!(questions.iter().all(|q| q.correct_answer < q.options.len()));
    }

    #[tokio::test]
    async fn category_changes_wording() {
        let generator = TemplateGenerator::instant();
        let programming = generator.generate(&request("programming")).await.unwrap();
        let ai = generator.generate(&request("ai")).await.unwrap();

        assert!(programming[0].prompt.contains("React hooks"));
        assert!(ai[0].prompt.contains("machine learning algorithms"));
        assert_ne!(programming[0].options, ai[0].options);
    }

    #[tokio::test]
    async fn unknown_category_falls_back_to_general_wording() {
        let generator = TemplateGenerator::instant();
        let custom = generator.generate(&request("history")).await.unwrap();
        let general = generator.generate(&request("general")).await.unwrap();

        assert_eq!(custom[0].prompt, general[0].prompt);
        assert_eq!(custom[0].options, general[0].options);
        // The label sticks even when the wording falls back.
        assert!(custom.iter().all(|q| q.category == "history"));
    }

    #[tokio::test]
    async fn generation_is_deterministic() {
        let generator = TemplateGenerator::instant();
        let first = generator.generate(&request("ai")).await.unwrap();
        let second = generator.generate(&request("ai")).await.unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn latency_is_simulated() {
        let generator = TemplateGenerator::new(Duration::from_secs(2));
        let start = tokio::time::Instant::now();
        generator.generate(&request("general")).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[test]
    fn difficulty_mix_matches_templates() {
        let difficulties: Vec<Difficulty> = TEMPLATES.iter().map(|t| t.difficulty).collect();
        assert_eq!(
            difficulties,
            [
                Difficulty::Medium,
                Difficulty::Hard,
                Difficulty::Medium,
                Difficulty::Easy,
                Difficulty::Hard,
                Difficulty::Medium,
            ]
        );
    }
}
