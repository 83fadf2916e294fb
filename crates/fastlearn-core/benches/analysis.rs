use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fastlearn_core::analysis::analyze;
use fastlearn_core::model::{Difficulty, Question};

fn make_questions(count: usize) -> Vec<Question> {
    let categories = ["programming", "ai", "general"];
    let difficulties = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
    (0..count)
        .map(|i| Question {
            id: format!("q{i}"),
            prompt: format!("question {i}"),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer: i % 4,
            explanation: String::new(),
            difficulty: difficulties[i % difficulties.len()],
            category: categories[i % categories.len()].into(),
            ai_generated: false,
        })
        .collect()
}

fn make_answers(count: usize) -> Vec<Option<usize>> {
    (0..count)
        .map(|i| if i % 5 == 0 { None } else { Some(i % 4) })
        .collect()
}

fn bench_analyze(c: &mut Criterion) {
    for count in [6usize, 100, 1000] {
        let questions = make_questions(count);
        let answers = make_answers(count);
        c.bench_function(&format!("analyze_{count}_questions"), |b| {
            b.iter(|| {
                analyze(
                    black_box(&questions),
                    black_box(&answers),
                    Duration::from_secs(60),
                )
            })
        });
    }
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
