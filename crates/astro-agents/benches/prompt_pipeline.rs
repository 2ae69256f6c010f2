//! Benchmarks for the context + prompt pipeline.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use astro_agents::{compose_fallback, PromptLayout, ReadingOrchestrator};
use astro_core::{BirthDetails, ReadingInput};

fn create_test_input() -> ReadingInput {
    ReadingInput {
        details: BirthDetails {
            name: "Sam".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
            birth_time: "10:00".to_string(),
            birth_place: "Paris".to_string(),
        },
        question: "Will I find love this year?".to_string(),
    }
}

fn benchmark_prepare(c: &mut Criterion) {
    let orchestrator = ReadingOrchestrator::default();
    let input = create_test_input();
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    let mut group = c.benchmark_group("prepare_reading");
    for layout in [PromptLayout::Detailed, PromptLayout::Condensed] {
        group.bench_function(format!("{:?}", layout), |b| {
            b.iter(|| orchestrator.prepare(black_box(&input), layout, today, &mut rng))
        });
    }
    group.finish();
}

fn benchmark_fallback(c: &mut Criterion) {
    let question = "I keep wondering whether the move abroad will finally settle my restless heart";
    let mut rng = StdRng::seed_from_u64(7);

    c.bench_function("compose_fallback_long_question", |b| {
        b.iter(|| compose_fallback(black_box("Sam"), "Gemini ♊", black_box(question), &mut rng))
    });
}

criterion_group!(benches, benchmark_prepare, benchmark_fallback);
criterion_main!(benches);
