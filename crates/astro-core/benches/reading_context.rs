//! Benchmarks for reading-context derivation.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use astro_core::{assemble, categorize, resolve, BirthDetails};

fn create_test_details() -> BirthDetails {
    BirthDetails {
        name: "Sam".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
        birth_time: "10:00".to_string(),
        birth_place: "Paris".to_string(),
    }
}

fn benchmark_resolve(c: &mut Criterion) {
    c.bench_function("zodiac_resolve_full_year", |b| {
        b.iter(|| {
            for month in 1..=12 {
                for day in 1..=31 {
                    black_box(resolve(black_box(day), black_box(month)));
                }
            }
        })
    });
}

fn benchmark_categorize(c: &mut Criterion) {
    let question = "I keep wondering whether my spiritual growth is blocked by my family home";

    c.bench_function("categorize_late_match", |b| {
        b.iter(|| categorize(black_box(question)))
    });
}

fn benchmark_assemble(c: &mut Criterion) {
    let details = create_test_details();
    let now = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    c.bench_function("assemble_context", |b| {
        b.iter(|| assemble(black_box(&details), black_box("Will I find love?"), now, &mut rng))
    });
}

criterion_group!(benches, benchmark_resolve, benchmark_categorize, benchmark_assemble);
criterion_main!(benches);
