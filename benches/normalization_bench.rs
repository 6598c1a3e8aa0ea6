//! Query normalization benchmarks.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `normalize` | `Normalizer::tokens` on short, synonym-heavy and long queries |
//! | `extract` | Normalization plus keyword categorisation |
//!
//! ```sh
//! cargo bench --bench normalization_bench
//! ```

use biochat_core::{KeywordExtractor, Normalizer};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn queries() -> Vec<(&'static str, String)> {
    vec![
        ("short", "jaguar".to_string()),
        ("question", "¿Dónde vive el oso andino en Bolivia?".to_string()),
        (
            "synonyms",
            "jaguar condor oso amazonia altiplano peligro".to_string(),
        ),
        (
            "long",
            "¿Qué especies de la Amazonía y del altiplano están en peligro? ".repeat(20),
        ),
    ]
}

fn normalize_bench(c: &mut Criterion) {
    let normalizer = Normalizer::default();
    let mut group = c.benchmark_group("normalize");

    for (name, query) in queries() {
        group.throughput(Throughput::Bytes(query.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &query, |b, q| {
            b.iter(|| normalizer.tokens(black_box(q)))
        });
    }

    group.finish();
}

fn extract_bench(c: &mut Criterion) {
    let extractor = KeywordExtractor::default();
    let mut group = c.benchmark_group("extract");

    for (name, query) in queries() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &query, |b, q| {
            b.iter(|| extractor.extract(black_box(q)))
        });
    }

    group.finish();
}

criterion_group!(benches, normalize_bench, extract_bench);
criterion_main!(benches);
