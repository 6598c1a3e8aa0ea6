//! Search engine benchmarks.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `search/backup` | Full pipeline over the built-in corpus for match, fallback and not-understood queries |
//! | `scaling` | Full-pipeline throughput as the knowledge base grows from 100 to 10k sentences |
//! | `assemble` | Knowledge base rebuild (dedup + length filter) from in-memory sources |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench search_bench
//! open target/criterion/report/index.html
//! ```

use biochat_core::{
    config::SearchConfig, KnowledgeBase, Lexicon, SearchEngine, SentenceSource, SourceError,
    BACKUP_SENTENCES,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

const SPECIES: &[&str] = &["jaguar", "cóndor", "oso andino", "paraba", "armadillo", "delfín"];
const PLACES: &[&str] = &["Amazonía", "altiplano", "Yungas", "Chaco", "Madidi", "Titicaca"];

/// `n` distinct sentences, all long enough to enter the knowledge base.
fn synthetic_sentences(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            format!(
                "Registro {i}: el {} fue observado cerca de {} durante el censo anual",
                SPECIES[i % SPECIES.len()],
                PLACES[(i / SPECIES.len()) % PLACES.len()],
            )
        })
        .collect()
}

struct InMemory(Vec<String>);

impl SentenceSource for InMemory {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn fetch_candidate_sentences(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.0.clone())
    }
}

// ---------------------------------------------------------------------------
// Backup corpus
// ---------------------------------------------------------------------------

fn backup_bench(c: &mut Criterion) {
    let engine = SearchEngine::offline(SearchConfig::default(), Lexicon::builtin());
    let mut group = c.benchmark_group("search/backup");

    for (name, query) in [
        ("match", "¿Dónde vive el jaguar en Bolivia?"),
        ("fallback", "flamenco rosado del altiplano"),
        ("not_understood", "¿que es el de la?"),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), query, |b, q| {
            b.iter(|| engine.search(black_box(q)))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Scaling
// ---------------------------------------------------------------------------

fn scaling_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for size in [100usize, 1_000, 10_000] {
        let engine = SearchEngine::with_knowledge_base(
            SearchConfig::default(),
            Lexicon::builtin(),
            Vec::new(),
            KnowledgeBase::from_sentences(synthetic_sentences(size)),
        );
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &engine, |b, engine| {
            b.iter(|| engine.search(black_box("oso andino en los yungas")))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

fn assemble_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");

    for size in [100usize, 1_000, 10_000] {
        // half the candidates are duplicates
        let mut sentences = synthetic_sentences(size / 2);
        sentences.extend(sentences.clone());
        let sources: Vec<Box<dyn SentenceSource>> = vec![Box::new(InMemory(sentences))];

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &sources, |b, sources| {
            b.iter(|| KnowledgeBase::assemble(BACKUP_SENTENCES, black_box(sources)))
        });
    }

    group.finish();
}

criterion_group!(benches, backup_bench, scaling_bench, assemble_bench);
criterion_main!(benches);
