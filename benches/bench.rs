//! Criterion benchmarks for patmatch.
//!
//! Measures wall-clock search time of each matcher, alongside the
//! comparison counts the library reports:
//! - Per-algorithm search over a synthetic corpus
//! - Preprocessing cost (prefix table, shift table, anchor selection)
//! - Full benchmark runs, sequential and parallel

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use patmatch::bench::{BenchmarkConfig, BenchmarkRunner};
use patmatch::corpus::Corpus;
use patmatch::matcher::{self, Algorithm, FbasMatcher, KmpMatcher};
use patmatch::pattern::Pattern;
use std::hint::black_box;

const PATTERNS: &[&str] = &["vita", "selva oscura", "zqxj", "the quick brown fox"];

fn synthetic_corpus(len: usize) -> Corpus {
    Corpus::synthetic(len, 42).expect("synthetic corpus")
}

/// Benchmark each algorithm on a fixed set of patterns.
fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let corpus = synthetic_corpus(100_000);
    group.throughput(Throughput::Elements(corpus.len() as u64));

    for &algorithm in &Algorithm::ALL {
        for &pattern in PATTERNS {
            let m = matcher::build(algorithm, Pattern::new(pattern).unwrap());
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), pattern),
                corpus.chars(),
                |b, text| b.iter(|| black_box(m.find(black_box(text)))),
            );
        }
    }

    group.finish();
}

/// Benchmark matcher construction.
fn bench_preprocessing(c: &mut Criterion) {
    let mut group = c.benchmark_group("preprocessing");
    let pattern = Pattern::new("nel mezzo del cammin di nostra vita").unwrap();

    group.bench_function("kmp_prefix_table", |b| {
        b.iter(|| black_box(KmpMatcher::with_pattern(black_box(pattern.clone()))))
    });

    group.bench_function("fbas_anchor_and_shifts", |b| {
        b.iter(|| black_box(FbasMatcher::with_pattern(black_box(pattern.clone()))))
    });

    group.finish();
}

/// Benchmark complete runs over the default pattern set.
fn bench_runner(c: &mut Criterion) {
    let mut group = c.benchmark_group("runner");
    group.sample_size(20);
    let corpus = synthetic_corpus(50_000);

    for parallel in [false, true] {
        let runner = BenchmarkRunner::new(BenchmarkConfig::default().with_parallel(parallel));
        let name = if parallel { "parallel" } else { "sequential" };
        group.bench_function(name, |b| {
            b.iter(|| black_box(runner.run(black_box(&corpus)).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_algorithms, bench_preprocessing, bench_runner);

criterion_main!(benches);
