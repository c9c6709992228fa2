//! Distance strategy comparison benchmark
//!
//! Compares the enumerative and dynamic-programming distance checks on
//! generated word pairs, and measures end-to-end lookups over a
//! generated corpus.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use linefuzz::{mbleven, wagner_fischer, LineIndex, SearcherConfig};

fn random_words(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(4..16);
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect()
        })
        .collect()
}

fn bench_distance_checks(c: &mut Criterion) {
    let words = random_words(2_000, 42);
    let pairs: Vec<(&str, &str)> = words
        .iter()
        .zip(words.iter().rev())
        .map(|(a, b)| (a.as_str(), b.as_str()))
        .collect();

    let mut group = c.benchmark_group("distance");
    group.bench_function("mbleven_k2", |b| {
        b.iter(|| {
            for &(first, second) in &pairs {
                black_box(mbleven(first, second, 2));
            }
        })
    });
    group.bench_function("wagner_fischer_k2", |b| {
        b.iter(|| {
            for &(first, second) in &pairs {
                black_box(wagner_fischer(first, second, 2));
            }
        })
    });
    group.bench_function("wagner_fischer_k6", |b| {
        b.iter(|| {
            for &(first, second) in &pairs {
                black_box(wagner_fischer(first, second, 6));
            }
        })
    });
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let words = random_words(10_000, 7);
    let config = SearcherConfig::new();
    let index = LineIndex::from_lines(&words, &config).unwrap();
    let pattern = words[0].as_str();

    let mut group = c.benchmark_group("lookup");
    group.bench_function("lookup_k2", |b| {
        b.iter(|| black_box(index.lookup(pattern, 2).unwrap()))
    });
    group.bench_function("lookup_k5", |b| {
        b.iter(|| black_box(index.lookup(pattern, 5).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, bench_distance_checks, bench_lookup);
criterion_main!(benches);
