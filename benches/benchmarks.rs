//! Performance benchmarks for superperm
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const ALPHABET: &str = "abcdefgh";

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    for n in [4usize, 6, 8] {
        let symbols = &ALPHABET[..n];
        group.bench_with_input(BenchmarkId::from_parameter(n), &symbols, |b, &s| {
            b.iter(|| superperm::find(black_box(s)))
        });
    }
    group.finish();
}

fn bench_permutations(c: &mut Criterion) {
    let chars: Vec<char> = "abcdefg".chars().collect();

    c.bench_function("permutations_7", |b| {
        b.iter(|| superperm::superperm::permutations(black_box(&chars)).unwrap())
    });
}

fn bench_index_build(c: &mut Criterion) {
    let small = superperm::find("abcde").expect("Failed to build candidate");
    let large = superperm::find("abcdefgh").expect("Failed to build candidate");

    let mut group = c.benchmark_group("index_build");

    group.bench_function("small_153b", |b| {
        b.iter(|| superperm::index::SubstringIndex::new(black_box(&small)))
    });

    group.bench_function("large_46kb", |b| {
        b.iter(|| superperm::index::SubstringIndex::new(black_box(&large)))
    });

    group.finish();
}

fn bench_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("check");
    group.sample_size(20);

    for n in [5usize, 7, 8] {
        let symbols = &ALPHABET[..n];
        let candidate = superperm::find(symbols).expect("Failed to build candidate");
        group.bench_with_input(BenchmarkId::from_parameter(n), &candidate, |b, cand| {
            b.iter(|| superperm::check(black_box(symbols), black_box(cand)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_find,
    bench_permutations,
    bench_index_build,
    bench_check,
);

criterion_main!(benches);
