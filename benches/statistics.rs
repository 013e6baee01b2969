use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use stats_service::stats::{mean, median, mode};
use stats_service::NumberSequence;

fn numbers(count: usize) -> Vec<f64> {
    // Deterministic spread with plenty of repeats for mode
    (0..count).map(|i| ((i * 7919) % 101) as f64 / 4.0).collect()
}

fn raw_nums(count: usize) -> String {
    numbers(count)
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    for count in [10usize, 100, 1_000].iter() {
        let input = numbers(*count);
        group.bench_with_input(BenchmarkId::new("mean", count), &input, |b, input| {
            b.iter(|| mean(black_box(input)))
        });
        group.bench_with_input(BenchmarkId::new("median", count), &input, |b, input| {
            b.iter(|| median(black_box(input)))
        });
        group.bench_with_input(BenchmarkId::new("mode", count), &input, |b, input| {
            b.iter(|| mode(black_box(input)))
        });
    }
    group.finish();
}

fn validate(c: &mut Criterion) {
    let raw = raw_nums(1_000);
    c.bench_function("parse_1000", |b| {
        b.iter(|| NumberSequence::parse(Some(black_box(raw.as_str()))))
    });
}

criterion_group!(benches, engine, validate);
criterion_main!(benches);
