//! Criterion benchmarks for series operations.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use fpscalc_core::{ModInt, PolyEngine, Series};

fn sample(n: usize, constant: u64) -> Series {
    let mut s: Series = (0..n as u64)
        .map(|i| ModInt::new(i.wrapping_mul(2_654_435_761) ^ 0x5bd1))
        .collect();
    s[0] = ModInt::new(constant);
    s
}

fn bench_series(c: &mut Criterion) {
    let engine = PolyEngine::default();
    let sizes: Vec<usize> = vec![1 << 10, 1 << 14, 1 << 17];

    let mut group = c.benchmark_group("Multiply");
    for &n in &sizes {
        let a = sample(n, 7);
        let b = sample(n, 3);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| engine.multiply(&a, &b).unwrap());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("Inverse");
    for &n in &sizes {
        let a = sample(n, 1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
            bench.iter(|| engine.inverse(&a, n).unwrap());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("Exp");
    for &n in &sizes {
        let a = sample(n, 0);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
            bench.iter(|| engine.exp(&a, n).unwrap());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("EvalMany");
    for &n in &[1usize << 8, 1 << 11, 1 << 13] {
        let poly = sample(n, 5);
        let points: Vec<ModInt> = sample(n, 9).into_coeffs();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| engine.eval_many(&poly, &points).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_series);
criterion_main!(benches);
