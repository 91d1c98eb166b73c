//! Criterion benchmarks: sequential reference vs. partitioned fan-out.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use parmat::matrix::transpose::transpose;
use parmat::{Matrix, ParallelConfig};

fn synth(size: usize, workers: usize) -> Matrix<f64> {
    let data = (0..size * size).map(|i| (i % 100) as f64).collect();
    Matrix::from_vec(size, size, data)
        .unwrap()
        .with_config(ParallelConfig::new(workers))
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    for size in [64, 256, 1024] {
        for workers in [1, 4] {
            let a = synth(size, workers);
            let b = synth(size, workers);
            group.bench_with_input(
                BenchmarkId::new(format!("{}w", workers), size),
                &size,
                |bench, _| bench.iter(|| black_box(&a + &b).unwrap()),
            );
        }
    }
    group.finish();
}

fn bench_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_multiply");
    for size in [256, 1024] {
        let a = synth(size, 4);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| black_box(2.0 * &a))
        });
    }
    group.finish();
}

fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");
    for size in [256, 1024] {
        let a = synth(size, 4);

        group.bench_with_input(BenchmarkId::new("reference", size), &size, |bench, &n| {
            let mut dst = vec![0.0; n * n];
            bench.iter(|| transpose(black_box(a.as_slice()), &mut dst, n, n))
        });
        group.bench_with_input(BenchmarkId::new("cyclic", size), &size, |bench, _| {
            bench.iter(|| black_box(a.transposed()))
        });
        group.bench_with_input(BenchmarkId::new("direct", size), &size, |bench, _| {
            bench.iter(|| {
                let mut t = a.clone();
                t.transpose_direct();
                black_box(t)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add, bench_scale, bench_transpose);
criterion_main!(benches);
