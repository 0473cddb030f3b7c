//! # Matrix Benchmarks
//!
//! Measures the 2x2 complex kernel operations.
//!
//! Run: `cargo bench --bench matrix_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qlab_math::{Complex, HADAMARD, Matrix2x2, PAULI_X, PAULI_Y, PAULI_Z};

fn sample_rho() -> Matrix2x2 {
    Matrix2x2::new([
        [Complex::new(0.6, 0.0), Complex::new(0.2, -0.1)],
        [Complex::new(0.2, 0.1), Complex::new(0.4, 0.0)],
    ])
}

/// Benchmark basic matrix operations
fn bench_matrix_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_ops");
    let rho = sample_rho();

    group.bench_function("mul", |b| {
        b.iter(|| black_box(black_box(HADAMARD).mul(&black_box(rho))))
    });

    group.bench_function("dagger", |b| {
        b.iter(|| black_box(black_box(rho).dagger()))
    });

    group.bench_function("conjugate_by_unitary", |b| {
        b.iter(|| {
            let u = black_box(HADAMARD);
            black_box(u.mul(&rho).mul(&u.dagger()))
        })
    });

    group.finish();
}

/// Benchmark trace of product (fast path vs full product)
fn bench_trace_of_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace_of_product");
    let rho = sample_rho();

    group.bench_function("fast", |b| {
        b.iter(|| black_box(black_box(rho).trace_of_product(&PAULI_Y)))
    });

    group.bench_function("full_product", |b| {
        b.iter(|| black_box(black_box(rho).mul(&PAULI_Y).trace()))
    });

    group.bench_function("all_observables", |b| {
        b.iter(|| {
            let r = black_box(rho);
            black_box([
                r.trace_of_product(&PAULI_X).re,
                r.trace_of_product(&PAULI_Y).re,
                r.trace_of_product(&PAULI_Z).re,
                r.trace_of_product(&r).re,
            ])
        })
    });

    group.finish();
}

criterion_group!(benches, bench_matrix_ops, bench_trace_of_product);
criterion_main!(benches);
