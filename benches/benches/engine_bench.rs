//! # Engine Benchmarks
//!
//! Measures engine transitions and the command channel round trip.
//!
//! Run: `cargo bench --bench engine_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qlab_engine::{EngineChannel, EngineConfig, Gate, QubitEngine, Request};

/// Benchmark single engine transitions
fn bench_transitions(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_transitions");

    for gate in Gate::ALL {
        group.bench_with_input(BenchmarkId::new("apply_gate", gate), &gate, |b, &gate| {
            let mut engine = QubitEngine::new();
            b.iter(|| black_box(engine.apply_gate(black_box(gate))))
        });
    }

    group.bench_function("apply_dephasing", |b| {
        let mut engine = QubitEngine::new();
        engine.apply_gate(Gate::H);
        b.iter(|| black_box(engine.apply_dephasing(black_box(0.01))))
    });

    group.bench_function("set_bloch", |b| {
        let mut engine = QubitEngine::new();
        b.iter(|| black_box(engine.set_bloch(black_box(0.6), 0.0, black_box(0.8))))
    });

    group.bench_function("snapshot", |b| {
        let engine = QubitEngine::new();
        b.iter(|| black_box(engine.snapshot()))
    });

    group.finish();
}

/// Benchmark request/response through the worker task
fn bench_channel(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let mut group = c.benchmark_group("engine_channel");

    let mut channel = runtime.block_on(async { EngineChannel::spawn(EngineConfig::default()) });

    group.bench_function("request_roundtrip", |b| {
        b.iter(|| {
            runtime.block_on(async {
                black_box(channel.request(Request::Gate { gate: Gate::H }).await)
            })
        })
    });

    group.bench_function("sequential_100", |b| {
        b.iter(|| {
            runtime.block_on(async {
                for _ in 0..100 {
                    channel.send(Request::Gate { gate: Gate::X }).await.ok();
                    black_box(channel.recv().await);
                }
            })
        })
    });

    group.finish();
}

criterion_group!(benches, bench_transitions, bench_channel);
criterion_main!(benches);
