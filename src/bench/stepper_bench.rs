//! Stepping through the whole product versus running the loop nest.

use std::hint::black_box;

use blockstep::{SimConfig, SimulationState, matmul_blocked, matmul_naive_ikj};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const CONFIGS: &[(usize, usize)] = &[(4, 2), (16, 4), (32, 8)];

fn bench_stepper(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");

    for &(n, block) in CONFIGS {
        let label = format!("{}x{}_b{}", n, n, block);
        let config = SimConfig::new(n, block).expect("bench config");

        group.bench_function(BenchmarkId::new("stepper", &label), |bench| {
            bench.iter(|| {
                let mut sim = SimulationState::new(config);
                while sim.advance() {}
                black_box(sim.result()[(0, 0)]);
            });
        });

        group.bench_function(BenchmarkId::new("stepper_undo", &label), |bench| {
            let mut sim = SimulationState::new(config);
            while sim.advance() {}
            bench.iter(|| {
                while sim.retreat() {}
                while sim.advance() {}
                black_box(sim.step());
            });
        });

        let a: Vec<i64> = (0..n * n).map(|i| i as i64 + 1).collect();
        let b: Vec<i64> = a.iter().map(|v| 2 * v).collect();

        group.bench_function(BenchmarkId::new("blocked_loops", &label), |bench| {
            bench.iter(|| {
                let mut out = vec![0; n * n];
                matmul_blocked(black_box(&a), black_box(&b), &mut out, n, block);
                black_box(out[0]);
            });
        });

        group.bench_function(BenchmarkId::new("naive_ikj", &label), |bench| {
            bench.iter(|| {
                let mut out = vec![0; n * n];
                matmul_naive_ikj(black_box(&a), black_box(&b), &mut out, n, n, n);
                black_box(out[0]);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stepper);
criterion_main!(benches);
