//! Benchmarks for the adjacency matrix builder and interleave engine.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gridmat::{
    adjmat, interleave, Adjacency, BoundaryCondition, GridExtent, Stencil7p, WeightFn,
};

fn bench_adjmat(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjmat");

    for size in [16i64, 32, 64] {
        let extent = GridExtent::new(size, size, size).unwrap();

        group.bench_with_input(
            BenchmarkId::new("fixed_constant", size),
            &extent,
            |b, &extent| {
                b.iter(|| {
                    let mut adjacency = Adjacency::from(Stencil7p::new());
                    let mut weight = WeightFn::constant(1.0);
                    adjmat(black_box(extent), &mut adjacency, &mut weight).unwrap()
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("periodic_random", size),
            &extent,
            |b, &extent| {
                b.iter(|| {
                    let mut adjacency = Adjacency::from(Stencil7p::with_boundaries(
                        BoundaryCondition::Periodic,
                        BoundaryCondition::Periodic,
                        BoundaryCondition::Periodic,
                    ));
                    let mut weight = WeightFn::uniform_random(42);
                    adjmat(black_box(extent), &mut adjacency, &mut weight).unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_interleave(c: &mut Criterion) {
    let mut group = c.benchmark_group("interleave");

    let extent = GridExtent::new(32, 32, 8).unwrap();
    let sources: Vec<_> = (0..4)
        .map(|seed| {
            let mut adjacency = Adjacency::from(Stencil7p::new());
            let mut weight = WeightFn::uniform_random(seed);
            adjmat(extent, &mut adjacency, &mut weight).unwrap()
        })
        .collect();
    let proportions = [1.0, 2.0, 3.0, 4.0];

    for coupling in [0usize, 8, 64] {
        group.bench_with_input(
            BenchmarkId::from_parameter(coupling),
            &coupling,
            |b, &coupling| {
                b.iter(|| interleave(black_box(&sources), &proportions, coupling, 42).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_adjmat, bench_interleave);
criterion_main!(benches);
