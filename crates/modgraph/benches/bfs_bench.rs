//! Criterion benchmarks for the BFS solver.
//! Focus sizes: node counts in {3, 4, 5, 6} at modulus 3.
//! Results land under target/criterion by default.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use modgraph::prelude::*;

fn sample_for(nodes: usize, seed: u64) -> PuzzleSample {
    let params = RandomPuzzleParams {
        node_count: nodes,
        modulus: 3,
        extra_edges: nodes,
        self_loops: true,
        scramble_moves: nodes + 2,
    };
    RandomPuzzleGenerator::generate_single(&params, seed).expect("valid bench params")
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfs");
    for &n in &[3usize, 4, 5, 6] {
        group.bench_with_input(BenchmarkId::new("solve_scrambled", n), &n, |b, &n| {
            b.iter_batched(
                || sample_for(n, 43),
                |s| {
                    let out = solve(&s.model, &s.initial, &s.goal, SolverCfg::default())
                        .expect("vectors come from the generator");
                    assert!(out.solution().is_some());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("exhaust_unreachable", n), &n, |b, &n| {
            // frozen node 0 (no self-loop, no incoming edge) forces a full
            // sweep of the reachable set before Unreachable is proven
            let edges: Vec<Edge> = (1..n).map(|i| Edge::new(i, i)).collect();
            let model = GraphModel::new(n, 3, &edges).expect("valid bench model");
            let initial = vec![0u32; n];
            let mut goal = vec![0u32; n];
            goal[0] = 1;
            b.iter(|| {
                let out = solve(&model, &initial, &goal, SolverCfg::default())
                    .expect("vectors match the model");
                assert_eq!(out, Outcome::Unreachable);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
