//! Criterion benchmarks for the swap engine.
//!
//! Uses ring lattices (every node linked to its two nearest neighbors on
//! each side) with interleaved initial colors, the worst case for the
//! benefit function's locality.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_anneal::graph::Graph;
use graph_anneal::report::MemorySink;
use graph_anneal::swap::{SelectionPolicy, SwapConfig, SwapRunner};

fn ring_lattice(n: u32, num_colors: u32) -> Graph {
    let mut graph = Graph::new();
    for id in 0..n {
        graph.add_node(id, id % num_colors).unwrap();
    }
    for id in 0..n {
        graph.add_edge(id, (id + 1) % n).unwrap();
        graph.add_edge(id, (id + 2) % n).unwrap();
    }
    graph
}

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap_run");
    for &n in &[100u32, 400] {
        for (name, policy) in [
            ("local", SelectionPolicy::Local),
            ("hybrid", SelectionPolicy::Hybrid),
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, n),
                &n,
                |bencher, &n| {
                    let config = SwapConfig::default()
                        .with_rounds(20)
                        .with_policy(policy)
                        .with_seed(42);
                    bencher.iter(|| {
                        let mut graph = ring_lattice(n, 4);
                        let mut sink = MemorySink::new();
                        let summary =
                            SwapRunner::run(&mut graph, &config, &mut sink).unwrap();
                        black_box(summary.total_swaps)
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
