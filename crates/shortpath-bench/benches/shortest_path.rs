//! Shortest-path query benchmarks across size tiers.
#![allow(clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use shortpath_bench::{SizeTier, generate_edge_list, node_id};
use shortpath_core::{Graph, shortest_path};

struct Setup {
    graph: Graph,
    first: String,
    mid: String,
    last: String,
}

fn setup(tier: SizeTier) -> Setup {
    let config = tier.config(42);
    let graph = Graph::from_edges(generate_edge_list(&config));
    Setup {
        graph,
        first: node_id(0),
        mid: node_id(config.num_nodes / 2),
        last: node_id(config.num_nodes - 1),
    }
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");

    for (name, tier) in [
        ("S", SizeTier::Small),
        ("M", SizeTier::Medium),
        ("L", SizeTier::Large),
    ] {
        let s = setup(tier);

        group.bench_function(BenchmarkId::new("first_to_last", name), |b| {
            b.iter(|| shortest_path(&s.graph, &s.first, &s.last).expect("non-negative weights"));
        });

        group.bench_function(BenchmarkId::new("first_to_mid", name), |b| {
            b.iter(|| shortest_path(&s.graph, &s.first, &s.mid).expect("non-negative weights"));
        });

        group.bench_function(BenchmarkId::new("self", name), |b| {
            b.iter(|| shortest_path(&s.graph, &s.mid, &s.mid).expect("non-negative weights"));
        });

        group.bench_function(BenchmarkId::new("unknown_target", name), |b| {
            b.iter(|| {
                shortest_path(&s.graph, &s.first, "absent").expect("non-negative weights")
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_shortest_path);
criterion_main!(benches);
