use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spectra_core::{
    AdjacencyGraph, AssociationGraph, Attributes, CliqueStrategy, find_cliques, score,
};

const SIZES: [usize; 3] = [16, 32, 48];
const EDGE_PROBABILITY: f64 = 0.3;

fn random_graph(order: usize, seed: u64) -> AdjacencyGraph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let vertices: Vec<(usize, Attributes)> = (0..order)
        .map(|i| {
            let tags = (0..3)
                .filter(|_| rng.gen_bool(0.5))
                .map(|t| format!("t{t}"))
                .collect();
            (i, tags)
        })
        .collect();
    let mut edges = Vec::new();
    for a in 0..order {
        for b in (a + 1)..order {
            if rng.gen_bool(EDGE_PROBABILITY) {
                edges.push((a, b));
            }
        }
    }
    AdjacencyGraph::init(vertices, edges)
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("cliques.random");

    for order in SIZES {
        let graph = random_graph(order, 0x5EC7_u64 + order as u64);
        group.throughput(Throughput::Elements(order as u64));

        for strategy in CliqueStrategy::ALL {
            group.bench_with_input(
                BenchmarkId::new(strategy.as_str(), order),
                &graph,
                |b, graph| b.iter(|| black_box(find_cliques(graph, strategy).len())),
            );
        }
    }

    group.finish();
}

fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity.association");

    for order in [4_usize, 6, 8] {
        let g1 = random_graph(order, 0xA5_u64 + order as u64);
        let g2 = random_graph(order, 0xB5_u64 + order as u64);

        group.bench_with_input(
            BenchmarkId::new("associate", order),
            &(&g1, &g2),
            |b, (g1, g2)| b.iter(|| black_box(AssociationGraph::associate(*g1, *g2).edges().len())),
        );

        let assoc = AssociationGraph::associate(&g1, &g2);
        group.bench_with_input(BenchmarkId::new("score", order), &assoc, |b, assoc| {
            b.iter(|| {
                let cliques = find_cliques(assoc.graph(), CliqueStrategy::Degeneracy);
                black_box(score(assoc, &cliques).jaccard)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_similarity);
criterion_main!(benches);
