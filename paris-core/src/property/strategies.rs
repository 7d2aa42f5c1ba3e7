//! Strategy builders for graph property tests.
//!
//! Every generator draws from a seeded [`SmallRng`] so failures reproduce
//! from the proptest seed alone, and every generated graph has at least one
//! positive edge.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Graph;

use super::types::{GraphFixture, GraphTopology};

/// Minimum node count for generated graphs.
const MIN_NODES: usize = 2;
/// Maximum node count for generated graphs.
const MAX_NODES: usize = 24;

/// Generates fixtures across every topology.
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    let topology = prop_oneof![
        Just(GraphTopology::Sparse),
        Just(GraphTopology::Dense),
        Just(GraphTopology::Planted),
        Just(GraphTopology::Disconnected),
        Just(GraphTopology::UniformWeights),
    ];
    (topology, any::<u64>()).prop_map(|(topology, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(topology, &mut rng)
    })
}

/// Generates a fixture for a specific topology.
pub(super) fn generate_fixture(topology: GraphTopology, rng: &mut SmallRng) -> GraphFixture {
    let (node_count, edges) = match topology {
        GraphTopology::Sparse => generate_sparse(rng, |rng| rng.gen_range(0.1..10.0)),
        GraphTopology::Dense => generate_dense(rng),
        GraphTopology::Planted => generate_planted(rng),
        GraphTopology::Disconnected => generate_disconnected(rng),
        GraphTopology::UniformWeights => generate_sparse(rng, |_| 1.0),
    };
    let graph = Graph::from_edges(node_count, edges).expect("generated edges must be valid");
    GraphFixture { graph, topology }
}

type Edges = Vec<(usize, usize, f64)>;

/// Connects `[offset, offset + size)` with a random spanning tree.
fn spanning_tree(
    offset: usize,
    size: usize,
    rng: &mut SmallRng,
    weight: &mut impl FnMut(&mut SmallRng) -> f64,
    edges: &mut Edges,
) {
    for node in 1..size {
        let parent = rng.gen_range(0..node);
        let w = weight(rng);
        edges.push((offset + parent, offset + node, w));
    }
}

fn generate_sparse(
    rng: &mut SmallRng,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> (usize, Edges) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut edges = Vec::new();
    spanning_tree(0, node_count, rng, &mut weight, &mut edges);
    for _ in 0..node_count / 2 {
        let left = rng.gen_range(0..node_count);
        let right = rng.gen_range(0..node_count);
        if left != right {
            let w = weight(rng);
            edges.push((left, right, w));
        }
    }
    (node_count, edges)
}

fn generate_dense(rng: &mut SmallRng) -> (usize, Edges) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES / 2);
    let probability: f64 = rng.gen_range(0.6..=0.95);
    let mut edges = vec![(0, 1, rng.gen_range(0.1..10.0))];
    for left in 0..node_count {
        for right in (left + 1)..node_count {
            if (left, right) != (0, 1) && rng.gen_bool(probability) {
                edges.push((left, right, rng.gen_range(0.1..10.0)));
            }
        }
    }
    (node_count, edges)
}

fn generate_planted(rng: &mut SmallRng) -> (usize, Edges) {
    let block_count = rng.gen_range(2..=4);
    let block_size = rng.gen_range(2..=6);
    let node_count = block_count * block_size;
    let mut edges = Vec::new();
    for left in 0..node_count {
        for right in (left + 1)..node_count {
            if left / block_size == right / block_size {
                if right == left + 1 || rng.gen_bool(0.8) {
                    edges.push((left, right, rng.gen_range(1.0..5.0)));
                }
            } else if rng.gen_bool(0.05) {
                edges.push((left, right, rng.gen_range(0.1..0.5)));
            }
        }
    }
    (node_count, edges)
}

fn generate_disconnected(rng: &mut SmallRng) -> (usize, Edges) {
    let component_count = rng.gen_range(2..=4);
    let mut weight = |rng: &mut SmallRng| rng.gen_range(0.1..10.0);
    let mut edges = Vec::new();
    let mut offset = 0;
    for _ in 0..component_count {
        let size = rng.gen_range(2..=6);
        spanning_tree(offset, size, rng, &mut weight, &mut edges);
        offset += size;
    }
    let isolated = rng.gen_range(0..=2);
    (offset + isolated, edges)
}
