//! Nearest-neighbour chain construction of the Paris dendrogram.

use tracing::{debug, instrument, warn};

use super::{Dendrogram, Merge, adjacency::ContractedGraph, reorder_dendrogram};
use crate::{Result, error::ParisError, graph::WeightedGraph};

/// A connected component finished by the chain: its root id and leaf count.
#[derive(Clone, Copy, Debug)]
struct Component {
    root: usize,
    size: usize,
}

/// Builds the canonical Paris dendrogram of `graph`.
///
/// Clusters merge along a nearest-neighbour chain driven by the distance
/// `d(a, b) = w(a) w(b) / weight(a, b) / wtot`. Components that never touch
/// are joined at `+∞` in discovery order, and the records are finally put in
/// non-decreasing distance order by [`reorder_dendrogram`]. The caller's
/// graph is only read.
///
/// # Errors
/// Returns [`ParisError::Graph`] when an edge names an unknown node or
/// carries a negative or non-finite weight,
/// [`ParisError::DegenerateInput`] when a graph with at least two nodes has
/// zero total weight, and [`ParisError::WeightOverflow`] when the total
/// weight or a merge distance is not representable as a finite `f64`.
///
/// # Examples
/// ```
/// use paris_core::{Graph, paris};
///
/// let graph = Graph::from_edges(4, [(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)])?;
/// let dendrogram = paris(&graph)?;
/// assert_eq!(dendrogram.len(), 3);
/// assert_eq!(dendrogram.root(), Some(6));
/// assert!(dendrogram.is_monotonic());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "core.paris",
    err,
    skip(graph),
    fields(graph = %graph.name(), nodes = graph.node_count()),
)]
pub fn paris<G: WeightedGraph + ?Sized>(graph: &G) -> Result<Dendrogram> {
    let node_count = graph.node_count();
    if node_count <= 1 {
        return Ok(Dendrogram::from_validated(node_count, Vec::new()));
    }

    let mut contracted = ContractedGraph::copy_of(graph)?;
    let total_weight = contracted.total_weight();
    if !total_weight.is_finite() {
        return Err(ParisError::WeightOverflow { node_count });
    }
    if total_weight <= 0.0 {
        return Err(ParisError::DegenerateInput { node_count });
    }

    let (mut merges, components) = run_chain(node_count, &mut contracted)?;
    debug!(
        merges = merges.len(),
        components = components.len(),
        "nearest-neighbour chain finished"
    );
    if components.len() > 1 {
        warn!(
            components = components.len(),
            "graph is disconnected; joining components at infinite distance"
        );
    }
    join_components(node_count, &mut merges, components);

    #[cfg(feature = "metrics")]
    metrics::counter!("paris_merges_total").increment(merges.len() as u64);

    reorder_dendrogram(&Dendrogram::from_validated(node_count, merges))
}

fn run_chain(
    node_count: usize,
    graph: &mut ContractedGraph,
) -> Result<(Vec<Merge>, Vec<Component>)> {
    let mut merges = Vec::with_capacity(node_count - 1);
    let mut components = Vec::new();
    // Creation distance per id; leaves sit at zero.
    let mut heights = vec![0.0_f64; node_count];
    let mut chain = Vec::new();

    while let Some(seed) = graph.lowest_live() {
        chain.push(seed);
        while let Some(a) = chain.pop() {
            let Some((b, distance)) = graph.nearest_neighbour(a) else {
                components.push(Component {
                    root: a,
                    size: graph.remove_isolated(a),
                });
                continue;
            };
            match chain.pop() {
                Some(c) if c == b => {
                    if !distance.is_finite() {
                        return Err(ParisError::WeightOverflow { node_count });
                    }
                    // Rounding may put a parent a few ulps under a child.
                    let distance = distance.max(heights[a]).max(heights[b]);
                    let size = graph.size(a) + graph.size(b);
                    merges.push(Merge::new(a, b, distance, size));
                    graph.contract(a, b);
                    heights.push(distance);
                }
                Some(c) => chain.extend([c, a, b]),
                None => chain.extend([a, b]),
            }
        }
    }
    Ok((merges, components))
}

/// Chains finished components together at `+∞`, starting from the last one
/// discovered and absorbing the others in discovery order.
fn join_components(node_count: usize, merges: &mut Vec<Merge>, mut components: Vec<Component>) {
    let Some(last) = components.pop() else {
        return;
    };
    let mut current = last.root;
    let mut size = last.size;
    for component in components {
        size += component.size;
        merges.push(Merge::new(current, component.root, f64::INFINITY, size));
        current = node_count + merges.len() - 1;
    }
}
