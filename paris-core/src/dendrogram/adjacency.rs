//! Contractible adjacency arena used by the nearest-neighbour chain.
//!
//! The builder works on a private copy of the input graph. Slots are indexed
//! by node id and preallocated for the `2n - 1` ids a full dendrogram can
//! create. Merging two nodes relinks their neighbours onto a fresh slot and
//! retires the operands.

use std::collections::BTreeMap;

use crate::{error::GraphError, graph::WeightedGraph};

#[derive(Clone, Debug)]
struct Slot {
    neighbours: BTreeMap<usize, f64>,
    weight: f64,
    size: usize,
    live: bool,
}

impl Slot {
    fn leaf() -> Self {
        Self {
            neighbours: BTreeMap::new(),
            weight: 0.0,
            size: 1,
            live: true,
        }
    }
}

/// Mutable contracted graph with per-node weights and leaf counts.
#[derive(Clone, Debug)]
pub(super) struct ContractedGraph {
    slots: Vec<Slot>,
    total_weight: f64,
    live_count: usize,
    lowest_live: usize,
}

impl ContractedGraph {
    /// Copies `graph` into a fresh arena.
    ///
    /// Node weights sum incident edge weights with self-loops counted twice.
    /// Self-loops and zero-weight edges never become merge candidates.
    ///
    /// Edges are re-validated since any [`WeightedGraph`] can be supplied.
    pub(super) fn copy_of<G: WeightedGraph + ?Sized>(graph: &G) -> Result<Self, GraphError> {
        let node_count = graph.node_count();
        let mut slots = Vec::with_capacity((2 * node_count).saturating_sub(1));
        slots.resize_with(node_count, Slot::leaf);
        let mut total_weight = 0.0;

        for (u, v, weight) in graph.edges() {
            if let Some(node) = [u, v].into_iter().find(|&node| node >= node_count) {
                return Err(GraphError::NodeOutOfRange { node, node_count });
            }
            if !weight.is_finite() || weight < 0.0 {
                return Err(GraphError::InvalidWeight {
                    left: u,
                    right: v,
                    weight,
                });
            }
            slots[u].weight += weight;
            slots[v].weight += weight;
            total_weight += 2.0 * weight;
            if u != v && weight > 0.0 {
                *slots[u].neighbours.entry(v).or_insert(0.0) += weight;
                *slots[v].neighbours.entry(u).or_insert(0.0) += weight;
            }
        }

        Ok(Self {
            slots,
            total_weight,
            live_count: node_count,
            lowest_live: 0,
        })
    }

    pub(super) fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub(super) fn size(&self, node: usize) -> usize {
        self.slots[node].size
    }

    pub(super) fn is_live(&self, node: usize) -> bool {
        self.slots.get(node).is_some_and(|slot| slot.live)
    }

    /// Returns the smallest live id, or `None` once every node is consumed.
    ///
    /// New ids are always larger than existing ones, so the smallest live id
    /// never decreases and a forward-only cursor suffices.
    pub(super) fn lowest_live(&mut self) -> Option<usize> {
        if self.live_count == 0 {
            return None;
        }
        while !self.is_live(self.lowest_live) {
            self.lowest_live += 1;
        }
        Some(self.lowest_live)
    }

    /// Finds the neighbour of `node` minimising the Paris distance.
    ///
    /// Ties resolve to the smallest neighbour id through the explicit
    /// `(distance, id)` key.
    pub(super) fn nearest_neighbour(&self, node: usize) -> Option<(usize, f64)> {
        let slot = &self.slots[node];
        slot.neighbours
            .iter()
            .filter(|&(&v, _)| v != node)
            .map(|(&v, &weight)| {
                let distance = self.slots[v].weight * slot.weight / weight / self.total_weight;
                (v, distance)
            })
            .min_by(|(a_id, a_dist), (b_id, b_dist)| {
                a_dist.total_cmp(b_dist).then_with(|| a_id.cmp(b_id))
            })
    }

    /// Contracts `a` and `b` into a new node and returns its id.
    ///
    /// Every neighbour of either operand is relinked onto the new node,
    /// summing the weights of shared neighbours; the `a`–`b` edge vanishes.
    pub(super) fn contract(&mut self, a: usize, b: usize) -> usize {
        let merged = self.slots.len();
        let left = self.retire(a);
        let right = self.retire(b);

        let mut neighbours = left.neighbours;
        for (v, weight) in right.neighbours {
            *neighbours.entry(v).or_insert(0.0) += weight;
        }
        neighbours.remove(&a);
        neighbours.remove(&b);

        for (&v, &weight) in &neighbours {
            let links = &mut self.slots[v].neighbours;
            links.remove(&a);
            links.remove(&b);
            links.insert(merged, weight);
        }

        self.slots.push(Slot {
            neighbours,
            weight: left.weight + right.weight,
            size: left.size + right.size,
            live: true,
        });
        self.live_count += 1;
        merged
    }

    /// Removes an isolated node and returns its leaf count.
    pub(super) fn remove_isolated(&mut self, node: usize) -> usize {
        self.retire(node).size
    }

    fn retire(&mut self, node: usize) -> Slot {
        let slot = &mut self.slots[node];
        slot.live = false;
        self.live_count -= 1;
        Slot {
            neighbours: std::mem::take(&mut slot.neighbours),
            weight: slot.weight,
            size: slot.size,
            live: false,
        }
    }
}
