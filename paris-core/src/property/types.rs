//! Type definitions for the property suites.

use crate::Graph;

/// Shape of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum GraphTopology {
    /// Random spanning tree plus a handful of chords.
    Sparse,
    /// Most pairs connected (edge probability 0.6-0.95).
    Dense,
    /// Dense blocks joined by a few light edges.
    Planted,
    /// Several components with no edges between them, plus isolated nodes.
    Disconnected,
    /// Sparse topology with every weight equal to one, stressing ties.
    UniformWeights,
}

/// Generated graph together with the topology that produced it.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// The generated graph.
    pub graph: Graph,
    /// Topology used during generation.
    pub topology: GraphTopology,
}
