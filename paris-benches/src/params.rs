//! Benchmark parameter types.

use std::fmt;

/// Parameters for a planted-partition benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Number of planted blocks.
    pub block_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.node_count, self.block_count)
    }
}
