//! Error types for synthetic benchmark graph generation.

use paris_core::GraphError;

/// Errors that may occur while generating benchmark graphs.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SyntheticError {
    /// The requested node count was zero.
    #[error("node count must be greater than zero")]
    ZeroNodes,
    /// The requested block count was zero.
    #[error("block count must be greater than zero")]
    ZeroBlocks,
    /// The configured block count exceeded the available nodes.
    #[error("block count ({block_count}) must not exceed node count ({node_count})")]
    BlockCountExceedsNodeCount {
        /// Number of blocks requested.
        block_count: usize,
        /// Number of nodes requested.
        node_count: usize,
    },
    /// An edge probability was outside `[0, 1]`.
    #[error("probability `{parameter}` must lie in [0, 1]")]
    InvalidProbability {
        /// Name of the invalid parameter.
        parameter: &'static str,
    },
    /// A generated edge was rejected by the graph.
    #[error("generated edge was rejected: {0}")]
    Graph(#[from] GraphError),
}
