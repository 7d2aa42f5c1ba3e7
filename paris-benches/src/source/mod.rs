//! Synthetic benchmark graphs.
//!
//! Generates planted-partition graphs: nodes are dealt round-robin into
//! blocks, pairs inside a block connect with a high probability and pairs
//! across blocks with a low one. Every edge carries unit weight, so the
//! Paris distance is driven by degrees alone.

mod errors;

use paris_core::Graph;
use rand::{Rng, SeedableRng, rngs::SmallRng};

pub use errors::SyntheticError;

/// Configuration for [`planted_partition`].
#[derive(Clone, Debug)]
pub struct PlantedPartitionConfig {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of planted blocks.
    pub block_count: usize,
    /// Probability that two nodes of the same block are connected.
    pub intra_probability: f64,
    /// Probability that two nodes of different blocks are connected.
    pub inter_probability: f64,
    /// Seed for the random number generator.
    pub seed: u64,
}

impl PlantedPartitionConfig {
    /// Returns the block that `node` is dealt into.
    ///
    /// # Examples
    /// ```
    /// use paris_benches::source::PlantedPartitionConfig;
    ///
    /// let config = PlantedPartitionConfig {
    ///     node_count: 6,
    ///     block_count: 4,
    ///     intra_probability: 1.0,
    ///     inter_probability: 0.0,
    ///     seed: 1,
    /// };
    /// assert_eq!(config.block_of(5), 1);
    /// ```
    #[must_use]
    pub const fn block_of(&self, node: usize) -> usize {
        match node.checked_rem(self.block_count) {
            Some(block) => block,
            None => 0,
        }
    }

    fn validate(&self) -> Result<(), SyntheticError> {
        if self.node_count == 0 {
            return Err(SyntheticError::ZeroNodes);
        }
        if self.block_count == 0 {
            return Err(SyntheticError::ZeroBlocks);
        }
        if self.block_count > self.node_count {
            return Err(SyntheticError::BlockCountExceedsNodeCount {
                block_count: self.block_count,
                node_count: self.node_count,
            });
        }
        for (parameter, probability) in [
            ("intra_probability", self.intra_probability),
            ("inter_probability", self.inter_probability),
        ] {
            if !(0.0..=1.0).contains(&probability) {
                return Err(SyntheticError::InvalidProbability { parameter });
            }
        }
        Ok(())
    }
}

/// Generates a seeded planted-partition graph.
///
/// # Errors
/// Returns [`SyntheticError`] when the configuration is invalid.
///
/// # Examples
/// ```
/// use paris_benches::source::{PlantedPartitionConfig, planted_partition};
///
/// let graph = planted_partition(&PlantedPartitionConfig {
///     node_count: 12,
///     block_count: 3,
///     intra_probability: 1.0,
///     inter_probability: 0.0,
///     seed: 7,
/// })?;
/// assert_eq!(graph.node_count(), 12);
/// assert_eq!(graph.edge_count(), 18);
/// # Ok::<(), paris_benches::source::SyntheticError>(())
/// ```
pub fn planted_partition(config: &PlantedPartitionConfig) -> Result<Graph, SyntheticError> {
    config.validate()?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut edges = Vec::new();
    for left in 0..config.node_count {
        for right in (left + 1)..config.node_count {
            let probability = if config.block_of(left) == config.block_of(right) {
                config.intra_probability
            } else {
                config.inter_probability
            };
            if rng.gen_bool(probability) {
                edges.push((left, right, 1.0));
            }
        }
    }
    Ok(Graph::from_edges(config.node_count, edges)?)
}
