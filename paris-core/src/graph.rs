//! Weighted graph abstractions consumed by the Paris dendrogram builder.

use std::collections::BTreeMap;

use crate::error::GraphError;

/// Abstraction over an undirected weighted graph with compacted node ids.
///
/// Nodes are the integers `[0, node_count)`. Each unordered pair carries at
/// most one aggregated weight; implementations yielding the same pair twice
/// have the weights summed by the builder.
///
/// # Examples
/// ```
/// use paris_core::WeightedGraph;
///
/// struct Path(usize);
///
/// impl WeightedGraph for Path {
///     fn node_count(&self) -> usize { self.0 }
///     fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
///         (1..self.0).map(|v| (v - 1, v, 1.0))
///     }
/// }
///
/// let path = Path(4);
/// assert_eq!(path.node_count(), 4);
/// assert_eq!(path.edges().count(), 3);
/// assert_eq!(path.total_weight(), 3.0);
/// ```
pub trait WeightedGraph {
    /// Returns the number of nodes.
    fn node_count(&self) -> usize;

    /// Iterates every undirected edge once as `(u, v, weight)`.
    fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_;

    /// Returns a human-readable name used in diagnostics.
    fn name(&self) -> &str {
        "graph"
    }

    /// Sums the weight of every edge.
    #[must_use]
    fn total_weight(&self) -> f64 {
        self.edges().map(|(_, _, weight)| weight).sum()
    }
}

/// Adjacency-map graph over the node ids `[0, node_count)`.
///
/// Adding an edge between a pair that is already connected adds the new
/// weight to the existing one, so every pair holds a single aggregated
/// weight.
///
/// # Examples
/// ```
/// use paris_core::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 1.0)?;
/// graph.add_edge(1, 0, 0.5)?;
/// graph.add_edge(1, 2, 2.0)?;
/// assert_eq!(graph.weight(0, 1), Some(1.5));
/// assert_eq!(graph.degree(1), 3.5);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), paris_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    adjacency: Vec<BTreeMap<usize, f64>>,
}

impl Graph {
    /// Creates a graph with `node_count` isolated nodes.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![BTreeMap::new(); node_count],
        }
    }

    /// Builds a graph from `(u, v, weight)` triples.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] when an endpoint is not below
    /// `node_count` and [`GraphError::InvalidWeight`] when a weight is
    /// negative or not finite.
    ///
    /// # Examples
    /// ```
    /// use paris_core::Graph;
    ///
    /// let graph = Graph::from_edges(3, [(0, 1, 1.0), (1, 2, 1.0)])?;
    /// assert_eq!(graph.neighbours(1).count(), 2);
    /// # Ok::<(), paris_core::GraphError>(())
    /// ```
    pub fn from_edges<I>(node_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut graph = Self::new(node_count);
        for (left, right, weight) in edges {
            graph.add_edge(left, right, weight)?;
        }
        Ok(graph)
    }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.adjacency.len() }

    /// Returns the number of distinct connected pairs, self-loops included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges_sorted().count()
    }

    /// Adds `weight` to the edge between `left` and `right`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] for an unknown endpoint and
    /// [`GraphError::InvalidWeight`] for a negative or non-finite weight.
    pub fn add_edge(&mut self, left: usize, right: usize, weight: f64) -> Result<(), GraphError> {
        self.check_node(left)?;
        self.check_node(right)?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                left,
                right,
                weight,
            });
        }
        *self.adjacency[left].entry(right).or_insert(0.0) += weight;
        if left != right {
            *self.adjacency[right].entry(left).or_insert(0.0) += weight;
        }
        Ok(())
    }

    /// Replaces the weight between `left` and `right`, creating the edge when
    /// needed.
    ///
    /// # Errors
    /// Same conditions as [`Self::add_edge`].
    pub fn set_weight(&mut self, left: usize, right: usize, weight: f64) -> Result<(), GraphError> {
        self.check_node(left)?;
        self.check_node(right)?;
        self.adjacency[left].remove(&right);
        self.adjacency[right].remove(&left);
        self.add_edge(left, right, weight)
    }

    /// Returns the weight between two nodes, if they are connected.
    #[must_use]
    pub fn weight(&self, left: usize, right: usize) -> Option<f64> {
        self.adjacency.get(left)?.get(&right).copied()
    }

    /// Iterates the neighbours of `node` in ascending id order with their
    /// weights. Unknown nodes have no neighbours.
    pub fn neighbours(&self, node: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|neighbours| neighbours.iter().map(|(&v, &w)| (v, w)))
    }

    /// Returns the weighted degree of `node`; a self-loop counts twice.
    #[must_use]
    pub fn degree(&self, node: usize) -> f64 {
        self.neighbours(node)
            .map(|(v, weight)| if v == node { 2.0 * weight } else { weight })
            .sum()
    }

    fn edges_sorted(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, neighbours)| {
            neighbours
                .range(u..)
                .map(move |(&v, &weight)| (u, v, weight))
        })
    }

    fn check_node(&self, node: usize) -> Result<(), GraphError> {
        if node < self.node_count() {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node,
                node_count: self.node_count(),
            })
        }
    }
}

impl WeightedGraph for Graph {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.edges_sorted()
    }
}
