use paris_core::{Graph, WeightedGraph};

/// Two unit-weight triangles `{0, 1, 2}` and `{3, 4, 5}` joined by `2 – 3`.
#[must_use]
pub fn two_triangles() -> Graph {
    Graph::from_edges(
        6,
        [
            (0, 1, 1.0),
            (0, 2, 1.0),
            (1, 2, 1.0),
            (2, 3, 1.0),
            (3, 4, 1.0),
            (3, 5, 1.0),
            (4, 5, 1.0),
        ],
    )
    .expect("two triangles must be a valid graph")
}

/// A pair `{0, 1}` and a path `2 – 3 – 4` with no edge between them.
#[allow(dead_code, reason = "only the pipeline suite uses the disconnected graph")]
#[must_use]
pub fn pair_and_path() -> Graph {
    Graph::from_edges(5, [(0, 1, 1.0), (2, 3, 1.0), (3, 4, 1.0)])
        .expect("pair and path must be a valid graph")
}

/// Edge-list graph carrying a display name, for checking span fields.
pub struct NamedEdges {
    pub name: &'static str,
    pub node_count: usize,
    pub edges: Vec<(usize, usize, f64)>,
}

impl WeightedGraph for NamedEdges {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.edges.iter().copied()
    }

    fn name(&self) -> &str {
        self.name
    }
}
