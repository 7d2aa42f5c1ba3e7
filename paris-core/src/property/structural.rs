//! Structural invariants of dendrograms built from generated graphs.

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Dendrogram, Graph, Merge, ParisError, WeightedGraph, paris, reorder_dendrogram};

use super::types::GraphFixture;

pub(super) fn to_failure(err: ParisError) -> TestCaseError {
    TestCaseError::fail(format!("{} ({})", err, err.code()))
}

pub(super) fn build(graph: &Graph) -> Result<Dendrogram, TestCaseError> {
    paris(graph).map_err(to_failure)
}

/// Counts connected components over positive-weight edges.
fn component_count(graph: &Graph) -> usize {
    let n = graph.node_count();
    let mut seen = vec![false; n];
    let mut components = 0;
    for start in 0..n {
        if seen[start] {
            continue;
        }
        components += 1;
        seen[start] = true;
        let mut pending = vec![start];
        while let Some(node) = pending.pop() {
            for (next, weight) in graph.neighbours(node) {
                if weight > 0.0 && !seen[next] {
                    seen[next] = true;
                    pending.push(next);
                }
            }
        }
    }
    components
}

/// Checks record counts, operand uniqueness, sizes and distances.
pub(super) fn run_dendrogram_invariants(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let n = graph.node_count();
    let dendrogram = build(graph)?;

    prop_assert_eq!(dendrogram.leaf_count(), n);
    prop_assert_eq!(dendrogram.len(), n - 1);

    let mut uses = vec![0_usize; 2 * n - 1];
    for merge in dendrogram.merges() {
        uses[merge.left()] += 1;
        uses[merge.right()] += 1;
    }
    prop_assert!(uses[..2 * n - 2].iter().all(|&count| count == 1));
    prop_assert_eq!(uses[2 * n - 2], 0);

    prop_assert_eq!(dendrogram.merges().last().map(Merge::size), Some(n));
    prop_assert!(dendrogram.is_monotonic());
    prop_assert!(
        dendrogram
            .merges()
            .iter()
            .all(|merge| merge.distance() > 0.0)
    );

    let infinite = dendrogram
        .merges()
        .iter()
        .filter(|merge| merge.distance() == f64::INFINITY)
        .count();
    prop_assert_eq!(infinite, component_count(graph) - 1);
    Ok(())
}

/// Checks that reordering a built dendrogram changes nothing and that the
/// interchange rows rebuild the same tree.
pub(super) fn run_reorder_idempotence(fixture: &GraphFixture) -> TestCaseResult {
    let dendrogram = build(&fixture.graph)?;
    let reordered = reorder_dendrogram(&dendrogram).map_err(to_failure)?;
    prop_assert_eq!(&reordered, &dendrogram);

    let rows = dendrogram.to_rows();
    let restored = Dendrogram::from_rows(&rows)
        .map_err(|err| TestCaseError::fail(format!("rows must be valid: {err}")))?;
    prop_assert_eq!(&restored, &dendrogram);
    Ok(())
}

/// Checks that the graph is left untouched and a second run agrees.
pub(super) fn run_determinism(fixture: &GraphFixture) -> TestCaseResult {
    let before = fixture.graph.clone();
    let first = build(&fixture.graph)?;
    let second = build(&fixture.graph)?;
    prop_assert_eq!(&fixture.graph, &before);
    prop_assert_eq!(first, second);
    prop_assert!(fixture.graph.total_weight() > 0.0);
    Ok(())
}
