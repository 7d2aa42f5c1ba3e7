//! Partition materialisers turning cuts back into groups of leaf ids.
//!
//! Within a group, leaves are listed in replay order: the left operand's
//! leaves before the right operand's, recursively.

use std::collections::BTreeSet;

use crate::{Result, dendrogram::Dendrogram, error::ParisError};

/// Leaf-id groups covering every leaf exactly once.
pub type Partition = Vec<Vec<usize>>;

fn check_cluster_id(dendrogram: &Dendrogram, id: usize) -> Result<()> {
    match dendrogram.max_id() {
        Some(max) if id <= max => Ok(()),
        max => Err(ParisError::ClusterIdOutOfRange {
            id,
            max: max.unwrap_or(0),
        }),
    }
}

/// Lists the leaves below `id`, left subtree first.
fn subtree_leaves(dendrogram: &Dendrogram, id: usize) -> Vec<usize> {
    let mut leaves = Vec::new();
    let mut pending = vec![id];
    while let Some(node) = pending.pop() {
        match dendrogram.children(node) {
            Some((left, right)) => pending.extend([right, left]),
            None => leaves.push(node),
        }
    }
    leaves
}

/// Applies the first `count` merges; untouched leaves come first in
/// ascending order, then the surviving clusters in creation order.
fn replay(dendrogram: &Dendrogram, count: usize) -> Partition {
    let leaf_count = dendrogram.leaf_count();
    let mut groups: Vec<Option<Vec<usize>>> = (0..leaf_count).map(|id| Some(vec![id])).collect();
    for merge in dendrogram.merges().iter().take(count) {
        let mut group = groups[merge.left()].take().unwrap_or_default();
        group.extend(groups[merge.right()].take().unwrap_or_default());
        groups.push(Some(group));
    }
    groups.into_iter().flatten().collect()
}

/// Returns the leaves of cluster `cut`.
///
/// # Errors
/// Returns [`ParisError::ClusterIdOutOfRange`] when `cut` exceeds `2n - 2`.
///
/// # Examples
/// ```
/// use paris_core::{Dendrogram, clustering_from_cluster_cut};
///
/// let dendrogram = Dendrogram::from_rows(&[
///     [0.0, 1.0, 1.0, 2.0],
///     [2.0, 3.0, 2.0, 2.0],
///     [4.0, 5.0, 4.0, 4.0],
/// ])?;
/// assert_eq!(clustering_from_cluster_cut(&dendrogram, 5)?, vec![2, 3]);
/// assert_eq!(clustering_from_cluster_cut(&dendrogram, 1)?, vec![1]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn clustering_from_cluster_cut(dendrogram: &Dendrogram, cut: usize) -> Result<Vec<usize>> {
    check_cluster_id(dendrogram, cut)?;
    Ok(subtree_leaves(dendrogram, cut))
}

/// Returns the partition after the first `cut` merges.
///
/// # Errors
/// Returns [`ParisError::CutOutOfRange`] when `cut` exceeds `n - 1`.
///
/// # Examples
/// ```
/// use paris_core::{Dendrogram, clustering_from_homogeneous_cut};
///
/// let dendrogram = Dendrogram::from_rows(&[
///     [0.0, 1.0, 1.0, 2.0],
///     [2.0, 3.0, 2.0, 2.0],
///     [4.0, 5.0, 4.0, 4.0],
/// ])?;
/// assert_eq!(
///     clustering_from_homogeneous_cut(&dendrogram, 1)?,
///     vec![vec![2], vec![3], vec![0, 1]],
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn clustering_from_homogeneous_cut(dendrogram: &Dendrogram, cut: usize) -> Result<Partition> {
    let max = dendrogram.len();
    if cut > max {
        return Err(ParisError::CutOutOfRange { cut, max });
    }
    Ok(replay(dendrogram, cut))
}

/// Returns one group per id of `cut`.
///
/// Leaves of the set come first in ascending order, followed by clusters in
/// creation order. The set is expected to be an antichain covering the
/// leaves, as produced by the heterogeneous slicer; only id ranges are
/// checked.
///
/// # Errors
/// Returns [`ParisError::ClusterIdOutOfRange`] when an id exceeds `2n - 2`.
pub fn clustering_from_heterogeneous_cut(
    dendrogram: &Dendrogram,
    cut: &BTreeSet<usize>,
) -> Result<Partition> {
    for &id in cut {
        check_cluster_id(dendrogram, id)?;
    }
    Ok(cut
        .iter()
        .map(|&id| subtree_leaves(dendrogram, id))
        .collect())
}

/// Returns the partition obtained by applying merges in order while their
/// distance does not exceed `threshold`.
///
/// # Errors
/// Returns [`ParisError::InvalidDistanceThreshold`] when `threshold` is
/// negative or NaN.
pub fn clustering_from_distance(dendrogram: &Dendrogram, threshold: f64) -> Result<Partition> {
    if threshold.is_nan() || threshold < 0.0 {
        return Err(ParisError::InvalidDistanceThreshold {
            distance: threshold,
        });
    }
    let count = dendrogram
        .merges()
        .iter()
        .take_while(|merge| merge.distance() <= threshold)
        .count();
    Ok(replay(dendrogram, count))
}
