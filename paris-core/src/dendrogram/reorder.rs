//! Canonical distance ordering of dendrogram records.

use tracing::instrument;

use super::{Dendrogram, Merge};
use crate::{Result, error::DendrogramError};

/// Sorts the merges of `dendrogram` by non-decreasing distance.
///
/// The sort is stable on `(distance, creation index)`, so ties keep their
/// creation order. Internal ids are rewritten through the resulting
/// permutation while leaf ids pass through unchanged. Reordering an already
/// sorted dendrogram returns it unchanged.
///
/// # Errors
/// Returns [`DendrogramError::Inversion`] (wrapped in
/// [`crate::ParisError::Dendrogram`]) when a cluster merges at a smaller
/// distance than one of its children, as no distance order can then keep
/// every child ahead of its parent.
///
/// # Examples
/// ```
/// use paris_core::{Dendrogram, Merge, reorder_dendrogram};
///
/// let raw = Dendrogram::from_merges(vec![
///     Merge::new(0, 1, 3.0, 2),
///     Merge::new(2, 3, 1.0, 2),
///     Merge::new(4, 5, 5.0, 4),
/// ])?;
/// let sorted = reorder_dendrogram(&raw)?;
/// assert_eq!(sorted.merges()[0], Merge::new(2, 3, 1.0, 2));
/// assert_eq!(sorted.merges()[2], Merge::new(5, 4, 5.0, 4));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "core.reorder",
    err,
    skip(dendrogram),
    fields(leaves = dendrogram.leaf_count(), merges = dendrogram.len()),
)]
pub fn reorder_dendrogram(dendrogram: &Dendrogram) -> Result<Dendrogram> {
    let leaf_count = dendrogram.leaf_count();
    let merges = dendrogram.merges();

    let mut order: Vec<usize> = (0..merges.len()).collect();
    order.sort_by(|&a, &b| merges[a].distance.total_cmp(&merges[b].distance));

    // position[t] is the new index of the merge created at step t.
    let mut position = vec![0_usize; merges.len()];
    for (new_step, &old_step) in order.iter().enumerate() {
        position[old_step] = new_step;
    }

    let remap = |id: usize| {
        if id < leaf_count {
            id
        } else {
            leaf_count + position[id - leaf_count]
        }
    };

    let mut sorted = Vec::with_capacity(merges.len());
    for (new_step, &old_step) in order.iter().enumerate() {
        let merge = merges[old_step];
        for child in [merge.left, merge.right] {
            if child >= leaf_count && position[child - leaf_count] >= new_step {
                return Err(DendrogramError::Inversion {
                    step: old_step,
                    child,
                }
                .into());
            }
        }
        sorted.push(Merge::new(
            remap(merge.left),
            remap(merge.right),
            merge.distance,
            merge.size,
        ));
    }
    Ok(Dendrogram::from_validated(leaf_count, sorted))
}
