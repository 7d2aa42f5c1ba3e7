//! Agreement between the slicers and the partition materialisers.

use std::collections::BTreeSet;

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;

use crate::{
    Dendrogram, Paris, Partition, clustering_from_cluster_cut, clustering_from_distance,
    clustering_from_heterogeneous_cut, clustering_from_homogeneous_cut,
    slicing::{Scored, log_scale},
};

use super::structural::{build, to_failure};
use super::types::GraphFixture;

/// Number of successive heterogeneous cuts requested per fixture.
const HETEROGENEOUS_RANKS: usize = 3;

/// Fails unless `partition` lists every leaf of `dendrogram` exactly once.
fn check_covers(partition: &Partition, dendrogram: &Dendrogram) -> TestCaseResult {
    let mut leaves: Vec<usize> = partition.iter().flatten().copied().collect();
    leaves.sort_unstable();
    prop_assert_eq!(leaves, (0..dendrogram.leaf_count()).collect::<Vec<_>>());
    prop_assert!(partition.iter().all(|group| !group.is_empty()));
    Ok(())
}

/// Checks that every cut family agrees on the finest and coarsest
/// partitions.
pub(super) fn run_cut_extremes(fixture: &GraphFixture) -> TestCaseResult {
    let dendrogram = build(&fixture.graph)?;
    let n = dendrogram.leaf_count();
    let singletons: Partition = (0..n).map(|leaf| vec![leaf]).collect();

    let finest = clustering_from_homogeneous_cut(&dendrogram, 0).map_err(to_failure)?;
    prop_assert_eq!(&finest, &singletons);
    let whole = clustering_from_homogeneous_cut(&dendrogram, n - 1).map_err(to_failure)?;
    prop_assert_eq!(whole.len(), 1);
    check_covers(&whole, &dendrogram)?;

    let all_leaves: BTreeSet<usize> = (0..n).collect();
    prop_assert_eq!(
        &clustering_from_heterogeneous_cut(&dendrogram, &all_leaves).map_err(to_failure)?,
        &singletons
    );
    prop_assert_eq!(
        &clustering_from_distance(&dendrogram, 0.0).map_err(to_failure)?,
        &singletons
    );

    let root = dendrogram.root().ok_or_else(|| TestCaseError::fail("root must exist"))?;
    prop_assert_eq!(
        &clustering_from_heterogeneous_cut(&dendrogram, &BTreeSet::from([root]))
            .map_err(to_failure)?,
        &whole
    );
    prop_assert_eq!(
        &clustering_from_distance(&dendrogram, f64::INFINITY).map_err(to_failure)?,
        &whole
    );
    prop_assert_eq!(
        &clustering_from_cluster_cut(&dendrogram, root).map_err(to_failure)?,
        &whole[0]
    );
    Ok(())
}

/// Checks that every ranked cut is accepted by its materialiser and yields
/// a partition of the leaves, and that each best cut heads its ranking.
pub(super) fn run_rankings_materialise(fixture: &GraphFixture) -> TestCaseResult {
    let paris = Paris::default();
    let dendrogram = paris.dendrogram(&fixture.graph).map_err(to_failure)?;
    let n = dendrogram.leaf_count();

    let clusters = paris.ranking_cluster_cuts(&dendrogram);
    prop_assert_eq!(clusters.len(), 2 * n - 2);
    for entry in &clusters {
        let leaves = paris
            .clustering_from_cluster_cut(&dendrogram, *entry.cut())
            .map_err(to_failure)?;
        prop_assert!(!leaves.is_empty());
    }
    let best_cluster = paris.best_cluster_cut(&dendrogram);
    prop_assert_eq!(
        best_cluster.map(|best| best.score()),
        clusters.first().map(Scored::score)
    );

    let homogeneous = paris.ranking_homogeneous_cuts(&dendrogram);
    prop_assert_eq!(homogeneous.len(), n - 1);
    for entry in &homogeneous {
        let partition = paris
            .clustering_from_homogeneous_cut(&dendrogram, *entry.cut())
            .map_err(to_failure)?;
        prop_assert_eq!(partition.len(), n - *entry.cut());
        check_covers(&partition, &dendrogram)?;
    }
    prop_assert_eq!(
        Some(*paris.best_homogeneous_cut(&dendrogram).cut()),
        homogeneous.first().map(|entry| *entry.cut())
    );

    let distances = paris.ranking_distances(&dendrogram);
    prop_assert_eq!(distances.len(), n - 1);
    for entry in &distances {
        let partition = paris
            .clustering_from_distance(&dendrogram, *entry.cut())
            .map_err(to_failure)?;
        check_covers(&partition, &dendrogram)?;
    }

    for entry in paris.ranking_heterogeneous_cuts(&dendrogram, HETEROGENEOUS_RANKS) {
        let partition = paris
            .clustering_from_heterogeneous_cut(&dendrogram, entry.cut())
            .map_err(to_failure)?;
        prop_assert_eq!(partition.len(), entry.cut().len());
        check_covers(&partition, &dendrogram)?;
    }

    for entry in paris.naive_ranking_homogeneous_cuts(&dendrogram) {
        let partition = paris
            .clustering_from_homogeneous_cut(&dendrogram, *entry.cut())
            .map_err(to_failure)?;
        check_covers(&partition, &dendrogram)?;
    }
    for entry in paris.naive_ranking_distances(&dendrogram) {
        let partition = paris
            .clustering_from_distance(&dendrogram, *entry.cut())
            .map_err(to_failure)?;
        check_covers(&partition, &dendrogram)?;
    }
    Ok(())
}

/// Checks that filtered rankings keep their head, preserve order, and
/// leave every kept pair separated by the filter threshold.
pub(super) fn run_filter_separation(fixture: &GraphFixture) -> TestCaseResult {
    let paris = Paris::default();
    let threshold = paris.filter_threshold();
    let dendrogram = build(&fixture.graph)?;
    let ranking = paris.ranking_homogeneous_cuts(&dendrogram);
    let kept = paris
        .filter_homogeneous_ranking(&ranking, &dendrogram)
        .map_err(to_failure)?;

    prop_assert_eq!(kept.first(), ranking.first());
    let mut remaining = ranking.iter();
    for entry in &kept {
        prop_assert!(remaining.any(|candidate| candidate == entry));
    }

    let merges = dendrogram.merges();
    let origin = log_scale(merges[0].distance());
    let index = |cut: usize| match cut {
        0 => 0.0,
        _ => log_scale(merges[cut - 1].distance()) - origin,
    };
    for (position, earlier) in kept.iter().enumerate() {
        let reference = index(*earlier.cut());
        for later in &kept[position + 1..] {
            let crowded = (reference - index(*later.cut())).abs() < threshold * reference;
            prop_assert!(!crowded, "cuts {} and {} are too close", earlier.cut(), later.cut());
        }
    }
    Ok(())
}
