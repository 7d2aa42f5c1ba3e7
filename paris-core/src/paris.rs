//! Configured entry point bundling every Paris operation.
//!
//! [`Paris`] carries the strategies chosen through [`crate::ParisBuilder`]
//! and forwards them to the free functions of [`crate::dendrogram`],
//! [`crate::slicing`] and [`crate::partition`], wrapping each call in a
//! tracing span.

use std::collections::BTreeSet;

use tracing::{debug, instrument};

use crate::{
    Result,
    builder::DEFAULT_FILTER_THRESHOLD,
    dendrogram::{self, Dendrogram},
    graph::WeightedGraph,
    partition::{self, Partition},
    slicing::{
        GapFn, MeanFn, ScalingFn, Scored, ScoringFn, cluster, distance, filter, geometric_mean,
        heterogeneous, homogeneous, log_gap, log_ratio_score, log_scale, naive,
    },
};

/// Entry point for building and slicing Paris dendrograms.
///
/// # Examples
/// ```
/// use paris_core::{Graph, ParisBuilder};
///
/// let graph = Graph::from_edges(
///     6,
///     [(0, 1, 1.0), (0, 2, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0), (3, 5, 1.0), (4, 5, 1.0)],
/// )?;
/// let paris = ParisBuilder::new().build()?;
/// let dendrogram = paris.dendrogram(&graph)?;
/// let best = paris.best_homogeneous_cut(&dendrogram);
/// let partition = paris.clustering_from_homogeneous_cut(&dendrogram, *best.cut())?;
/// assert_eq!(partition, vec![vec![1, 0, 2], vec![5, 4, 3]]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Paris {
    scoring: ScoringFn,
    mean: MeanFn,
    scaling: ScalingFn,
    gap: GapFn,
    filter_threshold: f64,
}

impl Default for Paris {
    fn default() -> Self {
        Self::new(
            log_ratio_score,
            geometric_mean,
            log_scale,
            log_gap,
            DEFAULT_FILTER_THRESHOLD,
        )
    }
}

impl Paris {
    pub(crate) fn new(
        scoring: ScoringFn,
        mean: MeanFn,
        scaling: ScalingFn,
        gap: GapFn,
        filter_threshold: f64,
    ) -> Self {
        Self {
            scoring,
            mean,
            scaling,
            gap,
            filter_threshold,
        }
    }

    /// Returns the configured ranking filter threshold.
    #[must_use]
    #[rustfmt::skip]
    pub fn filter_threshold(&self) -> f64 { self.filter_threshold }

    /// Returns the configured scoring strategy.
    #[must_use]
    #[rustfmt::skip]
    pub fn scoring(&self) -> ScoringFn { self.scoring }

    /// Returns the configured mean strategy.
    #[must_use]
    #[rustfmt::skip]
    pub fn mean(&self) -> MeanFn { self.mean }

    /// Builds the canonical dendrogram of `graph`; see [`dendrogram::paris`].
    ///
    /// # Errors
    /// Returns [`crate::ParisError::Graph`] for malformed edges and
    /// [`crate::ParisError::DegenerateInput`] when a graph with at least two
    /// nodes has zero total weight, and [`crate::ParisError::WeightOverflow`]
    /// when the weights overflow the Paris distance.
    pub fn dendrogram<G: WeightedGraph + ?Sized>(&self, graph: &G) -> Result<Dendrogram> {
        dendrogram::paris(graph)
    }

    /// Reorders `dendrogram` by non-decreasing distance; see
    /// [`dendrogram::reorder_dendrogram`].
    ///
    /// # Errors
    /// Returns [`crate::ParisError::Dendrogram`] when the merges contain an
    /// inversion.
    pub fn reorder(&self, dendrogram: &Dendrogram) -> Result<Dendrogram> {
        dendrogram::reorder_dendrogram(dendrogram)
    }

    /// Finds the best single cluster; see [`cluster::best_cluster_cut`].
    #[must_use]
    #[instrument(
        name = "core.best_cluster_cut",
        skip(self, dendrogram),
        fields(leaves = dendrogram.leaf_count()),
    )]
    pub fn best_cluster_cut(&self, dendrogram: &Dendrogram) -> Option<Scored<usize>> {
        let best = cluster::best_cluster_cut(dendrogram, self.scoring);
        if let Some(best) = &best {
            debug!(cut = *best.cut(), score = best.score(), "best cluster selected");
        }
        best
    }

    /// Ranks clusters by local score; see [`cluster::ranking_cluster_cuts`].
    #[must_use]
    #[instrument(
        name = "core.ranking_cluster_cuts",
        skip(self, dendrogram),
        fields(leaves = dendrogram.leaf_count()),
    )]
    pub fn ranking_cluster_cuts(&self, dendrogram: &Dendrogram) -> Vec<Scored<usize>> {
        cluster::ranking_cluster_cuts(dendrogram, self.scoring)
    }

    /// Finds the best homogeneous cut; see
    /// [`homogeneous::best_homogeneous_cut`].
    #[must_use]
    #[instrument(
        name = "core.best_homogeneous_cut",
        skip(self, dendrogram),
        fields(leaves = dendrogram.leaf_count()),
    )]
    pub fn best_homogeneous_cut(&self, dendrogram: &Dendrogram) -> Scored<usize> {
        let best = homogeneous::best_homogeneous_cut(dendrogram, self.scoring);
        debug!(cut = *best.cut(), score = best.score(), "best homogeneous cut selected");
        best
    }

    /// Ranks homogeneous cuts; see [`homogeneous::ranking_homogeneous_cuts`].
    #[must_use]
    #[instrument(
        name = "core.ranking_homogeneous_cuts",
        skip(self, dendrogram),
        fields(leaves = dendrogram.leaf_count()),
    )]
    pub fn ranking_homogeneous_cuts(&self, dendrogram: &Dendrogram) -> Vec<Scored<usize>> {
        homogeneous::ranking_homogeneous_cuts(dendrogram, self.scoring)
    }

    /// Finds the best heterogeneous cut avoiding `exclude`; see
    /// [`heterogeneous::best_heterogeneous_cut`].
    #[must_use]
    #[instrument(
        name = "core.best_heterogeneous_cut",
        skip(self, dendrogram, exclude),
        fields(leaves = dendrogram.leaf_count(), excluded = exclude.len()),
    )]
    pub fn best_heterogeneous_cut(
        &self,
        dendrogram: &Dendrogram,
        exclude: &BTreeSet<usize>,
    ) -> Scored<BTreeSet<usize>> {
        let best = heterogeneous::best_heterogeneous_cut(dendrogram, self.scoring, exclude);
        debug!(
            clusters = best.cut().len(),
            score = best.score(),
            "best heterogeneous cut selected"
        );
        best
    }

    /// Returns `k` successive heterogeneous cuts; see
    /// [`heterogeneous::ranking_heterogeneous_cuts`].
    #[must_use]
    #[instrument(
        name = "core.ranking_heterogeneous_cuts",
        skip(self, dendrogram),
        fields(leaves = dendrogram.leaf_count()),
    )]
    pub fn ranking_heterogeneous_cuts(
        &self,
        dendrogram: &Dendrogram,
        k: usize,
    ) -> Vec<Scored<BTreeSet<usize>>> {
        heterogeneous::ranking_heterogeneous_cuts(dendrogram, k, self.scoring)
    }

    /// Finds the best distance threshold; see [`distance::best_distance`].
    #[must_use]
    #[instrument(
        name = "core.best_distance",
        skip(self, dendrogram),
        fields(leaves = dendrogram.leaf_count()),
    )]
    pub fn best_distance(&self, dendrogram: &Dendrogram) -> Scored<f64> {
        let best = distance::best_distance(dendrogram, self.scoring, self.mean);
        debug!(threshold = *best.cut(), score = best.score(), "best distance selected");
        best
    }

    /// Ranks distance thresholds; see [`distance::ranking_distances`].
    #[must_use]
    #[instrument(
        name = "core.ranking_distances",
        skip(self, dendrogram),
        fields(leaves = dendrogram.leaf_count()),
    )]
    pub fn ranking_distances(&self, dendrogram: &Dendrogram) -> Vec<Scored<f64>> {
        distance::ranking_distances(dendrogram, self.scoring, self.mean)
    }

    /// Filters a homogeneous ranking with the configured threshold and
    /// scaling; see [`filter::filter_homogeneous_ranking`].
    ///
    /// # Errors
    /// Returns [`crate::ParisError::CutOutOfRange`] when a ranked cut exceeds
    /// `n - 1`.
    #[instrument(
        name = "core.filter_homogeneous_ranking",
        err,
        skip(self, ranking, dendrogram),
        fields(entries = ranking.len(), threshold = self.filter_threshold),
    )]
    pub fn filter_homogeneous_ranking(
        &self,
        ranking: &[Scored<usize>],
        dendrogram: &Dendrogram,
    ) -> Result<Vec<Scored<usize>>> {
        let kept = filter::filter_homogeneous_ranking(
            ranking,
            dendrogram,
            self.filter_threshold,
            self.scaling,
        )?;
        debug!(kept = kept.len(), "homogeneous ranking filtered");
        Ok(kept)
    }

    /// Filters a distance ranking with the configured threshold and scaling;
    /// see [`filter::filter_distance_ranking`].
    ///
    /// # Errors
    /// Only fails when the configured threshold is invalid, which
    /// [`crate::ParisBuilder::build`] already rules out.
    #[instrument(
        name = "core.filter_distance_ranking",
        err,
        skip(self, ranking, dendrogram),
        fields(entries = ranking.len(), threshold = self.filter_threshold),
    )]
    pub fn filter_distance_ranking(
        &self,
        ranking: &[Scored<f64>],
        dendrogram: &Dendrogram,
    ) -> Result<Vec<Scored<f64>>> {
        let kept = filter::filter_distance_ranking(
            ranking,
            dendrogram,
            self.filter_threshold,
            self.scaling,
        )?;
        debug!(kept = kept.len(), "distance ranking filtered");
        Ok(kept)
    }

    /// Returns the cut after the largest distance gap; see
    /// [`naive::naive_best_homogeneous_cut`].
    #[must_use]
    pub fn naive_best_homogeneous_cut(&self, dendrogram: &Dendrogram) -> Option<Scored<usize>> {
        naive::naive_best_homogeneous_cut(dendrogram, self.gap)
    }

    /// Ranks cuts by distance gap; see
    /// [`naive::naive_ranking_homogeneous_cuts`].
    #[must_use]
    pub fn naive_ranking_homogeneous_cuts(&self, dendrogram: &Dendrogram) -> Vec<Scored<usize>> {
        naive::naive_ranking_homogeneous_cuts(dendrogram, self.gap)
    }

    /// Returns the threshold inside the largest distance gap; see
    /// [`naive::naive_best_distance`].
    #[must_use]
    pub fn naive_best_distance(&self, dendrogram: &Dendrogram) -> Option<Scored<f64>> {
        naive::naive_best_distance(dendrogram, self.gap, self.mean)
    }

    /// Ranks gap thresholds; see [`naive::naive_ranking_distances`].
    #[must_use]
    pub fn naive_ranking_distances(&self, dendrogram: &Dendrogram) -> Vec<Scored<f64>> {
        naive::naive_ranking_distances(dendrogram, self.gap, self.mean)
    }

    /// Materialises a cluster cut; see [`partition::clustering_from_cluster_cut`].
    ///
    /// # Errors
    /// Returns [`crate::ParisError::ClusterIdOutOfRange`] for an unknown id.
    #[instrument(name = "core.clustering_from_cluster_cut", err, skip(self, dendrogram))]
    pub fn clustering_from_cluster_cut(
        &self,
        dendrogram: &Dendrogram,
        cut: usize,
    ) -> Result<Vec<usize>> {
        partition::clustering_from_cluster_cut(dendrogram, cut)
    }

    /// Materialises a homogeneous cut; see
    /// [`partition::clustering_from_homogeneous_cut`].
    ///
    /// # Errors
    /// Returns [`crate::ParisError::CutOutOfRange`] when `cut` exceeds `n - 1`.
    #[instrument(name = "core.clustering_from_homogeneous_cut", err, skip(self, dendrogram))]
    pub fn clustering_from_homogeneous_cut(
        &self,
        dendrogram: &Dendrogram,
        cut: usize,
    ) -> Result<Partition> {
        partition::clustering_from_homogeneous_cut(dendrogram, cut)
    }

    /// Materialises a heterogeneous cut; see
    /// [`partition::clustering_from_heterogeneous_cut`].
    ///
    /// # Errors
    /// Returns [`crate::ParisError::ClusterIdOutOfRange`] for an unknown id.
    #[instrument(
        name = "core.clustering_from_heterogeneous_cut",
        err,
        skip(self, dendrogram, cut),
        fields(clusters = cut.len()),
    )]
    pub fn clustering_from_heterogeneous_cut(
        &self,
        dendrogram: &Dendrogram,
        cut: &BTreeSet<usize>,
    ) -> Result<Partition> {
        partition::clustering_from_heterogeneous_cut(dendrogram, cut)
    }

    /// Materialises a distance threshold; see
    /// [`partition::clustering_from_distance`].
    ///
    /// # Errors
    /// Returns [`crate::ParisError::InvalidDistanceThreshold`] for a negative
    /// or NaN threshold.
    #[instrument(name = "core.clustering_from_distance", err, skip(self, dendrogram))]
    pub fn clustering_from_distance(
        &self,
        dendrogram: &Dendrogram,
        threshold: f64,
    ) -> Result<Partition> {
        partition::clustering_from_distance(dendrogram, threshold)
    }
}
