//! Cut evaluation over canonical dendrograms.
//!
//! Every slicer walks the merges once through the shared [`kernel`], scoring
//! each operand at the moment it is absorbed into its parent with a
//! `scoring(size, new_distance, own_distance)` strategy. Operands created at
//! distance zero, leaves included, always score zero.
//!
//! - [`cluster`]: the single best cluster.
//! - [`homogeneous`]: one merge index applied to the whole tree.
//! - [`heterogeneous`]: a per-branch set of clusters.
//! - [`distance`]: a distance threshold.
//! - [`filter`] and [`naive`]: ranking post-processing and gap heuristics.

pub mod cluster;
pub mod distance;
pub mod filter;
pub mod heterogeneous;
pub mod homogeneous;
pub(crate) mod kernel;
pub mod naive;

/// Scores a cluster from its leaf count, the distance at which it merges
/// into its parent, and the distance at which it was created.
pub type ScoringFn = fn(usize, f64, f64) -> f64;

/// Combines two merge distances into a representative threshold.
pub type MeanFn = fn(f64, f64) -> f64;

/// Maps a distance onto the scale used by ranking filters.
pub type ScalingFn = fn(f64) -> f64;

/// Scores the gap between a merge distance and the one before it.
pub type GapFn = fn(f64, f64) -> f64;

/// Default scoring: `size · (ln new − ln own)`.
///
/// A cluster created and absorbed at the same distance has no lifetime and
/// scores zero, which also covers clusters created and absorbed at `+∞`.
///
/// # Examples
/// ```
/// use paris_core::slicing::log_ratio_score;
///
/// assert_eq!(log_ratio_score(3, 2.0, 2.0), 0.0);
/// assert_eq!(log_ratio_score(2, f64::INFINITY, f64::INFINITY), 0.0);
/// assert!((log_ratio_score(2, 4.0, 1.0) - 2.0 * 4.0_f64.ln()).abs() < 1e-12);
/// ```
#[must_use]
pub fn log_ratio_score(size: usize, new_distance: f64, own_distance: f64) -> f64 {
    if new_distance == own_distance {
        return 0.0;
    }
    size as f64 * (new_distance.ln() - own_distance.ln())
}

/// Default mean: `√(x · y)`.
#[must_use]
pub fn geometric_mean(x: f64, y: f64) -> f64 {
    (x * y).sqrt()
}

/// Default filter scaling: the natural logarithm.
#[must_use]
pub fn log_scale(x: f64) -> f64 {
    x.ln()
}

/// Default gap score: `ln upper − ln lower`.
///
/// Equal distances have no gap, including two consecutive joins at `+∞`.
///
/// # Examples
/// ```
/// use paris_core::slicing::log_gap;
///
/// assert_eq!(log_gap(f64::INFINITY, f64::INFINITY), 0.0);
/// assert_eq!(log_gap(f64::INFINITY, 2.0), f64::INFINITY);
/// assert!((log_gap(4.0, 1.0) - 4.0_f64.ln()).abs() < 1e-12);
/// ```
#[must_use]
pub fn log_gap(upper: f64, lower: f64) -> f64 {
    if upper == lower {
        return 0.0;
    }
    upper.ln() - lower.ln()
}

/// A cut paired with its score.
///
/// # Examples
/// ```
/// use paris_core::slicing::Scored;
///
/// let scored = Scored::new(4_usize, 2.5);
/// assert_eq!(*scored.cut(), 4);
/// assert_eq!(scored.score(), 2.5);
/// assert_eq!(scored.into_parts(), (4, 2.5));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Scored<C> {
    cut: C,
    score: f64,
}

impl<C> Scored<C> {
    /// Pairs `cut` with `score`.
    #[must_use]
    pub const fn new(cut: C, score: f64) -> Self {
        Self { cut, score }
    }

    /// Returns the cut.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cut(&self) -> &C { &self.cut }

    /// Returns the score.
    #[must_use]
    #[rustfmt::skip]
    pub const fn score(&self) -> f64 { self.score }

    /// Consumes the pair and returns the cut.
    #[must_use]
    pub fn into_cut(self) -> C {
        self.cut
    }

    /// Consumes the pair and returns `(cut, score)`.
    #[must_use]
    pub fn into_parts(self) -> (C, f64) {
        (self.cut, self.score)
    }
}

/// Sorts by descending score, keeping the input order among ties.
pub(crate) fn rank_descending<C>(entries: &mut [Scored<C>]) {
    entries.sort_by(|a, b| b.score.total_cmp(&a.score));
}
