//! Distance cuts: the homogeneous scores indexed by a distance threshold.
//!
//! Boundary `t` sits between merges `t - 1` and `t` and stands for the
//! partition after `t` merges. It is represented by the threshold
//! `mean(distance[t - 1], distance[t])`; boundary `0` is the threshold `0.0`.

use super::{
    Scored,
    kernel::{PrefixScore, prefix_scores},
};
use crate::dendrogram::Dendrogram;

/// Threshold representing boundary `t`.
///
/// When merge `t` happens at `+∞` the lower distance is used, so the
/// threshold still keeps the components apart.
pub(crate) fn boundary_threshold<M>(dendrogram: &Dendrogram, boundary: usize, mean: &M) -> f64
where
    M: Fn(f64, f64) -> f64,
{
    let merges = dendrogram.merges();
    match boundary.checked_sub(1) {
        None => 0.0,
        Some(previous) => {
            let lower = merges[previous].distance();
            let upper = merges[boundary].distance();
            if upper.is_infinite() {
                lower
            } else {
                mean(lower, upper)
            }
        }
    }
}

/// Finds the distance threshold whose partition scores highest.
///
/// Scores and tie-breaking match
/// [`best_homogeneous_cut`](super::homogeneous::best_homogeneous_cut).
/// Returns `0.0` with score `0.0` when no boundary scores above zero.
///
/// # Examples
/// ```
/// use paris_core::{
///     Dendrogram,
///     slicing::{distance::best_distance, geometric_mean, log_ratio_score},
/// };
///
/// let dendrogram = Dendrogram::from_rows(&[
///     [0.0, 1.0, 1.0, 2.0],
///     [2.0, 3.0, 2.0, 2.0],
///     [4.0, 5.0, 4.0, 4.0],
/// ])?;
/// let best = best_distance(&dendrogram, log_ratio_score, geometric_mean);
/// assert!((best.cut() - 8.0_f64.sqrt()).abs() < 1e-12);
/// # Ok::<(), paris_core::DendrogramError>(())
/// ```
#[must_use]
pub fn best_distance<F, M>(dendrogram: &Dendrogram, scoring: F, mean: M) -> Scored<f64>
where
    F: Fn(usize, f64, f64) -> f64,
    M: Fn(f64, f64) -> f64,
{
    let mut best = 0;
    let mut best_score = PrefixScore::default();
    for (boundary, score) in prefix_scores(dendrogram, scoring).into_iter().enumerate() {
        if score.total_cmp(&best_score).is_gt() {
            best = boundary;
            best_score = score;
        }
    }
    Scored::new(
        boundary_threshold(dendrogram, best, &mean),
        best_score.value(),
    )
}

/// Ranks the thresholds of boundaries `0 ..= n - 2` by descending score;
/// ties keep ascending boundary order.
#[must_use]
pub fn ranking_distances<F, M>(dendrogram: &Dendrogram, scoring: F, mean: M) -> Vec<Scored<f64>>
where
    F: Fn(usize, f64, f64) -> f64,
    M: Fn(f64, f64) -> f64,
{
    let mut ranking: Vec<_> = prefix_scores(dendrogram, scoring)
        .into_iter()
        .enumerate()
        .collect();
    ranking.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    ranking
        .into_iter()
        .map(|(boundary, score)| {
            Scored::new(boundary_threshold(dendrogram, boundary, &mean), score.value())
        })
        .collect()
}
