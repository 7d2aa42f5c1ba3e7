//! Gap heuristics that score a cut by the jump between consecutive merge
//! distances alone.
//!
//! The gap `gap(distance[t + 1], distance[t])` scores homogeneous cut
//! `t + 1` and the distance threshold `mean(distance[t + 1], distance[t])`.
//! Dendrograms with fewer than two merges have no gap.

use super::{Scored, rank_descending};
use crate::dendrogram::Dendrogram;

fn first_max<C>(entries: impl Iterator<Item = Scored<C>>) -> Option<Scored<C>> {
    entries.reduce(|best, candidate| {
        if candidate.score().total_cmp(&best.score()).is_gt() {
            candidate
        } else {
            best
        }
    })
}

fn gap_scores<G>(dendrogram: &Dendrogram, gap: G) -> Vec<(usize, f64)>
where
    G: Fn(f64, f64) -> f64,
{
    let merges = dendrogram.merges();
    (0..merges.len().saturating_sub(1))
        .map(|t| (t, gap(merges[t + 1].distance(), merges[t].distance())))
        .collect()
}

/// Returns the homogeneous cut following the largest distance gap.
///
/// # Examples
/// ```
/// use paris_core::{Dendrogram, slicing::{log_gap, naive::naive_best_homogeneous_cut}};
///
/// let dendrogram = Dendrogram::from_rows(&[
///     [0.0, 1.0, 1.0, 2.0],
///     [2.0, 3.0, 2.0, 2.0],
///     [4.0, 5.0, 8.0, 4.0],
/// ])?;
/// let best = naive_best_homogeneous_cut(&dendrogram, log_gap).expect("two gaps");
/// assert_eq!(*best.cut(), 2);
/// # Ok::<(), paris_core::DendrogramError>(())
/// ```
#[must_use]
pub fn naive_best_homogeneous_cut<G>(dendrogram: &Dendrogram, gap: G) -> Option<Scored<usize>>
where
    G: Fn(f64, f64) -> f64,
{
    first_max(
        gap_scores(dendrogram, gap)
            .into_iter()
            .map(|(t, score)| Scored::new(t + 1, score)),
    )
}

/// Ranks homogeneous cuts by descending gap; ties keep ascending cut order.
#[must_use]
pub fn naive_ranking_homogeneous_cuts<G>(dendrogram: &Dendrogram, gap: G) -> Vec<Scored<usize>>
where
    G: Fn(f64, f64) -> f64,
{
    let mut ranking: Vec<_> = gap_scores(dendrogram, gap)
        .into_iter()
        .map(|(t, score)| Scored::new(t + 1, score))
        .collect();
    rank_descending(&mut ranking);
    ranking
}

/// Returns the threshold sitting in the largest distance gap.
#[must_use]
pub fn naive_best_distance<G, M>(dendrogram: &Dendrogram, gap: G, mean: M) -> Option<Scored<f64>>
where
    G: Fn(f64, f64) -> f64,
    M: Fn(f64, f64) -> f64,
{
    let merges = dendrogram.merges();
    first_max(gap_scores(dendrogram, gap).into_iter().map(|(t, score)| {
        Scored::new(mean(merges[t + 1].distance(), merges[t].distance()), score)
    }))
}

/// Ranks gap thresholds by descending gap; ties keep ascending order.
#[must_use]
pub fn naive_ranking_distances<G, M>(dendrogram: &Dendrogram, gap: G, mean: M) -> Vec<Scored<f64>>
where
    G: Fn(f64, f64) -> f64,
    M: Fn(f64, f64) -> f64,
{
    let merges = dendrogram.merges();
    let mut ranking: Vec<_> = gap_scores(dendrogram, gap)
        .into_iter()
        .map(|(t, score)| {
            Scored::new(mean(merges[t + 1].distance(), merges[t].distance()), score)
        })
        .collect();
    rank_descending(&mut ranking);
    ranking
}
