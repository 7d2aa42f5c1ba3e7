//! Homogeneous cuts: one merge index applied uniformly to the whole tree.
//!
//! Cut `t` applies the first `t` merges and leaves every other leaf on its
//! own. Its score sums the local scores of the clusters alive at that point.

use super::{
    Scored,
    kernel::{PrefixScore, prefix_scores},
};
use crate::dendrogram::Dendrogram;

/// Finds the homogeneous cut with the highest score.
///
/// Only strictly greater scores replace the running best, so the smallest
/// cut reaching the maximum wins. Returns cut `0` with score `0.0` when no
/// cut scores above zero.
///
/// # Examples
/// ```
/// use paris_core::{Dendrogram, slicing::{homogeneous::best_homogeneous_cut, log_ratio_score}};
///
/// let dendrogram = Dendrogram::from_rows(&[
///     [0.0, 1.0, 1.0, 2.0],
///     [2.0, 3.0, 2.0, 2.0],
///     [4.0, 5.0, 4.0, 4.0],
/// ])?;
/// assert_eq!(*best_homogeneous_cut(&dendrogram, log_ratio_score).cut(), 2);
/// # Ok::<(), paris_core::DendrogramError>(())
/// ```
#[must_use]
pub fn best_homogeneous_cut<F>(dendrogram: &Dendrogram, scoring: F) -> Scored<usize>
where
    F: Fn(usize, f64, f64) -> f64,
{
    let scores = prefix_scores(dendrogram, scoring);
    let mut best = 0;
    let mut best_score = PrefixScore::default();
    for (cut, score) in scores.into_iter().enumerate() {
        if score.total_cmp(&best_score).is_gt() {
            best = cut;
            best_score = score;
        }
    }
    Scored::new(best, best_score.value())
}

/// Ranks the cuts `0 ..= n - 2` by descending score; ties keep ascending
/// cut order.
#[must_use]
pub fn ranking_homogeneous_cuts<F>(dendrogram: &Dendrogram, scoring: F) -> Vec<Scored<usize>>
where
    F: Fn(usize, f64, f64) -> f64,
{
    let mut ranking: Vec<_> = prefix_scores(dendrogram, scoring)
        .into_iter()
        .enumerate()
        .collect();
    ranking.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    ranking
        .into_iter()
        .map(|(cut, score)| Scored::new(cut, score.value()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{Merge, slicing::log_ratio_score, test_utils::four_leaf_reference};

    #[test]
    fn reference_best_cut_applies_two_merges() {
        let best = best_homogeneous_cut(&four_leaf_reference(), log_ratio_score);
        assert_eq!(*best.cut(), 2);
        let expected = 2.0 * 4.0_f64.ln() + 2.0 * 2.0_f64.ln();
        assert!((best.score() - expected).abs() < 1e-12);
    }

    #[test]
    fn reference_ranking_is_descending() {
        let cuts: Vec<_> = ranking_homogeneous_cuts(&four_leaf_reference(), log_ratio_score)
            .iter()
            .map(|entry| *entry.cut())
            .collect();
        assert_eq!(cuts, vec![2, 1, 0]);
    }

    #[test]
    fn zero_scores_keep_cut_zero() {
        let flat = Dendrogram::from_merges(vec![Merge::new(0, 1, 1.0, 2), Merge::new(3, 2, 1.0, 3)])
            .expect("valid dendrogram");
        assert_eq!(best_homogeneous_cut(&flat, log_ratio_score), Scored::new(0, 0.0));
        let cuts: Vec<_> = ranking_homogeneous_cuts(&flat, log_ratio_score)
            .into_iter()
            .map(Scored::into_cut)
            .collect();
        assert_eq!(cuts, vec![0, 1]);
    }

    #[test]
    fn infinite_joins_do_not_poison_scores() {
        let disconnected = Dendrogram::from_merges(vec![
            Merge::new(0, 1, 1.0, 2),
            Merge::new(2, 3, 1.0, 2),
            Merge::new(4, 5, f64::INFINITY, 4),
        ])
        .expect("valid dendrogram");
        let ranking = ranking_homogeneous_cuts(&disconnected, log_ratio_score);
        assert!(ranking.iter().all(|entry| !entry.score().is_nan()));
        // Both components alive at once outrank a single one.
        assert_eq!(*ranking[0].cut(), 2);
        assert_eq!(*ranking[1].cut(), 1);
        let best = best_homogeneous_cut(&disconnected, log_ratio_score);
        assert_eq!(best, Scored::new(2, f64::INFINITY));
    }

    #[test]
    fn single_leaf_ranks_nothing() {
        let single = Dendrogram::new(1, Vec::new()).expect("valid dendrogram");
        assert!(ranking_homogeneous_cuts(&single, log_ratio_score).is_empty());
        assert_eq!(best_homogeneous_cut(&single, log_ratio_score), Scored::new(0, 0.0));
    }
}
