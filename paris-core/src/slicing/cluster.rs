//! Single-cluster cuts: the one cluster with the highest local score.

use super::{
    Scored,
    kernel::{Absorption, MergeVisitor, evaluate},
    rank_descending,
};
use crate::dendrogram::Dendrogram;

/// Collects every absorbed operand with its local score, in visit order.
struct ClusterScores {
    visited: Vec<Scored<usize>>,
}

impl MergeVisitor for ClusterScores {
    type State = ();

    fn leaf(&mut self, _id: usize) {}

    fn absorb(&mut self, absorption: &Absorption, _state: &mut ()) {
        self.visited
            .push(Scored::new(absorption.id, absorption.score));
    }

    fn merge(&mut self, _step: usize, _left: (), _right: ()) {}
}

fn visit<F>(dendrogram: &Dendrogram, scoring: F) -> Vec<Scored<usize>>
where
    F: Fn(usize, f64, f64) -> f64,
{
    let mut visitor = ClusterScores {
        visited: Vec::with_capacity(2 * dendrogram.len()),
    };
    evaluate(dendrogram, scoring, &mut visitor);
    visitor.visited
}

/// Finds the cluster with the highest local score.
///
/// Operands are visited in merge order, left before right, and the first
/// one reaching the maximum wins. When no score is positive the first
/// visited operand with the maximum score is returned, so the result is
/// always an id in `[0, 2n - 2)`. Returns `None` for fewer than two leaves.
///
/// # Examples
/// ```
/// use paris_core::{Dendrogram, slicing::{cluster::best_cluster_cut, log_ratio_score}};
///
/// let dendrogram = Dendrogram::from_rows(&[
///     [0.0, 1.0, 1.0, 2.0],
///     [2.0, 3.0, 2.0, 2.0],
///     [4.0, 5.0, 4.0, 4.0],
/// ])?;
/// let best = best_cluster_cut(&dendrogram, log_ratio_score).expect("four leaves");
/// assert_eq!(*best.cut(), 4);
/// # Ok::<(), paris_core::DendrogramError>(())
/// ```
#[must_use]
pub fn best_cluster_cut<F>(dendrogram: &Dendrogram, scoring: F) -> Option<Scored<usize>>
where
    F: Fn(usize, f64, f64) -> f64,
{
    visit(dendrogram, scoring)
        .into_iter()
        .reduce(|best, candidate| {
            if candidate.score() > best.score() {
                candidate
            } else {
                best
            }
        })
}

/// Ranks every non-root id by descending local score.
///
/// Ties keep visit order: merge order, left operand before right.
#[must_use]
pub fn ranking_cluster_cuts<F>(dendrogram: &Dendrogram, scoring: F) -> Vec<Scored<usize>>
where
    F: Fn(usize, f64, f64) -> f64,
{
    let mut ranking = visit(dendrogram, scoring);
    rank_descending(&mut ranking);
    ranking
}
