//! Heterogeneous cuts: a set of clusters chosen per branch.
//!
//! Each subtree keeps its best cut, either the subtree root on its own or the
//! union of its children's best cuts, whichever scores higher. The winner at
//! the root is an antichain whose clusters partition the leaves.

use std::collections::BTreeSet;

use super::{
    Scored,
    kernel::{Absorption, MergeVisitor, evaluate},
};
use crate::dendrogram::Dendrogram;

/// Best score found within a subtree.
#[derive(Clone, Copy, Debug)]
struct Branch {
    best_score: f64,
}

struct BranchWinners<'a> {
    exclude: &'a BTreeSet<usize>,
    /// Whether id is its own subtree's best cut.
    chosen: Vec<bool>,
}

impl MergeVisitor for BranchWinners<'_> {
    type State = Branch;

    fn leaf(&mut self, id: usize) -> Branch {
        self.chosen[id] = true;
        Branch { best_score: 0.0 }
    }

    fn absorb(&mut self, absorption: &Absorption, branch: &mut Branch) {
        if !self.exclude.contains(&absorption.id) && absorption.score > branch.best_score {
            branch.best_score = absorption.score;
            self.chosen[absorption.id] = true;
        }
    }

    fn merge(&mut self, _step: usize, left: Branch, right: Branch) -> Branch {
        Branch {
            best_score: left.best_score + right.best_score,
        }
    }
}

/// Finds the best heterogeneous cut, never choosing an id of `exclude` as a
/// cluster of its own.
///
/// Leaves always form their own best cut with score zero. An absorbed
/// cluster replaces its inherited cut only when its local score is strictly
/// greater. Excluding a leaf has no effect. An empty dendrogram yields the
/// empty cut.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
///
/// use paris_core::{
///     Dendrogram,
///     slicing::{heterogeneous::best_heterogeneous_cut, log_ratio_score},
/// };
///
/// let dendrogram = Dendrogram::from_rows(&[
///     [0.0, 1.0, 1.0, 2.0],
///     [2.0, 3.0, 2.0, 2.0],
///     [4.0, 5.0, 4.0, 4.0],
/// ])?;
/// let best = best_heterogeneous_cut(&dendrogram, log_ratio_score, &BTreeSet::new());
/// assert_eq!(best.cut(), &BTreeSet::from([4, 5]));
/// # Ok::<(), paris_core::DendrogramError>(())
/// ```
#[must_use]
pub fn best_heterogeneous_cut<F>(
    dendrogram: &Dendrogram,
    scoring: F,
    exclude: &BTreeSet<usize>,
) -> Scored<BTreeSet<usize>>
where
    F: Fn(usize, f64, f64) -> f64,
{
    let mut winners = BranchWinners {
        exclude,
        chosen: vec![false; (2 * dendrogram.leaf_count()).saturating_sub(1)],
    };
    let Some(root) = evaluate(dendrogram, scoring, &mut winners) else {
        return Scored::new(BTreeSet::new(), 0.0);
    };

    let mut cut = BTreeSet::new();
    let mut pending: Vec<usize> = dendrogram.root().into_iter().collect();
    while let Some(id) = pending.pop() {
        if winners.chosen[id] {
            cut.insert(id);
        } else if let Some((left, right)) = dendrogram.children(id) {
            pending.extend([left, right]);
        }
    }
    Scored::new(cut, root.best_score)
}

/// Returns `k` successive best cuts, each forbidden from reusing a cluster
/// chosen by an earlier one.
///
/// The exclusion set starts empty on every call.
#[must_use]
pub fn ranking_heterogeneous_cuts<F>(
    dendrogram: &Dendrogram,
    k: usize,
    scoring: F,
) -> Vec<Scored<BTreeSet<usize>>>
where
    F: Fn(usize, f64, f64) -> f64,
{
    let mut exclude = BTreeSet::new();
    let mut ranking = Vec::with_capacity(k);
    for _ in 0..k {
        let best = best_heterogeneous_cut(dendrogram, &scoring, &exclude);
        exclude.extend(best.cut().iter().copied());
        ranking.push(best);
    }
    ranking
}
