//! Bottom-up traversal shared by every slicer.
//!
//! [`evaluate`] replays the merges of a dendrogram in order over an arena of
//! `2n - 1` slots indexed by node id. Each operand is taken out of its slot
//! (marking it consumed), scored against the distance of the merge absorbing
//! it, shown to the visitor, and combined with its sibling into the state of
//! the newly created id.

use std::cmp::Ordering;

use crate::dendrogram::Dendrogram;

/// An operand at the moment it is absorbed into its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Absorption {
    /// Index of the absorbing merge.
    pub(crate) step: usize,
    /// Id of the absorbed operand.
    pub(crate) id: usize,
    /// Leaf count of the operand.
    pub(crate) size: usize,
    /// Distance at which the operand was created; zero for leaves.
    pub(crate) own_distance: f64,
    /// Local score of the operand.
    pub(crate) score: f64,
}

/// Per-slicer aggregation rule plugged into [`evaluate`].
pub(crate) trait MergeVisitor {
    /// State carried by every live node.
    type State;

    /// Builds the state of leaf `id`.
    fn leaf(&mut self, id: usize) -> Self::State;

    /// Observes an operand as it is absorbed.
    fn absorb(&mut self, absorption: &Absorption, state: &mut Self::State);

    /// Combines the two operand states of merge `step`.
    fn merge(&mut self, step: usize, left: Self::State, right: Self::State) -> Self::State;
}

struct Slot<S> {
    size: usize,
    distance: f64,
    state: S,
}

/// Runs `visitor` over `dendrogram` and returns the state of the root.
///
/// Returns `None` for a dendrogram without leaves.
pub(crate) fn evaluate<V, F>(
    dendrogram: &Dendrogram,
    scoring: F,
    visitor: &mut V,
) -> Option<V::State>
where
    V: MergeVisitor,
    F: Fn(usize, f64, f64) -> f64,
{
    let leaf_count = dendrogram.leaf_count();
    let mut arena: Vec<Option<Slot<V::State>>> =
        Vec::with_capacity((2 * leaf_count).saturating_sub(1));
    for id in 0..leaf_count {
        arena.push(Some(Slot {
            size: 1,
            distance: 0.0,
            state: visitor.leaf(id),
        }));
    }

    for (step, merge) in dendrogram.merges().iter().enumerate() {
        let left = absorb(&mut arena, merge.left(), step, merge.distance(), &scoring, visitor)?;
        let right = absorb(&mut arena, merge.right(), step, merge.distance(), &scoring, visitor)?;
        let state = visitor.merge(step, left, right);
        arena.push(Some(Slot {
            size: merge.size(),
            distance: merge.distance(),
            state,
        }));
    }

    arena.pop().flatten().map(|slot| slot.state)
}

fn absorb<V, F>(
    arena: &mut [Option<Slot<V::State>>],
    id: usize,
    step: usize,
    new_distance: f64,
    scoring: &F,
    visitor: &mut V,
) -> Option<V::State>
where
    V: MergeVisitor,
    F: Fn(usize, f64, f64) -> f64,
{
    let mut slot = arena.get_mut(id)?.take()?;
    let score = if slot.distance > 0.0 {
        scoring(slot.size, new_distance, slot.distance)
    } else {
        0.0
    };
    let absorption = Absorption {
        step,
        id,
        size: slot.size,
        own_distance: slot.distance,
        score,
    };
    visitor.absorb(&absorption, &mut slot.state);
    Some(slot.state)
}

/// Running score that stays exact in the presence of infinite terms.
///
/// Infinite scores are counted in `unbounded` instead of being summed, so a
/// prefix sum can add and later remove them without producing NaN. Ordering
/// compares the unbounded count first.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct PrefixScore {
    finite: f64,
    unbounded: i64,
}

impl PrefixScore {
    pub(crate) fn from_score(score: f64) -> Self {
        if score == f64::INFINITY {
            Self {
                finite: 0.0,
                unbounded: 1,
            }
        } else if score == f64::NEG_INFINITY {
            Self {
                finite: 0.0,
                unbounded: -1,
            }
        } else {
            Self {
                finite: score,
                unbounded: 0,
            }
        }
    }

    pub(crate) fn plus(self, other: Self) -> Self {
        Self {
            finite: self.finite + other.finite,
            unbounded: self.unbounded + other.unbounded,
        }
    }

    /// Replaces `absorbed` by `created`, evaluated as `self − absorbed + created`.
    pub(crate) fn advance(self, absorbed: Self, created: Self) -> Self {
        Self {
            finite: self.finite - absorbed.finite + created.finite,
            unbounded: self.unbounded - absorbed.unbounded + created.unbounded,
        }
    }

    pub(crate) fn value(self) -> f64 {
        match self.unbounded.cmp(&0) {
            Ordering::Greater => f64::INFINITY,
            Ordering::Less => f64::NEG_INFINITY,
            Ordering::Equal => self.finite,
        }
    }

    pub(crate) fn total_cmp(&self, other: &Self) -> Ordering {
        self.unbounded
            .cmp(&other.unbounded)
            .then_with(|| self.finite.total_cmp(&other.finite))
    }
}

/// Scores the merge-index cuts `0 ..= n - 2`.
///
/// Cut `t` keeps the clusters alive after the first `t` merges; its score is
/// the sum of their local scores. Moving from cut `t` to `t + 1` removes the
/// scores of the two operands of merge `t` and adds the score the created
/// cluster earns when it is absorbed in turn (zero for the root).
pub(crate) fn prefix_scores<F>(dendrogram: &Dendrogram, scoring: F) -> Vec<PrefixScore>
where
    F: Fn(usize, f64, f64) -> f64,
{
    let mut visitor = PrefixVisitor::new(dendrogram);
    evaluate(dendrogram, scoring, &mut visitor);

    let mut running = PrefixScore::default();
    let mut scores = Vec::with_capacity(dendrogram.len());
    for (absorbed, created) in visitor.absorbed.iter().zip(&visitor.created) {
        scores.push(running);
        running = running.advance(*absorbed, *created);
    }
    scores
}

struct PrefixVisitor {
    leaf_count: usize,
    absorbed: Vec<PrefixScore>,
    created: Vec<PrefixScore>,
}

impl PrefixVisitor {
    fn new(dendrogram: &Dendrogram) -> Self {
        Self {
            leaf_count: dendrogram.leaf_count(),
            absorbed: vec![PrefixScore::default(); dendrogram.len()],
            created: vec![PrefixScore::default(); dendrogram.len()],
        }
    }
}

impl MergeVisitor for PrefixVisitor {
    type State = ();

    fn leaf(&mut self, _id: usize) {}

    fn absorb(&mut self, absorption: &Absorption, _state: &mut ()) {
        let score = PrefixScore::from_score(absorption.score);
        self.absorbed[absorption.step] = self.absorbed[absorption.step].plus(score);
        if let Some(step) = absorption.id.checked_sub(self.leaf_count) {
            self.created[step] = score;
        }
    }

    fn merge(&mut self, _step: usize, _left: (), _right: ()) {}
}
