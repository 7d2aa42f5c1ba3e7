//! Dendrogram representation, construction and canonical ordering.
//!
//! A dendrogram over `n` leaves is a sequence of `n - 1` binary merges. Leaves
//! carry the ids `[0, n)`; merge `t` creates the cluster `n + t`, so the last
//! merge creates the root `2n - 2`. Every [`Dendrogram`] upholds these
//! invariants, checked on construction:
//!
//! - an operand of merge `t` is a leaf or a cluster created by an earlier
//!   merge (no forward references);
//! - every id is merged at most once, so each leaf and each non-root cluster
//!   is an operand exactly once;
//! - the recorded size is the sum of the operand sizes;
//! - distances are non-negative or `+∞`, never NaN.
//!
//! [`paris`] builds a dendrogram from a weighted graph and
//! [`reorder_dendrogram`] puts any dendrogram into canonical non-decreasing
//! distance order.

mod adjacency;
mod builder;
mod reorder;

use crate::error::DendrogramError;

pub use self::builder::paris;
pub use self::reorder::reorder_dendrogram;

/// One binary merge of a dendrogram.
///
/// # Examples
/// ```
/// use paris_core::Merge;
///
/// let merge = Merge::new(0, 1, 0.5, 2);
/// assert_eq!(merge.operands(), (0, 1));
/// assert_eq!(merge.distance(), 0.5);
/// assert_eq!(merge.size(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Merge {
    left: usize,
    right: usize,
    distance: f64,
    size: usize,
}

impl Merge {
    /// Creates a merge record.
    #[must_use]
    pub const fn new(left: usize, right: usize, distance: f64, size: usize) -> Self {
        Self {
            left,
            right,
            distance,
            size,
        }
    }

    /// Returns the first operand id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn left(&self) -> usize { self.left }

    /// Returns the second operand id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn right(&self) -> usize { self.right }

    /// Returns both operand ids.
    #[must_use]
    #[rustfmt::skip]
    pub const fn operands(&self) -> (usize, usize) { (self.left, self.right) }

    /// Returns the distance at which the operands merge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn distance(&self) -> f64 { self.distance }

    /// Returns the number of leaves in the merged cluster.
    #[must_use]
    #[rustfmt::skip]
    pub const fn size(&self) -> usize { self.size }

    /// Returns the record as an interchange row `[left, right, distance, size]`.
    #[must_use]
    pub fn to_row(&self) -> [f64; 4] {
        [
            self.left as f64,
            self.right as f64,
            self.distance,
            self.size as f64,
        ]
    }
}

/// A validated hierarchical clustering over `leaf_count` leaves.
///
/// # Examples
/// ```
/// use paris_core::Dendrogram;
///
/// let dendrogram = Dendrogram::from_rows(&[
///     [0.0, 1.0, 1.0, 2.0],
///     [2.0, 3.0, 2.0, 2.0],
///     [4.0, 5.0, 4.0, 4.0],
/// ])?;
/// assert_eq!(dendrogram.leaf_count(), 4);
/// assert_eq!(dendrogram.root(), Some(6));
/// assert!(dendrogram.is_monotonic());
/// # Ok::<(), paris_core::DendrogramError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dendrogram {
    leaf_count: usize,
    merges: Vec<Merge>,
}

impl Dendrogram {
    /// Validates `merges` as a dendrogram over `leaf_count` leaves.
    ///
    /// A dendrogram over zero or one leaf has no merges.
    ///
    /// # Errors
    /// Returns a [`DendrogramError`] describing the first violated invariant.
    pub fn new(leaf_count: usize, merges: Vec<Merge>) -> Result<Self, DendrogramError> {
        let expected = leaf_count.saturating_sub(1);
        if merges.len() != expected {
            return Err(DendrogramError::LengthMismatch {
                leaf_count,
                expected,
                merges: merges.len(),
            });
        }
        validate_merges(leaf_count, &merges)?;
        Ok(Self { leaf_count, merges })
    }

    /// Validates `merges` as a dendrogram over `merges.len() + 1` leaves.
    ///
    /// # Errors
    /// Returns a [`DendrogramError`] describing the first violated invariant.
    pub fn from_merges(merges: Vec<Merge>) -> Result<Self, DendrogramError> {
        Self::new(merges.len() + 1, merges)
    }

    /// Parses interchange rows `[left, right, distance, size]`.
    ///
    /// # Errors
    /// Returns [`DendrogramError::NonIntegralField`] when an id or size is not
    /// a non-negative integer, then any structural error of
    /// [`Self::from_merges`].
    pub fn from_rows(rows: &[[f64; 4]]) -> Result<Self, DendrogramError> {
        let merges = rows
            .iter()
            .enumerate()
            .map(|(row, fields)| {
                Ok(Merge::new(
                    integral_field(row, 0, fields[0])?,
                    integral_field(row, 1, fields[1])?,
                    fields[2],
                    integral_field(row, 3, fields[3])?,
                ))
            })
            .collect::<Result<Vec<_>, DendrogramError>>()?;
        Self::from_merges(merges)
    }

    /// Returns the dendrogram as interchange rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<[f64; 4]> {
        self.merges.iter().map(Merge::to_row).collect()
    }

    /// Returns the number of leaves.
    #[must_use]
    #[rustfmt::skip]
    pub const fn leaf_count(&self) -> usize { self.leaf_count }

    /// Returns the merges in order.
    #[must_use]
    #[rustfmt::skip]
    pub fn merges(&self) -> &[Merge] { &self.merges }

    /// Returns the number of merges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.merges.len() }

    /// Returns `true` when the dendrogram has no merges.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.merges.is_empty() }

    /// Returns the largest valid node id, `2n - 2`, or `None` without leaves.
    #[must_use]
    pub const fn max_id(&self) -> Option<usize> {
        match self.leaf_count {
            0 => None,
            n => Some(2 * n - 2),
        }
    }

    /// Returns the root id: the last created cluster, or the sole leaf.
    #[must_use]
    pub const fn root(&self) -> Option<usize> {
        self.max_id()
    }

    /// Returns the distance of merge `step`, if it exists.
    #[must_use]
    pub fn distance(&self, step: usize) -> Option<f64> {
        self.merges.get(step).map(Merge::distance)
    }

    /// Returns `true` when distances never decrease from one merge to the next.
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        self.merges
            .windows(2)
            .all(|pair| pair[0].distance <= pair[1].distance)
    }

    /// Returns the ids of the children of `id`, or `None` for a leaf or an
    /// unknown id.
    #[must_use]
    pub fn children(&self, id: usize) -> Option<(usize, usize)> {
        let step = id.checked_sub(self.leaf_count)?;
        self.merges.get(step).map(Merge::operands)
    }

    pub(crate) const fn from_validated(leaf_count: usize, merges: Vec<Merge>) -> Self {
        Self { leaf_count, merges }
    }
}

fn integral_field(row: usize, column: usize, value: f64) -> Result<usize, DendrogramError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < usize::MAX as f64 {
        Ok(value as usize)
    } else {
        Err(DendrogramError::NonIntegralField { row, column, value })
    }
}

fn validate_merges(leaf_count: usize, merges: &[Merge]) -> Result<(), DendrogramError> {
    let max_id = (2 * leaf_count).saturating_sub(2);
    let mut sizes = vec![1_usize; leaf_count];
    sizes.resize(max_id + 1, 0);
    let mut consumed = vec![false; max_id + 1];

    for (step, merge) in merges.iter().enumerate() {
        if merge.distance.is_nan() || merge.distance < 0.0 {
            return Err(DendrogramError::InvalidDistance {
                step,
                distance: merge.distance,
            });
        }
        let created = leaf_count + step;
        let mut expected = 0_usize;
        for id in [merge.left, merge.right] {
            if id > max_id {
                return Err(DendrogramError::OperandOutOfRange { step, id, max_id });
            }
            if id >= created {
                return Err(DendrogramError::ForwardReference { step, id });
            }
            if consumed[id] {
                return Err(DendrogramError::DuplicateOperand { step, id });
            }
            consumed[id] = true;
            expected += sizes[id];
        }
        if expected != merge.size {
            return Err(DendrogramError::SizeMismatch {
                step,
                expected,
                recorded: merge.size,
            });
        }
        sizes[created] = merge.size;
    }
    Ok(())
}
