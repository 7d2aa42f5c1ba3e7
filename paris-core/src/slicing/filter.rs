//! Ranking filters that drop entries too close to a better-ranked one.
//!
//! Rankings often list near-identical cuts next to each other. Both filters
//! walk a ranking in order and keep an entry only when its scaled position
//! is far enough from every entry kept so far, measured relative to the
//! kept entry's own distance from the first merge.

use super::Scored;
use crate::{Result, dendrogram::Dendrogram, error::ParisError};

fn check_threshold(threshold: f64) -> Result<()> {
    if threshold.is_finite() && threshold >= 0.0 {
        Ok(())
    } else {
        Err(ParisError::InvalidFilterThreshold { threshold })
    }
}

/// Filters a ranking of homogeneous cuts.
///
/// Cut `t` sits at the scaled index `s[t] = scaling(distance[t - 1]) −
/// scaling(distance[0])`, with `s[0] = 0`. A cut is dropped when some kept
/// cut `k` has `|s[k] − s[t]| < threshold · s[k]`.
///
/// # Errors
/// Returns [`ParisError::InvalidFilterThreshold`] when `threshold` is
/// negative or not finite and [`ParisError::CutOutOfRange`] when a ranked
/// cut exceeds `n - 1`.
///
/// # Examples
/// ```
/// use paris_core::{
///     Dendrogram,
///     slicing::{Scored, filter::filter_homogeneous_ranking, log_scale},
/// };
///
/// let dendrogram = Dendrogram::from_rows(&[
///     [0.0, 1.0, 1.0, 2.0],
///     [2.0, 3.0, 4.0, 2.0],
///     [4.0, 5.0, 4.2, 4.0],
/// ])?;
/// let ranking = [Scored::new(3, 3.0), Scored::new(2, 2.0), Scored::new(1, 1.0)];
/// let kept = filter_homogeneous_ranking(&ranking, &dendrogram, 0.1, log_scale)?;
/// let cuts: Vec<_> = kept.iter().map(|entry| *entry.cut()).collect();
/// assert_eq!(cuts, vec![3, 1]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn filter_homogeneous_ranking<S>(
    ranking: &[Scored<usize>],
    dendrogram: &Dendrogram,
    threshold: f64,
    scaling: S,
) -> Result<Vec<Scored<usize>>>
where
    S: Fn(f64) -> f64,
{
    check_threshold(threshold)?;
    let mut index = vec![0.0];
    if let Some(first) = dendrogram.merges().first() {
        let origin = scaling(first.distance());
        index.extend(
            dendrogram
                .merges()
                .iter()
                .map(|merge| scaling(merge.distance()) - origin),
        );
    }

    let max = index.len() - 1;
    let mut kept: Vec<Scored<usize>> = Vec::new();
    for entry in ranking {
        let cut = *entry.cut();
        if cut > max {
            return Err(ParisError::CutOutOfRange { cut, max });
        }
        let crowded = kept.iter().any(|other| {
            let reference = index[*other.cut()];
            (reference - index[cut]).abs() < threshold * reference
        });
        if !crowded {
            kept.push(entry.clone());
        }
    }
    Ok(kept)
}

/// Filters a ranking of distance thresholds.
///
/// A threshold `d` is dropped when some kept threshold `e` has
/// `|scaling(e) − scaling(d)| < threshold · (scaling(e) − scaling(distance[0]))`.
/// Rankings over a dendrogram without merges are returned unchanged.
///
/// # Errors
/// Returns [`ParisError::InvalidFilterThreshold`] when `threshold` is
/// negative or not finite.
pub fn filter_distance_ranking<S>(
    ranking: &[Scored<f64>],
    dendrogram: &Dendrogram,
    threshold: f64,
    scaling: S,
) -> Result<Vec<Scored<f64>>>
where
    S: Fn(f64) -> f64,
{
    check_threshold(threshold)?;
    let Some(first) = dendrogram.merges().first() else {
        return Ok(ranking.to_vec());
    };
    let origin = scaling(first.distance());

    let mut kept: Vec<Scored<f64>> = Vec::new();
    for entry in ranking {
        let scaled = scaling(*entry.cut());
        let crowded = kept.iter().any(|other| {
            let reference = scaling(*other.cut());
            (reference - scaled).abs() < threshold * (reference - origin)
        });
        if !crowded {
            kept.push(entry.clone());
        }
    }
    Ok(kept)
}
