//! Builder utilities for configuring [`Paris`] instances.
//!
//! Collects the scoring, mean, scaling and gap strategies together with the
//! ranking filter threshold, and validates them before construction.

use crate::{
    Result,
    error::ParisError,
    paris::Paris,
    slicing::{
        GapFn, MeanFn, ScalingFn, ScoringFn, geometric_mean, log_gap, log_ratio_score, log_scale,
    },
};

/// Default relative separation required by the ranking filters.
pub const DEFAULT_FILTER_THRESHOLD: f64 = 0.1;

/// Configures and constructs [`Paris`] instances.
///
/// # Examples
/// ```
/// use paris_core::ParisBuilder;
///
/// let paris = ParisBuilder::new()
///     .with_filter_threshold(0.25)
///     .with_mean(|x, y| (x + y) / 2.0)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(paris.filter_threshold(), 0.25);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParisBuilder {
    scoring: ScoringFn,
    mean: MeanFn,
    scaling: ScalingFn,
    gap: GapFn,
    filter_threshold: f64,
}

impl Default for ParisBuilder {
    fn default() -> Self {
        Self {
            scoring: log_ratio_score,
            mean: geometric_mean,
            scaling: log_scale,
            gap: log_gap,
            filter_threshold: DEFAULT_FILTER_THRESHOLD,
        }
    }
}

impl ParisBuilder {
    /// Creates a builder populated with the default strategies.
    ///
    /// # Examples
    /// ```
    /// use paris_core::{DEFAULT_FILTER_THRESHOLD, ParisBuilder};
    ///
    /// let builder = ParisBuilder::new();
    /// assert_eq!(builder.filter_threshold(), DEFAULT_FILTER_THRESHOLD);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the cluster scoring strategy.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringFn) -> Self {
        self.scoring = scoring;
        self
    }

    /// Overrides the mean used to turn merge boundaries into thresholds.
    #[must_use]
    pub fn with_mean(mut self, mean: MeanFn) -> Self {
        self.mean = mean;
        self
    }

    /// Overrides the scaling used by the ranking filters.
    #[must_use]
    pub fn with_scaling(mut self, scaling: ScalingFn) -> Self {
        self.scaling = scaling;
        self
    }

    /// Overrides the gap score used by the naive heuristics.
    #[must_use]
    pub fn with_gap(mut self, gap: GapFn) -> Self {
        self.gap = gap;
        self
    }

    /// Overrides the ranking filter threshold.
    ///
    /// # Examples
    /// ```
    /// use paris_core::ParisBuilder;
    ///
    /// let builder = ParisBuilder::new().with_filter_threshold(0.3);
    /// assert_eq!(builder.filter_threshold(), 0.3);
    /// ```
    #[must_use]
    pub fn with_filter_threshold(mut self, threshold: f64) -> Self {
        self.filter_threshold = threshold;
        self
    }

    /// Returns the configured ranking filter threshold.
    #[must_use]
    pub fn filter_threshold(&self) -> f64 {
        self.filter_threshold
    }

    /// Validates the configuration and constructs a [`Paris`] instance.
    ///
    /// # Errors
    /// Returns [`ParisError::InvalidFilterThreshold`] when the filter threshold
    /// is negative or not finite.
    ///
    /// # Examples
    /// ```
    /// use paris_core::{ParisBuilder, ParisErrorCode};
    ///
    /// let err = ParisBuilder::new()
    ///     .with_filter_threshold(-1.0)
    ///     .build()
    ///     .expect_err("negative thresholds are rejected");
    /// assert_eq!(err.code(), ParisErrorCode::InvalidFilterThreshold);
    /// ```
    pub fn build(self) -> Result<Paris> {
        let threshold = self.filter_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ParisError::InvalidFilterThreshold { threshold });
        }
        Ok(Paris::new(
            self.scoring,
            self.mean,
            self.scaling,
            self.gap,
            threshold,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn defaults_use_log_strategies() {
        let builder = ParisBuilder::default();
        assert_eq!((builder.scoring)(2, 4.0, 1.0), log_ratio_score(2, 4.0, 1.0));
        assert_eq!((builder.mean)(2.0, 8.0), 4.0);
        assert_eq!((builder.scaling)(1.0), 0.0);
        assert_eq!((builder.gap)(1.0, 1.0), 0.0);
        assert_eq!(builder.filter_threshold(), DEFAULT_FILTER_THRESHOLD);
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.1)]
    #[case(10.0)]
    fn build_accepts_non_negative_thresholds(#[case] threshold: f64) {
        let paris = ParisBuilder::new()
            .with_filter_threshold(threshold)
            .build()
            .expect("threshold must be accepted");
        assert_eq!(paris.filter_threshold(), threshold);
    }

    #[rstest]
    #[case(-0.5)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn build_rejects_invalid_thresholds(#[case] threshold: f64) {
        let err = ParisBuilder::new()
            .with_filter_threshold(threshold)
            .build()
            .expect_err("threshold must be rejected");
        assert!(matches!(err, ParisError::InvalidFilterThreshold { .. }));
    }
}
