//! Benchmark setup error type.
//!
//! Aggregates the failures that may arise while preparing benchmark inputs
//! so setup functions can propagate them with `?` instead of `.expect()`.

use crate::source::SyntheticError;
use paris_core::ParisError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Building or slicing the dendrogram failed.
    #[error("paris operation failed: {0}")]
    Paris(#[from] ParisError),
}
