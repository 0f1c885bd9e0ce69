//! Benchmark setup error type.

use arbor_core::ForestError;

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Building a forest or querying a disjoint set failed.
    #[error("forest construction failed: {0}")]
    Forest(#[from] ForestError),
}
