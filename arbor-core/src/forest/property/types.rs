//! Type definitions for spanning forest property tests.

use test_strategy::Arbitrary;

use crate::{Edge, Objective};

/// Weight distribution strategy for generated graphs.
///
/// Each variant stresses a different part of the builder: tie handling,
/// rejection of self-loops and parallel edges, or forest output on
/// disconnected input.
#[derive(Arbitrary, Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a distinct weight drawn from a continuous range.
    Unique,
    /// Large groups of edges share identical weights.
    ManyIdentical,
    /// Sparse graph with roughly `1.5n` to `2n` edges.
    Sparse,
    /// Graph approaching completeness.
    Dense,
    /// Several components with no cross-component edges.
    Disconnected,
    /// Ordinary edges mixed with self-loops and parallel copies.
    Multigraph,
}

/// Fixture for spanning forest property tests.
///
/// Carries everything needed to reproduce a failure: the node count, the
/// generated edges in input order, the distribution and the objective.
#[derive(Clone, Debug)]
pub(super) struct ForestFixture {
    /// Number of nodes; nodes are labelled `0..node_count`.
    pub node_count: usize,
    /// Generated edges in input order.
    pub edges: Vec<Edge<usize>>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
    /// Objective the builder runs with.
    pub objective: Objective,
}

/// Configuration for the determinism property.
pub(super) struct DeterminismConfig {
    /// Number of times to repeat the build per input.
    pub repetitions: usize,
}

impl DeterminismConfig {
    /// Loads the configuration from `ARBOR_PBT_DETERMINISM_REPS`, defaulting to
    /// 5 repetitions.
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("ARBOR_PBT_DETERMINISM_REPS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);
        Self { repetitions }
    }
}
