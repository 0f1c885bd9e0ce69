//! Benchmark parameter types.

use std::fmt;

use arbor_core::Objective;

/// Parameters for a spanning forest benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct ForestBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Number of edges in the graph.
    pub edge_count: usize,
    /// Objective the forest optimises.
    pub objective: Objective,
}

impl fmt::Display for ForestBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},m={},{}",
            self.node_count, self.edge_count, self.objective
        )
    }
}
