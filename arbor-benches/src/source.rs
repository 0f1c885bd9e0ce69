//! Seeded synthetic graphs for benchmarking.

use arbor_core::{Edge, Graph};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur while generating synthetic graphs.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested node count was zero.
    #[error("node count must be greater than zero")]
    ZeroNodes,
    /// The requested number of distinct weights was zero.
    #[error("distinct weight count must be greater than zero")]
    ZeroDistinctWeights,
}

/// Configuration for a random weighted graph.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of nodes to generate.
    pub node_count: usize,
    /// Extra random edges per node on top of the connecting path.
    pub extra_edges_per_node: usize,
    /// Draw weights from this many integer levels to force ties, or from a
    /// continuous range when `None`.
    pub distinct_weights: Option<u32>,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates connected random graphs over `usize` nodes.
pub struct SyntheticGraph;

impl SyntheticGraph {
    /// Generates a connected graph described by `config`.
    ///
    /// A random path through a shuffled node order keeps the graph connected;
    /// the remaining edges join uniformly chosen endpoints and may be
    /// self-loops or parallel edges.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when `config` requests no nodes or no
    /// weight levels.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Graph<usize>, SyntheticError> {
        if config.node_count == 0 {
            return Err(SyntheticError::ZeroNodes);
        }
        if config.distinct_weights == Some(0) {
            return Err(SyntheticError::ZeroDistinctWeights);
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut order: Vec<usize> = (0..config.node_count).collect();
        for i in (1..order.len()).rev() {
            let j = rng.gen_range(0..=i);
            order.swap(i, j);
        }

        let extra = config
            .node_count
            .saturating_mul(config.extra_edges_per_node);
        let mut edges = Vec::with_capacity(config.node_count.saturating_add(extra));
        for pair in order.windows(2) {
            if let [source, target] = *pair {
                let weight = draw_weight(&mut rng, config.distinct_weights);
                edges.push(Edge::new(source, target, weight));
            }
        }
        for _ in 0..extra {
            let source = rng.gen_range(0..config.node_count);
            let target = rng.gen_range(0..config.node_count);
            let weight = draw_weight(&mut rng, config.distinct_weights);
            edges.push(Edge::new(source, target, weight));
        }

        Ok(Graph::with_nodes(0..config.node_count, edges))
    }
}

fn draw_weight(rng: &mut SmallRng, distinct_weights: Option<u32>) -> f64 {
    match distinct_weights {
        Some(levels) => f64::from(rng.gen_range(1..=levels)),
        None => rng.gen_range(0.0..1_000.0),
    }
}
