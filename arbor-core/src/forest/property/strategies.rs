//! Strategy builders for spanning forest property tests.
//!
//! Graph generators draw from a seeded [`SmallRng`] so any failing case can be
//! replayed from its distribution and seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Edge, Objective};

use super::types::{ForestFixture, WeightDistribution};

/// Minimum node count for structural fixtures.
const MIN_NODES: usize = 8;
/// Maximum node count for structural fixtures.
const MAX_NODES: usize = 64;
/// Maximum node count for dense fixtures.
const DENSE_MAX_NODES: usize = 32;
/// Node bound for fixtures checked against the exhaustive oracle.
pub(super) const ORACLE_MAX_NODES: usize = 8;
/// Edge bound for fixtures checked against the exhaustive oracle.
pub(super) const ORACLE_MAX_EDGES: usize = 12;

fn objective_strategy() -> impl Strategy<Value = Objective> {
    any::<bool>().prop_map(Objective::from_maximize)
}

/// Generates fixtures covering every weight distribution and both objectives.
pub(super) fn forest_fixture_strategy() -> impl Strategy<Value = ForestFixture> {
    (
        any::<WeightDistribution>(),
        objective_strategy(),
        any::<u64>(),
    )
        .prop_map(|(distribution, objective, seed)| {
            let mut rng = SmallRng::seed_from_u64(seed);
            generate_fixture(distribution, objective, &mut rng)
        })
}

/// Generates small fixtures suitable for exhaustive enumeration.
///
/// Weights come from a pool of five integers so ties are frequent, and
/// self-loops and parallel edges are allowed.
pub(super) fn small_fixture_strategy() -> impl Strategy<Value = ForestFixture> {
    (objective_strategy(), 1..=ORACLE_MAX_NODES)
        .prop_flat_map(|(objective, node_count)| {
            let edge = (0..node_count, 0..node_count, 1_u8..=5);
            (
                Just(objective),
                Just(node_count),
                prop::collection::vec(edge, 0..=ORACLE_MAX_EDGES),
            )
        })
        .prop_map(|(objective, node_count, raw)| ForestFixture {
            node_count,
            edges: raw
                .into_iter()
                .map(|(source, target, weight)| Edge::new(source, target, f64::from(weight)))
                .collect(),
            distribution: WeightDistribution::Multigraph,
            objective,
        })
}

/// Generates a fixture for a specific distribution.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    objective: Objective,
    rng: &mut SmallRng,
) -> ForestFixture {
    let (node_count, edges) = match distribution {
        WeightDistribution::Unique => probabilistic(rng, MAX_NODES, (0.2, 0.6), |r| {
            r.gen_range(0.1..100.0)
        }),
        WeightDistribution::ManyIdentical => {
            let pool: Vec<f64> = (0..rng.gen_range(1..=3))
                .map(|_| f64::from(rng.gen_range(1_u8..=10)))
                .collect();
            probabilistic(rng, MAX_NODES, (0.3, 0.8), move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => probabilistic(rng, DENSE_MAX_NODES, (0.7, 0.95), |r| {
            r.gen_range(0.1..100.0)
        }),
        WeightDistribution::Disconnected => generate_disconnected(rng),
        WeightDistribution::Multigraph => generate_multigraph(rng),
    };
    ForestFixture {
        node_count,
        edges,
        distribution,
        objective,
    }
}

/// Adds each unordered pair with a sampled probability.
fn probabilistic(
    rng: &mut SmallRng,
    max_nodes: usize,
    edge_prob_range: (f64, f64),
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> (usize, Vec<Edge<usize>>) {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let probability = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut edges = Vec::new();
    for source in 0..node_count {
        for target in (source + 1)..node_count {
            if rng.gen_bool(probability) {
                let w = weight(rng);
                edges.push(oriented(rng, source, target, w));
            }
        }
    }
    (node_count, edges)
}

/// Returns the edge with a random orientation; narration keeps orientation,
/// so fixtures should not always present `source < target`.
fn oriented(rng: &mut SmallRng, source: usize, target: usize, weight: f64) -> Edge<usize> {
    if rng.gen_bool(0.5) {
        Edge::new(source, target, weight)
    } else {
        Edge::new(target, source, weight)
    }
}

/// A random spanning tree plus a few extra chords.
fn generate_sparse(rng: &mut SmallRng) -> (usize, Vec<Edge<usize>>) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut edges = Vec::new();
    for node in 1..node_count {
        let parent = rng.gen_range(0..node);
        let w = rng.gen_range(0.1..100.0);
        edges.push(oriented(rng, parent, node, w));
    }
    let extra = rng.gen_range(node_count / 2..=node_count);
    for _ in 0..extra {
        let source = rng.gen_range(0..node_count);
        let target = rng.gen_range(0..node_count);
        if source != target {
            let w = rng.gen_range(0.1..100.0);
            edges.push(Edge::new(source, target, w));
        }
    }
    (node_count, edges)
}

/// Two to five blocks, each internally random, with no edges between blocks.
fn generate_disconnected(rng: &mut SmallRng) -> (usize, Vec<Edge<usize>>) {
    let blocks = rng.gen_range(2..=5);
    let mut node_count = 0;
    let mut edges = Vec::new();
    for _ in 0..blocks {
        let size = rng.gen_range(1..=12);
        let base = node_count;
        for source in base..base + size {
            for target in (source + 1)..base + size {
                if rng.gen_bool(0.5) {
                    let w = f64::from(rng.gen_range(1_u8..=20));
                    edges.push(oriented(rng, source, target, w));
                }
            }
        }
        node_count += size;
    }
    (node_count, edges)
}

/// Random edges with deliberate self-loops and parallel duplicates.
fn generate_multigraph(rng: &mut SmallRng) -> (usize, Vec<Edge<usize>>) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let edge_count = rng.gen_range(node_count..=node_count * 3);
    let mut edges: Vec<Edge<usize>> = Vec::with_capacity(edge_count);
    for _ in 0..edge_count {
        let roll = rng.gen_range(0..10);
        let edge = match (roll, edges.last()) {
            (0, _) => {
                let node = rng.gen_range(0..node_count);
                Edge::new(node, node, f64::from(rng.gen_range(0_u8..=9)))
            }
            (1, Some(last)) => Edge::new(
                *last.target(),
                *last.source(),
                f64::from(rng.gen_range(0_u8..=9)),
            ),
            _ => Edge::new(
                rng.gen_range(0..node_count),
                rng.gen_range(0..node_count),
                f64::from(rng.gen_range(0_u8..=9)),
            ),
        };
        edges.push(edge);
    }
    (node_count, edges)
}
