//! Oracle equivalence properties.
//!
//! The builder must accept exactly the edges a naive relabelling Kruskal
//! accepts, in the same order, and on small graphs its total weight must
//! equal the best weight found by exhaustive search.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::helpers::{build_fixture, describe};
use super::oracle::{exhaustive_optimum, naive_kruskal};
use super::strategies::{ORACLE_MAX_EDGES, ORACLE_MAX_NODES};
use super::types::ForestFixture;

/// Compares the builder against the naive reference Kruskal.
pub(super) fn run_naive_equivalence_property(fixture: &ForestFixture) -> TestCaseResult {
    let forest = build_fixture(fixture).map_err(|err| {
        TestCaseError::fail(format!("build failed: {err} ({})", describe(fixture)))
    })?;
    let expected = naive_kruskal(fixture.node_count, &fixture.edges, fixture.objective);

    if forest.edges() != expected.as_slice() {
        return Err(TestCaseError::fail(format!(
            "accepted edges differ from reference: got {:?}, expected {expected:?} ({})",
            forest.edges(),
            describe(fixture),
        )));
    }
    Ok(())
}

/// Compares the builder's total weight with the exhaustive optimum.
pub(super) fn run_exhaustive_optimality_property(fixture: &ForestFixture) -> TestCaseResult {
    if fixture.node_count > ORACLE_MAX_NODES || fixture.edges.len() > ORACLE_MAX_EDGES {
        return Err(TestCaseError::reject("fixture too large for exhaustive search"));
    }
    let forest = build_fixture(fixture).map_err(|err| {
        TestCaseError::fail(format!("build failed: {err} ({})", describe(fixture)))
    })?;
    let optimum = exhaustive_optimum(fixture.node_count, &fixture.edges, fixture.objective);

    if (forest.total_weight() - optimum).abs() > 1e-9 {
        return Err(TestCaseError::fail(format!(
            "total weight {} is not optimal; exhaustive search found {optimum} ({})",
            forest.total_weight(),
            describe(fixture),
        )));
    }
    Ok(())
}
