//! Determinism property.
//!
//! Repeated builds over the same input, weight ties included, must produce
//! identical forests and identical step streams.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::SpanningForestBuilder;

use super::helpers::{describe, fixture_graph};
use super::types::{DeterminismConfig, ForestFixture};

/// Runs the determinism property for the given fixture.
pub(super) fn run_determinism_property(fixture: &ForestFixture) -> TestCaseResult {
    let config = DeterminismConfig::load();
    let graph = fixture_graph(fixture);
    let builder = SpanningForestBuilder::new().with_objective(fixture.objective);

    let run = || {
        builder.build_with_steps(&graph).map_err(|err| {
            TestCaseError::fail(format!("build failed: {err} ({})", describe(fixture)))
        })
    };

    let (baseline, baseline_steps) = run()?;
    if baseline_steps.len() != fixture.edges.len() {
        return Err(TestCaseError::fail(format!(
            "expected one step per edge, got {} steps ({})",
            baseline_steps.len(),
            describe(fixture),
        )));
    }

    for repetition in 1..=config.repetitions {
        let (forest, steps) = run()?;
        if forest != baseline {
            return Err(TestCaseError::fail(format!(
                "repetition {repetition}: forest differs from first run ({})",
                describe(fixture),
            )));
        }
        if steps != baseline_steps {
            return Err(TestCaseError::fail(format!(
                "repetition {repetition}: step stream differs from first run ({})",
                describe(fixture),
            )));
        }
    }
    Ok(())
}
