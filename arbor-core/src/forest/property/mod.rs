//! Property-based tests for the Kruskal spanning forest builder.
//!
//! Verifies the builder against a naive reference Kruskal and, on small
//! graphs, against exhaustive search; validates structural invariants and the
//! cycle property; and checks that repeated runs are identical.

mod determinism;
mod equivalence;
mod strategies;
mod types;
