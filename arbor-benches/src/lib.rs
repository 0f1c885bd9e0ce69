//! Benchmark support crate for arbor.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks of the spanning forest builder and the disjoint set.

pub mod error;
pub mod params;
pub mod source;
