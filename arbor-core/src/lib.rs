//! Arbor core library.
//!
//! Builds minimum or maximum weight spanning forests with Kruskal's algorithm
//! and reports every accept/reject decision as a [`StepEvent`].
//!
//! # Determinism
//!
//! Equal-weight edges are considered in input order, and when two components
//! of equal rank merge the second edge endpoint's root is attached under the
//! first's. Runs over the same input therefore accept the same edges in the
//! same order and narrate the same roots.
//!
//! # Instrumentation
//!
//! [`SpanningForestBuilder::build_observed`] opens a `forest.build` span
//! carrying `nodes`, `edges`, `objective` and `accepted`, logs each step at
//! `debug` and the final summary at `info`.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod error;
mod forest;
mod graph;

pub use crate::{
    disjoint_set::DisjointSet,
    error::{ForestError, ForestErrorCode, Result},
    forest::{
        Decision, Objective, SpanningForest, SpanningForestBuilder, StepEvent, StepLog,
        StepObserver,
    },
    graph::{Edge, Graph, Node},
};
