//! Step records emitted while the spanning forest is built.
//!
//! The builder reports every edge it considers to a [`StepObserver`]. The
//! algorithm never depends on what an observer does with the records; an
//! observer can only ask for component snapshots and stop the run early.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    ops::ControlFlow,
};

use crate::graph::Edge;

/// Outcome of considering a single edge.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Decision {
    /// The endpoints were in different components; the edge joined the forest.
    Accepted,
    /// The endpoints already shared a root; the edge would close a cycle.
    Rejected,
}

impl Decision {
    /// Returns `true` for [`Decision::Accepted`].
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Returns a stable lowercase label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of one edge considered by the builder.
#[derive(Clone, Debug, PartialEq)]
pub struct StepEvent<N> {
    pub(crate) step: usize,
    pub(crate) edge: Edge<N>,
    pub(crate) source_root: N,
    pub(crate) target_root: N,
    pub(crate) decision: Decision,
    pub(crate) total_weight: f64,
    pub(crate) forest_len: usize,
    pub(crate) components: Option<BTreeMap<N, BTreeSet<N>>>,
}

impl<N> StepEvent<N> {
    /// Returns the 1-based position of this step in the sorted edge order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn step(&self) -> usize { self.step }

    /// Returns the edge that was considered.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> &Edge<N> { &self.edge }

    /// Returns the root of the edge's first endpoint before the decision.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source_root(&self) -> &N { &self.source_root }

    /// Returns the root of the edge's second endpoint before the decision.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target_root(&self) -> &N { &self.target_root }

    /// Returns whether the edge was accepted.
    #[must_use]
    #[rustfmt::skip]
    pub const fn decision(&self) -> Decision { self.decision }

    /// Returns the forest weight after this step.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of forest edges after this step.
    #[must_use]
    #[rustfmt::skip]
    pub const fn forest_len(&self) -> usize { self.forest_len }

    /// Returns the components after this step, keyed by root with sorted
    /// members.
    ///
    /// `None` when the observer declined snapshots via
    /// [`StepObserver::wants_components`].
    #[must_use]
    pub const fn components(&self) -> Option<&BTreeMap<N, BTreeSet<N>>> {
        self.components.as_ref()
    }
}

/// Receives [`StepEvent`]s while a forest is being built.
///
/// Closures of the form `FnMut(&StepEvent<N>) -> ControlFlow<()>` implement
/// this trait and always receive component snapshots.
pub trait StepObserver<N> {
    /// Returns `true` when events should carry a component snapshot.
    ///
    /// Snapshots cost a pass over every node per step.
    fn wants_components(&self) -> bool {
        true
    }

    /// Handles one step. Returning [`ControlFlow::Break`] stops the run after
    /// this step; the partial forest is still returned.
    fn on_step(&mut self, event: &StepEvent<N>) -> ControlFlow<()>;
}

impl<N, F> StepObserver<N> for F
where
    F: FnMut(&StepEvent<N>) -> ControlFlow<()>,
{
    fn on_step(&mut self, event: &StepEvent<N>) -> ControlFlow<()> {
        self(event)
    }
}

/// Observer that keeps every event, for callers wanting the eager step list.
#[derive(Clone, Debug)]
pub struct StepLog<N> {
    events: Vec<StepEvent<N>>,
    snapshots: bool,
}

impl<N> StepLog<N> {
    /// Creates a log that records component snapshots.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            events: Vec::new(),
            snapshots: true,
        }
    }

    /// Creates a log that skips component snapshots.
    #[must_use]
    pub const fn without_components() -> Self {
        Self {
            events: Vec::new(),
            snapshots: false,
        }
    }

    /// Returns the recorded events in step order.
    #[must_use]
    #[rustfmt::skip]
    pub fn events(&self) -> &[StepEvent<N>] { &self.events }

    /// Consumes the log, returning the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<StepEvent<N>> {
        self.events
    }
}

impl<N> Default for StepLog<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone> StepObserver<N> for StepLog<N> {
    fn wants_components(&self) -> bool {
        self.snapshots
    }

    fn on_step(&mut self, event: &StepEvent<N>) -> ControlFlow<()> {
        self.events.push(event.clone());
        ControlFlow::Continue(())
    }
}

/// Observer used by plain builds: no snapshots, never stops.
pub(crate) struct Unobserved;

impl<N> StepObserver<N> for Unobserved {
    fn wants_components(&self) -> bool {
        false
    }

    fn on_step(&mut self, _event: &StepEvent<N>) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}
