//! Kruskal spanning forest construction.
//!
//! Edges are stably sorted by weight (ascending for a minimum forest,
//! descending for a maximum one) and scanned once. Each edge whose endpoints
//! sit in different [`DisjointSet`] components joins the forest; every other
//! edge would close a cycle and is rejected. Equal weights keep their input
//! order, so ties resolve the same way on every run.
//!
//! The union-find phase is strictly sequential. With the `parallel` feature
//! the sort runs on Rayon, using a stable sort so the accepted edges are
//! identical either way.

mod step;

use std::{cmp::Ordering, fmt, ops::ControlFlow, sync::Arc};

#[cfg(feature = "parallel")]
use rayon::slice::ParallelSliceMut;
use tracing::{debug, field, info, instrument};

use crate::{
    disjoint_set::DisjointSet,
    error::{ForestError, Result},
    graph::{Edge, Graph, Node},
};

pub use self::step::{Decision, StepEvent, StepLog, StepObserver};
use self::step::Unobserved;

/// Selects whether the forest minimises or maximises total weight.
///
/// # Examples
/// ```
/// use arbor_core::Objective;
///
/// assert_eq!(Objective::from_maximize(true), Objective::Maximum);
/// assert_eq!(Objective::default(), Objective::Minimum);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Objective {
    /// Prefer the lightest edges.
    #[default]
    Minimum,
    /// Prefer the heaviest edges.
    Maximum,
}

impl Objective {
    /// Maps the classic `maximize` flag onto an objective.
    #[must_use]
    pub const fn from_maximize(maximize: bool) -> Self {
        if maximize { Self::Maximum } else { Self::Minimum }
    }

    /// Returns `true` for [`Objective::Maximum`].
    #[must_use]
    pub const fn is_maximum(self) -> bool {
        matches!(self, Self::Maximum)
    }

    /// Returns a stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
        }
    }

    /// Orders two finite weights so preferred edges come first.
    ///
    /// `-0.0` and `0.0` compare equal, leaving them in input order.
    fn order(self, left: f64, right: f64) -> Ordering {
        let ordering = left.partial_cmp(&right).unwrap_or(Ordering::Equal);
        match self {
            Self::Minimum => ordering,
            Self::Maximum => ordering.reverse(),
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The output of a spanning forest computation.
///
/// When the input graph is connected, the forest is a spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest<N> {
    edges: Vec<Edge<N>>,
    total_weight: f64,
    component_count: usize,
    node_count: usize,
    objective: Objective,
    completed: bool,
}

impl<N> SpanningForest<N> {
    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<N>] { &self.edges }

    /// Returns the sum of accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns the number of nodes the forest spans.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the objective the forest was built for.
    #[must_use]
    #[rustfmt::skip]
    pub const fn objective(&self) -> Objective { self.objective }

    /// Returns `false` when an observer stopped the run before every edge
    /// was considered.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_complete(&self) -> bool { self.completed }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Consumes the forest, returning its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge<N>> {
        self.edges
    }
}

/// Configures and runs Kruskal's algorithm.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, Objective, SpanningForestBuilder};
///
/// let graph = Graph::from_edges(vec![
///     Edge::new(1, 2, 1.0),
///     Edge::new(2, 3, 2.0),
///     Edge::new(1, 3, 3.0),
/// ]);
/// let forest = SpanningForestBuilder::new()
///     .with_objective(Objective::Maximum)
///     .build(&graph)?;
/// assert_eq!(forest.total_weight(), 5.0);
/// assert!(forest.is_tree());
/// # Ok::<(), arbor_core::ForestError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SpanningForestBuilder {
    objective: Objective,
}

impl SpanningForestBuilder {
    /// Creates a builder for a minimum spanning forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the objective.
    #[must_use]
    pub const fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// Returns the configured objective.
    #[must_use]
    pub const fn objective(&self) -> Objective {
        self.objective
    }

    /// Builds the spanning forest of `graph`.
    ///
    /// # Errors
    /// Returns [`ForestError::NonFiniteWeight`] when an edge weight is NaN or
    /// infinite, and [`ForestError::UnknownElement`] when an edge endpoint is
    /// not one of the graph's nodes.
    pub fn build<N: Node>(&self, graph: &Graph<N>) -> Result<SpanningForest<N>> {
        self.build_observed(graph, &mut Unobserved)
    }

    /// Builds the spanning forest and returns every step alongside it.
    ///
    /// # Errors
    /// Fails under the same conditions as [`Self::build`].
    pub fn build_with_steps<N: Node>(
        &self,
        graph: &Graph<N>,
    ) -> Result<(SpanningForest<N>, Vec<StepEvent<N>>)> {
        let mut log = StepLog::new();
        let forest = self.build_observed(graph, &mut log)?;
        Ok((forest, log.into_events()))
    }

    /// Builds the spanning forest, reporting each considered edge to
    /// `observer`.
    ///
    /// Input is validated before the first step, so an observer never sees
    /// events from a run that then fails.
    ///
    /// # Errors
    /// Fails under the same conditions as [`Self::build`].
    #[instrument(
        name = "forest.build",
        err,
        skip_all,
        fields(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            objective = %self.objective,
            accepted = field::Empty,
        ),
    )]
    pub fn build_observed<N, O>(
        &self,
        graph: &Graph<N>,
        observer: &mut O,
    ) -> Result<SpanningForest<N>>
    where
        N: Node,
        O: StepObserver<N> + ?Sized,
    {
        let mut set = DisjointSet::new(graph.nodes().iter().cloned());
        let ordered = self.prepare_edges(graph, &set)?;
        let snapshots = observer.wants_components();

        let mut edges = Vec::with_capacity(graph.node_count().saturating_sub(1));
        let mut total_weight = 0.0;
        let mut completed = true;

        for (position, planned) in ordered.into_iter().enumerate() {
            let source_root = set.find_index(planned.source);
            let target_root = set.find_index(planned.target);

            let decision = if source_root == target_root {
                Decision::Rejected
            } else {
                set.union_indices(source_root, target_root);
                edges.push(planned.edge.clone());
                total_weight += planned.edge.weight();
                Decision::Accepted
            };

            let event = StepEvent {
                step: position.saturating_add(1),
                edge: planned.edge.clone(),
                source_root: set.element(source_root).clone(),
                target_root: set.element(target_root).clone(),
                decision,
                total_weight,
                forest_len: edges.len(),
                components: snapshots.then(|| set.components()),
            };

            debug!(
                step = event.step,
                source = ?planned.edge.source(),
                target = ?planned.edge.target(),
                weight = planned.edge.weight(),
                %decision,
                total_weight,
                "edge considered"
            );

            if let ControlFlow::Break(()) = observer.on_step(&event) {
                completed = false;
                info!(step = event.step, "observer stopped the run");
                break;
            }
        }

        let component_count = set.component_count();
        tracing::Span::current().record("accepted", edges.len());
        info!(
            accepted = edges.len(),
            total_weight,
            components = component_count,
            tree = component_count == 1,
            completed,
            "spanning forest built"
        );

        Ok(SpanningForest {
            edges,
            total_weight,
            component_count,
            node_count: set.len(),
            objective: self.objective,
            completed,
        })
    }

    /// Returns the edges of `graph` in the order the builder considers them.
    ///
    /// # Errors
    /// Returns [`ForestError::NonFiniteWeight`] when an edge weight is NaN or
    /// infinite.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Edge, Graph, Objective, SpanningForestBuilder};
    ///
    /// let graph = Graph::from_edges(vec![
    ///     Edge::new('a', 'b', 2.0),
    ///     Edge::new('b', 'c', 1.0),
    ///     Edge::new('a', 'c', 2.0),
    /// ]);
    /// let order = SpanningForestBuilder::new()
    ///     .with_objective(Objective::Maximum)
    ///     .processing_order(&graph)?;
    /// let weights: Vec<f64> = order.iter().map(|edge| edge.weight()).collect();
    /// assert_eq!(weights, [2.0, 2.0, 1.0]);
    /// assert_eq!(order[0].target(), &'b');
    /// # Ok::<(), arbor_core::ForestError>(())
    /// ```
    pub fn processing_order<'a, N: Node>(
        &self,
        graph: &'a Graph<N>,
    ) -> Result<Vec<&'a Edge<N>>> {
        let edges = graph.edges();
        let mut keys = Vec::with_capacity(edges.len());
        for (position, edge) in edges.iter().enumerate() {
            if !edge.weight().is_finite() {
                return Err(ForestError::NonFiniteWeight {
                    left: Arc::from(format!("{:?}", edge.source())),
                    right: Arc::from(format!("{:?}", edge.target())),
                    weight: edge.weight(),
                });
            }
            keys.push((edge.weight(), position));
        }

        let objective = self.objective;
        let compare = |left: &(f64, usize), right: &(f64, usize)| objective.order(left.0, right.0);
        #[cfg(feature = "parallel")]
        keys.par_sort_by(compare);
        #[cfg(not(feature = "parallel"))]
        keys.sort_by(compare);

        Ok(keys
            .into_iter()
            .filter_map(|(_, position)| edges.get(position))
            .collect())
    }

    /// Resolves the ordered edges' endpoints to disjoint-set indices.
    fn prepare_edges<'a, N: Node>(
        &self,
        graph: &'a Graph<N>,
        set: &DisjointSet<N>,
    ) -> Result<Vec<PlannedEdge<'a, N>>> {
        self.processing_order(graph)?
            .into_iter()
            .map(|edge| {
                Ok(PlannedEdge {
                    edge,
                    source: set.index_of(edge.source())?,
                    target: set.index_of(edge.target())?,
                })
            })
            .collect()
    }
}

struct PlannedEdge<'a, N> {
    edge: &'a Edge<N>,
    source: usize,
    target: usize,
}

#[cfg(test)]
mod property;
