//! Weighted undirected graph input model.
//!
//! Nodes are opaque atoms: anything cloneable, hashable and totally ordered
//! can label a vertex. Edges keep the orientation they were supplied with so
//! narration reports them exactly as the caller wrote them.

use std::{collections::BTreeSet, collections::HashSet, fmt::Debug, hash::Hash};

/// Identifier usable as a graph vertex.
///
/// Blanket-implemented for every type meeting the bounds, so integers,
/// strings and caller-defined ids work without extra glue.
pub trait Node: Clone + Debug + Eq + Hash + Ord {}

impl<T> Node for T where T: Clone + Debug + Eq + Hash + Ord {}

/// A weighted undirected edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<N> {
    source: N,
    target: N,
    weight: f64,
}

impl<N> Edge<N> {
    /// Creates an edge between `source` and `target`.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::Edge;
    ///
    /// let edge = Edge::new(1, 2, 0.5);
    /// assert_eq!(edge.weight(), 0.5);
    /// ```
    #[must_use]
    pub const fn new(source: N, target: N, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> &N { &self.source }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> &N { &self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }
}

impl<N: PartialEq> Edge<N> {
    /// Returns `true` when both endpoints are the same node.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl<N> From<(N, N, f64)> for Edge<N> {
    fn from((source, target, weight): (N, N, f64)) -> Self {
        Self::new(source, target, weight)
    }
}

/// A node universe plus the edges connecting it.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph<N> {
    nodes: Vec<N>,
    edges: Vec<Edge<N>>,
}

impl<N: Node> Graph<N> {
    /// Builds a graph whose node set is inferred from the edge endpoints.
    ///
    /// Inferred nodes are sorted so runs over the same edges are reproducible.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Edge, Graph};
    ///
    /// let graph = Graph::from_edges(vec![Edge::new(3, 1, 1.0), Edge::new(1, 2, 2.0)]);
    /// assert_eq!(graph.nodes(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_edges(edges: Vec<Edge<N>>) -> Self {
        let nodes = edges
            .iter()
            .flat_map(|edge| [edge.source.clone(), edge.target.clone()])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        Self { nodes, edges }
    }

    /// Builds a graph from an explicit node list.
    ///
    /// Duplicate nodes are dropped, keeping first-seen order. Edges are not
    /// checked against the node list here; an endpoint outside it surfaces as
    /// [`crate::ForestError::UnknownElement`] when the forest is built.
    #[must_use]
    pub fn with_nodes(nodes: impl IntoIterator<Item = N>, edges: Vec<Edge<N>>) -> Self {
        let mut seen = HashSet::new();
        let nodes = nodes
            .into_iter()
            .filter(|node| seen.insert(node.clone()))
            .collect();
        Self { nodes, edges }
    }

    /// Builds a graph from optional explicit nodes, inferring them when absent.
    #[must_use]
    pub fn new(nodes: Option<Vec<N>>, edges: Vec<Edge<N>>) -> Self {
        match nodes {
            Some(nodes) => Self::with_nodes(nodes, edges),
            None => Self::from_edges(edges),
        }
    }
}

impl<N> Graph<N> {
    /// Returns the distinct nodes of the graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[N] { &self.nodes }

    /// Returns the edges in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<N>] { &self.edges }

    /// Returns the number of distinct nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges, self-loops and parallel edges included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}
