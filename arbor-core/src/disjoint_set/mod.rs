//! Union-find (disjoint set union) over an arbitrary node universe.
//!
//! Nodes are interned to dense indices at construction; parents and ranks are
//! then plain vectors. `find` walks to the root iteratively and repoints every
//! visited node at the root on a second pass, so deep chains never recurse.
//! `union` attaches the lower-rank root under the higher-rank root. On a rank
//! tie the second argument's root goes under the first's, which keeps the
//! narrated roots reproducible.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::{
    error::{ForestError, Result},
    graph::Node,
};

/// A partition of a fixed node universe into disjoint components.
#[derive(Clone, Debug)]
pub struct DisjointSet<N> {
    elements: Vec<N>,
    index: HashMap<N, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl<N: Node> DisjointSet<N> {
    /// Creates a disjoint set where every distinct element is its own root
    /// with rank zero.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::DisjointSet;
    ///
    /// let set = DisjointSet::new(["a", "b", "a"]);
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.component_count(), 2);
    /// ```
    #[must_use]
    pub fn new(elements: impl IntoIterator<Item = N>) -> Self {
        let mut index = HashMap::new();
        let mut unique = Vec::new();
        for element in elements {
            if !index.contains_key(&element) {
                index.insert(element.clone(), unique.len());
                unique.push(element);
            }
        }
        let count = unique.len();
        Self {
            elements: unique,
            index,
            parent: (0..count).collect(),
            rank: vec![0; count],
            components: count,
        }
    }

    /// Returns the representative of `element`'s component.
    ///
    /// Every node visited on the way to the root is repointed directly at it,
    /// so a repeated call with no intervening union is a single hop.
    ///
    /// # Errors
    /// Returns [`ForestError::UnknownElement`] when `element` was not part of
    /// the initial universe.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::DisjointSet;
    ///
    /// let mut set = DisjointSet::new([1, 2, 3]);
    /// set.union(&1, &2)?;
    /// assert_eq!(set.find(&2)?, 1);
    /// assert!(set.find(&4).is_err());
    /// # Ok::<(), arbor_core::ForestError>(())
    /// ```
    pub fn find(&mut self, element: &N) -> Result<N> {
        let index = self.index_of(element)?;
        let root = self.find_index(index);
        Ok(self.element(root).clone())
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `false` when both already share a root. Otherwise the root with
    /// the lower rank is attached under the other; on a tie `right`'s root is
    /// attached under `left`'s root and `left`'s root gains one rank.
    ///
    /// # Errors
    /// Returns [`ForestError::UnknownElement`] when either node was not part of
    /// the initial universe.
    pub fn union(&mut self, left: &N, right: &N) -> Result<bool> {
        let left = self.index_of(left)?;
        let right = self.index_of(right)?;
        Ok(self.union_indices(left, right))
    }

    /// Returns `true` when both nodes belong to the same component.
    ///
    /// # Errors
    /// Returns [`ForestError::UnknownElement`] when either node was not part of
    /// the initial universe.
    pub fn connected(&mut self, left: &N, right: &N) -> Result<bool> {
        let left = self.index_of(left)?;
        let right = self.index_of(right)?;
        Ok(self.find_index(left) == self.find_index(right))
    }

    /// Groups every element under its current root.
    ///
    /// Calls `find` on each element, so paths are compressed as a side effect.
    pub fn components(&mut self) -> BTreeMap<N, BTreeSet<N>> {
        let mut groups: BTreeMap<N, BTreeSet<N>> = BTreeMap::new();
        for index in 0..self.elements.len() {
            let root = self.find_index(index);
            groups
                .entry(self.element(root).clone())
                .or_default()
                .insert(self.element(index).clone());
        }
        groups
    }

    /// Returns the rank recorded for `element`.
    ///
    /// Ranks only bound tree height for the union heuristic; after path
    /// compression they may overstate it.
    ///
    /// # Errors
    /// Returns [`ForestError::UnknownElement`] when `element` was not part of
    /// the initial universe.
    pub fn rank(&self, element: &N) -> Result<u8> {
        let index = self.index_of(element)?;
        Ok(self.rank[index])
    }

    /// Returns `true` when `element` is part of the universe.
    #[must_use]
    pub fn contains(&self, element: &N) -> bool {
        self.index.contains_key(element)
    }

    pub(crate) fn index_of(&self, element: &N) -> Result<usize> {
        self.index
            .get(element)
            .copied()
            .ok_or_else(|| ForestError::unknown_element(element))
    }

    pub(crate) fn element(&self, index: usize) -> &N {
        &self.elements[index]
    }

    pub(crate) fn find_index(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    pub(crate) fn union_indices(&mut self, left: usize, right: usize) -> bool {
        let left = self.find_index(left);
        let right = self.find_index(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            self.parent[left] = right;
        } else {
            self.parent[right] = left;
            if left_rank == right_rank {
                self.rank[left] = left_rank.saturating_add(1);
            }
        }
        self.components = self.components.saturating_sub(1);
        true
    }
}

impl<N> DisjointSet<N> {
    /// Returns the elements in the order they were first supplied.
    #[must_use]
    #[rustfmt::skip]
    pub fn elements(&self) -> &[N] { &self.elements }

    /// Returns the number of distinct elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` when the universe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of disjoint components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.components }
}
