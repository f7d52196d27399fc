use std::collections::HashMap;
use std::hash::Hash;

/// Insertion-ordered adjacency map over node identifiers.
///
/// Generic over the node key so the same structure describes vertex graphs
/// and derived graphs such as the line graph (nodes are edges). Node order is
/// the order in which nodes were inserted; algorithms that need a fixed
/// exploration order (coloring, connectivity) rely on it.
#[derive(Debug, Clone)]
pub struct Adjacency<K> {
    order: Vec<K>,
    neighbours: HashMap<K, Vec<K>>,
}

impl<K> Default for Adjacency<K> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            neighbours: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> Adjacency<K> {
    /// Creates an empty adjacency map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an adjacency map holding `nodes` with no links between them.
    pub fn with_nodes(nodes: impl IntoIterator<Item = K>) -> Self {
        let mut adjacency = Self::new();
        for node in nodes {
            adjacency.insert_node(node);
        }
        adjacency
    }

    /// Adds a node with an empty neighbour list. Returns `false` if it was
    /// already present.
    pub fn insert_node(&mut self, node: K) -> bool {
        if self.neighbours.contains_key(&node) {
            return false;
        }
        self.order.push(node);
        self.neighbours.insert(node, Vec::new());
        true
    }

    /// Removes a node and every reference to it from other neighbour lists.
    /// Returns `false` if the node was not present.
    pub fn remove_node(&mut self, node: K) -> bool {
        if self.neighbours.remove(&node).is_none() {
            return false;
        }
        self.order.retain(|&n| n != node);
        for list in self.neighbours.values_mut() {
            list.retain(|&n| n != node);
        }
        true
    }

    /// Records `a` and `b` as neighbours of each other.
    ///
    /// Both nodes must already be present; nothing happens otherwise.
    pub fn link(&mut self, a: K, b: K) {
        if !self.contains(a) || !self.contains(b) {
            return;
        }
        if let Some(list) = self.neighbours.get_mut(&a) {
            list.push(b);
        }
        if let Some(list) = self.neighbours.get_mut(&b) {
            list.push(a);
        }
    }

    /// Removes one occurrence of `b` from `a`'s list and of `a` from `b`'s list.
    pub fn unlink(&mut self, a: K, b: K) {
        for (from, to) in [(a, b), (b, a)] {
            if let Some(list) = self.neighbours.get_mut(&from) {
                if let Some(pos) = list.iter().rposition(|&n| n == to) {
                    list.remove(pos);
                }
            }
        }
    }

    /// Returns `true` if the node is present.
    #[must_use]
    pub fn contains(&self, node: K) -> bool {
        self.neighbours.contains_key(&node)
    }

    /// Returns `true` if `a` lists `b` as a neighbour.
    #[must_use]
    pub fn are_adjacent(&self, a: K, b: K) -> bool {
        self.neighbours
            .get(&a)
            .is_some_and(|list| list.contains(&b))
    }

    /// Returns the neighbours of `node`, or an empty slice if it is absent.
    #[must_use]
    pub fn neighbours(&self, node: K) -> &[K] {
        self.neighbours.get(&node).map_or(&[][..], Vec::as_slice)
    }

    /// Returns the number of neighbours of `node`.
    #[must_use]
    pub fn degree(&self, node: K) -> usize {
        self.neighbours(node).len()
    }

    /// Returns the largest degree in the map, or 0 if it is empty.
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.neighbours.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns the nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[K] {
        &self.order
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if there are no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the position of `node` in insertion order.
    #[must_use]
    pub fn index_of(&self, node: K) -> Option<usize> {
        self.order.iter().position(|&n| n == node)
    }
}
