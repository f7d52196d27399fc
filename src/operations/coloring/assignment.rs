use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::topology::Adjacency;

/// A color per node, produced by the backtracking search.
///
/// Colors are 1-based indices into a palette of `palette_size` colors. Nodes
/// are kept in the order the search visited them.
#[derive(Debug, Clone)]
pub struct Coloring<K> {
    order: Vec<K>,
    colors: HashMap<K, usize>,
    palette_size: usize,
}

impl<K: Copy + Eq + Hash> Coloring<K> {
    pub(crate) fn new(order: Vec<K>, colors: &[usize], palette_size: usize) -> Self {
        let colors = order.iter().copied().zip(colors.iter().copied()).collect();
        Self {
            order,
            colors,
            palette_size,
        }
    }

    /// Returns the color of `node`, or `None` if it was not colored.
    #[must_use]
    pub fn color(&self, node: K) -> Option<usize> {
        self.colors.get(&node).copied()
    }

    /// Iterates `(node, color)` pairs in search order.
    pub fn iter(&self) -> impl Iterator<Item = (K, usize)> + '_ {
        self.order.iter().map(|&n| (n, self.colors[&n]))
    }

    /// Number of colored nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no node was colored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of colors the search was allowed to use.
    #[must_use]
    pub fn palette_size(&self) -> usize {
        self.palette_size
    }

    /// Number of distinct colors actually used.
    ///
    /// This is an upper bound on the chromatic number, not the chromatic
    /// number itself: the search stops at the first feasible assignment.
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.colors.values().collect::<HashSet<_>>().len()
    }

    /// Returns `true` if no two adjacent nodes of `graph` share a color.
    #[must_use]
    pub fn is_proper(&self, graph: &Adjacency<K>) -> bool {
        graph.nodes().iter().all(|&v| {
            graph
                .neighbours(v)
                .iter()
                .all(|&u| self.color(v) != self.color(u))
        })
    }
}
