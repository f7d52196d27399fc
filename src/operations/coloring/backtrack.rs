use std::collections::HashMap;
use std::hash::Hash;

use tracing::{trace, warn};

use crate::error::AlgorithmError;
use crate::topology::Adjacency;

use super::assignment::Coloring;

/// Marks a node that has no color yet.
const UNCOLORED: usize = 0;

/// Colors `graph` with at most `max_colors` colors by backtracking.
///
/// Nodes are visited in the adjacency's insertion order and colors are tried
/// in ascending order, so the result is deterministic.
///
/// # Errors
///
/// Returns [`AlgorithmError::Infeasible`] if no proper coloring with
/// `max_colors` colors exists.
pub fn color_graph<K: Copy + Eq + Hash>(
    graph: &Adjacency<K>,
    max_colors: usize,
) -> Result<Coloring<K>, AlgorithmError> {
    let mut search = ColorSearch::new(graph);
    if !search.search(0, max_colors) {
        warn!(max_colors, nodes = graph.len(), "coloring search exhausted");
        return Err(AlgorithmError::Infeasible { colors: max_colors });
    }
    Ok(Coloring::new(
        graph.nodes().to_vec(),
        &search.assignment,
        max_colors,
    ))
}

struct ColorSearch<'a, K> {
    graph: &'a Adjacency<K>,
    index: HashMap<K, usize>,
    assignment: Vec<usize>,
}

impl<'a, K: Copy + Eq + Hash> ColorSearch<'a, K> {
    fn new(graph: &'a Adjacency<K>) -> Self {
        let index = graph
            .nodes()
            .iter()
            .enumerate()
            .map(|(i, &n)| (n, i))
            .collect();
        Self {
            graph,
            index,
            assignment: vec![UNCOLORED; graph.len()],
        }
    }

    /// Returns `true` if no neighbour of `node` already holds `color`.
    fn is_safe(&self, node: K, color: usize) -> bool {
        self.graph
            .neighbours(node)
            .iter()
            .filter_map(|n| self.index.get(n))
            .all(|&j| self.assignment[j] != color)
    }

    /// Colors nodes `i..` given a fixed assignment for nodes `..i`.
    fn search(&mut self, i: usize, max_colors: usize) -> bool {
        let Some(&node) = self.graph.nodes().get(i) else {
            return true;
        };
        for color in 1..=max_colors {
            if self.is_safe(node, color) {
                self.assignment[i] = color;
                trace!(index = i, color, "assigned");
                if self.search(i + 1, max_colors) {
                    return true;
                }
                self.assignment[i] = UNCOLORED;
            }
        }
        false
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn cycle(n: usize) -> Adjacency<usize> {
        let mut adj = Adjacency::with_nodes(0..n);
        for i in 0..n {
            adj.link(i, (i + 1) % n);
        }
        adj
    }

    #[test]
    fn even_cycle_is_two_colorable() {
        let adj = cycle(6);
        let coloring = color_graph(&adj, 2).unwrap();
        assert!(coloring.is_proper(&adj));
        assert_eq!(coloring.color_count(), 2);
    }

    #[test]
    fn odd_cycle_needs_three_colors() {
        let adj = cycle(5);
        assert_eq!(
            color_graph(&adj, 2).unwrap_err(),
            AlgorithmError::Infeasible { colors: 2 }
        );
        let coloring = color_graph(&adj, 3).unwrap();
        assert!(coloring.is_proper(&adj));
    }

    #[test]
    fn backtracks_past_a_greedy_dead_end() {
        // First-fit gives 0 and 3 color 1 and 1 color 2, leaving nothing for 2.
        let mut adj = Adjacency::with_nodes([0, 3, 1, 2]);
        adj.link(0, 1);
        adj.link(1, 2);
        adj.link(2, 3);
        let coloring = color_graph(&adj, 2).unwrap();
        assert!(coloring.is_proper(&adj));
    }

    #[test]
    fn empty_graph_colors_trivially() {
        let adj: Adjacency<u8> = Adjacency::new();
        let coloring = color_graph(&adj, 0).unwrap();
        assert!(coloring.is_empty());
        assert_eq!(coloring.color_count(), 0);
    }

    #[test]
    fn colors_follow_node_order() {
        let mut adj = Adjacency::with_nodes(['a', 'b', 'c']);
        adj.link('a', 'b');
        let coloring = color_graph(&adj, 3).unwrap();
        let pairs: Vec<_> = coloring.iter().collect();
        assert_eq!(pairs, vec![('a', 1), ('b', 2), ('c', 1)]);
    }
}
