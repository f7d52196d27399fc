use std::collections::HashSet;
use std::hash::Hash;

use crate::topology::{Adjacency, GraphStore};

/// Returns `true` if the undirected graph described by `adjacency` contains
/// a cycle.
///
/// Depth-first search from every unvisited node, so cycles in any component
/// are found. Reaching an already visited node other than the one we came
/// from closes a cycle.
pub fn contains_cycle<K: Copy + Eq + Hash>(adjacency: &Adjacency<K>) -> bool {
    let mut visited = HashSet::with_capacity(adjacency.len());
    adjacency
        .nodes()
        .iter()
        .any(|&v| !visited.contains(&v) && visit(v, None, adjacency, &mut visited))
}

fn visit<K: Copy + Eq + Hash>(
    v: K,
    parent: Option<K>,
    adjacency: &Adjacency<K>,
    visited: &mut HashSet<K>,
) -> bool {
    visited.insert(v);
    for &neighbour in adjacency.neighbours(v) {
        if !visited.contains(&neighbour) {
            if visit(neighbour, Some(v), adjacency, visited) {
                return true;
            }
        } else if parent != Some(neighbour) {
            return true;
        }
    }
    false
}

/// Checks whether the graph contains a cycle.
#[derive(Debug, Default)]
pub struct ContainsCycle;

impl ContainsCycle {
    /// Creates a new `ContainsCycle` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self, store: &GraphStore) -> bool {
        contains_cycle(store.adjacency())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::topology::VertexId;

    fn star(store: &mut GraphStore, leaves: usize) -> (VertexId, Vec<VertexId>) {
        let hub = store.add_vertex();
        let leaves: Vec<_> = (0..leaves)
            .map(|_| {
                let v = store.add_vertex();
                store.add_edge(hub, v).unwrap();
                v
            })
            .collect();
        (hub, leaves)
    }

    #[test]
    fn empty_graph_has_no_cycle() {
        assert!(!ContainsCycle::new().execute(&GraphStore::new()));
    }

    #[test]
    fn tree_has_no_cycle_until_extra_edge() {
        let mut store = GraphStore::new();
        let (_, leaves) = star(&mut store, 4);
        let tail = store.add_vertex();
        store.add_edge(leaves[0], tail).unwrap();
        assert!(!ContainsCycle::new().execute(&store));

        store.add_edge(tail, leaves[3]).unwrap();
        assert!(ContainsCycle::new().execute(&store));
    }

    #[test]
    fn cycle_in_second_component_is_found() {
        let mut adj = Adjacency::with_nodes([0, 1, 2, 3, 4]);
        adj.link(0, 1);
        adj.link(2, 3);
        adj.link(3, 4);
        assert!(!contains_cycle(&adj));
        adj.link(4, 2);
        assert!(contains_cycle(&adj));
    }

    #[test]
    fn single_edge_is_not_a_cycle() {
        let mut adj = Adjacency::with_nodes(['a', 'b']);
        adj.link('a', 'b');
        assert!(!contains_cycle(&adj));
    }
}
