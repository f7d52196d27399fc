use std::hash::Hash;

use crate::topology::{Adjacency, GraphStore};

use super::dijkstra::shortest_distances;

/// Returns `true` if every node of `adjacency` is reachable from every other.
///
/// The empty map is connected. Reachability is read off the distance table
/// from the first node, so any unreachable entry means disconnected.
pub fn is_connected<K: Copy + Eq + Hash>(adjacency: &Adjacency<K>) -> bool {
    let Some(&first) = adjacency.nodes().first() else {
        return true;
    };
    shortest_distances(adjacency, first, |_, _| 1)
        .values()
        .all(|d| d.is_finite())
}

/// Checks whether the whole graph is a single connected component.
#[derive(Debug, Default)]
pub struct IsConnected;

impl IsConnected {
    /// Creates a new `IsConnected` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self, store: &GraphStore) -> bool {
        is_connected(store.adjacency())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_is_connected() {
        assert!(IsConnected::new().execute(&GraphStore::new()));
    }

    #[test]
    fn single_vertex_is_connected() {
        let mut store = GraphStore::new();
        store.add_vertex();
        assert!(IsConnected::new().execute(&store));
    }

    #[test]
    fn isolating_a_vertex_disconnects() {
        let mut store = GraphStore::new();
        let a = store.add_vertex();
        let b = store.add_vertex();
        let c = store.add_vertex();
        let ab = store.add_edge(a, b).unwrap();
        store.add_edge(b, c).unwrap();
        let ac = store.add_edge(a, c).unwrap();
        assert!(IsConnected::new().execute(&store));

        store.delete_edge(ab).unwrap();
        assert!(IsConnected::new().execute(&store));
        store.delete_edge(ac).unwrap();
        assert!(!IsConnected::new().execute(&store));
    }

    #[test]
    fn two_components() {
        let mut adj = Adjacency::with_nodes([0, 1, 2, 3]);
        adj.link(0, 1);
        adj.link(2, 3);
        assert!(!is_connected(&adj));
        adj.link(1, 2);
        assert!(is_connected(&adj));
    }
}
