use tracing::{debug, trace};

use crate::operations::traversal::{contains_cycle, is_connected};
use crate::topology::{Adjacency, EdgeId, GraphStore};

/// Edges of a spanning tree, in the order they were accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    edges: Vec<EdgeId>,
    total_weight: u64,
}

impl SpanningTree {
    /// Returns the accepted edges in acceptance (non-decreasing weight) order.
    #[must_use]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Returns `true` if `edge` belongs to the tree.
    #[must_use]
    pub fn contains(&self, edge: EdgeId) -> bool {
        self.edges.contains(&edge)
    }

    /// Sum of the costs of the tree edges.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Number of edges in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` for the tree of a single-vertex graph.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Builds a minimum spanning tree greedily (Kruskal).
///
/// Edges are taken in ascending numeric weight, ties broken by insertion
/// order. Each edge is tentatively added to a candidate graph over all
/// vertices and dropped again if it closes a cycle.
#[derive(Debug, Default)]
pub struct MinimumSpanningTree;

impl MinimumSpanningTree {
    /// Creates a new `MinimumSpanningTree` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the operation.
    ///
    /// Returns `None` if the graph has no vertices or is disconnected. A
    /// single vertex yields an empty tree.
    #[must_use]
    pub fn execute(&self, store: &GraphStore) -> Option<SpanningTree> {
        if store.is_empty() || !is_connected(store.adjacency()) {
            return None;
        }

        let mut candidate = Adjacency::with_nodes(store.vertex_ids().iter().copied());
        let mut tree = SpanningTree {
            edges: Vec::with_capacity(store.num_vertices().saturating_sub(1)),
            total_weight: 0,
        };
        if is_connected(&candidate) {
            return Some(tree);
        }

        let mut sorted: Vec<(EdgeId, u64)> = store
            .edge_ids()
            .iter()
            .filter_map(|&e| store.edge(e).ok().map(|d| (e, d.weight.cost())))
            .collect();
        sorted.sort_by_key(|&(_, cost)| cost);

        for (e, cost) in sorted {
            let Ok(edge) = store.edge(e) else { continue };
            candidate.link(edge.a, edge.b);
            if contains_cycle(&candidate) {
                candidate.unlink(edge.a, edge.b);
                trace!(?e, cost, "rejected edge closing a cycle");
                continue;
            }
            tree.edges.push(e);
            tree.total_weight += cost;
            if is_connected(&candidate) {
                debug!(
                    edges = tree.len(),
                    total_weight = tree.total_weight,
                    "built minimum spanning tree"
                );
                return Some(tree);
            }
        }
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::topology::{VertexId, Weight};

    fn weighted(store: &mut GraphStore, v: VertexId, u: VertexId, w: u32) -> EdgeId {
        let e = store.add_edge(v, u).unwrap();
        store.set_weight(e, Weight::Value(w)).unwrap();
        e
    }

    /// Minimum total weight over every `|V| - 1` edge subset that connects
    /// the graph.
    fn brute_force_minimum(store: &GraphStore) -> Option<u64> {
        let edges = store.edge_ids();
        let need = store.num_vertices() - 1;
        let mut best: Option<u64> = None;
        for mask in 0_u32..(1 << edges.len()) {
            if mask.count_ones() as usize != need {
                continue;
            }
            let mut adj = Adjacency::with_nodes(store.vertex_ids().iter().copied());
            let mut total = 0;
            for (i, &e) in edges.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    let d = store.edge(e).unwrap();
                    adj.link(d.a, d.b);
                    total += d.weight.cost();
                }
            }
            if is_connected(&adj) {
                best = Some(best.map_or(total, |b: u64| b.min(total)));
            }
        }
        best
    }

    #[test]
    fn triangle_drops_heaviest_edge() {
        let mut store = GraphStore::new();
        let a = store.add_vertex();
        let b = store.add_vertex();
        let c = store.add_vertex();
        let ab = weighted(&mut store, a, b, 1);
        let bc = weighted(&mut store, b, c, 2);
        let ac = weighted(&mut store, a, c, 3);

        let tree = MinimumSpanningTree::new().execute(&store).unwrap();
        assert_eq!(tree.edges(), &[ab, bc]);
        assert!(!tree.contains(ac));
        assert_eq!(tree.total_weight(), 3);
    }

    #[test]
    fn weights_compare_numerically() {
        let mut store = GraphStore::new();
        let a = store.add_vertex();
        let b = store.add_vertex();
        let c = store.add_vertex();
        let ab = weighted(&mut store, a, b, 10);
        let bc = weighted(&mut store, b, c, 2);
        let ac = weighted(&mut store, a, c, 9);

        let tree = MinimumSpanningTree::new().execute(&store).unwrap();
        assert!(!tree.contains(ab));
        assert_eq!(tree.edges(), &[bc, ac]);
        assert_eq!(tree.total_weight(), 11);
    }

    #[test]
    fn disconnected_graph_has_no_tree() {
        let mut store = GraphStore::new();
        let a = store.add_vertex();
        let b = store.add_vertex();
        store.add_vertex();
        store.add_edge(a, b).unwrap();
        assert_eq!(MinimumSpanningTree::new().execute(&store), None);
    }

    #[test]
    fn empty_and_single_vertex_graphs() {
        let mut store = GraphStore::new();
        assert_eq!(MinimumSpanningTree::new().execute(&store), None);
        store.add_vertex();
        let tree = MinimumSpanningTree::new().execute(&store).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.total_weight(), 0);
    }

    #[test]
    fn empty_weight_counts_as_one() {
        let mut store = GraphStore::new();
        let a = store.add_vertex();
        let b = store.add_vertex();
        let c = store.add_vertex();
        let ab = weighted(&mut store, a, b, 5);
        store.set_weight(ab, Weight::Empty).unwrap();
        weighted(&mut store, b, c, 3);
        weighted(&mut store, a, c, 4);

        let tree = MinimumSpanningTree::new().execute(&store).unwrap();
        assert!(tree.contains(ab));
        assert_eq!(tree.total_weight(), 4);
    }

    #[test]
    fn matches_brute_force_on_small_graphs() {
        let weights = [7, 3, 8, 1, 5, 12, 2, 9, 4, 6, 11, 10, 3, 5, 1];
        for n in 2..=6_usize {
            let mut store = GraphStore::new();
            let vs: Vec<_> = (0..n).map(|_| store.add_vertex()).collect();
            let mut k = 0;
            for i in 0..n {
                for j in (i + 1)..n {
                    // Keep a spanning path, drop some chords.
                    if j == i + 1 || (i + j + n) % 3 != 0 {
                        weighted(&mut store, vs[i], vs[j], weights[k % weights.len()]);
                        k += 1;
                    }
                }
            }
            let tree = MinimumSpanningTree::new().execute(&store).unwrap();
            assert_eq!(tree.len(), n - 1);
            assert_eq!(Some(tree.total_weight()), brute_force_minimum(&store));

            let mut adj = Adjacency::with_nodes(store.vertex_ids().iter().copied());
            for &e in tree.edges() {
                let d = store.edge(e).unwrap();
                adj.link(d.a, d.b);
            }
            assert!(is_connected(&adj));
            assert!(!contains_cycle(&adj));
        }
    }
}
