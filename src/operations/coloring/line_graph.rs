use crate::topology::{Adjacency, EdgeId, GraphStore};

/// Builds the line graph of the store: one node per edge, two nodes adjacent
/// when their edges share an endpoint.
///
/// Nodes follow edge insertion order.
#[must_use]
pub fn line_graph(store: &GraphStore) -> Adjacency<EdgeId> {
    let edges = store.edge_ids();
    let mut graph = Adjacency::with_nodes(edges.iter().copied());
    for (i, &e1) in edges.iter().enumerate() {
        let Ok(d1) = store.edge(e1) else { continue };
        for &e2 in &edges[i + 1..] {
            if store.edge(e2).is_ok_and(|d2| d1.shares_endpoint(d2)) {
                graph.link(e1, e2);
            }
        }
    }
    graph
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn path_becomes_shorter_path() {
        let mut store = GraphStore::new();
        let a = store.add_vertex();
        let b = store.add_vertex();
        let c = store.add_vertex();
        let d = store.add_vertex();
        let ab = store.add_edge(a, b).unwrap();
        let bc = store.add_edge(b, c).unwrap();
        let cd = store.add_edge(c, d).unwrap();

        let lg = line_graph(&store);
        assert_eq!(lg.nodes(), &[ab, bc, cd]);
        assert_eq!(lg.neighbours(ab), &[bc]);
        assert_eq!(lg.neighbours(bc), &[ab, cd]);
        assert!(!lg.are_adjacent(ab, cd));
    }

    #[test]
    fn star_becomes_clique() {
        let mut store = GraphStore::new();
        let hub = store.add_vertex();
        for _ in 0..4 {
            let v = store.add_vertex();
            store.add_edge(hub, v).unwrap();
        }
        let lg = line_graph(&store);
        assert_eq!(lg.len(), 4);
        assert!(lg.nodes().iter().all(|&e| lg.degree(e) == 3));
    }

    #[test]
    fn graph_without_edges_has_empty_line_graph() {
        let mut store = GraphStore::new();
        store.add_vertex();
        assert!(line_graph(&store).is_empty());
    }
}
