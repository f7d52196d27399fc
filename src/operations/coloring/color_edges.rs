use tracing::debug;

use crate::error::Result;
use crate::topology::{EdgeId, GraphStore};

use super::assignment::Coloring;
use super::backtrack::color_graph;
use super::line_graph::line_graph;

/// Assigns every edge a color so that edges sharing an endpoint differ.
///
/// Runs the vertex coloring search on the line graph with a palette of
/// `max line-graph degree + 1` colors.
#[derive(Debug, Default)]
pub struct ColorEdges;

impl ColorEdges {
    /// Creates a new `ColorEdges` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the operation. Returns `Ok(None)` for a graph with no edges.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::Infeasible`](crate::error::AlgorithmError::Infeasible)
    /// if the search exhausts the palette.
    pub fn execute(&self, store: &GraphStore) -> Result<Option<Coloring<EdgeId>>> {
        if store.num_edges() == 0 {
            return Ok(None);
        }
        let graph = line_graph(store);
        let palette = graph.max_degree() + 1;
        let coloring = color_graph(&graph, palette)?;
        debug!(
            edges = coloring.len(),
            palette,
            colors = coloring.color_count(),
            "colored edges"
        );
        Ok(Some(coloring))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn no_edges_yields_none() {
        let mut store = GraphStore::new();
        store.add_vertex();
        assert!(ColorEdges::new().execute(&store).unwrap().is_none());
    }

    #[test]
    fn incident_edges_get_different_colors() {
        let mut store = GraphStore::new();
        let vs: Vec<_> = (0..4).map(|_| store.add_vertex()).collect();
        for (i, &v) in vs.iter().enumerate() {
            for &u in &vs[i + 1..] {
                store.add_edge(v, u).unwrap();
            }
        }
        let coloring = ColorEdges::new().execute(&store).unwrap().unwrap();
        assert_eq!(coloring.len(), 6);
        for (i, &e1) in store.edge_ids().iter().enumerate() {
            for &e2 in &store.edge_ids()[i + 1..] {
                let d1 = store.edge(e1).unwrap();
                let d2 = store.edge(e2).unwrap();
                if d1.shares_endpoint(d2) {
                    assert_ne!(coloring.color(e1), coloring.color(e2));
                }
            }
        }
        assert!(coloring.color_count() <= coloring.palette_size());
    }

    #[test]
    fn triangle_needs_three_edge_colors() {
        let mut store = GraphStore::new();
        let a = store.add_vertex();
        let b = store.add_vertex();
        let c = store.add_vertex();
        store.add_edge(a, b).unwrap();
        store.add_edge(b, c).unwrap();
        store.add_edge(c, a).unwrap();
        let coloring = ColorEdges::new().execute(&store).unwrap().unwrap();
        assert_eq!(coloring.palette_size(), 3);
        assert_eq!(coloring.color_count(), 3);
    }
}
