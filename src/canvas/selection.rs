use crate::topology::{EdgeId, GraphStore, VertexId};

/// Currently selected vertices and edges.
///
/// Selected vertices are the pending sources of new edges; selected edges are
/// the targets of weight entry. The two are exclusive: selecting a vertex
/// drops the edge selection, and edges cannot be selected while any vertex is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    vertices: Vec<VertexId>,
    edges: Vec<EdgeId>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a vertex, clearing any edge selection.
    pub fn select_vertex(&mut self, v: VertexId) {
        self.edges.clear();
        if !self.vertices.contains(&v) {
            self.vertices.push(v);
        }
    }

    /// Selects an edge. Returns `false` (and selects nothing) while a vertex
    /// is selected.
    pub fn select_edge(&mut self, e: EdgeId) -> bool {
        if !self.vertices.is_empty() {
            return false;
        }
        if !self.edges.contains(&e) {
            self.edges.push(e);
        }
        true
    }

    /// Removes a vertex from the selection.
    pub fn unselect_vertex(&mut self, v: VertexId) {
        self.vertices.retain(|&x| x != v);
    }

    /// Removes an edge from the selection.
    pub fn unselect_edge(&mut self, e: EdgeId) {
        self.edges.retain(|&x| x != e);
    }

    /// Clears the vertex selection.
    pub fn clear_vertices(&mut self) {
        self.vertices.clear();
    }

    /// Clears the edge selection.
    pub fn clear_edges(&mut self) {
        self.edges.clear();
    }

    /// Drops every selected vertex or edge that no longer exists in `store`.
    pub fn prune(&mut self, store: &GraphStore) {
        self.vertices.retain(|&v| store.contains_vertex(v));
        self.edges.retain(|&e| store.contains_edge(e));
    }

    /// Returns the selected vertices in selection order.
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Returns the selected edges in selection order.
    #[must_use]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Returns `true` if the vertex is selected.
    #[must_use]
    pub fn is_vertex_selected(&self, v: VertexId) -> bool {
        self.vertices.contains(&v)
    }

    /// Returns `true` if the edge is selected.
    #[must_use]
    pub fn is_edge_selected(&self, e: EdgeId) -> bool {
        self.edges.contains(&e)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn vertex_and_edge_selection_are_exclusive() {
        let mut vertices: SlotMap<VertexId, ()> = SlotMap::with_key();
        let mut edges: SlotMap<EdgeId, ()> = SlotMap::with_key();
        let v = vertices.insert(());
        let e = edges.insert(());

        let mut selection = Selection::new();
        assert!(selection.select_edge(e));
        selection.select_vertex(v);
        assert!(selection.edges().is_empty());
        assert!(!selection.select_edge(e));
        assert!(!selection.is_edge_selected(e));

        selection.clear_vertices();
        assert!(selection.select_edge(e));
    }

    #[test]
    fn prune_drops_deleted_entities() {
        let mut store = GraphStore::new();
        let a = store.add_vertex();
        let b = store.add_vertex();
        let e = store.add_edge(a, b).unwrap();

        let mut selection = Selection::new();
        selection.select_edge(e);
        store.delete_edge(e).unwrap();
        selection.prune(&store);
        assert!(selection.edges().is_empty());

        selection.select_vertex(a);
        selection.select_vertex(b);
        store.delete_vertex(a).unwrap();
        selection.prune(&store);
        assert_eq!(selection.vertices(), &[b]);
    }

    #[test]
    fn selecting_twice_does_not_duplicate() {
        let mut vertices: SlotMap<VertexId, ()> = SlotMap::with_key();
        let v = vertices.insert(());
        let mut selection = Selection::new();
        selection.select_vertex(v);
        selection.select_vertex(v);
        assert_eq!(selection.vertices(), &[v]);
        selection.unselect_vertex(v);
        assert!(!selection.is_vertex_selected(v));
    }
}
