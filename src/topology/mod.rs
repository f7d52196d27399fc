pub mod adjacency;
pub mod edge;
pub mod vertex;
pub mod weight;

pub use adjacency::Adjacency;
pub use edge::{EdgeData, EdgeId};
pub use vertex::{VertexData, VertexId};
pub use weight::Weight;

use std::collections::HashMap;

use crate::error::GraphError;
use slotmap::SlotMap;
use tracing::debug;

/// Central arena that owns the vertices, edges and adjacency of a simple
/// undirected weighted graph.
///
/// Entities are addressed by typed IDs (generational indices), so a stale ID
/// never aliases an entity created later. Every mutation either succeeds
/// completely or leaves the store untouched, and the adjacency map is kept as
/// the exact symmetric closure of the edge collection.
#[derive(Debug, Default)]
pub struct GraphStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    edge_order: Vec<EdgeId>,
    adjacency: Adjacency<VertexId>,
    next_serial: u64,
}

impl GraphStore {
    /// Creates a new, empty graph store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts a vertex with no neighbours and returns its ID.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = self.vertices.insert(VertexData::new(self.next_serial));
        self.next_serial += 1;
        self.adjacency.insert_node(id);
        debug!(?id, "added vertex");
        id
    }

    /// Returns the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if the vertex does not exist.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, GraphError> {
        self.vertices.get(id).ok_or(GraphError::NotFound("vertex"))
    }

    /// Returns `true` if the vertex exists.
    #[must_use]
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(id)
    }

    /// Deletes a vertex together with every edge incident to it.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if the vertex does not exist.
    pub fn delete_vertex(&mut self, id: VertexId) -> Result<(), GraphError> {
        if !self.vertices.contains_key(id) {
            return Err(GraphError::NotFound("vertex"));
        }
        let incident: Vec<EdgeId> = self
            .edge_order
            .iter()
            .copied()
            .filter(|&e| self.edges[e].is_incident(id))
            .collect();
        for e in incident {
            self.delete_edge(e)?;
        }
        self.vertices.remove(id);
        self.adjacency.remove_node(id);
        debug!(?id, "deleted vertex");
        Ok(())
    }

    /// Deletes every vertex and edge. Serials keep counting up.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.edge_order.clear();
        self.adjacency = Adjacency::new();
        debug!("cleared graph");
    }

    /// Returns vertex IDs in insertion order.
    #[must_use]
    pub fn vertex_ids(&self) -> &[VertexId] {
        self.adjacency.nodes()
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the store holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the neighbours of a vertex (empty if it does not exist).
    #[must_use]
    pub fn neighbours(&self, id: VertexId) -> &[VertexId] {
        self.adjacency.neighbours(id)
    }

    /// Returns the number of edges incident to a vertex.
    #[must_use]
    pub fn degree(&self, id: VertexId) -> usize {
        self.adjacency.degree(id)
    }

    /// Returns the adjacency map of the graph.
    #[must_use]
    pub fn adjacency(&self) -> &Adjacency<VertexId> {
        &self.adjacency
    }

    // --- Edge operations ---

    /// Connects `v` and `u` with a new edge of weight 1.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidEdge`] if `v == u`,
    /// [`GraphError::NotFound`] if either vertex does not exist, and
    /// [`GraphError::DuplicateEdge`] if the vertices are already connected.
    pub fn add_edge(&mut self, v: VertexId, u: VertexId) -> Result<EdgeId, GraphError> {
        if v == u {
            return Err(GraphError::InvalidEdge);
        }
        if !self.vertices.contains_key(v) || !self.vertices.contains_key(u) {
            return Err(GraphError::NotFound("vertex"));
        }
        if self.adjacency.are_adjacent(v, u) {
            return Err(GraphError::DuplicateEdge);
        }
        let id = self.edges.insert(EdgeData::new(v, u));
        self.edge_order.push(id);
        self.adjacency.link(v, u);
        debug!(?id, ?v, ?u, "added edge");
        Ok(id)
    }

    /// Returns the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if the edge does not exist.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, GraphError> {
        self.edges.get(id).ok_or(GraphError::NotFound("edge"))
    }

    /// Returns `true` if the edge exists.
    #[must_use]
    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(id)
    }

    /// Deletes an edge and its weight.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if the edge does not exist.
    pub fn delete_edge(&mut self, id: EdgeId) -> Result<(), GraphError> {
        let edge = self.edges.remove(id).ok_or(GraphError::NotFound("edge"))?;
        self.edge_order.retain(|&e| e != id);
        self.adjacency.unlink(edge.a, edge.b);
        debug!(?id, "deleted edge");
        Ok(())
    }

    /// Returns the edge joining `v` and `u`, in either order.
    #[must_use]
    pub fn find_edge(&self, v: VertexId, u: VertexId) -> Option<EdgeId> {
        self.edge_order
            .iter()
            .copied()
            .find(|&e| self.edges[e].connects(v, u))
    }

    /// Returns edge IDs in insertion order.
    #[must_use]
    pub fn edge_ids(&self) -> &[EdgeId] {
        &self.edge_order
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    // --- Weight operations ---

    /// Returns the weight of an edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if the edge does not exist.
    pub fn weight(&self, id: EdgeId) -> Result<Weight, GraphError> {
        Ok(self.edge(id)?.weight)
    }

    /// Replaces the weight of an edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if the edge does not exist.
    pub fn set_weight(&mut self, id: EdgeId, weight: Weight) -> Result<(), GraphError> {
        let edge = self.edges.get_mut(id).ok_or(GraphError::NotFound("edge"))?;
        edge.weight = weight;
        Ok(())
    }

    /// Replaces the weight buffer of an edge with the single digit `digit`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if the edge does not exist and
    /// [`GraphError::InvalidDigit`] if `digit` is not `0`-`9`.
    pub fn set_weight_digit(&mut self, id: EdgeId, digit: char) -> Result<(), GraphError> {
        self.edge(id)?;
        let weight = Weight::from_digit(digit)?;
        self.set_weight(id, weight)
    }

    /// Appends a digit to the weight buffer of an edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if the edge does not exist,
    /// [`GraphError::InvalidDigit`] for a non-digit, and
    /// [`GraphError::WeightOverflow`] if the weight would not fit in `u32`.
    pub fn append_weight_digit(&mut self, id: EdgeId, digit: char) -> Result<(), GraphError> {
        let weight = self.weight(id)?.push_digit(digit)?;
        self.set_weight(id, weight)
    }

    /// Removes the last digit of the weight buffer of an edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if the edge does not exist.
    pub fn backspace_weight_digit(&mut self, id: EdgeId) -> Result<(), GraphError> {
        let weight = self.weight(id)?.pop_digit();
        self.set_weight(id, weight)
    }

    /// Returns the algorithmic cost of travelling between two adjacent
    /// vertices, or `None` if they are not connected.
    #[must_use]
    pub fn cost_between(&self, v: VertexId, u: VertexId) -> Option<u64> {
        self.find_edge(v, u).map(|e| self.edges[e].weight.cost())
    }

    // --- Validation ---

    /// Verifies that the graph is simple and that the adjacency map is the
    /// symmetric closure of the edge collection.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Inconsistent`] describing the first violation.
    pub fn check_consistency(&self) -> Result<(), GraphError> {
        let inconsistent = |msg: String| Err(GraphError::Inconsistent(msg));

        if self.adjacency.len() != self.vertices.len() {
            return inconsistent(format!(
                "{} adjacency entries for {} vertices",
                self.adjacency.len(),
                self.vertices.len()
            ));
        }
        if self.edge_order.len() != self.edges.len() {
            return inconsistent("edge order out of sync".into());
        }

        let mut expected_degree: HashMap<VertexId, usize> = HashMap::new();
        for (i, &e) in self.edge_order.iter().enumerate() {
            let Some(edge) = self.edges.get(e) else {
                return inconsistent(format!("edge {e:?} listed but not stored"));
            };
            if edge.a == edge.b {
                return inconsistent(format!("edge {e:?} is a self-loop"));
            }
            if !self.vertices.contains_key(edge.a) || !self.vertices.contains_key(edge.b) {
                return inconsistent(format!("edge {e:?} references a missing vertex"));
            }
            let parallel = self.edge_order[i + 1..]
                .iter()
                .any(|&other| self.edges[other].connects(edge.a, edge.b));
            if parallel {
                return inconsistent(format!("edge {e:?} has a parallel edge"));
            }
            if !self.adjacency.are_adjacent(edge.a, edge.b)
                || !self.adjacency.are_adjacent(edge.b, edge.a)
            {
                return inconsistent(format!("edge {e:?} missing from adjacency"));
            }
            for v in [edge.a, edge.b] {
                *expected_degree.entry(v).or_insert(0) += 1;
            }
        }

        for &v in self.adjacency.nodes() {
            if !self.vertices.contains_key(v) {
                return inconsistent(format!("adjacency lists missing vertex {v:?}"));
            }
            let expected = expected_degree.get(&v).copied().unwrap_or(0);
            if self.adjacency.degree(v) != expected {
                return inconsistent(format!(
                    "vertex {v:?} has {} adjacency entries but {expected} incident edges",
                    self.adjacency.degree(v)
                ));
            }
        }
        Ok(())
    }
}
