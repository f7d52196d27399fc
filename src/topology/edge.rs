use super::vertex::VertexId;
use super::weight::Weight;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the graph store.
    pub struct EdgeId;
}

/// Data associated with an undirected edge.
///
/// The endpoint pair is unordered; `a` and `b` only record the order in
/// which the endpoints were given when the edge was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeData {
    /// First endpoint.
    pub a: VertexId,
    /// Second endpoint.
    pub b: VertexId,
    /// Edge weight.
    pub weight: Weight,
}

impl EdgeData {
    /// Creates an edge between `a` and `b` with the default weight.
    #[must_use]
    pub fn new(a: VertexId, b: VertexId) -> Self {
        Self {
            a,
            b,
            weight: Weight::default(),
        }
    }

    /// Returns both endpoints.
    #[must_use]
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    /// Returns `true` if `v` is one of the endpoints.
    #[must_use]
    pub fn is_incident(&self, v: VertexId) -> bool {
        self.a == v || self.b == v
    }

    /// Returns `true` if this edge joins `v` and `u`, in either order.
    #[must_use]
    pub fn connects(&self, v: VertexId, u: VertexId) -> bool {
        (self.a == v && self.b == u) || (self.a == u && self.b == v)
    }

    /// Returns `true` if the two edges share an endpoint.
    #[must_use]
    pub fn shares_endpoint(&self, other: &EdgeData) -> bool {
        self.is_incident(other.a) || self.is_incident(other.b)
    }
}
