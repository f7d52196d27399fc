slotmap::new_key_type! {
    /// Unique identifier for a vertex in the graph store.
    pub struct VertexId;
}

/// Data associated with a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexData {
    /// Creation sequence number, shown as the vertex label.
    pub serial: u64,
}

impl VertexData {
    /// Creates vertex data with the given sequence number.
    #[must_use]
    pub fn new(serial: u64) -> Self {
        Self { serial }
    }
}
