use tracing::debug;

use crate::error::Result;
use crate::topology::{GraphStore, VertexId};

use super::assignment::Coloring;
use super::backtrack::color_graph;

/// Assigns every vertex a color so that adjacent vertices differ.
///
/// The palette has one color per vertex, so a coloring always exists. The
/// result is the first feasible assignment in vertex insertion order; it is
/// not guaranteed to use the minimum number of colors.
#[derive(Debug, Default)]
pub struct ColorVertices;

impl ColorVertices {
    /// Creates a new `ColorVertices` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the operation. Returns `Ok(None)` for a graph with no
    /// vertices.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::Infeasible`](crate::error::AlgorithmError::Infeasible)
    /// if the search exhausts the palette.
    pub fn execute(&self, store: &GraphStore) -> Result<Option<Coloring<VertexId>>> {
        if store.is_empty() {
            return Ok(None);
        }
        let coloring = color_graph(store.adjacency(), store.num_vertices())?;
        debug!(
            vertices = coloring.len(),
            colors = coloring.color_count(),
            "colored vertices"
        );
        Ok(Some(coloring))
    }
}
