//! Headless canvas adapter.
//!
//! Owns everything a drawing front end needs besides pixels: vertex
//! positions, the selection, hit-testing, and the click and key semantics of
//! the editor. A renderer forwards pointer and key events here and paints
//! the returned data.

pub mod config;
pub mod input;
pub mod palette;
pub mod selection;

pub use config::CanvasConfig;
pub use input::{ClickOutcome, Key, MouseButton};
pub use palette::Palette;
pub use selection::Selection;

use std::collections::HashMap;
use std::hash::Hash;

use slotmap::SecondaryMap;
use tracing::debug;

use crate::error::{AlgorithmError, GraphError, Result};
use crate::math::distance_2d::{midpoint, point_in_square, point_to_segment_dist};
use crate::math::Point2;
use crate::operations::coloring::{ColorEdges, ColorVertices, Coloring};
use crate::operations::spanning::{MinimumSpanningTree, SpanningTree};
use crate::operations::traversal::{Dijkstra, Distance, IsConnected};
use crate::topology::{EdgeId, GraphStore, VertexId, Weight};

/// A coloring together with the fills it maps to.
#[derive(Debug, Clone)]
pub struct Painting<'a, K> {
    /// The coloring as computed.
    pub coloring: Coloring<K>,
    /// Fill per node, truncated at palette exhaustion.
    pub fills: Vec<(K, &'a str)>,
}

/// A graph laid out on a 2D canvas.
#[derive(Debug, Default)]
pub struct Canvas {
    store: GraphStore,
    positions: SecondaryMap<VertexId, Point2>,
    selection: Selection,
    config: CanvasConfig,
}

impl Canvas {
    /// Creates an empty canvas.
    #[must_use]
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the underlying graph.
    #[must_use]
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Returns the current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    // --- Editing ---

    /// Adds a vertex centered at `point`.
    pub fn add_vertex_at(&mut self, point: Point2) -> VertexId {
        let v = self.store.add_vertex();
        self.positions.insert(v, point);
        v
    }

    /// Moves a vertex to `point`.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not found.
    pub fn move_vertex(&mut self, v: VertexId, point: Point2) -> Result<()> {
        let position = self
            .positions
            .get_mut(v)
            .ok_or(GraphError::NotFound("vertex"))?;
        *position = point;
        Ok(())
    }

    /// Connects two vertices.
    ///
    /// # Errors
    ///
    /// Propagates the store's rejection of self-loops, duplicates and
    /// missing vertices.
    pub fn connect(&mut self, v: VertexId, u: VertexId) -> Result<EdgeId> {
        Ok(self.store.add_edge(v, u)?)
    }

    /// Deletes a vertex and its incident edges, dropping them from the
    /// selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not found.
    pub fn delete_vertex(&mut self, v: VertexId) -> Result<()> {
        self.store.delete_vertex(v)?;
        self.positions.remove(v);
        self.selection.prune(&self.store);
        Ok(())
    }

    /// Deletes an edge, dropping it from the selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not found.
    pub fn delete_edge(&mut self, e: EdgeId) -> Result<()> {
        self.store.delete_edge(e)?;
        self.selection.unselect_edge(e);
        Ok(())
    }

    /// Deletes every vertex and edge.
    pub fn delete_all(&mut self) {
        self.store.clear();
        self.positions.clear();
        self.selection = Selection::new();
    }

    // --- Geometry ---

    /// Returns the center of a vertex.
    #[must_use]
    pub fn position(&self, v: VertexId) -> Option<Point2> {
        self.positions.get(v).copied()
    }

    /// Returns the segment drawn for an edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge or one of its endpoints is not found.
    pub fn edge_segment(&self, e: EdgeId) -> Result<(Point2, Point2)> {
        let edge = self.store.edge(e)?;
        let a = self.position(edge.a).ok_or(GraphError::NotFound("vertex"))?;
        let b = self.position(edge.b).ok_or(GraphError::NotFound("vertex"))?;
        Ok((a, b))
    }

    /// Returns the vertices whose bounding box contains `point`.
    #[must_use]
    pub fn vertices_at(&self, point: &Point2) -> Vec<VertexId> {
        let radius = self.config.vertex_radius();
        self.store
            .vertex_ids()
            .iter()
            .copied()
            .filter(|&v| {
                self.positions
                    .get(v)
                    .is_some_and(|center| point_in_square(point, center, radius))
            })
            .collect()
    }

    /// Returns the edges drawn within the pick tolerance of `point`.
    #[must_use]
    pub fn edges_at(&self, point: &Point2) -> Vec<EdgeId> {
        let tolerance = self.config.edge_pick_tolerance();
        self.store
            .edge_ids()
            .iter()
            .copied()
            .filter(|&e| {
                self.edge_segment(e)
                    .is_ok_and(|(a, b)| point_to_segment_dist(point, &a, &b) < tolerance)
            })
            .collect()
    }

    // --- Labels ---

    /// Returns the text shown on a vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not found.
    pub fn vertex_label(&self, v: VertexId) -> Result<String> {
        Ok(self.store.vertex(v)?.serial.to_string())
    }

    /// Returns the text shown on an edge: its weight, empty while the weight
    /// has no digits.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not found.
    pub fn weight_label(&self, e: EdgeId) -> Result<String> {
        Ok(self.store.weight(e)?.to_string())
    }

    /// Returns where an edge's weight label is drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge or one of its endpoints is not found.
    pub fn edge_label_position(&self, e: EdgeId) -> Result<Point2> {
        let (a, b) = self.edge_segment(e)?;
        Ok(midpoint(&a, &b))
    }

    // --- Input ---

    /// Handles a click at `point`.
    ///
    /// Every click first drops the edge selection.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store rejects a mutation for a reason
    /// other than an existing or degenerate edge.
    pub fn click(&mut self, point: Point2, button: MouseButton) -> Result<ClickOutcome> {
        self.selection.clear_edges();
        let vertices = self.vertices_at(&point);
        let edges = self.edges_at(&point);
        debug!(
            ?button,
            x = point.x,
            y = point.y,
            hit_vertices = vertices.len(),
            hit_edges = edges.len(),
            "click"
        );

        match button {
            MouseButton::Left => {
                if vertices.is_empty() {
                    Ok(ClickOutcome::AddedVertex(self.add_vertex_at(point)))
                } else {
                    Ok(ClickOutcome::Nothing)
                }
            }
            MouseButton::Middle => {
                if vertices.is_empty() && edges.is_empty() {
                    return Ok(ClickOutcome::Nothing);
                }
                // Edges first, so a vertex deletion does not remove them
                // from under us.
                for &e in &edges {
                    self.delete_edge(e)?;
                }
                for &v in &vertices {
                    self.delete_vertex(v)?;
                }
                Ok(ClickOutcome::Deleted { vertices, edges })
            }
            MouseButton::Right => self.right_click(vertices, &edges),
        }
    }

    fn right_click(&mut self, vertices: Vec<VertexId>, edges: &[EdgeId]) -> Result<ClickOutcome> {
        if self.selection.vertices().is_empty() {
            for &v in &vertices {
                self.selection.select_vertex(v);
            }
            let edges: Vec<EdgeId> = edges
                .iter()
                .copied()
                .filter(|&e| self.selection.select_edge(e))
                .collect();
            if vertices.is_empty() && edges.is_empty() {
                return Ok(ClickOutcome::Nothing);
            }
            return Ok(ClickOutcome::Selected { vertices, edges });
        }

        if vertices.is_empty() {
            self.selection.clear_vertices();
            return Ok(ClickOutcome::SelectionCleared);
        }

        let sources = self.selection.vertices().to_vec();
        let mut created = Vec::new();
        for v in sources {
            for &u in &vertices {
                match self.store.add_edge(v, u) {
                    Ok(e) => created.push(e),
                    Err(GraphError::InvalidEdge | GraphError::DuplicateEdge) => {}
                    Err(err) => return Err(err.into()),
                }
            }
            self.selection.unselect_vertex(v);
        }
        Ok(ClickOutcome::Connected(created))
    }

    /// Applies a key press to the weights of every selected edge.
    ///
    /// Either every selected edge is updated or none is.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-digit character or a weight that would
    /// overflow.
    pub fn key(&mut self, key: Key) -> Result<()> {
        let updates = self
            .selection
            .edges()
            .iter()
            .map(|&e| -> std::result::Result<(EdgeId, Weight), GraphError> {
                let weight = self.store.weight(e)?;
                let updated = match key {
                    Key::Digit(d) => weight.push_digit(d)?,
                    Key::Backspace => weight.pop_digit(),
                };
                Ok((e, updated))
            })
            .collect::<std::result::Result<Vec<_>, GraphError>>()?;
        for (e, weight) in updates {
            self.store.set_weight(e, weight)?;
        }
        Ok(())
    }

    // --- Algorithms ---

    /// Colors the vertices and maps the colors to the palette.
    ///
    /// # Errors
    ///
    /// Returns an error if the coloring search fails.
    pub fn color_vertices(&self) -> Result<Option<Painting<'_, VertexId>>> {
        let coloring = ColorVertices::new().execute(&self.store)?;
        Ok(coloring.map(|c| self.paint(c)))
    }

    /// Colors the edges and maps the colors to the palette.
    ///
    /// # Errors
    ///
    /// Returns an error if the coloring search fails.
    pub fn color_edges(&self) -> Result<Option<Painting<'_, EdgeId>>> {
        let coloring = ColorEdges::new().execute(&self.store)?;
        Ok(coloring.map(|c| self.paint(c)))
    }

    fn paint<K: Copy + Eq + Hash>(&self, coloring: Coloring<K>) -> Painting<'_, K> {
        let fills = self.config.palette().paint(&coloring);
        Painting { coloring, fills }
    }

    /// Computes the minimum spanning tree to highlight.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::Disconnected`] if the graph is empty or
    /// disconnected.
    pub fn minimum_spanning_tree(&self) -> Result<SpanningTree> {
        MinimumSpanningTree::new()
            .execute(&self.store)
            .ok_or_else(|| AlgorithmError::Disconnected.into())
    }

    /// Returns `true` if the graph is connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        IsConnected::new().execute(&self.store)
    }

    /// Computes shortest-path distances from a vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not found.
    pub fn distances_from(&self, v: VertexId) -> Result<HashMap<VertexId, Distance>> {
        Dijkstra::new(v).execute(&self.store)
    }
}
