use crate::error::{CanvasError, Result};

use super::palette::Palette;

/// Radius of a drawn vertex, in canvas units.
pub const DEFAULT_VERTEX_RADIUS: f64 = 20.0;

/// How far from an edge's segment a click still picks the edge.
pub const DEFAULT_EDGE_PICK_TOLERANCE: f64 = 4.0;

/// Geometry and styling parameters of the canvas adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    vertex_radius: f64,
    edge_pick_tolerance: f64,
    palette: Palette,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            vertex_radius: DEFAULT_VERTEX_RADIUS,
            edge_pick_tolerance: DEFAULT_EDGE_PICK_TOLERANCE,
            palette: Palette::default(),
        }
    }
}

impl CanvasConfig {
    /// Creates a new configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `vertex_radius` or `edge_pick_tolerance` is not a
    /// positive finite number.
    pub fn new(vertex_radius: f64, edge_pick_tolerance: f64, palette: Palette) -> Result<Self> {
        for (name, value) in [
            ("vertex radius", vertex_radius),
            ("edge pick tolerance", edge_pick_tolerance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CanvasError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                ))
                .into());
            }
        }
        Ok(Self {
            vertex_radius,
            edge_pick_tolerance,
            palette,
        })
    }

    /// Returns the vertex radius.
    #[must_use]
    pub fn vertex_radius(&self) -> f64 {
        self.vertex_radius
    }

    /// Returns the edge pick tolerance.
    #[must_use]
    pub fn edge_pick_tolerance(&self) -> f64 {
        self.edge_pick_tolerance
    }

    /// Returns the palette.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}
