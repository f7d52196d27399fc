use std::hash::Hash;

use tracing::warn;

use crate::error::{CanvasError, Result};
use crate::operations::coloring::Coloring;

/// Default palette, indexed by color `1..=12`.
pub const DEFAULT_COLORS: [&str; 12] = [
    "#e32636", "#5d8aa8", "#a4c639", "#915c83", "#008000", "#8db600", "#00ffff", "#7fffd4",
    "#4b5320", "#e9d66b", "#87a96b", "#ff9966",
];

/// Fill colors used to render a [`Coloring`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|&c| c.to_owned()).collect(),
        }
    }
}

impl Palette {
    /// Creates a palette from color strings.
    ///
    /// # Errors
    ///
    /// Returns an error if `colors` is empty.
    pub fn new(colors: Vec<String>) -> Result<Self> {
        if colors.is_empty() {
            return Err(CanvasError::InvalidConfig("palette must not be empty".to_owned()).into());
        }
        Ok(Self { colors })
    }

    /// Number of colors the palette can render.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; a palette holds at least one color.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the fill for 1-based `color`, if the palette has one.
    #[must_use]
    pub fn fill(&self, color: usize) -> Option<&str> {
        color
            .checked_sub(1)
            .and_then(|i| self.colors.get(i))
            .map(String::as_str)
    }

    /// Maps a coloring to fills, in the coloring's node order.
    ///
    /// Painting stops at the first node whose color the palette cannot
    /// express; the nodes before it are still returned.
    pub fn paint<K: Copy + Eq + Hash>(&self, coloring: &Coloring<K>) -> Vec<(K, &str)> {
        let mut painted = Vec::with_capacity(coloring.len());
        for (node, color) in coloring.iter() {
            let Some(fill) = self.fill(color) else {
                warn!(
                    color,
                    palette = self.len(),
                    skipped = coloring.len() - painted.len(),
                    "palette exhausted"
                );
                break;
            };
            painted.push((node, fill));
        }
        painted
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::coloring::color_graph;
    use crate::topology::Adjacency;

    fn complete(n: usize) -> Adjacency<usize> {
        let mut adj = Adjacency::with_nodes(0..n);
        for i in 0..n {
            for j in (i + 1)..n {
                adj.link(i, j);
            }
        }
        adj
    }

    #[test]
    fn fill_is_one_based() {
        let palette = Palette::default();
        assert_eq!(palette.fill(0), None);
        assert_eq!(palette.fill(1), Some("#e32636"));
        assert_eq!(palette.fill(12), Some("#ff9966"));
        assert_eq!(palette.fill(13), None);
    }

    #[test]
    fn paint_stops_at_exhaustion() {
        let adj = complete(4);
        let coloring = color_graph(&adj, 4).unwrap();
        let palette = Palette::new(vec!["red".into(), "blue".into()]).unwrap();
        let painted = palette.paint(&coloring);
        assert_eq!(painted, vec![(0, "red"), (1, "blue")]);
    }

    #[test]
    fn paint_covers_everything_when_palette_suffices() {
        let adj = complete(3);
        let coloring = color_graph(&adj, 3).unwrap();
        assert_eq!(Palette::default().paint(&coloring).len(), 3);
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert!(Palette::new(Vec::new()).is_err());
    }
}
