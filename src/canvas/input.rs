use crate::topology::{EdgeId, VertexId};

/// Mouse button of a canvas click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Adds a vertex.
    Left,
    /// Deletes whatever is under the pointer.
    Middle,
    /// Selects, or connects selected vertices.
    Right,
}

/// Keyboard input relevant to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A typed character, expected to be a decimal digit.
    Digit(char),
    /// Erase the last digit.
    Backspace,
}

/// What a click changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed beyond clearing the edge selection.
    Nothing,
    /// A vertex was created.
    AddedVertex(VertexId),
    /// Entities under the pointer were deleted.
    Deleted {
        vertices: Vec<VertexId>,
        edges: Vec<EdgeId>,
    },
    /// Entities under the pointer were selected.
    Selected {
        vertices: Vec<VertexId>,
        edges: Vec<EdgeId>,
    },
    /// The vertex selection was dropped.
    SelectionCleared,
    /// Selected vertices were connected to the clicked ones.
    Connected(Vec<EdgeId>),
}
