mod assignment;
mod backtrack;
mod color_edges;
mod color_vertices;
mod line_graph;

pub use assignment::Coloring;
pub use backtrack::color_graph;
pub use color_edges::ColorEdges;
pub use color_vertices::ColorVertices;
pub use line_graph::line_graph;
