mod minimum_spanning_tree;

pub use minimum_spanning_tree::{MinimumSpanningTree, SpanningTree};
