pub mod coloring;
pub mod spanning;
pub mod traversal;
