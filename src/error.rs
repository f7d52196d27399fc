use thiserror::Error;

/// Top-level error type for the graphpad engine.
#[derive(Debug, Error)]
pub enum GraphpadError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),

    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

/// Errors raised by graph store mutations and lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("invalid edge: both endpoints are the same vertex")]
    InvalidEdge,

    #[error("an edge already connects these vertices")]
    DuplicateEdge,

    #[error("entity not found: {0}")]
    NotFound(&'static str),

    #[error("weight digit must be 0-9, got {0:?}")]
    InvalidDigit(char),

    #[error("edge weight does not fit in 32 bits")]
    WeightOverflow,

    #[error("inconsistent graph: {0}")]
    Inconsistent(String),
}

/// Errors raised by graph algorithms.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlgorithmError {
    #[error("no proper coloring with {colors} colors")]
    Infeasible { colors: usize },

    #[error("graph is disconnected")]
    Disconnected,
}

/// Errors raised by the canvas adapter.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("invalid canvas configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience type alias for results using [`GraphpadError`].
pub type Result<T> = std::result::Result<T, GraphpadError>;
