// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient points for operation: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error("Degenerate polygon: {reason}")]
    DegeneratePolygon { reason: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Triangulation failed: {reason}")]
    TriangulationFailed { reason: String },

    #[error(
        "Triangulation is stale: {sites} sites present, last rebuild covered {triangulated}. Call rebuild() first."
    )]
    StaleTriangulation { sites: usize, triangulated: usize },

    #[error("Index {index} out of range for {len} sites")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type MathResult<T> = Result<T, MathError>;
