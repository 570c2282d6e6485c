//! Error types for the gridding crate.

use thiserror::Error;

/// Errors that can occur while gridding observations.
#[derive(Error, Debug)]
pub enum GriddingError {
    #[error("Coordinate/value arrays have mismatched lengths: {xs} x, {ys} y, {values} values")]
    LengthMismatch {
        xs: usize,
        ys: usize,
        values: usize,
    },

    #[error("No observations to interpolate")]
    NoObservations,

    #[error("Linear interpolation requires at least 3 observations, found {0}")]
    TooFewObservations(usize),

    #[error("Failed to triangulate observations (collinear points?)")]
    DegenerateTriangulation,

    #[error("Grid resolution must be positive, got {0}")]
    InvalidResolution(f64),

    #[error("Unknown interpolation method: {0}")]
    UnknownMethod(String),
}

/// Result type for gridding operations.
pub type Result<T> = std::result::Result<T, GriddingError>;
