//! Error types for the renderer crate.

use thiserror::Error;

/// Errors that can occur while rendering or writing the figure.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to write image: {0}")]
    ImageWrite(#[from] image::ImageError),

    #[error("Color levels must be ascending and contain at least 2 entries")]
    InvalidLevels,
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
