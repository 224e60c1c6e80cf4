//! Error types for carousel generation.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating a request or rendering slides.
#[derive(Error, Debug)]
pub enum Error {
    /// The input text is empty or whitespace-only.
    #[error("The text is empty")]
    EmptyText,

    /// The requested slide count is outside the accepted range.
    #[error("Slide count must be between {min} and {max}, got {got}")]
    InvalidSlideCount { got: usize, min: usize, max: usize },

    /// A color string could not be parsed as a hex color.
    #[error("Invalid hex color: {0}")]
    InvalidColor(String),

    /// The downstream renderer failed after partitioning succeeded.
    #[error("Render error: {0}")]
    RenderError(String),

    /// Failed to write rendered output.
    #[error("Failed to write output: {0}")]
    IoError(#[from] std::io::Error),
}
