//! Error types for snapshot construction

use thiserror::Error;

/// Errors raised while building series or snapshots.
///
/// Highlight resolution itself never fails; it yields `None` instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HighlightError {
    /// Entry x values must be ascending for the binary-search lookups
    #[error("series x values must be sorted ascending (entry {index}: {x} < {previous})")]
    UnsortedX { index: usize, x: f32, previous: f32 },

    /// Entry x values must be finite
    #[error("series entry {index} has a non-finite x value")]
    NonFiniteX { index: usize },

    /// View size must be finite and positive
    #[error("invalid view size {width}x{height}")]
    InvalidViewSize { width: f32, height: f32 },

    /// Configuration value out of range
    #[error("invalid highlight config: {0}")]
    InvalidConfig(String),
}

/// Result type for highlight construction
pub type Result<T> = std::result::Result<T, HighlightError>;
