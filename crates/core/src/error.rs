//! Error types for the calco text-layer library.

use thiserror::Error;

/// Primary error type for text-layer construction.
///
/// Presentation-level degradations (unattached anchor, zero measured
/// extent, unknown font style) are not errors; the corresponding
/// correction is skipped instead.
#[derive(Error, Debug)]
pub enum LayerError {
    #[error("invalid view box ({0:?}): must have positive extent")]
    InvalidViewBox((f64, f64, f64, f64)),

    #[error("rotation {0} is not a multiple of 90 degrees")]
    InvalidRotation(i32),

    #[error("glyph transform must have 6 elements, got {0}")]
    MalformedTransform(usize),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias for LayerError.
pub type Result<T> = std::result::Result<T, LayerError>;
