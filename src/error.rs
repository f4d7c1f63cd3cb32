//! Error type shared by input validation, configuration checks and I/O helpers.
//!
//! The numeric stages never fail once a frame has passed validation; every
//! variant here describes either a caller contract violation or a tooling
//! failure around the core.
use thiserror::Error;

/// Errors reported by the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Width or height is zero.
    #[error("invalid frame dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: usize, height: usize },
    /// Pixel buffer is shorter (or, for owned frames, not equal) to what the geometry requires.
    #[error("pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
    /// Row stride smaller than the row width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { stride: usize, width: usize },
    /// Rejected detector configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
