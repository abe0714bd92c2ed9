//! Error types for image decoding and outline tracing.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or tracing a shape image.
#[derive(Error, Debug)]
pub enum TraceError {
    /// The image file could not be read.
    #[error("Failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The bytes are not a supported image.
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The blocking decode task did not finish.
    #[error("Decode task failed: {0}")]
    Task(String),

    /// Requested trace raster has a zero side.
    #[error("Invalid trace size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Result type alias for trace operations.
pub type TraceResult<T> = Result<T, TraceError>;
