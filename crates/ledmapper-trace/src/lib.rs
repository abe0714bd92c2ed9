//! # LedMapper Trace
//!
//! Loads a shape image and extracts its outline for the custom mapping
//! strategy. Decoding is async; extraction sits behind the
//! [`ContourExtractor`] trait.

pub mod decode;
pub mod error;
pub mod extract;
pub mod outline;

pub use decode::{decode_bytes, decode_image};
pub use error::{TraceError, TraceResult};
pub use extract::{ContourExtractor, EdgeContourExtractor};
pub use outline::{OutlineTracer, DEFAULT_PIXELS_PER_CELL};
