//! Error handling for LedMapper
//!
//! Only structural misuse of the grid model is an error. Duplicate or
//! out-of-range LED assignments are reported through
//! [`CellStatus`](crate::grid::CellStatus) instead, so a mapping session
//! never fails on them.

use thiserror::Error;

/// Mapping error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MappingError {
    /// Grid dimensions must both be at least 1
    #[error("Invalid grid dimensions {width}x{height}")]
    InvalidDimensions {
        /// The requested width.
        width: usize,
        /// The requested height.
        height: usize,
    },

    /// Cell coordinate outside the grid
    #[error("Cell ({x}, {y}) is outside the {width}x{height} grid")]
    CellOutOfBounds {
        /// The requested column.
        x: usize,
        /// The requested row.
        y: usize,
        /// The grid width.
        width: usize,
        /// The grid height.
        height: usize,
    },

    /// Ring threshold input could not be used
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    /// A component needs at least one LED
    #[error("Invalid LED count: {0}")]
    InvalidLedCount(usize),

    /// LED index beyond what a component can address
    #[error("LED index {led} exceeds the limit of {max} LEDs")]
    LedIndexTooLarge {
        /// The requested zero-based index.
        led: usize,
        /// The largest supported LED count.
        max: usize,
    },
}

/// Result type alias for grid and mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_error_display() {
        let err = MappingError::InvalidDimensions {
            width: 0,
            height: 4,
        };
        assert_eq!(err.to_string(), "Invalid grid dimensions 0x4");

        let err = MappingError::CellOutOfBounds {
            x: 7,
            y: 1,
            width: 5,
            height: 3,
        };
        assert_eq!(err.to_string(), "Cell (7, 1) is outside the 5x3 grid");

        let err = MappingError::InvalidThreshold("abc".to_string());
        assert_eq!(err.to_string(), "Invalid threshold: abc");

        let err = MappingError::InvalidLedCount(0);
        assert_eq!(err.to_string(), "Invalid LED count: 0");

        let err = MappingError::LedIndexTooLarge {
            led: 70_000,
            max: 65_536,
        };
        assert_eq!(
            err.to_string(),
            "LED index 70000 exceeds the limit of 65536 LEDs"
        );
    }
}
