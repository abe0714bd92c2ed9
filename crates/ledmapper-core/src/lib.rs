//! # LedMapper Core
//!
//! Core types and utilities for LedMapper.
//! Provides the vertex geometry helpers, the width × height grid model that
//! binds LED indices to cells, and the shared error type.

pub mod error;
pub mod geometry;
pub mod grid;

pub use error::{MappingError, Result};
pub use geometry::{
    clockwise_ordering, distance, fill_gaps, perimeter_length, resample_to_count, sort_clockwise,
    unique_vertices, Vertex,
};
pub use grid::{parse_led_input, Cell, CellStatus, Grid, MappingDiagnostics, MAX_LED_COUNT};
