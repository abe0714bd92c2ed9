//! # LedMapper Designer
//!
//! Automatic LED placement and editing on top of the core grid model.
//!
//! - Shape strategies: square perimeter, circle ring with tolerance, and
//!   custom traced outline
//! - Mutators that rotate, reverse and clear the LED sequence
//! - The contour resampler feeding the custom strategy
//! - [`MappingState`], driven by [`Action`]s through a single reducer, with
//!   undo/redo in [`MappingHistory`]

pub mod history;
pub mod mutators;
pub mod resampler;
pub mod shape;
pub mod state;
pub mod strategies;
pub mod threshold;

pub use history::{MappingHistory, MAX_HISTORY};
pub use resampler::{ContourResampler, TracedContour, DEFAULT_MAX_STEP};
pub use shape::{Direction, ShapeMode, Step};
pub use state::{Action, MappingState};
pub use strategies::{
    CircleStrategy, CustomStrategy, MappingStrategy, SquareStrategy, StrategyOutcome,
};
pub use threshold::{RingThreshold, DEFAULT_THRESHOLD_PERCENT, DEFAULT_THRESHOLD_STEP};
