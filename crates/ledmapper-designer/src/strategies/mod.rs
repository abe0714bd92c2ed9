//! Shape mapping strategies
//!
//! Each strategy starts from a cleared copy of the grid and assigns LED
//! indices `0..k` from a geometric rule.

use ledmapper_core::{Cell, Grid};

pub mod circle;
pub mod custom;
pub mod square;

pub use circle::CircleStrategy;
pub use custom::CustomStrategy;
pub use square::SquareStrategy;

/// Result of running a strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyOutcome {
    pub grid: Grid,
    /// LED count the strategy defines, possibly zero; `None` leaves the
    /// current count alone.
    pub led_count: Option<usize>,
}

/// Common interface for automatic mapping strategies.
pub trait MappingStrategy {
    /// Assigns LEDs on a cleared copy of `grid`.
    fn apply(&self, grid: &Grid) -> StrategyOutcome;

    /// Returns the name of the strategy for display.
    fn name(&self) -> &str;
}

/// Clears `grid` and numbers `cells` in iteration order.
pub(crate) fn number_in_order(grid: &Grid, cells: &[Cell]) -> StrategyOutcome {
    let numbered = cells.iter().enumerate().map(|(led, cell)| Cell {
        led: Some(led),
        ..*cell
    });
    StrategyOutcome {
        grid: grid.cleared().with_cells(numbered),
        led_count: Some(cells.len()),
    }
}
