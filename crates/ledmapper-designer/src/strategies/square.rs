use super::{number_in_order, MappingStrategy, StrategyOutcome};
use ledmapper_core::{Cell, Grid};

/// Numbers the grid border clockwise, starting at the top-left corner.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareStrategy;

impl SquareStrategy {
    /// Border cells in walk order: top row left→right, right column down,
    /// bottom row right→left, left column up. Corners appear once.
    pub fn perimeter(width: usize, height: usize) -> Vec<(usize, usize)> {
        if width == 0 || height == 0 {
            return Vec::new();
        }

        let mut walk = Vec::with_capacity(2 * (width + height));
        walk.extend((0..width).map(|x| (x, 0)));
        walk.extend((1..height).map(|y| (width - 1, y)));
        if height > 1 {
            walk.extend((0..width - 1).rev().map(|x| (x, height - 1)));
        }
        if width > 1 {
            walk.extend((1..height - 1).rev().map(|y| (0, y)));
        }
        walk
    }
}

impl MappingStrategy for SquareStrategy {
    fn apply(&self, grid: &Grid) -> StrategyOutcome {
        let cells: Vec<Cell> = Self::perimeter(grid.width(), grid.height())
            .into_iter()
            .map(|(x, y)| Cell::empty(x, y))
            .collect();
        tracing::debug!("Square perimeter has {} cells", cells.len());
        number_in_order(grid, &cells)
    }

    fn name(&self) -> &str {
        "Square"
    }
}
