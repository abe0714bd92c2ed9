use super::{number_in_order, MappingStrategy, StrategyOutcome};
use crate::threshold::RingThreshold;
use ledmapper_core::{distance, sort_clockwise, Cell, Grid, Vertex};

/// Numbers a ring of cells clockwise around the grid center.
///
/// The ideal ring has radius `(min(w, h) - 1) / 2` around
/// `((w - 1) / 2, (h - 1) / 2)`. A cell belongs to the ring when its
/// distance from the center is within `min(w, h) / 100 * threshold` of that
/// radius. Numbering starts at the cell on the rightward ray and runs
/// clockwise on screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleStrategy {
    pub threshold: RingThreshold,
}

impl CircleStrategy {
    pub fn new(threshold: RingThreshold) -> Self {
        Self { threshold }
    }

    pub fn center(width: usize, height: usize) -> Vertex {
        Vertex::new(
            width.saturating_sub(1) as f64 / 2.0,
            height.saturating_sub(1) as f64 / 2.0,
        )
    }

    pub fn radius(width: usize, height: usize) -> f64 {
        width.min(height).saturating_sub(1) as f64 / 2.0
    }

    /// Ring members in clockwise order.
    pub fn ring_cells(&self, grid: &Grid) -> Vec<Cell> {
        let (width, height) = (grid.width(), grid.height());
        let center = Self::center(width, height);
        let radius = Self::radius(width, height);
        let tolerance = self.threshold.tolerance(width.min(height));

        let mut ring: Vec<Cell> = grid
            .cells()
            .filter(|cell| {
                let offset = distance(cell_vertex(cell), center) - radius;
                offset.abs() <= tolerance
            })
            .map(|cell| Cell::empty(cell.x, cell.y))
            .collect();

        sort_clockwise(&mut ring, center, cell_vertex);
        ring
    }
}

impl MappingStrategy for CircleStrategy {
    fn apply(&self, grid: &Grid) -> StrategyOutcome {
        let ring = self.ring_cells(grid);
        tracing::debug!(
            "Circle ring with threshold {} has {} cells",
            self.threshold,
            ring.len()
        );
        number_in_order(grid, &ring)
    }

    fn name(&self) -> &str {
        "Circle"
    }
}

fn cell_vertex(cell: &Cell) -> Vertex {
    Vertex::new(cell.x as f64, cell.y as f64)
}
