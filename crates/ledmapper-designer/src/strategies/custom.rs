use super::{MappingStrategy, StrategyOutcome};
use crate::resampler::{ContourResampler, TracedContour};
use ledmapper_core::{Cell, Grid, Vertex};
use std::collections::HashMap;

/// Places LEDs along a traced outline.
///
/// The contour is resampled into grid space; a cell then takes the index of
/// the first vertex whose floored coordinates land on it. Cells no vertex
/// lands on stay unassigned.
#[derive(Debug, Clone)]
pub struct CustomStrategy<'a> {
    pub contour: &'a TracedContour,
    pub resampler: ContourResampler,
    /// Fixed LED count; `None` lets the contour define it.
    pub led_count: Option<usize>,
}

impl<'a> CustomStrategy<'a> {
    pub fn new(contour: &'a TracedContour, resampler: ContourResampler, led_count: Option<usize>) -> Self {
        Self {
            contour,
            resampler,
            led_count,
        }
    }

    /// Grid-space vertices this strategy would place.
    pub fn vertices(&self, grid: &Grid) -> Vec<Vertex> {
        self.resampler
            .resample(self.contour, grid.width(), grid.height(), self.led_count)
    }
}

impl MappingStrategy for CustomStrategy<'_> {
    fn apply(&self, grid: &Grid) -> StrategyOutcome {
        let vertices = self.vertices(grid);
        if vertices.is_empty() {
            tracing::warn!("Traced contour produced no vertices; leaving grid unassigned");
            return StrategyOutcome {
                grid: grid.cleared(),
                led_count: None,
            };
        }

        let mut first_hit: HashMap<(i64, i64), usize> = HashMap::new();
        for (index, vertex) in vertices.iter().enumerate() {
            first_hit.entry(vertex.floor_cell()).or_insert(index);
        }

        let assigned = grid.cells().filter_map(|cell| {
            let key = (cell.x as i64, cell.y as i64);
            first_hit.get(&key).map(|&led| Cell {
                led: Some(led),
                ..*cell
            })
        });
        let mapped = grid.cleared().with_cells(assigned.collect::<Vec<_>>());

        tracing::debug!(
            "Custom outline placed {} of {} vertices",
            mapped.count_used(),
            vertices.len()
        );

        StrategyOutcome {
            grid: mapped,
            led_count: Some(vertices.len()),
        }
    }

    fn name(&self) -> &str {
        "Custom"
    }
}
