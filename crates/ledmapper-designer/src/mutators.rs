//! Mapping mutators
//!
//! Reorder the LED sequence over the cells that already hold an LED.
//! Unassigned cells are never touched, and a sequence of zero or one LED is
//! left as is.

use crate::shape::Direction;
use ledmapper_core::{Cell, Grid};

/// Unassigns every cell.
pub fn clear(grid: &Grid) -> Grid {
    grid.cleared()
}

/// Head LED moves to the tail: the cell holding the lowest LED takes the
/// next one, and the last cell wraps to the lowest.
pub fn shift_clockwise(grid: &Grid) -> Grid {
    reassign(grid, |leds| leds.rotate_left(1))
}

/// Tail LED moves to the head; inverse of [`shift_clockwise`].
pub fn shift_anti_clockwise(grid: &Grid) -> Grid {
    reassign(grid, |leds| leds.rotate_right(1))
}

pub fn rotate(grid: &Grid, direction: Direction) -> Grid {
    match direction {
        Direction::Clockwise => shift_clockwise(grid),
        Direction::AntiClockwise => shift_anti_clockwise(grid),
    }
}

/// Reverses the LED sequence over the same cells.
pub fn reverse(grid: &Grid) -> Grid {
    reassign(grid, |leds| leds.reverse())
}

/// Permutes the LED values of the assigned cells (ordered by LED) and
/// writes them back to the same positions.
fn reassign<F>(grid: &Grid, permute: F) -> Grid
where
    F: FnOnce(&mut [usize]),
{
    let assigned = grid.assigned_cells();
    if assigned.len() <= 1 {
        return grid.clone();
    }

    let mut leds: Vec<usize> = assigned.iter().filter_map(|cell| cell.led).collect();
    permute(&mut leds);

    let updated: Vec<Cell> = assigned
        .iter()
        .zip(leds)
        .map(|(cell, led)| Cell {
            led: Some(led),
            ..*cell
        })
        .collect();
    grid.with_cells(updated)
}
