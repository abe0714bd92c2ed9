//! Grid model
//!
//! A width × height matrix of [`Cell`]s standing in for the device
//! footprint. Every operation takes `&self` and returns a new [`Grid`],
//! so callers can keep the previous grid around (undo, diffing, tests)
//! without aliasing.
//!
//! Invariants:
//! - `rows.len() == height` and every row has exactly `width` cells
//! - the cell stored at row `y`, column `x` reports `x` and `y`

use crate::error::{MappingError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Largest LED count a component may grow to through manual edits.
pub const MAX_LED_COUNT: usize = 65_536;

/// One grid position, optionally bound to a zero-based LED index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub led: Option<usize>,
}

impl Cell {
    /// Creates an unassigned cell.
    pub fn empty(x: usize, y: usize) -> Self {
        Self { x, y, led: None }
    }

    /// Whether an LED is bound to this cell.
    pub fn is_assigned(&self) -> bool {
        self.led.is_some()
    }
}

/// How a cell should be presented while editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStatus {
    /// No LED mapped here
    Unassigned,
    /// LED mapped here and nowhere else
    Mapped,
    /// The same LED is mapped to another cell too
    Duplicate,
    /// LED number exceeds the component's LED count
    OutOfRange,
}

impl fmt::Display for CellStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unassigned => write!(f, "unassigned"),
            Self::Mapped => write!(f, "mapped"),
            Self::Duplicate => write!(f, "duplicate"),
            Self::OutOfRange => write!(f, "out of range"),
        }
    }
}

/// Problems found in a mapping. None of these block an export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingDiagnostics {
    /// LED indices held by more than one cell
    pub duplicates: Vec<usize>,
    /// LED indices below the LED count that no cell holds
    pub unplaced: Vec<usize>,
    /// LED indices at or beyond the LED count
    pub out_of_range: Vec<usize>,
}

impl MappingDiagnostics {
    /// True when the mapping has none of the tracked problems.
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.unplaced.is_empty() && self.out_of_range.is_empty()
    }
}

/// The width × height LED placement grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates an unassigned grid.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        check_dimensions(width, height)?;
        let rows = (0..height)
            .map(|y| (0..width).map(|x| Cell::empty(x, y)).collect())
            .collect();
        Ok(Self { rows })
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Returns the cell at `(x, y)`, if inside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.rows.get(y).and_then(|row| row.get(x))
    }

    /// All cells in row-major order (the flatten order).
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    /// Trims or pads rows and columns to the new size.
    ///
    /// Cells still inside the new bounds keep their LED; new cells are
    /// unassigned. Existing cells are never reordered.
    pub fn resize(&self, width: usize, height: usize) -> Result<Self> {
        check_dimensions(width, height)?;

        let mut rows = self.rows.clone();
        rows.truncate(height);
        while rows.len() < height {
            rows.push(Vec::new());
        }

        for (y, row) in rows.iter_mut().enumerate() {
            row.truncate(width);
            while row.len() < width {
                row.push(Cell::empty(row.len(), y));
            }
        }

        Ok(Self { rows })
    }

    /// Returns a grid with only cell `(x, y)` changed.
    ///
    /// Growing the component's LED count for a large `led` is the caller's
    /// job; the grid accepts any index.
    pub fn set_led(&self, x: usize, y: usize, led: Option<usize>) -> Result<Self> {
        self.with_leds([((x, y), led)])
    }

    /// Applies several `(position, led)` updates at once.
    pub fn with_leds<I>(&self, updates: I) -> Result<Self>
    where
        I: IntoIterator<Item = ((usize, usize), Option<usize>)>,
    {
        let mut next = self.clone();
        for ((x, y), led) in updates {
            let (width, height) = (next.width(), next.height());
            let cell = next
                .rows
                .get_mut(y)
                .and_then(|row| row.get_mut(x))
                .ok_or(MappingError::CellOutOfBounds {
                    x,
                    y,
                    width,
                    height,
                })?;
            cell.led = led;
        }
        Ok(next)
    }

    /// Writes each cell back at its own `(x, y)`.
    ///
    /// Meant for cells taken from this grid; cells outside it are skipped.
    pub fn with_cells<I>(&self, cells: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut next = self.clone();
        for cell in cells {
            match next.rows.get_mut(cell.y).and_then(|row| row.get_mut(cell.x)) {
                Some(slot) => slot.led = cell.led,
                None => tracing::debug!("Skipping cell ({}, {}) outside grid", cell.x, cell.y),
            }
        }
        next
    }

    /// Returns a grid with every cell unassigned.
    pub fn cleared(&self) -> Self {
        let mut next = self.clone();
        next.rows.iter_mut().flatten().for_each(|cell| cell.led = None);
        next
    }

    /// Number of cells holding an LED.
    pub fn count_used(&self) -> usize {
        self.cells().filter(|cell| cell.is_assigned()).count()
    }

    /// Highest LED index present, if any.
    pub fn max_led(&self) -> Option<usize> {
        self.cells().filter_map(|cell| cell.led).max()
    }

    /// Assigned cells sorted ascending by LED.
    ///
    /// Cells sharing an LED stay in row-major order (stable sort).
    pub fn assigned_cells(&self) -> Vec<Cell> {
        let mut assigned: Vec<Cell> = self.cells().filter(|c| c.is_assigned()).copied().collect();
        assigned.sort_by_key(|cell| cell.led);
        assigned
    }

    /// `[x, y]` of every assigned cell, ordered by LED index.
    pub fn to_ordered_coordinates(&self) -> Vec<(usize, usize)> {
        self.assigned_cells()
            .into_iter()
            .map(|cell| (cell.x, cell.y))
            .collect()
    }

    /// First cell (row-major) holding each LED.
    pub fn led_positions(&self) -> BTreeMap<usize, (usize, usize)> {
        let mut positions = BTreeMap::new();
        for cell in self.cells() {
            if let Some(led) = cell.led {
                positions.entry(led).or_insert((cell.x, cell.y));
            }
        }
        positions
    }

    /// LED indices held by more than one cell, ascending.
    pub fn duplicate_leds(&self) -> Vec<usize> {
        let mut seen = BTreeSet::new();
        let mut duplicates = BTreeSet::new();
        for led in self.cells().filter_map(|cell| cell.led) {
            if !seen.insert(led) {
                duplicates.insert(led);
            }
        }
        duplicates.into_iter().collect()
    }

    /// Display status of cell `(x, y)` for a component with `led_count` LEDs.
    pub fn cell_status(&self, x: usize, y: usize, led_count: usize) -> Option<CellStatus> {
        let cell = self.cell(x, y)?;
        let status = match cell.led {
            None => CellStatus::Unassigned,
            Some(led) if led >= led_count => CellStatus::OutOfRange,
            Some(led) if self.cells().filter(|c| c.led == Some(led)).count() > 1 => {
                CellStatus::Duplicate
            }
            Some(_) => CellStatus::Mapped,
        };
        Some(status)
    }

    /// Collects every duplicate, unplaced and out-of-range LED.
    pub fn diagnostics(&self, led_count: usize) -> MappingDiagnostics {
        let positions = self.led_positions();
        MappingDiagnostics {
            duplicates: self.duplicate_leds(),
            unplaced: (0..led_count)
                .filter(|led| !positions.contains_key(led))
                .collect(),
            out_of_range: positions
                .keys()
                .copied()
                .filter(|&led| led >= led_count)
                .collect(),
        }
    }
}

/// Renders one line per row with 1-based LED numbers and `.` for empty cells.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell_width = self
            .max_led()
            .map_or(1, |led| led.saturating_add(1).to_string().len());

        for row in &self.rows {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell.led {
                    Some(led) => format!("{:>cell_width$}", led.saturating_add(1)),
                    None => format!("{:>cell_width$}", "."),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Parses a 1-based LED number typed into a grid cell.
///
/// - `Some(Some(i))`: bind zero-based LED `i`
/// - `Some(None)`: blank or `0`, clear the cell
/// - `None`: not a usable number, ignore the input
pub fn parse_led_input(input: &str) -> Option<Option<usize>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(None);
    }
    match trimmed.parse::<i64>() {
        Ok(0) => Some(None),
        Ok(n) if n > 0 => usize::try_from(n - 1).ok().map(Some),
        _ => None,
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(MappingError::InvalidDimensions { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_led_input() {
        assert_eq!(parse_led_input("5"), Some(Some(4)));
        assert_eq!(parse_led_input(" 1 "), Some(Some(0)));
        assert_eq!(parse_led_input(""), Some(None));
        assert_eq!(parse_led_input("0"), Some(None));
        assert_eq!(parse_led_input("-3"), None);
        assert_eq!(parse_led_input("led"), None);
    }

    #[test]
    fn test_display_pads_to_widest_number() {
        let grid = Grid::new(3, 1)
            .unwrap()
            .with_leds([((0, 0), Some(9)), ((2, 0), Some(0))])
            .unwrap();
        assert_eq!(grid.to_string(), "10  .  1\n");
    }

    #[test]
    fn test_display_and_status_with_largest_index() {
        let grid = Grid::new(2, 1).unwrap().set_led(0, 0, Some(usize::MAX)).unwrap();
        let line = grid.to_string();
        assert!(line.starts_with(&usize::MAX.to_string()));
        assert!(line.ends_with(".\n"));
        assert_eq!(grid.cell_status(0, 0, 4), Some(CellStatus::OutOfRange));
    }
}
