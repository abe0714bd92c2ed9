use ledmapper_core::{CellStatus, Grid, MappingError};

fn grid_3x3_numbered() -> Grid {
    let mut grid = Grid::new(3, 3).unwrap();
    let mut led = 0;
    for y in 0..3 {
        for x in 0..3 {
            grid = grid.set_led(x, y, Some(led)).unwrap();
            led += 1;
        }
    }
    grid
}

#[test]
fn test_new_grid_is_unassigned() {
    let grid = Grid::new(4, 2).unwrap();
    assert_eq!(grid.width(), 4);
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.count_used(), 0);
    assert!(grid.rows().iter().all(|row| row.len() == 4));
}

#[test]
fn test_zero_dimensions_rejected() {
    assert_eq!(
        Grid::new(0, 3),
        Err(MappingError::InvalidDimensions {
            width: 0,
            height: 3
        })
    );
    let grid = Grid::new(2, 2).unwrap();
    assert!(grid.resize(2, 0).is_err());
}

#[test]
fn test_resize_3x3_to_5x3_preserves_cells() {
    let grid = grid_3x3_numbered();
    let resized = grid.resize(5, 3).unwrap();

    assert_eq!(resized.width(), 5);
    assert_eq!(resized.height(), 3);
    for y in 0..3 {
        for x in 0..3 {
            assert_eq!(resized.cell(x, y), grid.cell(x, y));
        }
        for x in 3..5 {
            let cell = resized.cell(x, y).unwrap();
            assert_eq!((cell.x, cell.y, cell.led), (x, y, None));
        }
    }
}

#[test]
fn test_resize_shrink_then_grow_drops_trimmed_leds() {
    let grid = grid_3x3_numbered();
    let shrunk = grid.resize(2, 2).unwrap();
    assert_eq!(shrunk.count_used(), 4);

    let grown = shrunk.resize(3, 3).unwrap();
    assert_eq!(grown.count_used(), 4);
    assert_eq!(grown.cell(2, 2).unwrap().led, None);
    assert_eq!(grown.cell(1, 1).unwrap().led, Some(4));
}

#[test]
fn test_set_led_does_not_touch_other_cells() {
    let grid = grid_3x3_numbered();
    let updated = grid.set_led(1, 1, None).unwrap();

    assert_eq!(updated.count_used(), 8);
    assert_eq!(grid.count_used(), 9);
    for cell in updated.cells().filter(|c| (c.x, c.y) != (1, 1)) {
        assert_eq!(Some(cell), grid.cell(cell.x, cell.y));
    }
}

#[test]
fn test_set_led_out_of_bounds() {
    let grid = Grid::new(2, 2).unwrap();
    assert_eq!(
        grid.set_led(2, 0, Some(0)),
        Err(MappingError::CellOutOfBounds {
            x: 2,
            y: 0,
            width: 2,
            height: 2
        })
    );
}

#[test]
fn test_ordered_coordinates_sorted_by_led() {
    let grid = Grid::new(3, 2)
        .unwrap()
        .with_leds([
            ((2, 1), Some(0)),
            ((0, 0), Some(2)),
            ((1, 0), Some(1)),
        ])
        .unwrap();

    assert_eq!(grid.to_ordered_coordinates(), vec![(2, 1), (1, 0), (0, 0)]);
}

#[test]
fn test_ordered_coordinates_duplicate_ties_follow_row_major_order() {
    let grid = Grid::new(3, 2)
        .unwrap()
        .with_leds([
            ((2, 1), Some(0)),
            ((1, 0), Some(0)),
            ((0, 1), Some(1)),
        ])
        .unwrap();

    assert_eq!(grid.to_ordered_coordinates(), vec![(1, 0), (2, 1), (0, 1)]);
    assert_eq!(grid.duplicate_leds(), vec![0]);
}

#[test]
fn test_cell_status() {
    let grid = Grid::new(3, 1)
        .unwrap()
        .with_leds([((0, 0), Some(0)), ((1, 0), Some(0)), ((2, 0), Some(5))])
        .unwrap();

    assert_eq!(grid.cell_status(0, 0, 3), Some(CellStatus::Duplicate));
    assert_eq!(grid.cell_status(2, 0, 3), Some(CellStatus::OutOfRange));
    assert_eq!(grid.cell_status(2, 0, 6), Some(CellStatus::Mapped));
    assert_eq!(grid.cell_status(5, 0, 3), None);

    let empty = Grid::new(1, 1).unwrap();
    assert_eq!(empty.cell_status(0, 0, 1), Some(CellStatus::Unassigned));
}

#[test]
fn test_diagnostics() {
    let grid = Grid::new(3, 1)
        .unwrap()
        .with_leds([((0, 0), Some(0)), ((1, 0), Some(0)), ((2, 0), Some(4))])
        .unwrap();

    let diagnostics = grid.diagnostics(3);
    assert_eq!(diagnostics.duplicates, vec![0]);
    assert_eq!(diagnostics.unplaced, vec![1, 2]);
    assert_eq!(diagnostics.out_of_range, vec![4]);
    assert!(!diagnostics.is_clean());
    assert!(grid_3x3_numbered().diagnostics(9).is_clean());
}

#[test]
fn test_cleared_keeps_dimensions() {
    let cleared = grid_3x3_numbered().cleared();
    assert_eq!(cleared.count_used(), 0);
    assert_eq!((cleared.width(), cleared.height()), (3, 3));
}
