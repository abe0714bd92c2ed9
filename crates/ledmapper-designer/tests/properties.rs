use ledmapper_core::Grid;
use ledmapper_designer::mutators::{reverse, shift_anti_clockwise, shift_clockwise};
use ledmapper_designer::{MappingStrategy, SquareStrategy};
use proptest::prelude::*;

/// Grid with distinct LEDs on a random subset of cells.
fn arb_mapped_grid() -> impl Strategy<Value = Grid> {
    (1usize..7, 1usize..7).prop_flat_map(|(w, h)| {
        (
            proptest::collection::vec(any::<bool>(), w * h),
            Just((0..w * h).collect::<Vec<usize>>()).prop_shuffle(),
        )
            .prop_map(move |(used, leds)| {
                let updates = used
                    .into_iter()
                    .zip(leds)
                    .enumerate()
                    .map(|(i, (on, led))| ((i % w, i / w), on.then_some(led)));
                Grid::new(w, h).unwrap().with_leds(updates).unwrap()
            })
    })
}

proptest! {
    #[test]
    fn square_assigns_every_perimeter_cell(w in 2usize..30, h in 2usize..30) {
        let outcome = SquareStrategy.apply(&Grid::new(w, h).unwrap());
        let expected = 2 * w + 2 * h - 4;

        prop_assert_eq!(outcome.led_count, Some(expected));
        prop_assert_eq!(outcome.grid.count_used(), expected);
        prop_assert!(outcome.grid.duplicate_leds().is_empty());
        prop_assert_eq!(outcome.grid.max_led(), Some(expected - 1));

        for cell in outcome.grid.cells() {
            let border = cell.x == 0 || cell.y == 0 || cell.x == w - 1 || cell.y == h - 1;
            prop_assert_eq!(cell.is_assigned(), border);
        }
    }

    #[test]
    fn shift_round_trip_is_identity(grid in arb_mapped_grid()) {
        prop_assert_eq!(shift_anti_clockwise(&shift_clockwise(&grid)), grid.clone());
        prop_assert_eq!(shift_clockwise(&shift_anti_clockwise(&grid)), grid);
    }

    #[test]
    fn reverse_is_involutive(grid in arb_mapped_grid()) {
        prop_assert_eq!(reverse(&reverse(&grid)), grid);
    }

    #[test]
    fn mutators_leave_unassigned_cells_alone(grid in arb_mapped_grid()) {
        for mutated in [shift_clockwise(&grid), shift_anti_clockwise(&grid), reverse(&grid)] {
            prop_assert_eq!(mutated.count_used(), grid.count_used());
            for (before, after) in grid.cells().zip(mutated.cells()) {
                prop_assert_eq!(before.is_assigned(), after.is_assigned());
            }
        }
    }
}
