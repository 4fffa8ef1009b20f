//! Property tests for injection draining.

use dualgrid_core::Cell;
use dualgrid_engine::{GridConfig, GridWorld, WorldConfig};
use dualgrid_test_utils::IdentityPropagator;
use proptest::prelude::*;
use std::collections::HashMap;

proptest! {
    #[test]
    fn last_set_per_cell_wins(
        writes in proptest::collection::vec((-2i32..10, -2i32..10, 1u32..1000), 0..64),
    ) {
        let config = WorldConfig::new(GridConfig::default(), IdentityPropagator::new("id"));
        let mut world: GridWorld<u32> = GridWorld::new(config).unwrap();
        let tx = world.injection_sender();

        let mut expected = HashMap::new();
        let mut off_grid = 0u64;
        for &(x, y, v) in &writes {
            tx.set(Cell::new(x, y), v).unwrap();
            if world.in_bounds(x, y) {
                expected.insert(Cell::new(x, y), v);
            } else {
                off_grid += 1;
            }
        }

        let report = world.apply_injections();
        prop_assert_eq!(report.applied + report.dropped, writes.len() as u64);
        prop_assert_eq!(report.dropped, off_grid);

        let g = world.geometry().clone();
        for cell in g.canonical_ordering() {
            let want = expected.get(&cell).copied().unwrap_or(0);
            prop_assert_eq!(world.get(cell.x, cell.y), want);
        }

        // Identity keeps injected values across a tick.
        world.step().unwrap();
        for (cell, v) in &expected {
            prop_assert_eq!(world.get(cell.x, cell.y), *v);
        }
    }
}
