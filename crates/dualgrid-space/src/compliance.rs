//! Geometry compliance test helpers.
//!
//! These functions verify the invariants every `GridGeometry` must satisfy,
//! whatever its dimensions, scale or origin. Reused across the geometry
//! test module.

use crate::geometry::GridGeometry;
use dualgrid_core::Cell;
use indexmap::IndexSet;

/// Assert that the neighbour relation is symmetric for every cell.
pub fn assert_neighbours_symmetric(g: &GridGeometry) {
    for cell in g.canonical_ordering() {
        for nb in g.neighbours(cell.x, cell.y, 1) {
            assert!(
                g.neighbours(nb.x, nb.y, 1).any(|c| c == cell),
                "neighbour symmetry violated: {nb:?} in N({cell:?}) but {cell:?} not in N({nb:?})"
            );
        }
    }
}

/// Assert that no cell is its own neighbour and every neighbour is in bounds.
pub fn assert_neighbours_exclude_centre(g: &GridGeometry) {
    for cell in g.canonical_ordering() {
        for nb in g.neighbours(cell.x, cell.y, 1) {
            assert_ne!(nb, cell, "{cell:?} listed as its own neighbour");
            assert!(g.in_bounds(nb.x, nb.y), "{nb:?} out of bounds");
        }
    }
}

/// Assert that two enumerations of the same neighbourhood agree.
pub fn assert_neighbours_deterministic(g: &GridGeometry) {
    for cell in g.canonical_ordering() {
        let a: Vec<Cell> = g.neighbours(cell.x, cell.y, 1).collect();
        let b: Vec<Cell> = g.neighbours(cell.x, cell.y, 1).collect();
        assert_eq!(a, b, "neighbours({cell:?}) is non-deterministic");
    }
}

/// Assert that `canonical_ordering` yields exactly `cell_count` unique,
/// in-bounds cells.
pub fn assert_canonical_ordering_complete(g: &GridGeometry) {
    let unique: IndexSet<Cell> = g.canonical_ordering().collect();
    assert_eq!(
        unique.len(),
        g.cell_count(),
        "canonical_ordering has {} unique cells, expected {}",
        unique.len(),
        g.cell_count()
    );
    assert!(unique.iter().all(|c| g.in_bounds(c.x, c.y)));
}

/// Assert that every cell's corner maps back to that cell.
pub fn assert_world_mapping_roundtrip(g: &GridGeometry) {
    for cell in g.canonical_ordering() {
        let corner = g.cell_to_world(cell.x, cell.y);
        let centre = g.cell_center(cell.x, cell.y);
        assert_eq!(g.world_to_cell(centre), cell, "centre of {cell:?}");
        assert_eq!(
            g.world_to_cell_checked(corner + (centre - corner) * 0.01),
            Some(cell),
            "corner of {cell:?}"
        );
    }
}

/// Run all compliance checks on a geometry.
pub fn run_full_compliance(g: &GridGeometry) {
    assert_neighbours_symmetric(g);
    assert_neighbours_exclude_centre(g);
    assert_neighbours_deterministic(g);
    assert_canonical_ordering_complete(g);
    assert_world_mapping_roundtrip(g);
}
