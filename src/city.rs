//! A fixed street map used by the demos, tests and benchmarks.
use crate::{cell::Cell, pathing_grid::PathingGrid, GRID_SIZE};

/// Rectangular obstacles as inclusive corner pairs `((row, col), (row, col))`.
pub const CITY_BLOCKS: [((i32, i32), (i32, i32)); 9] = [
    // Buildings
    ((3, 3), (5, 5)),
    ((8, 2), (10, 4)),
    ((15, 6), (17, 8)),
    ((2, 12), (4, 15)),
    ((12, 10), (14, 13)),
    // Construction zones
    ((7, 8), (7, 11)),
    ((16, 16), (18, 16)),
    // Park and hill
    ((6, 15), (8, 17)),
    ((11, 5), (13, 7)),
];

/// Single blocked cells: parked cars, checkpoints, road maintenance.
pub const CITY_SCATTER: [(i32, i32); 7] = [
    (1, 7),
    (4, 9),
    (9, 14),
    (14, 2),
    (18, 11),
    (6, 6),
    (13, 18),
];

/// Builds the [GRID_SIZE] x [GRID_SIZE] city map with up-to-date components.
pub fn city_map() -> PathingGrid {
    let mut grid = PathingGrid::new(GRID_SIZE);
    for (a, b) in CITY_BLOCKS {
        grid.set_rect(a.into(), b.into(), true);
    }
    for c in CITY_SCATTER {
        let cell: Cell = c.into();
        grid.set_rect(cell, cell, true);
    }
    grid.generate_components();
    grid
}
