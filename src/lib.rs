//! # grid_route_planner
//!
//! Route planning on a fixed square obstacle grid with cardinal moves only. Two interchangeable
//! strategies are offered:
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search), which returns a
//! route with the fewest steps, and
//! [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search), which returns the
//! first route its exploration order happens to discover. Connected components are maintained
//! on the grid to skip searching when the goal cannot be reached.
//!
//! A found route can be revealed one cell at a time through a [RevealScheduler], which a
//! renderer drives at whatever cadence it likes.
//!
//! ```
//! use grid_route_planner::{Algorithm, Cell, PathingGrid, Planner};
//!
//! let mut grid = PathingGrid::new(3);
//! grid.set_blocked(Cell::new(1, 1), true).unwrap();
//! grid.update();
//! let mut planner = Planner::new();
//! let result = planner
//!     .plan(&grid, Cell::new(0, 0), Cell::new(2, 2), Algorithm::BreadthFirst)
//!     .unwrap();
//! assert_eq!(result.path().map(|p| p.steps()), Some(4));
//! while planner.advance_reveal() {}
//! assert_eq!(planner.current_revealed_path().len(), 5);
//! ```
pub mod cell;
pub mod city;
pub mod error;
pub mod path;
pub mod pathing_grid;
pub mod planner;
pub mod reveal;
pub mod solver;

pub use cell::{Cell, Direction};
pub use error::PlanError;
pub use path::{Path, SearchResult};
pub use pathing_grid::PathingGrid;
pub use planner::Planner;
pub use reveal::{RevealScheduler, RevealState};
pub use solver::{bfs::BfsSolver, dfs::DfsSolver, Algorithm, GridSolver};

/// Side length of the city map.
pub const GRID_SIZE: usize = 20;
