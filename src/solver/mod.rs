use crate::{
    cell::Cell,
    path::{Path, SearchResult},
    pathing_grid::PathingGrid,
};
use core::fmt;
use smallvec::SmallVec;

pub mod bfs;
pub mod dfs;

use bfs::BfsSolver;
use dfs::DfsSolver;

/// A search strategy over a [PathingGrid]. Implementors only provide [search](Self::search);
/// successor generation is shared so every strategy sees the same neighbour order.
pub trait GridSolver {
    /// Open cardinal neighbours of `node` in the fixed expansion order.
    fn successors(&self, grid: &PathingGrid, node: &Cell) -> SmallVec<[Cell; 4]> {
        grid.neighborhood_points(node)
    }

    /// Searches from `start` to `goal`. Both endpoints are expected to be open cells on the grid;
    /// validation is the caller's job. Returns [None] once every reachable cell is exhausted.
    fn search(&self, grid: &PathingGrid, start: Cell, goal: Cell) -> Option<Path>;

    fn get_path_single_goal(&self, grid: &PathingGrid, start: Cell, goal: Cell) -> SearchResult {
        self.search(grid, start, goal).into()
    }
}

/// Selects the strategy used by [Planner::plan](crate::Planner::plan).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Fewest steps among all routes.
    #[default]
    BreadthFirst,
    /// First route found by exploring deepest-first. Usually not the shortest.
    DepthFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::BreadthFirst, Algorithm::DepthFirst];

    pub fn solve(self, grid: &PathingGrid, start: Cell, goal: Cell) -> SearchResult {
        match self {
            Algorithm::BreadthFirst => BfsSolver.get_path_single_goal(grid, start, goal),
            Algorithm::DepthFirst => DfsSolver.get_path_single_goal(grid, start, goal),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::BreadthFirst => write!(f, "BFS (Breadth-First Search)"),
            Algorithm::DepthFirst => write!(f, "DFS (Depth-First Search)"),
        }
    }
}
