use crate::{cell::Cell, path::Path, pathing_grid::PathingGrid, solver::GridSolver};
use fxhash::FxHashSet;
use log::debug;
use smallvec::IntoIter;

/// Depth-first search returning the first route its exploration order discovers.
///
/// Neighbours are tried in the fixed expansion order and the first branch that reaches the goal
/// wins; no alternatives are compared, so the route is generally longer than the one found by
/// [BfsSolver](crate::solver::bfs::BfsSolver). Cells stay visited after backtracking.
///
/// The exploration is iterative. Each stack frame holds a cell on the current route together
/// with the neighbours it has not tried yet, so the frame cells read bottom to top are the route
/// from the start to the cell being explored.
#[derive(Clone, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    fn search(&self, grid: &PathingGrid, start: Cell, goal: Cell) -> Option<Path> {
        let mut visited: FxHashSet<Cell> = FxHashSet::default();
        visited.insert(start);
        if start == goal {
            return Some(Path::from_cells(vec![start]));
        }
        let mut stack: Vec<(Cell, IntoIter<[Cell; 4]>)> =
            vec![(start, self.successors(grid, &start).into_iter())];

        while let Some((_, untried)) = stack.last_mut() {
            // Visited status is checked when a neighbour comes up, not when the frame is pushed:
            // a sibling explored earlier may have claimed it in the meantime.
            match untried.find(|n| !visited.contains(n)) {
                Some(next) => {
                    visited.insert(next);
                    if next == goal {
                        debug!("DFS reached {goal} after visiting {} cells", visited.len());
                        let mut cells: Vec<Cell> = stack.iter().map(|(cell, _)| *cell).collect();
                        cells.push(next);
                        return Some(Path::from_cells(cells));
                    }
                    let successors = self.successors(grid, &next).into_iter();
                    stack.push((next, successors));
                }
                None => {
                    // Backtrack
                    stack.pop();
                }
            }
        }
        debug!("DFS exhausted {} cells without reaching {goal}", visited.len());
        None
    }
}
