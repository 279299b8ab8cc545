use crate::{
    cell::Cell,
    path::{reverse_path, FxIndexMap, Path, NO_PARENT},
    pathing_grid::PathingGrid,
    solver::GridSolver,
};
use indexmap::map::Entry::Vacant;
use log::debug;
use std::collections::VecDeque;

/// Breadth-first search. Expands cells in non-decreasing distance from the start, so the first
/// time the goal is dequeued the route to it has the fewest possible steps.
#[derive(Clone, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn search(&self, grid: &PathingGrid, start: Cell, goal: Cell) -> Option<Path> {
        // Insertion into `parents` doubles as the visited mark, and happens on enqueue so that no
        // cell enters the queue twice. Values are the index of the entry that reached the key.
        let mut parents: FxIndexMap<Cell, usize> = FxIndexMap::default();
        parents.insert(start, NO_PARENT);
        let mut to_see: VecDeque<usize> = VecDeque::new();
        to_see.push_back(0);

        while let Some(index) = to_see.pop_front() {
            let successors = {
                let (node, _) = parents.get_index(index)?;
                if *node == goal {
                    debug!("BFS reached {goal} after visiting {} cells", parents.len());
                    return Some(Path::from_cells(reverse_path(&parents, index)));
                }
                self.successors(grid, node)
            };
            for successor in successors {
                if let Vacant(e) = parents.entry(successor) {
                    to_see.push_back(e.index());
                    e.insert(index);
                }
            }
        }
        debug!("BFS exhausted {} cells without reaching {goal}", parents.len());
        None
    }
}
