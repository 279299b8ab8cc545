use crate::cell::Cell;
use crate::error::{PlanError, Result};
use core::fmt;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Square occupancy grid. Blocked cells are stored as [true], open cells as [false].
///
/// In addition to the raw occupancy the grid maintains connected components in a [UnionFind]
/// structure so that planners can reject unreachable goals without flood-filling. Opening a cell
/// merges components immediately; blocking one may split a component, so the components are then
/// flagged as dirty until [update](Self::update) or [generate_components](Self::generate_components)
/// is called.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    size: usize,
    /// `size` as a signed coordinate bound.
    side: i32,
    blocked: Vec<bool>,
    components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid::new(0)
    }
}

impl PathingGrid {
    /// Creates a `size` x `size` grid with every cell open.
    ///
    /// # Panics
    ///
    /// If `size` exceeds [i32::MAX], since cell coordinates are [i32].
    pub fn new(size: usize) -> PathingGrid {
        let side = match i32::try_from(size) {
            Ok(side) => side,
            Err(_) => panic!("grid size {size} does not fit in i32 coordinates"),
        };
        let mut grid = PathingGrid {
            size,
            side,
            blocked: vec![false; size * size],
            components: UnionFind::new(size * size),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.side).contains(&cell.row) && (0..self.side).contains(&cell.col)
    }

    /// Callers must have checked [in_bounds](Self::in_bounds).
    fn ix(&self, cell: Cell) -> usize {
        cell.row as usize * self.size + cell.col as usize
    }

    fn check(&self, cell: Cell) -> Result<usize> {
        if self.in_bounds(cell) {
            Ok(self.ix(cell))
        } else {
            Err(PlanError::OutOfRange(cell))
        }
    }

    pub fn is_blocked(&self, cell: Cell) -> Result<bool> {
        self.check(cell).map(|ix| self.blocked[ix])
    }

    /// In bounds and open.
    pub fn can_move_to(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.blocked[self.ix(cell)]
    }

    /// Open cardinal neighbours of `cell`, in [Direction::ORDER](crate::cell::Direction::ORDER).
    pub fn neighborhood_points(&self, cell: &Cell) -> SmallVec<[Cell; 4]> {
        cell.neumann_neighborhood()
            .into_iter()
            .filter(|n| self.can_move_to(*n))
            .collect()
    }

    /// Updates a cell. Joins newly connected components and flags the components as dirty if
    /// they are (potentially) broken apart into multiple.
    pub fn set_blocked(&mut self, cell: Cell, blocked: bool) -> Result<()> {
        let ix = self.check(cell)?;
        self.set_in_bounds(cell, ix, blocked);
        Ok(())
    }

    /// `ix` must be the index of the in-bounds `cell`.
    fn set_in_bounds(&mut self, cell: Cell, ix: usize, blocked: bool) {
        if self.blocked[ix] == blocked {
            return;
        }
        self.blocked[ix] = blocked;
        if blocked {
            self.components_dirty = true;
        } else {
            for n in self.neighborhood_points(&cell) {
                let n_ix = self.ix(n);
                self.components.union(ix, n_ix);
            }
        }
    }

    /// Sets every cell of the inclusive rectangle spanned by corners `a` and `b`, in either
    /// order. The rectangle is clipped to the grid before it is walked, so parts outside the grid
    /// cost nothing.
    pub fn set_rect(&mut self, a: Cell, b: Cell, blocked: bool) {
        let last = self.side - 1;
        let (r0, r1) = (a.row.min(b.row).max(0), a.row.max(b.row).min(last));
        let (c0, c1) = (a.col.min(b.col).max(0), a.col.max(b.col).min(last));
        if r0 > r1 || c0 > c1 {
            return;
        }
        for row in r0..=r1 {
            for col in c0..=c1 {
                let cell = Cell::new(row, col);
                let ix = self.ix(cell);
                self.set_in_bounds(cell, ix, blocked);
            }
        }
    }

    /// All open cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let n = self.side;
        (0..n)
            .flat_map(move |row| (0..n).map(move |col| Cell::new(row, col)))
            .filter(move |c| !self.blocked[self.ix(*c)])
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|b| **b).count()
    }

    /// Retrieves the component id a given [Cell] belongs to.
    pub fn get_component(&self, cell: &Cell) -> Result<usize> {
        self.check(*cell).map(|ix| self.components.find(ix))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Out-of-range cells are never
    /// reachable.
    pub fn unreachable(&self, start: &Cell, goal: &Cell) -> bool {
        if self.in_bounds(*start) && self.in_bounds(*goal) {
            !self.components.equiv(self.ix(*start), self.ix(*goal))
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same
    /// components. Looking down and right from every cell covers each edge once.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.size * self.size);
        self.components_dirty = false;
        let n = self.side;
        for row in 0..n {
            for col in 0..n {
                let cell = Cell::new(row, col);
                if !self.can_move_to(cell) {
                    continue;
                }
                let parent_ix = self.ix(cell);
                for other in [Cell::new(row + 1, col), Cell::new(row, col + 1)] {
                    if self.can_move_to(other) {
                        let ix = self.ix(other);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.blocked.chunks(self.size.max(1)) {
            let line: String = row.iter().map(|&b| if b { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
