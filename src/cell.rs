use core::fmt;
use std::ops::Add;

/// A (row, column) coordinate on a [PathingGrid](crate::pathing_grid::PathingGrid). Coordinates are
/// signed so that out-of-range input, negative values included, can be represented and rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// Number of unit steps between two cells when only cardinal moves are allowed. Saturates at
    /// [u32::MAX] for cells at opposite extremes of the coordinate range.
    pub fn manhattan_distance(&self, other: &Cell) -> u32 {
        self.row
            .abs_diff(other.row)
            .saturating_add(self.col.abs_diff(other.col))
    }

    /// True if the cells differ by exactly one step along exactly one axis.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }

    pub fn step(&self, dir: Direction) -> Cell {
        *self + dir
    }

    /// The four cardinal neighbours in [Direction::ORDER], without any bounds filtering.
    pub fn neumann_neighborhood(&self) -> [Cell; 4] {
        Direction::ORDER.map(|dir| self.step(dir))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Cell {
        Cell::new(row, col)
    }
}

/// Cardinal move directions. Rows grow downwards, so [Direction::Up] decrements the row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Expansion order shared by every solver. Changing it changes which route depth-first
    /// search discovers.
    pub const ORDER: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row, col) offset of a single step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Steps wrap around at the ends of the [i32] range. A wrapped cell lies far outside any grid,
/// so bounds checks still reject it.
impl Add<Direction> for Cell {
    type Output = Cell;
    fn add(self, dir: Direction) -> Cell {
        let (dr, dc) = dir.delta();
        Cell::new(self.row.wrapping_add(dr), self.col.wrapping_add(dc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbourhood_follows_fixed_order() {
        let c = Cell::new(2, 3);
        assert_eq!(
            c.neumann_neighborhood(),
            [
                Cell::new(1, 3),
                Cell::new(3, 3),
                Cell::new(2, 2),
                Cell::new(2, 4)
            ]
        );
    }

    #[test]
    fn adjacency_is_single_axis_unit_step() {
        let c = Cell::new(0, 0);
        assert!(c.is_adjacent(&Cell::new(0, 1)));
        assert!(c.is_adjacent(&Cell::new(-1, 0)));
        assert!(!c.is_adjacent(&Cell::new(1, 1)));
        assert!(!c.is_adjacent(&c));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let top = Cell::new(i32::MAX, i32::MIN);
        let n = top.neumann_neighborhood();
        assert_eq!(n[1], Cell::new(i32::MIN, i32::MIN));
        assert_eq!(n[2], Cell::new(i32::MAX, i32::MAX));
        assert_eq!(
            Cell::new(i32::MIN, 0).manhattan_distance(&Cell::new(i32::MAX, 0)),
            u32::MAX
        );
        assert_eq!(top.manhattan_distance(&Cell::new(i32::MIN, i32::MAX)), u32::MAX);
        assert!(!top.is_adjacent(&Cell::new(i32::MIN, i32::MIN)));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(4, -1).to_string(), "(4, -1)");
    }
}
