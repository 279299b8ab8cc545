use crate::cell::Cell;
use core::fmt;
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use std::hash::Hash;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Marks the root of a predecessor record.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Walks a predecessor record backwards from the entry at `start` and returns the nodes from the
/// root to that entry. Each value holds the index of the entry that first reached its key.
pub(crate) fn reverse_path<N>(parents: &FxIndexMap<N, usize>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, &parent)| {
            *i = parent;
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// An ordered route over the grid. The first cell is the start, the last is the goal and every
/// consecutive pair is a single cardinal step. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path(Vec<Cell>);

impl Path {
    pub(crate) fn from_cells(cells: Vec<Cell>) -> Path {
        debug_assert!(!cells.is_empty());
        Path(cells)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.0
    }

    /// Number of cells, start and goal included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves, i.e. the travelled distance in grid units.
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn start(&self) -> Cell {
        self.0[0]
    }

    pub fn end(&self) -> Cell {
        self.0[self.0.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.0.iter()
    }

    /// Checks that consecutive cells are 4-adjacent and that no cell repeats.
    pub fn is_connected(&self) -> bool {
        let adjacent = self.0.windows(2).all(|w| w[0].is_adjacent(&w[1]));
        let mut seen = fxhash::FxHashSet::default();
        adjacent && self.0.iter().all(|c| seen.insert(*c))
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for cell in &self.0 {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "{cell}")?;
            first = false;
        }
        Ok(())
    }
}

/// Outcome of a well-formed search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResult {
    Found(Path),
    NotFound,
}

impl SearchResult {
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchResult::Found(path) => Some(path),
            SearchResult::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }
}

impl From<Option<Path>> for SearchResult {
    fn from(path: Option<Path>) -> SearchResult {
        path.map_or(SearchResult::NotFound, SearchResult::Found)
    }
}
