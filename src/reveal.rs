use crate::{cell::Cell, path::Path};

/// A path together with how many of its cells have been revealed so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealState {
    pub path: Path,
    pub revealed_count: usize,
}

impl RevealState {
    pub fn revealed(&self) -> &[Cell] {
        &self.path.cells()[..self.revealed_count]
    }
}

/// Exposes a path one cell per [tick](Self::tick) so that a renderer can animate it. Holds no
/// clock: whoever owns the scheduler decides the cadence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RevealScheduler {
    #[default]
    Idle,
    Revealing(RevealState),
    /// `revealed_count == path.len()`
    Complete(RevealState),
}

impl RevealScheduler {
    /// Replaces whatever was being revealed with `path`, nothing revealed yet.
    pub fn start(&mut self, path: Path) {
        *self = RevealScheduler::Revealing(RevealState {
            path,
            revealed_count: 0,
        });
    }

    /// Reveals one more cell. Returns false if there was nothing left to reveal.
    pub fn tick(&mut self) -> bool {
        match std::mem::take(self) {
            RevealScheduler::Revealing(mut state) => {
                state.revealed_count += 1;
                *self = if state.revealed_count >= state.path.len() {
                    RevealScheduler::Complete(state)
                } else {
                    RevealScheduler::Revealing(state)
                };
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    pub fn clear(&mut self) {
        *self = RevealScheduler::Idle;
    }

    pub fn state(&self) -> Option<&RevealState> {
        match self {
            RevealScheduler::Idle => None,
            RevealScheduler::Revealing(state) | RevealScheduler::Complete(state) => Some(state),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.state().map(|s| &s.path)
    }

    pub fn revealed_count(&self) -> usize {
        self.state().map_or(0, |s| s.revealed_count)
    }

    /// The revealed prefix of the path; empty when idle.
    pub fn revealed(&self) -> &[Cell] {
        match self.state() {
            Some(state) => state.revealed(),
            None => &[],
        }
    }

    /// Line segments between consecutive revealed cells.
    pub fn revealed_segments(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.revealed().windows(2).map(|w| (w[0], w[1]))
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, RevealScheduler::Complete(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_cell_path() -> Path {
        Path::from_cells(vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)])
    }

    #[test]
    fn reveals_one_cell_per_tick() {
        let path = three_cell_path();
        let mut reveal = RevealScheduler::default();
        reveal.start(path.clone());
        assert!(matches!(reveal, RevealScheduler::Revealing(_)));
        assert!(reveal.revealed().is_empty());

        assert!(reveal.tick());
        assert_eq!(reveal.revealed(), &path.cells()[..1]);
        assert_eq!(reveal.revealed_segments().count(), 0);

        assert!(reveal.tick());
        assert_eq!(
            reveal.revealed_segments().collect::<Vec<_>>(),
            vec![(Cell::new(0, 0), Cell::new(0, 1))]
        );
        assert!(!reveal.is_complete());

        assert!(reveal.tick());
        assert!(reveal.is_complete());
        assert_eq!(reveal.revealed(), path.cells());
    }

    #[test]
    fn tick_after_completion_is_a_no_op() {
        let mut reveal = RevealScheduler::default();
        reveal.start(three_cell_path());
        for _ in 0..3 {
            reveal.tick();
        }
        let done = reveal.clone();
        assert!(!reveal.tick());
        assert_eq!(reveal, done);
        assert_eq!(reveal.revealed_count(), 3);
    }

    #[test]
    fn idle_tick_and_clear() {
        let mut reveal = RevealScheduler::default();
        assert!(!reveal.tick());
        assert_eq!(reveal, RevealScheduler::Idle);

        reveal.start(three_cell_path());
        reveal.tick();
        reveal.clear();
        assert_eq!(reveal, RevealScheduler::Idle);
        assert!(reveal.path().is_none());
        assert_eq!(reveal.revealed_count(), 0);
    }

    #[test]
    fn single_cell_path_completes_in_one_tick() {
        let mut reveal = RevealScheduler::default();
        reveal.start(Path::from_cells(vec![Cell::new(3, 3)]));
        assert!(reveal.tick());
        assert!(reveal.is_complete());
        assert_eq!(reveal.revealed(), &[Cell::new(3, 3)]);
    }

    #[test]
    fn restart_discards_progress() {
        let mut reveal = RevealScheduler::default();
        reveal.start(three_cell_path());
        reveal.tick();
        reveal.tick();
        reveal.start(Path::from_cells(vec![Cell::new(1, 1)]));
        assert_eq!(reveal.revealed_count(), 0);
        assert_eq!(reveal.path().map(|p| p.len()), Some(1));
    }
}
