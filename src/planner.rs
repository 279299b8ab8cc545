use crate::{
    cell::Cell,
    error::{PlanError, Result},
    path::SearchResult,
    pathing_grid::PathingGrid,
    reveal::RevealScheduler,
    solver::Algorithm,
};
use log::{info, warn};

/// Entry point for the presentation layer: validates a request, runs the chosen search and keeps
/// the reveal of the last found route.
///
/// A planner is driven from a single owner. Share it between threads behind a
/// [Mutex](std::sync::Mutex) so that plans and ticks are serialized.
#[derive(Clone, Debug)]
pub struct Planner {
    /// Reject goals outside the start's connected component without searching. Only consulted
    /// while the grid's components are up to date.
    pub use_components: bool,
    reveal: RevealScheduler,
    last_result: Option<SearchResult>,
}

impl Default for Planner {
    fn default() -> Planner {
        Planner {
            use_components: true,
            reveal: RevealScheduler::Idle,
            last_result: None,
        }
    }
}

impl Planner {
    pub fn new() -> Planner {
        Planner::default()
    }

    /// Both endpoints are range checked before either is checked for obstacles.
    fn validate(grid: &PathingGrid, start: Cell, end: Cell) -> Result<()> {
        grid.is_blocked(start)?;
        grid.is_blocked(end)?;
        for cell in [start, end] {
            if grid.is_blocked(cell)? {
                return Err(PlanError::BlockedEndpoint(cell));
            }
        }
        Ok(())
    }

    /// Computes a route from `start` to `end`. A rejected request leaves the current reveal
    /// untouched. A search that finds no route clears it, and a found route replaces it with a
    /// fresh reveal.
    pub fn plan(
        &mut self,
        grid: &PathingGrid,
        start: Cell,
        end: Cell,
        algorithm: Algorithm,
    ) -> Result<SearchResult> {
        if let Err(e) = Self::validate(grid, start, end) {
            warn!("Rejected route request {start} -> {end}: {e}");
            return Err(e);
        }

        let result =
            if self.use_components && !grid.components_dirty && grid.unreachable(&start, &end) {
                info!("{end} is not reachable from {start}");
                SearchResult::NotFound
            } else {
                algorithm.solve(grid, start, end)
            };

        match &result {
            SearchResult::Found(path) => {
                info!(
                    "Path found using {algorithm}: {} steps from {start} to {end}",
                    path.steps()
                );
                self.reveal.start(path.clone());
            }
            SearchResult::NotFound => {
                info!("No path found from {start} to {end} using {algorithm}");
                self.reveal.clear();
            }
        }
        self.last_result = Some(result.clone());
        Ok(result)
    }

    /// Reveals one more cell of the current route. Returns false once nothing is left to reveal.
    pub fn advance_reveal(&mut self) -> bool {
        self.reveal.tick()
    }

    pub fn current_revealed_path(&self) -> &[Cell] {
        self.reveal.revealed()
    }

    pub fn reveal(&self) -> &RevealScheduler {
        &self.reveal
    }

    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }

    /// Drops the current route and its reveal.
    pub fn clear(&mut self) {
        self.reveal.clear();
        self.last_result = None;
    }
}
