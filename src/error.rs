use thiserror::Error;

use crate::cell::Cell;

/// Reasons a planning request is rejected before any search runs. An exhausted search is not an
/// error; it is reported as [SearchResult::NotFound](crate::SearchResult::NotFound).
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("Cell {0} lies outside the grid")]
    OutOfRange(Cell),
    #[error("Endpoint {0} is blocked")]
    BlockedEndpoint(Cell),
}

pub type Result<T> = core::result::Result<T, PlanError>;
