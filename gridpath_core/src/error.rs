//! Error types for grid construction and search

use crate::node::Coord;
use thiserror::Error;

/// Search errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A coordinate was queried outside the grid rectangle.
    ///
    /// During a search this indicates a defect in move arithmetic; the
    /// driver filters off-grid neighbors before asking the grid.
    #[error("coordinate {coord} lies outside the {width}x{height} grid")]
    OutOfBounds {
        coord: Coord,
        width: usize,
        height: usize,
    },

    /// Popped from an empty frontier.
    #[error("frontier is empty")]
    EmptyFrontier,

    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid coordinate '{0}', expected X,Y")]
    ParseCoord(String),

    #[error("unknown ranking '{0}', expected one of: astar, greedy, uniform-cost")]
    ParseRanking(String),
}

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;
