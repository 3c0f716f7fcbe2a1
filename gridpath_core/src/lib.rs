//! # gridpath_core
//!
//! A* shortest-path search on 4-connected occupancy grids with a Manhattan
//! heuristic.
//!
//! This crate contains only computation: progress is reported through the
//! [`SearchObserver`] trait so rendering, pacing and logging sinks live with
//! the caller.
//!
//! # Architecture
//!
//! - **grid**: immutable wall lookup over a fixed rectangle
//! - **node**: coordinates, moves and search nodes (parents are store indices)
//! - **frontier**: ordered open set with a coordinate index
//! - **visited**: closed set keyed by coordinate
//! - **search**: the driver state machine (`Running` → `Succeeded` / `Failed`)
//! - **observer**: progress notifications
//!
//! # Example
//!
//! ```rust
//! use gridpath_core::{find_path, Coord, GridBuilder};
//!
//! let grid = GridBuilder::new(7, 7)
//!     .border()
//!     .vertical_wall(3, 1, 4)
//!     .build()
//!     .unwrap();
//!
//! let path = find_path(&grid, Coord::new(1, 1), Coord::new(5, 1))
//!     .unwrap()
//!     .expect("target is reachable");
//! assert_eq!(path.cost(), 12);
//! ```

pub mod error;
pub mod frontier;
pub mod grid;
pub mod node;
pub mod observer;
pub mod search;
pub mod visited;

pub use error::{SearchError, SearchResult};
pub use frontier::{Frontier, Ranking};
pub use grid::{Grid, GridBuilder};
pub use node::{Coord, Move, Node, NodeId};
pub use observer::{NullObserver, RecordingObserver, SearchEvent, SearchObserver};
pub use search::{find_path, AStarSearch, Path, SearchOutcome, SearchState, SearchStats};
pub use visited::Visited;
