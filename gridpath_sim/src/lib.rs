//! # gridpath_sim - Terminal animation of grid searches
//!
//! This crate provides both the `gridpath` binary and a library interface
//! for loading worlds and rendering searches.
//!
//! ## Binary Usage
//! ```bash
//! gridpath                              # Classic maze, animated
//! gridpath --world my_world.yaml        # Custom world
//! gridpath --ranking greedy --headless  # Print only the final picture
//! ```
//!
//! ## Library Usage
//! ```rust,no_run
//! use gridpath_core::AStarSearch;
//! use gridpath_sim::{RenderOptions, TerminalRenderer, WorldConfig};
//!
//! let world = WorldConfig::default();
//! let grid = world.build_grid().unwrap();
//! let mut renderer = TerminalRenderer::new(
//!     std::io::stdout(),
//!     &grid,
//!     world.start,
//!     world.target,
//!     RenderOptions::default(),
//! );
//! renderer.draw_grid(&grid).unwrap();
//!
//! let mut search = AStarSearch::new(&grid, world.start, world.target).unwrap();
//! search.run(&mut renderer).unwrap();
//! renderer.finish().unwrap();
//! ```

// World files
pub mod config;

// Animated terminal view
pub mod renderer;

// Headless picture
pub mod snapshot;

pub use config::{WallSegment, WorldConfig};
pub use renderer::{Mark, RenderOptions, TerminalRenderer, FAILURE_MESSAGE, SUCCESS_MESSAGE};
pub use snapshot::render_snapshot;
