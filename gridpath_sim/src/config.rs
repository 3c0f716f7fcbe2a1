//! World configuration
//!
//! A world is a grid size, optional border ring, wall segments and the two
//! endpoints. Files are TOML or YAML, chosen by extension.

use anyhow::{bail, Context, Result};
use gridpath_core::{Coord, Grid, GridBuilder};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// World configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: usize,
    pub height: usize,
    /// Surround the grid with walls
    #[serde(default = "default_border")]
    pub border: bool,
    pub start: Coord,
    pub target: Coord,
    #[serde(default)]
    pub walls: Vec<WallSegment>,
}

/// Straight run of walls, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallSegment {
    pub from: Coord,
    pub to: Coord,
}

impl WallSegment {
    pub const fn vertical(x: i32, y_from: i32, y_to: i32) -> Self {
        Self {
            from: Coord::new(x, y_from),
            to: Coord::new(x, y_to),
        }
    }

    pub const fn horizontal(y: i32, x_from: i32, x_to: i32) -> Self {
        Self {
            from: Coord::new(x_from, y),
            to: Coord::new(x_to, y),
        }
    }
}

fn default_border() -> bool {
    true
}

/// The 51x31 maze: two pillars rising from the bottom edge, a ledge off the
/// left pillar and a column dropping from the top edge.
impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 51,
            height: 31,
            border: true,
            start: Coord::new(5, 6),
            target: Coord::new(45, 25),
            walls: vec![
                WallSegment::vertical(20, 1, 15),
                WallSegment::vertical(40, 1, 15),
                WallSegment::horizontal(15, 10, 19),
                WallSegment::vertical(30, 15, 30),
            ],
        }
    }
}

impl WorldConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read world file {}", path.display()))?;

        // Auto-detect format from file extension
        let config = if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .with_context(|| format!("invalid TOML world {}", path.display()))?
        } else {
            // Default to YAML for .yaml, .yml, or no extension
            serde_yaml::from_str(&content)
                .with_context(|| format!("invalid YAML world {}", path.display()))?
        };
        Ok(config)
    }

    /// Build the occupancy grid described by this world
    pub fn build_grid(&self) -> Result<Grid> {
        let mut builder = GridBuilder::new(self.width, self.height);
        if self.border {
            builder = builder.border();
        }

        for segment in &self.walls {
            let (from, to) = (segment.from, segment.to);
            builder = if from.x == to.x {
                builder.vertical_wall(from.x, from.y, to.y)
            } else if from.y == to.y {
                builder.horizontal_wall(from.y, from.x, to.x)
            } else {
                bail!("wall segment {from} -> {to} is not axis-aligned");
            };
        }

        Ok(builder.build()?)
    }
}
