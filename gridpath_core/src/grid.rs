//! Static occupancy grid
//!
//! Boolean wall lookup over a fixed rectangle. A [`Grid`] is assembled once
//! through [`GridBuilder`] and cannot be modified afterwards.
//!
//! # Example
//!
//! ```rust
//! use gridpath_core::{Coord, GridBuilder};
//!
//! let grid = GridBuilder::new(10, 8)
//!     .border()
//!     .vertical_wall(4, 1, 5)
//!     .build()
//!     .unwrap();
//!
//! assert!(grid.is_wall(Coord::new(4, 3)).unwrap());
//! assert!(!grid.is_wall(Coord::new(5, 3)).unwrap());
//! ```

use crate::error::{SearchError, SearchResult};
use crate::node::Coord;

/// Immutable 2D occupancy grid (true = wall)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>, // row-major, index = y * width + x
}

impl Grid {
    /// Grid with no walls at all
    pub fn open(width: usize, height: usize) -> SearchResult<Self> {
        GridBuilder::new(width, height).build()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Check if a coordinate lies inside the rectangle
    pub fn contains(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    /// Wall lookup. Fails with `OutOfBounds` outside the rectangle.
    pub fn is_wall(&self, coord: Coord) -> SearchResult<bool> {
        self.index(coord)
            .map(|i| self.cells[i])
            .ok_or(SearchError::OutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            })
    }

    /// Iterate over all wall coordinates, row by row from y = 0
    pub fn walls(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &wall)| wall)
            .map(|(i, _)| Coord::new((i % self.width) as i32, (i / self.width) as i32))
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        let x = usize::try_from(coord.x).ok()?;
        let y = usize::try_from(coord.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}

/// Builder for [`Grid`]
///
/// Wall placements are recorded and validated in [`GridBuilder::build`], so a
/// chain of calls reports the first out-of-range cell instead of panicking.
#[derive(Debug, Clone)]
pub struct GridBuilder {
    width: usize,
    height: usize,
    walls: Vec<Coord>,
    border: bool,
}

impl GridBuilder {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            walls: Vec::new(),
            border: false,
        }
    }

    /// Surround the grid with a one-cell ring of walls
    pub fn border(mut self) -> Self {
        self.border = true;
        self
    }

    pub fn wall(mut self, coord: Coord) -> Self {
        self.walls.push(coord);
        self
    }

    /// Wall column at `x` covering `y_from..=y_to`
    pub fn vertical_wall(mut self, x: i32, y_from: i32, y_to: i32) -> Self {
        let (lo, hi) = (y_from.min(y_to), y_from.max(y_to));
        self.walls.extend((lo..=hi).map(|y| Coord::new(x, y)));
        self
    }

    /// Wall row at `y` covering `x_from..=x_to`
    pub fn horizontal_wall(mut self, y: i32, x_from: i32, x_to: i32) -> Self {
        let (lo, hi) = (x_from.min(x_to), x_from.max(x_to));
        self.walls.extend((lo..=hi).map(|x| Coord::new(x, y)));
        self
    }

    pub fn build(self) -> SearchResult<Grid> {
        if self.width == 0 || self.height == 0 {
            return Err(SearchError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        let mut grid = Grid {
            width: self.width,
            height: self.height,
            cells: vec![false; self.width * self.height],
        };

        if self.border {
            let (w, h) = (self.width, self.height);
            for x in 0..w {
                grid.cells[x] = true;
                grid.cells[(h - 1) * w + x] = true;
            }
            for y in 0..h {
                grid.cells[y * w] = true;
                grid.cells[y * w + w - 1] = true;
            }
        }

        for coord in self.walls {
            let i = grid.index(coord).ok_or(SearchError::OutOfBounds {
                coord,
                width: grid.width,
                height: grid.height,
            })?;
            grid.cells[i] = true;
        }

        Ok(grid)
    }
}
