//! Node model
//!
//! Cell coordinates, the four moves of a 4-connected grid, and the search
//! node that records how a cell was reached.

use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Integer cell coordinate. `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance |dx| + |dy|
    pub fn manhattan(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Coordinate reached by applying `mv` once
    pub fn step(self, mv: Move) -> Coord {
        let (dx, dy) = mv.offset();
        Coord::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}

/// Parses `"X,Y"` (whitespace around either number is ignored).
impl FromStr for Coord {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SearchError::ParseCoord(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;
        Ok(Coord::new(x, y))
    }
}

/// One step on a 4-connected grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Up,
    Right,
    Down,
    Left,
}

impl Move {
    /// Expansion order. Only affects tie-breaks between equal-score siblings.
    pub const ALL: [Move; 4] = [Move::Up, Move::Right, Move::Down, Move::Left];

    /// Fixed (dx, dy) offset
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Move::Up => (0, 1),
            Move::Right => (1, 0),
            Move::Down => (0, -1),
            Move::Left => (-1, 0),
        }
    }
}

/// Index of a node in the search's node store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A search state: a cell plus the best known way to reach it.
///
/// The parent link is an index into the node store owned by the search, so
/// chains never form ownership cycles. Fields are private because the
/// heuristic and score are derived from `coord` at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    coord: Coord,
    parent: Option<NodeId>,
    mv: Option<Move>,
    path_cost: u32,
    heuristic: u32,
}

impl Node {
    /// Root node: zero cost, no parent, no move
    pub fn start(coord: Coord, target: Coord) -> Self {
        Self {
            coord,
            parent: None,
            mv: None,
            path_cost: 0,
            heuristic: coord.manhattan(target),
        }
    }

    /// Child of `parent` (stored at `parent_id`) reached with `mv`
    pub fn from_parent(parent_id: NodeId, parent: &Node, mv: Move, target: Coord) -> Self {
        let coord = parent.coord.step(mv);
        Self {
            coord,
            parent: Some(parent_id),
            mv: Some(mv),
            path_cost: parent.path_cost + 1,
            heuristic: coord.manhattan(target),
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Move the parent used to reach this node (`None` for the start node)
    pub fn mv(&self) -> Option<Move> {
        self.mv
    }

    /// Exact number of steps from the start along the parent chain
    pub fn path_cost(&self) -> u32 {
        self.path_cost
    }

    /// Manhattan distance to the target
    pub fn heuristic(&self) -> u32 {
        self.heuristic
    }

    /// A* evaluation `path_cost + heuristic`
    pub fn score(&self) -> u32 {
        self.path_cost + self.heuristic
    }

    pub fn is_goal(&self) -> bool {
        self.heuristic == 0
    }
}
