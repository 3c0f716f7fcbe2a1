//! Ordered open set
//!
//! Entries are kept sorted by descending rank key so the best candidate sits
//! at the end of the vector and pops in O(1). A coordinate index mirrors the
//! entries for O(1) membership checks.
//!
//! Ties pop newest-first: a node inserted with the same key as existing
//! entries lands after them, i.e. closer to the pop end.

use crate::error::{SearchError, SearchResult};
use crate::node::{Coord, Node, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Key the frontier orders candidates by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ranking {
    /// `path_cost + heuristic` (optimal)
    #[default]
    #[serde(rename = "astar")]
    AStar,
    /// Heuristic only. Fast, not optimal.
    Greedy,
    /// Path cost only. Optimal, explores in rings around the start.
    UniformCost,
}

impl Ranking {
    pub fn key(self, node: &Node) -> u32 {
        match self {
            Ranking::AStar => node.score(),
            Ranking::Greedy => node.heuristic(),
            Ranking::UniformCost => node.path_cost(),
        }
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Ranking::AStar => "astar",
            Ranking::Greedy => "greedy",
            Ranking::UniformCost => "uniform-cost",
        })
    }
}

impl FromStr for Ranking {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "astar" | "a*" => Ok(Ranking::AStar),
            "greedy" => Ok(Ranking::Greedy),
            "uniform-cost" | "uniform_cost" | "ucs" => Ok(Ranking::UniformCost),
            _ => Err(SearchError::ParseRanking(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    key: u32,
    coord: Coord,
    id: NodeId,
}

/// Open set: at most one entry per coordinate
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    entries: Vec<Entry>, // descending key; best at the end
    index: HashMap<Coord, NodeId>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert keeping the pop order.
    ///
    /// Callers remove any existing entry for `coord` first; a stale entry
    /// left behind would break the one-entry-per-coordinate invariant.
    pub fn insert_ordered(&mut self, coord: Coord, id: NodeId, key: u32) {
        debug_assert!(
            !self.index.contains_key(&coord),
            "frontier already holds {coord}"
        );
        let pos = self.entries.partition_point(|e| e.key >= key);
        self.entries.insert(pos, Entry { key, coord, id });
        self.index.insert(coord, id);
    }

    /// Remove and return the entry with the smallest key
    pub fn pop_best(&mut self) -> SearchResult<NodeId> {
        let entry = self.entries.pop().ok_or(SearchError::EmptyFrontier)?;
        self.index.remove(&entry.coord);
        Ok(entry.id)
    }

    /// Key of the entry that would pop next
    pub fn peek_key(&self) -> Option<u32> {
        self.entries.last().map(|e| e.key)
    }

    pub fn find_by_coord(&self, coord: Coord) -> Option<NodeId> {
        self.index.get(&coord).copied()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.index.contains_key(&coord)
    }

    /// Remove the entry for `coord`, stored under `key`.
    ///
    /// Only the run of entries sharing `key` is scanned.
    pub fn remove(&mut self, coord: Coord, key: u32) -> Option<NodeId> {
        let id = self.index.remove(&coord)?;
        let lo = self.entries.partition_point(|e| e.key > key);
        let hi = self.entries.partition_point(|e| e.key >= key);
        let pos = self.entries[lo..hi]
            .iter()
            .position(|e| e.id == id)
            .map(|p| lo + p)
            .or_else(|| self.entries.iter().position(|e| e.id == id))?;
        self.entries.remove(pos);
        Some(id)
    }

    /// Node ids in pop order (best first)
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.entries.iter().rev().map(|e| e.id)
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.index.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn test_pops_smallest_key_first() {
        let mut frontier = Frontier::new();
        frontier.insert_ordered(c(0, 0), NodeId(0), 7);
        frontier.insert_ordered(c(1, 0), NodeId(1), 3);
        frontier.insert_ordered(c(2, 0), NodeId(2), 9);
        frontier.insert_ordered(c(3, 0), NodeId(3), 5);

        let order: Vec<_> = std::iter::from_fn(|| frontier.pop_best().ok()).collect();
        assert_eq!(order, vec![NodeId(1), NodeId(3), NodeId(0), NodeId(2)]);
    }

    #[test]
    fn test_equal_keys_pop_newest_first() {
        let mut frontier = Frontier::new();
        frontier.insert_ordered(c(0, 0), NodeId(0), 4);
        frontier.insert_ordered(c(1, 0), NodeId(1), 4);
        frontier.insert_ordered(c(2, 0), NodeId(2), 6);
        frontier.insert_ordered(c(3, 0), NodeId(3), 4);

        assert_eq!(frontier.peek_key(), Some(4));
        assert_eq!(frontier.pop_best(), Ok(NodeId(3)));
        assert_eq!(frontier.pop_best(), Ok(NodeId(1)));
        assert_eq!(frontier.pop_best(), Ok(NodeId(0)));
        assert_eq!(frontier.pop_best(), Ok(NodeId(2)));
    }

    #[test]
    fn test_empty_pop_fails() {
        let mut frontier = Frontier::new();
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop_best(), Err(SearchError::EmptyFrontier));
    }

    #[test]
    fn test_index_tracks_entries() {
        let mut frontier = Frontier::new();
        frontier.insert_ordered(c(1, 1), NodeId(0), 2);
        frontier.insert_ordered(c(2, 1), NodeId(1), 2);
        assert_eq!(frontier.find_by_coord(c(2, 1)), Some(NodeId(1)));

        assert_eq!(frontier.pop_best(), Ok(NodeId(1)));
        assert!(!frontier.contains(c(2, 1)));
        assert!(frontier.contains(c(1, 1)));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn test_remove_from_middle() {
        let mut frontier = Frontier::new();
        frontier.insert_ordered(c(0, 0), NodeId(0), 1);
        frontier.insert_ordered(c(1, 0), NodeId(1), 5);
        frontier.insert_ordered(c(2, 0), NodeId(2), 5);
        frontier.insert_ordered(c(3, 0), NodeId(3), 8);

        assert_eq!(frontier.remove(c(1, 0), 5), Some(NodeId(1)));
        assert_eq!(frontier.remove(c(1, 0), 5), None);
        assert_eq!(frontier.len(), 3);

        let order: Vec<_> = frontier.iter().collect();
        assert_eq!(order, vec![NodeId(0), NodeId(2), NodeId(3)]);
    }

    #[test]
    fn test_ranking_keys() {
        let target = c(3, 0);
        let root = Node::start(c(0, 0), target);
        let child = Node::from_parent(NodeId(0), &root, crate::node::Move::Up, target);

        assert_eq!(Ranking::AStar.key(&child), 1 + 4);
        assert_eq!(Ranking::Greedy.key(&child), 4);
        assert_eq!(Ranking::UniformCost.key(&child), 1);
    }

    #[test]
    fn test_parse_ranking() {
        assert_eq!("astar".parse(), Ok(Ranking::AStar));
        assert_eq!("Greedy".parse(), Ok(Ranking::Greedy));
        assert_eq!("uniform-cost".parse(), Ok(Ranking::UniformCost));
        assert!("dfs".parse::<Ranking>().is_err());
        assert_eq!(Ranking::UniformCost.to_string(), "uniform-cost");
    }
}
