//! Closed set

use crate::node::{Coord, NodeId};
use std::collections::HashMap;

/// Settled nodes keyed by coordinate
#[derive(Debug, Clone, Default)]
pub struct Visited {
    nodes: HashMap<Coord, NodeId>,
}

impl Visited {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Record `id` as the settled node for `coord`, returning any node it displaced
    pub fn add(&mut self, coord: Coord, id: NodeId) -> Option<NodeId> {
        self.nodes.insert(coord, id)
    }

    pub fn find_by_coord(&self, coord: Coord) -> Option<NodeId> {
        self.nodes.get(&coord).copied()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.nodes.contains_key(&coord)
    }

    pub fn remove(&mut self, coord: Coord) -> Option<NodeId> {
        self.nodes.remove(&coord)
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.nodes.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_find_remove() {
        let mut visited = Visited::new();
        let coord = Coord::new(2, 3);

        assert_eq!(visited.add(coord, NodeId(4)), None);
        assert_eq!(visited.find_by_coord(coord), Some(NodeId(4)));
        assert!(visited.contains(coord));
        assert_eq!(visited.len(), 1);

        assert_eq!(visited.remove(coord), Some(NodeId(4)));
        assert!(visited.is_empty());
        assert_eq!(visited.find_by_coord(coord), None);
    }

    #[test]
    fn test_one_entry_per_coord() {
        let mut visited = Visited::new();
        visited.add(Coord::new(0, 0), NodeId(0));
        assert_eq!(visited.add(Coord::new(0, 0), NodeId(9)), Some(NodeId(0)));
        assert_eq!(visited.len(), 1);
        assert_eq!(visited.coords().collect::<Vec<_>>(), vec![Coord::new(0, 0)]);
    }
}
