//! A* search driver
//!
//! Owns the node store, frontier and visited set for one search. Each call to
//! [`AStarSearch::step`] is one atomic iteration: pop the best candidate, then
//! either finish on the goal or expand its four neighbors.
//!
//! # Example
//!
//! ```rust
//! use gridpath_core::{AStarSearch, Coord, Grid, NullObserver, SearchState};
//!
//! let grid = Grid::open(5, 5).unwrap();
//! let mut search = AStarSearch::new(&grid, Coord::new(0, 0), Coord::new(4, 4)).unwrap();
//!
//! let outcome = search.run(&mut NullObserver).unwrap();
//! assert_eq!(outcome.state, SearchState::Succeeded);
//! assert_eq!(outcome.path.unwrap().cost(), 8);
//! ```

use crate::error::{SearchError, SearchResult};
use crate::frontier::{Frontier, Ranking};
use crate::grid::Grid;
use crate::node::{Coord, Move, Node, NodeId};
use crate::observer::{NullObserver, SearchObserver};
use crate::visited::Visited;
use log::{debug, trace};

#[cfg(test)]
mod tests;

/// Driver state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Running,
    Succeeded,
    Failed,
}

impl SearchState {
    pub fn is_terminal(self) -> bool {
        self != SearchState::Running
    }
}

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frontier pops (one per completed step)
    pub pops: usize,
    /// Nodes inserted into the frontier, start node included
    pub inserted: usize,
    /// Frontier entries superseded by a cheaper node
    pub replaced: usize,
    /// Visited entries superseded by a cheaper node
    pub reopened: usize,
    pub peak_frontier: usize,
}

/// Reconstructed route, start to target inclusive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    coords: Vec<Coord>,
}

impl Path {
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Number of unit steps
    pub fn steps(&self) -> usize {
        self.coords.len().saturating_sub(1)
    }

    pub fn cost(&self) -> u32 {
        self.steps() as u32
    }

    pub fn start(&self) -> Option<Coord> {
        self.coords.first().copied()
    }

    pub fn target(&self) -> Option<Coord> {
        self.coords.last().copied()
    }

    /// Move sequence that walks the path from the start
    pub fn moves(&self) -> Vec<Move> {
        self.coords
            .windows(2)
            .filter_map(|w| Move::ALL.into_iter().find(|&mv| w[0].step(mv) == w[1]))
            .collect()
    }
}

/// Final report of a finished search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub state: SearchState,
    pub path: Option<Path>,
    pub stats: SearchStats,
}

/// Single-source, single-target search over a borrowed grid
#[derive(Debug)]
pub struct AStarSearch<'g> {
    grid: &'g Grid,
    start: Coord,
    target: Coord,
    ranking: Ranking,

    // Append-only; parents are indices into this store
    nodes: Vec<Node>,
    frontier: Frontier,
    visited: Visited,

    state: SearchState,
    goal: Option<NodeId>,
    stats: SearchStats,
}

impl<'g> AStarSearch<'g> {
    /// Create an A* search. Start and target must lie inside the grid.
    pub fn new(grid: &'g Grid, start: Coord, target: Coord) -> SearchResult<Self> {
        Self::with_ranking(grid, start, target, Ranking::AStar)
    }

    /// Create a search whose frontier is ordered by `ranking`
    pub fn with_ranking(
        grid: &'g Grid,
        start: Coord,
        target: Coord,
        ranking: Ranking,
    ) -> SearchResult<Self> {
        for coord in [start, target] {
            if !grid.contains(coord) {
                return Err(SearchError::OutOfBounds {
                    coord,
                    width: grid.width(),
                    height: grid.height(),
                });
            }
        }

        let root = Node::start(start, target);
        let mut frontier = Frontier::new();
        frontier.insert_ordered(start, NodeId(0), ranking.key(&root));

        debug!(
            "search {} -> {} on {}x{} grid ({} ranking)",
            start,
            target,
            grid.width(),
            grid.height(),
            ranking
        );

        Ok(Self {
            grid,
            start,
            target,
            ranking,
            nodes: vec![root],
            frontier,
            visited: Visited::new(),
            state: SearchState::Running,
            goal: None,
            stats: SearchStats {
                inserted: 1,
                peak_frontier: 1,
                ..SearchStats::default()
            },
        })
    }

    pub fn grid(&self) -> &Grid {
        self.grid
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn target(&self) -> Coord {
        self.target
    }

    pub fn ranking(&self) -> Ranking {
        self.ranking
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn visited(&self) -> &Visited {
        &self.visited
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Goal node once the search has succeeded
    pub fn goal(&self) -> Option<&Node> {
        self.goal.map(|id| self.node(id))
    }

    /// Run one iteration. Stepping a finished search returns its terminal state.
    pub fn step<O>(&mut self, observer: &mut O) -> SearchResult<SearchState>
    where
        O: SearchObserver + ?Sized,
    {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        if self.frontier.is_empty() {
            debug!(
                "search failed after {} pops, {} cells visited",
                self.stats.pops,
                self.visited.len()
            );
            self.state = SearchState::Failed;
            observer.on_failure();
            return Ok(self.state);
        }

        let id = self.frontier.pop_best()?;
        let coord = self.nodes[id.0].coord();
        self.visited.add(coord, id);
        self.stats.pops += 1;
        trace!("pop {} (score {})", coord, self.nodes[id.0].score());
        observer.on_visited(coord);

        if self.nodes[id.0].is_goal() {
            self.goal = Some(id);
            self.state = SearchState::Succeeded;
            debug!(
                "search succeeded: cost {} after {} pops",
                self.nodes[id.0].path_cost(),
                self.stats.pops
            );

            // Target first; the start cell is not a step
            for node in self.ancestry(id).filter(|n| n.parent().is_some()) {
                observer.on_path_step(node.coord());
            }
            observer.on_success();
        } else {
            self.expand(id, observer)?;
        }

        Ok(self.state)
    }

    /// Step until the search terminates
    pub fn run<O>(&mut self, observer: &mut O) -> SearchResult<SearchOutcome>
    where
        O: SearchObserver + ?Sized,
    {
        while !self.step(observer)?.is_terminal() {}
        Ok(self.outcome())
    }

    /// Current report. `path` is set only after success.
    pub fn outcome(&self) -> SearchOutcome {
        SearchOutcome {
            state: self.state,
            path: self.path(),
            stats: self.stats,
        }
    }

    /// Route from start to target, following parent links back from the goal
    pub fn path(&self) -> Option<Path> {
        let goal = self.goal?;
        let mut coords: Vec<Coord> = self.ancestry(goal).map(Node::coord).collect();
        coords.reverse();
        Some(Path { coords })
    }

    /// `id` followed by its parent chain up to the start node
    fn ancestry(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        let mut next = Some(id);
        std::iter::from_fn(move || {
            let node = &self.nodes[next?.0];
            next = node.parent();
            Some(node)
        })
    }

    fn expand<O>(&mut self, id: NodeId, observer: &mut O) -> SearchResult<()>
    where
        O: SearchObserver + ?Sized,
    {
        let parent = self.nodes[id.0].clone();
        let cost = parent.path_cost() + 1;

        for mv in Move::ALL {
            let candidate = parent.coord().step(mv);
            if !self.grid.contains(candidate) || self.grid.is_wall(candidate)? {
                continue;
            }

            if let Some(existing) = self.frontier.find_by_coord(candidate) {
                let existing = &self.nodes[existing.0];
                if existing.path_cost() <= cost {
                    continue;
                }
                trace!(
                    "replace frontier {} (cost {} -> {})",
                    candidate,
                    existing.path_cost(),
                    cost
                );
                self.frontier
                    .remove(candidate, self.ranking.key(existing));
                self.stats.replaced += 1;
            } else if let Some(existing) = self.visited.find_by_coord(candidate) {
                let existing = &self.nodes[existing.0];
                if existing.path_cost() <= cost {
                    continue;
                }
                trace!(
                    "reopen {} (cost {} -> {})",
                    candidate,
                    existing.path_cost(),
                    cost
                );
                self.visited.remove(candidate);
                self.stats.reopened += 1;
            }

            let child = Node::from_parent(id, &parent, mv, self.target);
            let key = self.ranking.key(&child);
            let child_id = NodeId(self.nodes.len());
            self.nodes.push(child);
            self.frontier.insert_ordered(candidate, child_id, key);

            self.stats.inserted += 1;
            self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
            observer.on_frontier_marked(candidate);
        }

        Ok(())
    }
}

/// Run a complete A* search without progress reporting.
///
/// Returns `Ok(None)` when the target is unreachable.
pub fn find_path(grid: &Grid, start: Coord, target: Coord) -> SearchResult<Option<Path>> {
    let mut search = AStarSearch::new(grid, start, target)?;
    Ok(search.run(&mut NullObserver)?.path)
}
