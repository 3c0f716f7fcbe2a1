//! Progress notifications
//!
//! The search reports every state change through [`SearchObserver`]. Calls
//! are informational only: nothing an observer does can change the order or
//! the outcome of a search.

use crate::node::Coord;

/// Receiver of search progress. Every method defaults to a no-op.
pub trait SearchObserver {
    /// A coordinate was inserted into the frontier
    fn on_frontier_marked(&mut self, _coord: Coord) {}

    /// A coordinate was popped from the frontier into the visited set
    fn on_visited(&mut self, _coord: Coord) {}

    /// One cell of the reconstructed path, target first, start excluded
    fn on_path_step(&mut self, _coord: Coord) {}

    fn on_success(&mut self) {}

    fn on_failure(&mut self) {}
}

impl<T: SearchObserver + ?Sized> SearchObserver for &mut T {
    fn on_frontier_marked(&mut self, coord: Coord) {
        (**self).on_frontier_marked(coord);
    }

    fn on_visited(&mut self, coord: Coord) {
        (**self).on_visited(coord);
    }

    fn on_path_step(&mut self, coord: Coord) {
        (**self).on_path_step(coord);
    }

    fn on_success(&mut self) {
        (**self).on_success();
    }

    fn on_failure(&mut self) {
        (**self).on_failure();
    }
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SearchObserver for NullObserver {}

/// A single recorded notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent {
    FrontierMarked(Coord),
    Visited(Coord),
    PathStep(Coord),
    Success,
    Failure,
}

/// Observer that keeps every notification in order
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub events: Vec<SearchEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frontier_marked(&self) -> impl Iterator<Item = Coord> + '_ {
        self.events.iter().filter_map(|e| match e {
            SearchEvent::FrontierMarked(c) => Some(*c),
            _ => None,
        })
    }

    pub fn visited(&self) -> impl Iterator<Item = Coord> + '_ {
        self.events.iter().filter_map(|e| match e {
            SearchEvent::Visited(c) => Some(*c),
            _ => None,
        })
    }

    pub fn path_steps(&self) -> impl Iterator<Item = Coord> + '_ {
        self.events.iter().filter_map(|e| match e {
            SearchEvent::PathStep(c) => Some(*c),
            _ => None,
        })
    }

    /// Terminal event, if the search finished
    pub fn terminal(&self) -> Option<SearchEvent> {
        self.events
            .iter()
            .rev()
            .find(|e| matches!(e, SearchEvent::Success | SearchEvent::Failure))
            .copied()
    }
}

impl SearchObserver for RecordingObserver {
    fn on_frontier_marked(&mut self, coord: Coord) {
        self.events.push(SearchEvent::FrontierMarked(coord));
    }

    fn on_visited(&mut self, coord: Coord) {
        self.events.push(SearchEvent::Visited(coord));
    }

    fn on_path_step(&mut self, coord: Coord) {
        self.events.push(SearchEvent::PathStep(coord));
    }

    fn on_success(&mut self) {
        self.events.push(SearchEvent::Success);
    }

    fn on_failure(&mut self) {
        self.events.push(SearchEvent::Failure);
    }
}
