use super::*;
use crate::grid::GridBuilder;
use crate::observer::{RecordingObserver, SearchEvent};
use std::collections::{HashSet, VecDeque};

fn c(x: i32, y: i32) -> Coord {
    Coord::new(x, y)
}

/// 51x31 bordered maze with four wall segments
fn classic_maze() -> Grid {
    GridBuilder::new(51, 31)
        .border()
        .vertical_wall(20, 1, 15)
        .vertical_wall(40, 1, 15)
        .horizontal_wall(15, 10, 19)
        .vertical_wall(30, 15, 30)
        .build()
        .unwrap()
}

/// Cells 4-connected to `from`
fn flood_fill(grid: &Grid, from: Coord) -> HashSet<Coord> {
    let mut seen = HashSet::from([from]);
    let mut queue = VecDeque::from([from]);
    while let Some(cell) = queue.pop_front() {
        for mv in Move::ALL {
            let next = cell.step(mv);
            if grid.is_wall(next) == Ok(false) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

#[test]
fn test_open_grid_corner_to_corner() {
    let grid = Grid::open(5, 5).unwrap();
    let mut search = AStarSearch::new(&grid, c(0, 0), c(4, 4)).unwrap();

    let outcome = search.run(&mut NullObserver).unwrap();
    assert_eq!(outcome.state, SearchState::Succeeded);

    let path = outcome.path.unwrap();
    assert_eq!(path.cost(), 8);
    assert_eq!(path.steps(), 8);
    assert_eq!(path.start(), Some(c(0, 0)));
    assert_eq!(path.target(), Some(c(4, 4)));
    assert_eq!(search.goal().unwrap().path_cost(), 8);
}

#[test]
fn test_equal_scores_follow_newest_sibling() {
    // Every cell on a monotone route scores 8; the newest sibling (Right
    // is inserted after Up) pops first, so the route hugs the bottom edge.
    let grid = Grid::open(5, 5).unwrap();
    let path = find_path(&grid, c(0, 0), c(4, 4)).unwrap().unwrap();

    let expected: Vec<Coord> = (0..=4)
        .map(|x| c(x, 0))
        .chain((1..=4).map(|y| c(4, y)))
        .collect();
    assert_eq!(path.coords(), expected.as_slice());

    let moves = path.moves();
    assert_eq!(moves.len(), 8);
    assert_eq!(&moves[..4], &[Move::Right; 4]);
    assert_eq!(&moves[4..], &[Move::Up; 4]);
}

#[test]
fn test_open_grid_stats() {
    let grid = Grid::open(5, 5).unwrap();
    let mut search = AStarSearch::new(&grid, c(0, 0), c(4, 4)).unwrap();
    let outcome = search.run(&mut NullObserver).unwrap();

    assert_eq!(outcome.stats.pops, 9);
    assert_eq!(outcome.stats.inserted, 15);
    assert_eq!(outcome.stats.replaced, 0);
    assert_eq!(outcome.stats.reopened, 0);
}

#[test]
fn test_start_equals_target() {
    let grid = Grid::open(3, 3).unwrap();
    let mut search = AStarSearch::new(&grid, c(1, 1), c(1, 1)).unwrap();
    let mut observer = RecordingObserver::new();

    assert_eq!(search.step(&mut observer), Ok(SearchState::Succeeded));

    let path = search.path().unwrap();
    assert_eq!(path.steps(), 0);
    assert_eq!(path.coords(), &[c(1, 1)]);
    assert_eq!(
        observer.events,
        vec![SearchEvent::Visited(c(1, 1)), SearchEvent::Success]
    );
}

#[test]
fn test_enclosed_target_fails() {
    let grid = GridBuilder::new(9, 9)
        .border()
        .horizontal_wall(5, 5, 7)
        .horizontal_wall(7, 5, 7)
        .wall(c(5, 6))
        .wall(c(7, 6))
        .build()
        .unwrap();
    let start = c(2, 2);
    let target = c(6, 6);

    let mut search = AStarSearch::new(&grid, start, target).unwrap();
    let mut observer = RecordingObserver::new();
    let outcome = search.run(&mut observer).unwrap();

    assert_eq!(outcome.state, SearchState::Failed);
    assert!(outcome.path.is_none());
    assert!(search.frontier().is_empty());
    assert_eq!(observer.terminal(), Some(SearchEvent::Failure));
    assert_eq!(observer.path_steps().count(), 0);

    let reachable = flood_fill(&grid, start);
    assert!(!reachable.contains(&target));
    let visited: HashSet<Coord> = search.visited().coords().collect();
    assert_eq!(visited, reachable);
}

#[test]
fn test_detour_around_wall() {
    let grid = GridBuilder::new(7, 7)
        .border()
        .vertical_wall(3, 1, 4)
        .build()
        .unwrap();
    let start = c(1, 1);
    let target = c(5, 1);

    let path = find_path(&grid, start, target).unwrap().unwrap();
    assert_eq!(start.manhattan(target), 4);
    // Up to row 5, across, and back down
    assert_eq!(path.cost(), 12);
    assert!(path.coords().contains(&c(3, 5)));
}

#[test]
fn test_classic_maze() {
    let grid = classic_maze();
    let mut search = AStarSearch::new(&grid, c(5, 6), c(45, 25)).unwrap();
    let outcome = search.run(&mut NullObserver).unwrap();

    assert_eq!(outcome.state, SearchState::Succeeded);
    assert_eq!(outcome.path.unwrap().cost(), 63);
    assert!(outcome.stats.pops <= grid.area());
    assert_eq!(outcome.stats.reopened, 0);
}

#[test]
fn test_path_never_touches_walls() {
    let grid = classic_maze();
    let path = find_path(&grid, c(5, 6), c(45, 25)).unwrap().unwrap();

    for pair in path.coords().windows(2) {
        assert_eq!(pair[0].manhattan(pair[1]), 1);
    }
    for cell in path.coords() {
        assert_eq!(grid.is_wall(*cell), Ok(false));
    }
}

#[test]
fn test_observer_notifications() {
    let grid = classic_maze();
    let mut search = AStarSearch::new(&grid, c(5, 6), c(45, 25)).unwrap();
    let mut observer = RecordingObserver::new();
    let outcome = search.run(&mut observer).unwrap();

    // The start node is seeded, not marked
    assert_eq!(
        observer.frontier_marked().count(),
        outcome.stats.inserted - 1
    );
    assert_eq!(observer.visited().count(), outcome.stats.pops);
    assert_eq!(observer.terminal(), Some(SearchEvent::Success));
    assert_eq!(observer.events.last(), Some(&SearchEvent::Success));

    // Path steps run target -> start and skip the start cell
    let path = outcome.path.unwrap();
    let steps: Vec<Coord> = observer.path_steps().collect();
    let expected: Vec<Coord> = path.coords()[1..].iter().rev().copied().collect();
    assert_eq!(steps, expected);
    assert_eq!(steps.first(), Some(&c(45, 25)));
}

#[test]
fn test_step_after_termination_is_noop() {
    let grid = Grid::open(4, 4).unwrap();
    let mut search = AStarSearch::new(&grid, c(0, 0), c(3, 0)).unwrap();
    let mut observer = RecordingObserver::new();
    search.run(&mut observer).unwrap();

    let events = observer.events.len();
    let stats = search.stats();
    assert_eq!(search.step(&mut observer), Ok(SearchState::Succeeded));
    assert_eq!(observer.events.len(), events);
    assert_eq!(search.stats(), stats);
}

#[test]
fn test_endpoints_must_be_inside_grid() {
    let grid = Grid::open(4, 4).unwrap();
    assert_eq!(
        AStarSearch::new(&grid, c(-1, 0), c(3, 3)).unwrap_err(),
        SearchError::OutOfBounds {
            coord: c(-1, 0),
            width: 4,
            height: 4
        }
    );
    assert!(matches!(
        AStarSearch::new(&grid, c(0, 0), c(4, 3)),
        Err(SearchError::OutOfBounds { .. })
    ));
}

#[test]
fn test_target_on_wall_is_unreachable() {
    let grid = GridBuilder::new(6, 6).border().build().unwrap();
    assert_eq!(find_path(&grid, c(2, 2), c(0, 3)), Ok(None));
}

#[test]
fn test_uniform_cost_matches_astar_cost() {
    let grid = classic_maze();
    let mut search =
        AStarSearch::with_ranking(&grid, c(5, 6), c(45, 25), Ranking::UniformCost).unwrap();
    let outcome = search.run(&mut NullObserver).unwrap();

    assert_eq!(outcome.path.unwrap().cost(), 63);
    assert!(outcome.stats.pops > 512);
}

#[test]
fn test_greedy_reopens_settled_cells() {
    let grid = classic_maze();
    let mut search =
        AStarSearch::with_ranking(&grid, c(5, 6), c(45, 25), Ranking::Greedy).unwrap();
    let outcome = search.run(&mut NullObserver).unwrap();

    assert_eq!(outcome.state, SearchState::Succeeded);
    assert_eq!(outcome.path.unwrap().cost(), 79);
    assert!(outcome.stats.reopened > 0);
    assert_eq!(search.ranking(), Ranking::Greedy);
}
