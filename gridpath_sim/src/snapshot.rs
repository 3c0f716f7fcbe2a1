//! Plain-text picture of a search, for headless runs

use crate::renderer::Mark;
use gridpath_core::{AStarSearch, Coord};

/// Render the grid with visited, frontier and path cells.
///
/// Same geometry as the terminal renderer: two columns per cell, top row is
/// the largest y. Trailing spaces are trimmed.
pub fn render_snapshot(search: &AStarSearch<'_>) -> String {
    let grid = search.grid();
    let (width, height) = (grid.width(), grid.height());
    let mut canvas = vec![vec![' '; width]; height];

    let mut put = |coord: Coord, mark: Mark| {
        if let (Ok(x), Ok(y)) = (usize::try_from(coord.x), usize::try_from(coord.y)) {
            if x < width && y < height {
                canvas[height - 1 - y][x] = mark.glyph();
            }
        }
    };

    for wall in grid.walls() {
        put(wall, Mark::Wall);
    }
    for coord in search.visited().coords() {
        put(coord, Mark::Visited);
    }
    for coord in search.frontier().coords() {
        put(coord, Mark::Frontier);
    }
    if let Some(path) = search.path() {
        for &coord in path.coords() {
            put(coord, Mark::Path);
        }
    }
    put(search.start(), Mark::Start);
    put(search.target(), Mark::Target);

    let mut out = String::with_capacity((width * 2 + 1) * height);
    for row in canvas {
        let line: String = row.iter().flat_map(|&c| [c, ' ']).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
