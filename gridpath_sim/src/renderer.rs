//! Terminal renderer
//!
//! Draws the grid once, then paints single cells as the search reports
//! progress. Each cell is two columns wide and rows are flipped so that
//! y grows upward on screen.

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{Color, Print, PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use gridpath_core::{Coord, Grid, SearchObserver};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

pub const SUCCESS_MESSAGE: &str = "search success!";
pub const FAILURE_MESSAGE: &str = "search failed!";

/// What a cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Wall,
    Frontier,
    Visited,
    Path,
    Start,
    Target,
}

impl Mark {
    pub const fn glyph(self) -> char {
        match self {
            Mark::Wall => '#',
            Mark::Frontier => '^',
            Mark::Visited => '*',
            Mark::Path => '@',
            Mark::Start => '&',
            Mark::Target => '$',
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Mark::Wall => Color::Grey,
            Mark::Frontier => Color::Yellow,
            Mark::Visited => Color::DarkCyan,
            Mark::Path => Color::Green,
            Mark::Start => Color::Magenta,
            Mark::Target => Color::Red,
        }
    }
}

/// Pacing and styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pause after each visited cell
    pub step_delay: Duration,
    /// Pause after each path cell
    pub path_delay: Duration,
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(20),
            path_delay: Duration::from_millis(10),
            color: true,
        }
    }
}

/// Animated view of a running search.
///
/// Observer callbacks cannot fail, so the first write error is latched and
/// returned from [`TerminalRenderer::finish`]; drawing stops after it.
pub struct TerminalRenderer<W: Write> {
    out: W,
    height: usize,
    start: Coord,
    target: Coord,
    options: RenderOptions,
    error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, grid: &Grid, start: Coord, target: Coord, options: RenderOptions) -> Self {
        Self {
            out,
            height: grid.height(),
            start,
            target,
            options,
            error: None,
        }
    }

    /// Clear the screen and draw walls and endpoints
    pub fn draw_grid(&mut self, grid: &Grid) -> io::Result<()> {
        queue!(self.out, Hide, Clear(ClearType::All))?;
        for wall in grid.walls() {
            self.mark(wall, Mark::Wall)?;
        }
        self.mark_endpoints()?;
        self.out.flush()
    }

    /// Restore the cursor and hand back the writer, or the first write error
    pub fn finish(mut self) -> io::Result<W> {
        let restored = queue!(self.out, Show).and_then(|()| self.out.flush());
        match self.error.take() {
            Some(err) => Err(err),
            None => restored.map(|()| self.out),
        }
    }

    /// Screen position of a cell: two columns per cell, y flipped
    fn position(&self, coord: Coord) -> (u16, u16) {
        let col = u16::try_from(coord.x.max(0) * 2).unwrap_or(u16::MAX);
        let row = self
            .height
            .checked_sub(1)
            .and_then(|top| top.checked_sub(usize::try_from(coord.y).ok()?))
            .and_then(|row| u16::try_from(row).ok())
            .unwrap_or(0);
        (col, row)
    }

    fn mark(&mut self, coord: Coord, mark: Mark) -> io::Result<()> {
        let (col, row) = self.position(coord);
        if self.options.color {
            queue!(
                self.out,
                MoveTo(col, row),
                PrintStyledContent(mark.glyph().with(mark.color()))
            )
        } else {
            queue!(self.out, MoveTo(col, row), Print(mark.glyph()))
        }
    }

    fn mark_endpoints(&mut self) -> io::Result<()> {
        self.mark(self.start, Mark::Start)?;
        self.mark(self.target, Mark::Target)
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        self.mark_endpoints()?;
        let row = u16::try_from(self.height).unwrap_or(u16::MAX);
        queue!(self.out, MoveTo(0, row), Print(text), Print("\n"))?;
        self.out.flush()
    }

    fn paint(&mut self, draw: impl FnOnce(&mut Self) -> io::Result<()>) {
        if self.error.is_none() {
            if let Err(err) = draw(self) {
                self.error = Some(err);
            }
        }
    }

    fn pause(delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

impl<W: Write> SearchObserver for TerminalRenderer<W> {
    fn on_frontier_marked(&mut self, coord: Coord) {
        self.paint(|r| r.mark(coord, Mark::Frontier));
    }

    fn on_visited(&mut self, coord: Coord) {
        self.paint(|r| {
            r.mark(coord, Mark::Visited)?;
            r.mark_endpoints()?;
            r.out.flush()
        });
        Self::pause(self.options.step_delay);
    }

    fn on_path_step(&mut self, coord: Coord) {
        self.paint(|r| {
            r.mark(coord, Mark::Path)?;
            r.out.flush()
        });
        Self::pause(self.options.path_delay);
    }

    fn on_success(&mut self) {
        self.paint(|r| r.message(SUCCESS_MESSAGE));
    }

    fn on_failure(&mut self) {
        self.paint(|r| r.message(FAILURE_MESSAGE));
    }
}
