//! # gridpath - Animated grid search
//!
//! Usage:
//!   gridpath                                  # Classic maze
//!   gridpath --world my_world.toml            # Custom world
//!   gridpath --start 2,2 --target 40,20       # Override endpoints
//!   gridpath --ranking greedy                 # Alternative frontier ordering
//!   gridpath --headless                       # No animation, final picture only
//!
//! Logs go to stderr (`RUST_LOG`, or `-v` for debug) so they never tear the
//! animation on stdout.

use anyhow::{Context, Result};
use clap::Parser;
use gridpath_core::{AStarSearch, Coord, Grid, NullObserver, Ranking, SearchOutcome, SearchState};
use gridpath_sim::{
    render_snapshot, RenderOptions, TerminalRenderer, WorldConfig, FAILURE_MESSAGE,
    SUCCESS_MESSAGE,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "gridpath")]
#[command(about = "Animated A* shortest-path search on a 2D grid")]
#[command(version)]
pub struct Args {
    /// World configuration file (TOML or YAML); defaults to the classic maze
    #[arg(long)]
    world: Option<PathBuf>,

    /// Start cell, overrides the world file
    #[arg(long, value_name = "X,Y")]
    start: Option<Coord>,

    /// Target cell, overrides the world file
    #[arg(long, value_name = "X,Y")]
    target: Option<Coord>,

    /// Frontier ordering: astar, greedy or uniform-cost
    #[arg(long, default_value_t = Ranking::AStar)]
    ranking: Ranking,

    /// Pause after each visited cell (milliseconds)
    #[arg(long, default_value = "20")]
    step_delay_ms: u64,

    /// Pause after each path cell (milliseconds)
    #[arg(long, default_value = "10")]
    path_delay_ms: u64,

    /// Skip the animation and print the final picture
    #[arg(long)]
    headless: bool,

    /// Disable colored glyphs
    #[arg(long)]
    no_color: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_world(args: &Args) -> Result<WorldConfig> {
    let mut world = match &args.world {
        Some(path) => WorldConfig::load(path)?,
        None => WorldConfig::default(),
    };
    if let Some(start) = args.start {
        world.start = start;
    }
    if let Some(target) = args.target {
        world.target = target;
    }
    Ok(world)
}

fn run_animated(args: &Args, grid: &Grid, search: &mut AStarSearch<'_>) -> Result<SearchOutcome> {
    let (need_cols, need_rows) = (grid.width() * 2, grid.height() + 1);
    match crossterm::terminal::size() {
        Ok((cols, rows)) if usize::from(cols) < need_cols || usize::from(rows) < need_rows => {
            warn!(
                "terminal is {}x{} but the grid needs {}x{}; enlarge the window",
                cols, rows, need_cols, need_rows
            );
        }
        Ok(_) => {}
        Err(e) => warn!("could not query terminal size: {}", e),
    }

    let options = RenderOptions {
        step_delay: Duration::from_millis(args.step_delay_ms),
        path_delay: Duration::from_millis(args.path_delay_ms),
        color: !args.no_color,
    };
    let mut renderer =
        TerminalRenderer::new(io::stdout().lock(), grid, search.start(), search.target(), options);
    renderer.draw_grid(grid).context("failed to draw grid")?;

    let outcome = search.run(&mut renderer)?;
    renderer.finish().context("failed to write to terminal")?;
    Ok(outcome)
}

fn run_headless(search: &mut AStarSearch<'_>) -> Result<SearchOutcome> {
    let outcome = search.run(&mut NullObserver)?;
    print!("{}", render_snapshot(search));
    match outcome.state {
        SearchState::Succeeded => println!("{SUCCESS_MESSAGE}"),
        _ => println!("{FAILURE_MESSAGE}"),
    }
    Ok(outcome)
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose);

    let world = load_world(&args)?;
    let grid = world.build_grid().context("invalid world")?;
    info!(
        "World: {}x{} with {} wall cells, {} -> {}",
        grid.width(),
        grid.height(),
        grid.walls().count(),
        world.start,
        world.target
    );

    let mut search = AStarSearch::with_ranking(&grid, world.start, world.target, args.ranking)
        .context("invalid start or target")?;

    let outcome = if args.headless {
        run_headless(&mut search)?
    } else {
        run_animated(&args, &grid, &mut search)?
    };

    let stats = outcome.stats;
    match &outcome.path {
        Some(path) => info!(
            cost = path.cost(),
            pops = stats.pops,
            inserted = stats.inserted,
            replaced = stats.replaced,
            reopened = stats.reopened,
            peak_frontier = stats.peak_frontier,
            "path found ({} ranking)",
            args.ranking
        ),
        None => info!(
            pops = stats.pops,
            visited = search.visited().len(),
            "target unreachable"
        ),
    }

    Ok(())
}
