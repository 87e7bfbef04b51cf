//! # grid_astar
//!
//! Shortest paths between two cells of a fixed-size grid with impassable cells, using
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with 8-directional movement. Every
//! step costs the same, diagonal ones included.
//!
//! The default heuristic is the straight-line (Euclidean) distance. Because a diagonal step
//! costs 1, it overestimates the remaining cost, so the returned path is valid but not always
//! the shortest one (about 4% of random 10x10 grids). [SearchConfig::optimal] switches to
//! [Heuristic::Chebyshev], which always yields the minimum number of steps.
//!
//! The [GridModel] also maintains
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! so that an unreachable goal is reported without flood-filling the grid.
//!
//! ```
//! use grid_astar::{solve, Cell, GridModel};
//!
//! let mut grid = GridModel::new(5, 5).unwrap();
//! for row in 0..4 {
//!     grid.set_obstacle(Cell::new(row, 2), true).unwrap();
//! }
//! grid.update();
//! let path = solve(&grid, Cell::new(0, 0), Cell::new(4, 4)).unwrap();
//! assert!(path.contains(&Cell::new(4, 2)));
//! ```
mod astar;
mod cell;
mod config;
mod error;
mod grid;
mod path;

pub use crate::astar::{AstarSolver, Solution};
pub use crate::cell::Cell;
pub use crate::config::{CancelToken, Heuristic, SearchConfig};
pub use crate::error::{PathError, Result};
pub use crate::grid::GridModel;
pub use crate::path::{reconstruct, CameFrom, Path};

/// Number of rows of the grid used by the interactive front end.
pub const DEFAULT_ROWS: usize = 20;
/// Number of columns of the grid used by the interactive front end.
pub const DEFAULT_COLS: usize = 20;
/// Cost of a single move in any of the eight directions.
pub const STEP_COST: u32 = 1;

/// Computes a path from start to goal with the default [SearchConfig].
///
/// The default Euclidean heuristic can return a path with more steps than necessary. Use
/// [AstarSolver::with_config] with [SearchConfig::optimal] when the minimum is required.
pub fn solve(grid: &GridModel, start: Cell, goal: Cell) -> Result<Path> {
    AstarSolver::new().solve(grid, start, goal)
}

/// Like [solve], for callers that track start and goal as optional selections. A missing
/// endpoint is a [PathError::InvalidInput].
pub fn solve_optional(grid: &GridModel, start: Option<Cell>, goal: Option<Cell>) -> Result<Path> {
    match (start, goal) {
        (Some(start), Some(goal)) => solve(grid, start, goal),
        _ => Err(PathError::InvalidInput(
            "both the start and the goal cell have to be set".to_owned(),
        )),
    }
}
