//! # grid_bfs
//!
//! An interactive grid pathfinding system. A [CellGrid] records which
//! cells are designated start, end and obstacle; [find_path] runs an
//! unweighted
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search)
//! over the
//! [8-neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood)
//! of the grid and returns the shortest route in steps, with diagonal and
//! cardinal moves costing the same. The expansion order is fixed, which
//! makes the search deterministic down to which of several equal-length
//! routes is produced. [GridSession] layers the click-driven
//! start/end/obstacle designation flow on top of the engine.
mod bfs;
pub mod cell_grid;
pub mod session;
pub mod solver;

use grid_util::point::Point;
use thiserror::Error;

pub use cell_grid::{Cell, CellGrid};
pub use session::{GridSession, Mode};
pub use solver::{find_designated_path, find_path, PathResult, NEIGHBOR_ORDER};

/// Side length of the grid a default [GridSession] uses.
pub const DEFAULT_GRID_SIDE: usize = 10;

pub(crate) const N_SMALLVEC_SIZE: usize = 8;

/// Why a search request could not be run. A fully explored grid without a
/// route is not an error; that case is [PathResult::NotFound].
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PathingError {
    /// No cell on the grid is designated as start.
    #[error("the grid has no start cell")]
    MissingStart,
    /// No cell on the grid is designated as end.
    #[error("the grid has no end cell")]
    MissingEnd,
    /// A requested coordinate lies outside the grid.
    #[error("coordinate {0} is outside the grid")]
    InvalidCoordinate(Point),
}
