use grid_util::grid::Grid;
use grid_util::point::Point;
use log::info;
use smallvec::SmallVec;

use crate::bfs::bfs;
use crate::cell_grid::CellGrid;
use crate::{PathingError, N_SMALLVEC_SIZE};

/// Expansion order of the 8-neighborhood as `(dx, dy)` offsets: the four
/// cardinal directions first, then the four diagonals. Among several
/// equal-length routes the search returns the first-discovered one, so
/// changing this order changes which route is produced.
pub const NEIGHBOR_ORDER: [(i32, i32); 8] = [
    (0, -1),  // up
    (0, 1),   // down
    (-1, 0),  // left
    (1, 0),   // right
    (-1, -1), // up-left
    (1, 1),   // down-right
    (1, -1),  // up-right
    (-1, 1),  // down-left
];

/// Outcome of a search over a fully explorable grid.
///
/// [PathResult::NotFound] is the regular outcome of an exhausted search
/// space; request errors are reported separately as [PathingError].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathResult {
    /// The shortest route in steps, excluding the start cell and ending
    /// on the end cell. Empty when start and end coincide.
    Found(Vec<Point>),
    /// The whole reachable region was explored without meeting the end.
    NotFound,
}

impl PathResult {
    /// The found route, or [None] for [PathResult::NotFound].
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NotFound => None,
        }
    }
}

/// Computes the shortest path from `start` to `end` in unit steps, where
/// diagonal and cardinal moves cost the same. Cells marked
/// [Cell](crate::Cell)`::Obstacle` block movement; all other states are
/// traversable, including the start and end cells themselves. The grid is
/// only read, never mutated, and no state is kept between calls.
///
/// Both endpoints must lie on the grid; out-of-bounds coordinates are
/// reported as [PathingError::InvalidCoordinate]. `start == end` is
/// allowed and produces an empty path.
pub fn find_path(grid: &CellGrid, start: Point, end: Point) -> Result<PathResult, PathingError> {
    for p in [start, end] {
        if !grid.point_in_bounds(p) {
            return Err(PathingError::InvalidCoordinate(p));
        }
    }
    info!("Searching for a path from {} to {}", start, end);
    let result = bfs(&start, |node| neighborhood(grid, node), |node| *node == end);
    Ok(match result {
        Some(path) => {
            info!("Found a path of {} steps", path.len());
            PathResult::Found(path)
        }
        None => {
            info!("Explored the whole region without reaching {}", end);
            PathResult::NotFound
        }
    })
}

/// Runs [find_path] between the cells the grid designates as start and
/// end, failing with [PathingError::MissingStart] or
/// [PathingError::MissingEnd] when a designation is absent.
pub fn find_designated_path(grid: &CellGrid) -> Result<PathResult, PathingError> {
    let (start, end) = grid.validate()?;
    find_path(grid, start, end)
}

fn neighborhood(grid: &CellGrid, node: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
    NEIGHBOR_ORDER
        .iter()
        .map(|&(dx, dy)| Point::new(node.x + dx, node.y + dy))
        .filter(|&p| grid.point_in_bounds(p) && !grid.get_point(p).blocks())
        .collect()
}
