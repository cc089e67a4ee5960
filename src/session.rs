use grid_util::grid::Grid;
use grid_util::point::Point;
use log::warn;

use crate::cell_grid::{Cell, CellGrid};
use crate::solver::{find_designated_path, PathResult};
use crate::DEFAULT_GRID_SIDE;

/// What the next activated cell will designate. Modes advance in a fixed
/// order and only [GridSession::reset] goes back to the beginning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    PlacingStart,
    PlacingEnd,
    TogglingObstacles,
}

/// Click-driven editing session over a [CellGrid].
///
/// The session owns all mutable state of the interaction: cells are
/// designated one activation at a time (start, then end, then any number
/// of obstacle toggles), a path request draws the result onto the grid,
/// and a reset returns everything to the initial state. Request errors
/// never escape; they surface as the status message, which always holds
/// the instruction or verdict a frontend would show.
#[derive(Clone, Debug)]
pub struct GridSession {
    pub grid: CellGrid,
    mode: Mode,
    path: Vec<Point>,
    message: &'static str,
}

impl GridSession {
    pub fn new(width: usize, height: usize) -> GridSession {
        GridSession {
            grid: CellGrid::new(width, height, Cell::Empty),
            mode: Mode::PlacingStart,
            path: Vec::new(),
            message: "Select a starting point",
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The path drawn by the most recent successful search.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Feeds one activated (clicked) cell into the mode machine.
    ///
    /// Activations that would break the designation rules are ignored
    /// without a mode change: the end cannot go on the start cell, and
    /// obstacles cannot go on the start or end cells. Out-of-bounds
    /// activations are ignored as well.
    pub fn activate(&mut self, p: Point) {
        let current = match self.grid.cell_at(p) {
            Some(cell) => cell,
            None => return,
        };
        match self.mode {
            Mode::PlacingStart => {
                self.grid.set_point(p, Cell::Start);
                self.mode = Mode::PlacingEnd;
                self.message = "Now select an ending point";
            }
            Mode::PlacingEnd => {
                if current == Cell::Start {
                    return;
                }
                self.grid.set_point(p, Cell::End);
                self.mode = Mode::TogglingObstacles;
                self.message = "Mark obstacles (optional), then click Find Path";
            }
            Mode::TogglingObstacles => match current {
                Cell::Start | Cell::End => {}
                Cell::Obstacle => self.grid.set_point(p, Cell::Empty),
                _ => self.grid.set_point(p, Cell::Obstacle),
            },
        }
    }

    /// Runs the search between the designated cells and draws the result
    /// onto the grid as [Cell::Path] cells, skipping the start and end
    /// cells themselves. Any previously drawn path is removed first, so
    /// the grid always shows the latest result.
    pub fn find_path(&mut self) {
        self.grid.clear_paths();
        self.path.clear();
        let result = match find_designated_path(&self.grid) {
            Ok(result) => result,
            Err(error) => {
                warn!("Cannot search: {}", error);
                self.message = "Please select both start and end points";
                return;
            }
        };
        match result {
            PathResult::Found(path) => {
                for &p in &path {
                    if !matches!(self.grid.get_point(p), Cell::Start | Cell::End) {
                        self.grid.set_point(p, Cell::Path);
                    }
                }
                self.path = path;
                self.message = "Path found!";
            }
            PathResult::NotFound => {
                self.message = "No path found!";
            }
        }
    }

    /// Returns the session to its initial state: an all-empty grid of the
    /// same dimensions, no path, and start placement as the next step.
    pub fn reset(&mut self) {
        let (width, height) = (self.grid.width(), self.grid.height());
        self.grid = CellGrid::new(width, height, Cell::Empty);
        self.mode = Mode::PlacingStart;
        self.path.clear();
        self.message = "Select a starting point";
    }
}

impl Default for GridSession {
    /// A session over the reference 10x10 grid.
    fn default() -> GridSession {
        GridSession::new(DEFAULT_GRID_SIDE, DEFAULT_GRID_SIDE)
    }
}
