use grid_bfs::{find_path, Cell, CellGrid, PathResult};
use grid_util::grid::Grid;
use grid_util::point::Point;

/// On an open 3x3 grid the diagonal shortcut wins: two diagonal steps
/// cost the same as any longer cardinal route.
#[test]
fn open_grid_takes_the_diagonal_shortcut() {
    let grid = CellGrid::new(3, 3, Cell::Empty);
    let result = find_path(&grid, Point::new(0, 0), Point::new(2, 2)).unwrap();
    assert_eq!(
        result,
        PathResult::Found(vec![Point::new(1, 1), Point::new(2, 2)])
    );
}

/// A wall on column 5 with a single gap on the bottom row forces the
/// route through the gap, even though start and end share the top row.
#[test]
fn wall_with_single_gap_forces_a_detour() {
    let mut grid = CellGrid::new(10, 10, Cell::Empty);
    for y in 0..9 {
        grid.set(5, y, Cell::Obstacle);
    }
    grid.set(0, 0, Cell::Start);
    grid.set(9, 0, Cell::End);
    let result = find_path(&grid, Point::new(0, 0), Point::new(9, 0)).unwrap();
    let path = result.path().unwrap();
    // Down to the gap and back up, all diagonal: 9 steps either side.
    assert_eq!(path.len(), 18);
    assert!(path.contains(&Point::new(5, 9)));
    assert_eq!(*path.last().unwrap(), Point::new(9, 0));
    assert!(!path.contains(&Point::new(0, 0)));
}

#[test]
fn fully_enclosed_start_has_no_path() {
    let mut grid = CellGrid::new(10, 10, Cell::Empty);
    let start = Point::new(5, 5);
    for dx in -1..=1 {
        for dy in -1..=1 {
            if (dx, dy) != (0, 0) {
                grid.set_cell(Point::new(start.x + dx, start.y + dy), Cell::Obstacle)
                    .unwrap();
            }
        }
    }
    let result = find_path(&grid, start, Point::new(9, 9)).unwrap();
    assert_eq!(result, PathResult::NotFound);
}

/// The enclosure can also lean on the grid edge: a corner end boxed in by
/// three obstacles is just as unreachable.
#[test]
fn cornered_end_behind_obstacles_has_no_path() {
    let mut grid = CellGrid::new(10, 10, Cell::Empty);
    for p in [Point::new(8, 9), Point::new(8, 8), Point::new(9, 8)] {
        grid.set_cell(p, Cell::Obstacle).unwrap();
    }
    let result = find_path(&grid, Point::new(0, 0), Point::new(9, 9)).unwrap();
    assert_eq!(result, PathResult::NotFound);
}

#[test]
fn repeated_searches_return_identical_results() {
    let mut grid = CellGrid::new(10, 10, Cell::Empty);
    for p in [
        Point::new(3, 1),
        Point::new(3, 2),
        Point::new(4, 4),
        Point::new(6, 3),
        Point::new(6, 4),
        Point::new(7, 7),
        Point::new(2, 6),
    ] {
        grid.set_cell(p, Cell::Obstacle).unwrap();
    }
    let start = Point::new(0, 0);
    let end = Point::new(9, 6);
    let first = find_path(&grid, start, end).unwrap();
    for _ in 0..10 {
        assert_eq!(find_path(&grid, start, end).unwrap(), first);
    }
}

/// The search reads the grid but never writes to it, in particular it
/// does not draw the found path itself.
#[test]
fn searching_leaves_the_grid_untouched() {
    let mut grid = CellGrid::new(10, 10, Cell::Empty);
    grid.set(0, 0, Cell::Start);
    grid.set(9, 9, Cell::End);
    grid.set(4, 4, Cell::Obstacle);
    let before = format!("{}", grid);
    find_path(&grid, Point::new(0, 0), Point::new(9, 9)).unwrap();
    assert_eq!(format!("{}", grid), before);
}
