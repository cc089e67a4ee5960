use grid_bfs::{find_path, Cell, CellGrid, PathResult};
use grid_util::grid::Grid;
use grid_util::point::Point;

// In this example a path is found on a 10x10 grid with shape
//  __________
// |S....#...E|
// |.....#....|
// |.....#....|
// |.....#....|
// |.....#....|
// |.....#....|
// |.....#....|
// |.....#....|
// |.....#....|
// |..........|
//  __________
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// The wall on column 5 is open only at the bottom row, so the route has
// to drop all the way down, pass through the gap and climb back up.
//
// Nodes have an 8-neighborhood.

fn main() {
    let mut grid = CellGrid::new(10, 10, Cell::Empty);
    for y in 0..9 {
        grid.set(5, y, Cell::Obstacle);
    }
    grid.set(0, 0, Cell::Start);
    grid.set(9, 0, Cell::End);
    println!("{}", grid);
    let start = Point::new(0, 0);
    let end = Point::new(9, 0);
    match find_path(&grid, start, end).unwrap() {
        PathResult::Found(path) => {
            println!("Path:");
            for p in path {
                println!("{:?}", p);
            }
        }
        PathResult::NotFound => println!("No path exists"),
    }
}
