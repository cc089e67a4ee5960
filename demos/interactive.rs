use grid_bfs::GridSession;
use grid_util::point::Point;

// Drives a session the way a frontend would: one activation per click,
// then a path request, then a reset. The first two activations designate
// the start and end corners; the following ones toggle an obstacle wall
// with gaps at both sides.

fn main() {
    let mut session = GridSession::default();
    session.activate(Point::new(0, 0));
    session.activate(Point::new(9, 9));
    for x in 1..9 {
        session.activate(Point::new(x, 5));
    }
    session.find_path();
    println!("{}", session.grid);
    println!("{}", session.message());
    session.reset();
    println!("{}", session.message());
}
