use grid_astar::{allocate_map, GridMap, BLOCKED};
use grid_util::point::Point;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    env_logger::init();
    let mut cells = allocate_map(3, 3);
    cells[4] = BLOCKED;
    let map = GridMap::new(&cells, 3, 3).expect("buffer matches dimensions");
    println!("{}", map);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    let path = map.shortest_path(start, end).unwrap();
    println!("Path:");
    for p in path {
        println!("{:?}", p);
    }
}
