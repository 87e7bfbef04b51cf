use grid_astar::{solve, Cell, GridModel};

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
// Cells have an 8-neighborhood

fn main() {
    env_logger::init();
    let mut grid = GridModel::new(3, 3).unwrap();
    grid.set_obstacle(Cell::new(1, 1), true).unwrap();
    grid.update();
    println!("{}", grid);
    let start = Cell::new(0, 0);
    let end = Cell::new(2, 2);
    let path = solve(&grid, start, end).unwrap();
    println!("Path:");
    for p in path {
        println!("{}", p);
    }
}
