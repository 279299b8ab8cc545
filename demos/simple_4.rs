use grid_route_planner::{Algorithm, Cell, PathingGrid, Planner};

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
    let mut pathing_grid = PathingGrid::new(3);
    pathing_grid.set_blocked(Cell::new(1, 1), true).unwrap();
    pathing_grid.update();
    println!("{}", pathing_grid);
    let start = Cell::new(0, 0);
    let end = Cell::new(2, 2);
    let mut planner = Planner::new();
    for algorithm in Algorithm::ALL {
        let result = planner.plan(&pathing_grid, start, end, algorithm).unwrap();
        println!("{algorithm}:");
        for p in result.path().unwrap() {
            println!("{:?}", p);
        }
    }
}
