use grid_route_planner::{city::city_map, Algorithm, Cell, PathingGrid, Planner, SearchResult};
use std::{thread, time::Duration};

// Plans a route across the city map with both strategies and replays the reveal in the terminal,
// one cell per frame.

const FRAME: Duration = Duration::from_millis(100);

fn draw(grid: &PathingGrid, start: Cell, end: Cell, revealed: &[Cell]) {
    let n = grid.size() as i32;
    for row in 0..n {
        let line: String = (0..n)
            .map(|col| {
                let c = Cell::new(row, col);
                if c == start {
                    'S'
                } else if c == end {
                    'E'
                } else if revealed.contains(&c) {
                    '*'
                } else if grid.is_blocked(c).unwrap_or(true) {
                    '#'
                } else {
                    '.'
                }
            })
            .collect();
        println!("{line}");
    }
}

fn main() {
    let grid = city_map();
    let start = Cell::new(0, 0);
    let end = Cell::new(19, 19);
    let mut planner = Planner::new();
    for algorithm in Algorithm::ALL {
        match planner.plan(&grid, start, end, algorithm) {
            Ok(SearchResult::Found(path)) => {
                while planner.advance_reveal() {
                    print!("\x1b[2J\x1b[H");
                    println!("{algorithm}");
                    draw(&grid, start, end, planner.current_revealed_path());
                    thread::sleep(FRAME);
                }
                println!("Distance: {} units", path.steps());
                thread::sleep(FRAME * 10);
            }
            Ok(SearchResult::NotFound) => println!("No path found!"),
            Err(e) => println!("{e}"),
        }
    }
}
