/// Fuzzes the planner by checking for many random grids that both strategies find a route exactly
/// when the goal is on the start's connected component, that every route is a valid walk, and
/// that breadth-first routes are never longer than depth-first ones.
use grid_route_planner::{Algorithm, Cell, Path, PathingGrid, PlanError, Planner, SearchResult};
use rand::prelude::*;

fn random_grid(n: usize, rng: &mut StdRng) -> PathingGrid {
    let mut pathing_grid = PathingGrid::new(n);
    for row in 0..n as i32 {
        for col in 0..n as i32 {
            pathing_grid
                .set_blocked(Cell::new(row, col), rng.gen_bool(0.4))
                .unwrap();
        }
    }
    pathing_grid
}

fn visualize_grid(grid: &PathingGrid, start: &Cell, end: &Cell) {
    let n = grid.size() as i32;
    for row in 0..n {
        for col in 0..n {
            let c = Cell::new(row, col);
            if *start == c {
                print!("S");
            } else if *end == c {
                print!("G");
            } else if grid.is_blocked(c).unwrap() {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

fn check_path(grid: &PathingGrid, path: &Path, start: Cell, end: Cell) {
    assert_eq!(path.start(), start);
    assert_eq!(path.end(), end);
    assert!(path.is_connected());
    assert!(path.iter().all(|c| grid.can_move_to(*c)));
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 10000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Cell::new(0, 0);
    let end = Cell::new(N as i32 - 1, N as i32 - 1);
    // Searches must stand on their own, without the component shortcut.
    let mut planner = Planner::new();
    planner.use_components = false;

    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, &mut rng);
        grid.set_blocked(start, false).unwrap();
        grid.set_blocked(end, false).unwrap();
        grid.update();
        let reachable = grid.reachable(&start, &end);

        let bfs = planner
            .plan(&grid, start, end, Algorithm::BreadthFirst)
            .unwrap();
        let dfs = planner
            .plan(&grid, start, end, Algorithm::DepthFirst)
            .unwrap();
        // Show the grid if a path is not found
        if bfs.is_found() != reachable || dfs.is_found() != reachable {
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(bfs.is_found(), reachable);
        assert_eq!(dfs.is_found(), reachable);

        if let (SearchResult::Found(bfs_path), SearchResult::Found(dfs_path)) = (&bfs, &dfs) {
            check_path(&grid, bfs_path, start, end);
            check_path(&grid, dfs_path, start, end);
            assert!(bfs_path.steps() <= dfs_path.steps());
            assert!(bfs_path.steps() >= start.manhattan_distance(&end) as usize);
        }
    }
}

#[test]
fn fuzz_random_endpoints() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    let mut planner = Planner::new();

    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, &mut rng);
        grid.update();
        let start = Cell::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let end = Cell::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let rejected = if grid.is_blocked(start).unwrap() {
            Some(PlanError::BlockedEndpoint(start))
        } else if grid.is_blocked(end).unwrap() {
            Some(PlanError::BlockedEndpoint(end))
        } else {
            None
        };

        for algorithm in Algorithm::ALL {
            let result = planner.plan(&grid, start, end, algorithm);
            if let Some(e) = rejected {
                assert_eq!(result, Err(e));
                continue;
            }
            let result = result.unwrap();
            assert_eq!(result.is_found(), grid.reachable(&start, &end));
            if let Some(path) = result.path() {
                check_path(&grid, path, start, end);
            }
        }
    }
}

#[test]
fn repeated_plans_are_identical() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut grid = random_grid(12, &mut rng);
    let start = Cell::new(0, 0);
    let end = Cell::new(11, 11);
    grid.set_blocked(start, false).unwrap();
    grid.set_blocked(end, false).unwrap();
    grid.update();
    let mut planner = Planner::new();
    for algorithm in Algorithm::ALL {
        let first = planner.plan(&grid, start, end, algorithm).unwrap();
        for _ in 0..5 {
            assert_eq!(planner.plan(&grid, start, end, algorithm).unwrap(), first);
        }
    }
}
