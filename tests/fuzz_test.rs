/// Fuzzes the search by checking for many random grids that a path is found exactly when the goal
/// is in the same connected component as the start, that every path is valid, and that the
/// Chebyshev heuristic yields the breadth-first minimum number of steps.
use grid_astar::{AstarSolver, Cell, GridModel, Heuristic, Path, SearchConfig};
use rand::prelude::*;
use std::collections::{HashMap, VecDeque};

fn random_grid(rows: usize, cols: usize, rng: &mut StdRng, density: f64) -> GridModel {
    let mut grid = GridModel::new(rows, cols).unwrap();
    for r in 0..rows as i32 {
        for c in 0..cols as i32 {
            grid.set_obstacle(Cell::new(r, c), rng.gen_bool(density))
                .unwrap();
        }
    }
    grid
}

/// Minimum number of steps by breadth-first search.
fn bfs_distance(grid: &GridModel, start: Cell, goal: Cell) -> Option<usize> {
    let mut dist = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(cell) = queue.pop_front() {
        let d = dist[&cell];
        if cell == goal {
            return Some(d);
        }
        for n in grid.neighbors(cell) {
            dist.entry(n).or_insert_with(|| {
                queue.push_back(n);
                d + 1
            });
        }
    }
    None
}

fn visualize_grid(grid: &GridModel, start: &Cell, end: &Cell, path: Option<&Path>) {
    for r in 0..grid.rows() as i32 {
        for c in 0..grid.cols() as i32 {
            let p = Cell::new(r, c);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.is_obstacle(p).unwrap() {
                print!("#");
            } else if path.map_or(false, |path| path.contains(&p)) {
                print!("*");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Cell::new(0, 0);
    let end = Cell::new(N as i32 - 1, N as i32 - 1);
    for heuristic in [Heuristic::Euclidean, Heuristic::Chebyshev] {
        let solver = AstarSolver::with_config(SearchConfig::default().with_heuristic(heuristic));
        for _ in 0..N_GRIDS {
            let mut grid = random_grid(N, N, &mut rng, 0.4);
            grid.set_obstacle(start, false).unwrap();
            grid.set_obstacle(end, false).unwrap();
            grid.update();
            let reachable = grid.reachable(start, end);
            let expected = bfs_distance(&grid, start, end);
            let path = solver.solve(&grid, start, end).ok();
            // Show the grid if the outcome is unexpected
            if path.is_some() != reachable || expected.is_some() != reachable {
                visualize_grid(&grid, &start, &end, path.as_ref());
            }
            assert_eq!(path.is_some(), reachable);
            assert_eq!(expected.is_some(), reachable);
            if let (Some(path), Some(expected)) = (path, expected) {
                assert!(path.is_valid_on(&grid));
                assert_eq!(path.start(), start);
                assert_eq!(path.goal(), end);
                match heuristic {
                    Heuristic::Chebyshev => assert_eq!(path.steps(), expected),
                    Heuristic::Euclidean => assert!(path.steps() >= expected),
                }
            }
        }
    }
}

/// The components pre-check must never change the outcome of a search.
#[test]
fn fuzz_components_agree_with_search() {
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(1);
    let with_components = AstarSolver::new();
    let without_components = AstarSolver::with_config(SearchConfig::default().with_components(false));
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(8, 12, &mut rng, 0.35);
        grid.update();
        let start = Cell::new(rng.gen_range(0..8), rng.gen_range(0..12));
        let goal = Cell::new(rng.gen_range(0..8), rng.gen_range(0..12));
        assert_eq!(
            with_components.solve(&grid, start, goal),
            without_components.solve(&grid, start, goal)
        );
    }
}

#[test]
fn fuzz_deterministic() {
    let mut rng = StdRng::seed_from_u64(2);
    let solver = AstarSolver::new();
    for _ in 0..200 {
        let mut grid = random_grid(20, 20, &mut rng, 0.25);
        let start = Cell::new(0, 0);
        let goal = Cell::new(19, 19);
        grid.set_obstacle(start, false).unwrap();
        grid.set_obstacle(goal, false).unwrap();
        grid.update();
        let first = solver.search(&grid, start, goal);
        let copy = grid.clone();
        assert_eq!(solver.search(&copy, start, goal), first);
    }
}
