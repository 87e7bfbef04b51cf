use criterion::{criterion_group, criterion_main, Criterion};
use grid_astar::{AstarSolver, Cell, GridModel, Heuristic, SearchConfig};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn random_scenario(n: usize, density: f64, rng: &mut StdRng) -> (GridModel, Vec<(Cell, Cell)>) {
    let mut grid = GridModel::new(n, n).unwrap();
    for r in 0..n as i32 {
        for c in 0..n as i32 {
            grid.set_obstacle(Cell::new(r, c), rng.gen_bool(density))
                .unwrap();
        }
    }
    grid.update();
    let mut scenarios = Vec::new();
    while scenarios.len() < 32 {
        let start = Cell::new(rng.gen_range(0..n as i32), rng.gen_range(0..n as i32));
        let goal = Cell::new(rng.gen_range(0..n as i32), rng.gen_range(0..n as i32));
        if grid.reachable(start, goal) {
            scenarios.push((start, goal));
        }
    }
    (grid, scenarios)
}

fn random_grid_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for n in [20, 64] {
        let (grid, scenarios) = random_scenario(n, 0.3, &mut rng);
        for heuristic in [Heuristic::Euclidean, Heuristic::Chebyshev] {
            let solver =
                AstarSolver::with_config(SearchConfig::default().with_heuristic(heuristic));
            c.bench_function(format!("random {n}x{n}, {heuristic:?}").as_str(), |b| {
                b.iter(|| {
                    for (start, goal) in &scenarios {
                        black_box(solver.solve(&grid, *start, *goal).ok());
                    }
                })
            });
        }
    }
}

/// Worst case for the search without components: the goal is walled off, so the whole
/// reachable area is flooded before giving up.
fn unreachable_bench(c: &mut Criterion) {
    let mut grid = GridModel::new(64, 64).unwrap();
    let goal = Cell::new(40, 40);
    let ring = grid.neighbors(goal);
    for n in ring {
        grid.set_obstacle(n, true).unwrap();
    }
    grid.update();
    let start = Cell::new(0, 0);
    for use_components in [true, false] {
        let solver =
            AstarSolver::with_config(SearchConfig::default().with_components(use_components));
        let name = if use_components {
            "unreachable 64x64, components"
        } else {
            "unreachable 64x64, flood"
        };
        c.bench_function(name, |b| {
            b.iter(|| black_box(solver.solve(&grid, start, goal).is_err()))
        });
    }
}

criterion_group!(benches, random_grid_bench, unreachable_bench);
criterion_main!(benches);
