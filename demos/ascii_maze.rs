use grid_astar::{solve_optional, Cell, GridModel, Path, PathError};

// Plays the part of the interactive front end: the grid, start and goal come from a picture and
// the path is drawn back into it. Start and goal keep their markers, only the cells in between
// are marked with `*`.
const MAZE: &str = "
    S.......#...........
    .######.#.#########.
    .#......#.#.......#.
    .#.######.#.#####.#.
    .#........#.#...#.#.
    .##########.#.#.#.#.
    ............#.#...#.
    ###########.#.#####.
    ..........#.#.......
    .########.#.#######.
    .#......#.#.......#.
    .#.####.#.#######.#.
    .#.#..#.#.........#.
    .#.#.##.###########.
    .#.#................
    .#.################.
    .#................#.
    .################.#.
    ..................#.
    ##################.G
";

fn render(grid: &GridModel, start: Cell, goal: Cell, path: &Path) -> String {
    let mut out = String::new();
    for r in 0..grid.rows() as i32 {
        for c in 0..grid.cols() as i32 {
            let cell = Cell::new(r, c);
            let ch = if cell == start {
                'S'
            } else if cell == goal {
                'G'
            } else if path.interior().contains(&cell) {
                '*'
            } else if grid.is_obstacle(cell).unwrap_or(false) {
                '#'
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<(), PathError> {
    env_logger::init();
    let (grid, start, goal) = GridModel::from_ascii(MAZE)?;
    match solve_optional(&grid, start, goal) {
        Ok(path) => {
            println!("Path with {} steps:", path.steps());
            print!("{}", render(&grid, path.start(), path.goal(), &path));
        }
        Err(e) if e.is_no_path() => println!("No path found."),
        Err(e) => return Err(e),
    }
    Ok(())
}
