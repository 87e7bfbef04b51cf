use crate::cell::Cell;
use crate::error::{PathError, Result};
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [GridModel] wraps a [BoolGrid] holding the passability of a fixed `rows × cols` grid, where
/// [true] marks an obstacle. Cells map onto the [BoolGrid] with `x = col` and `y = row`. In
/// addition it maintains the 8-connected components of the passable cells using a [UnionFind]
/// structure, which lets a search report an unreachable goal without flood-filling the grid.
///
/// The dimensions never change after creation; obstacle membership is the only mutable state.
#[derive(Clone, Debug)]
pub struct GridModel {
    grid: BoolGrid,
    pub(crate) components: UnionFind<usize>,
    pub(crate) components_dirty: bool,
}

impl GridModel {
    /// Creates a grid without obstacles. Both dimensions have to be positive, and small enough
    /// for every cell to be addressable by an `i32` [Cell].
    pub fn new(rows: usize, cols: usize) -> Result<GridModel> {
        if rows == 0 || cols == 0 {
            return Err(PathError::InvalidInput(format!(
                "grid dimensions must be positive, got {rows}x{cols}"
            )));
        }
        let too_large =
            || PathError::InvalidInput(format!("grid dimensions {rows}x{cols} are too large"));
        if rows > i32::MAX as usize || cols > i32::MAX as usize {
            return Err(too_large());
        }
        let size = rows.checked_mul(cols).ok_or_else(too_large)?;
        let mut grid = GridModel {
            grid: BoolGrid::new(cols, rows, false),
            components: UnionFind::new(size),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    /// Parses a grid from a picture with one line per row, where `#` is an obstacle, `.` is free,
    /// and `S` and `G` mark the (free) start and goal cells. Blank lines and surrounding
    /// whitespace are ignored.
    pub fn from_ascii(picture: &str) -> Result<(GridModel, Option<Cell>, Option<Cell>)> {
        let lines: Vec<&str> = picture
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        let mut grid = GridModel::new(rows, cols)?;
        let mut start = None;
        let mut goal = None;
        for (r, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(PathError::InvalidInput(format!(
                    "row {r} has {} columns, expected {cols}",
                    line.chars().count()
                )));
            }
            for (c, ch) in line.chars().enumerate() {
                let cell = Cell::new(r as i32, c as i32);
                let marker = match ch {
                    '.' => None,
                    '#' => {
                        grid.grid.set_point(cell.into(), true);
                        None
                    }
                    'S' => Some(&mut start),
                    'G' => Some(&mut goal),
                    other => {
                        return Err(PathError::InvalidInput(format!(
                            "unexpected character {other:?} at {cell}"
                        )))
                    }
                };
                if let Some(slot) = marker {
                    if slot.replace(cell).is_some() {
                        return Err(PathError::InvalidInput(format!(
                            "duplicate {ch} marker at {cell}"
                        )));
                    }
                }
            }
        }
        grid.generate_components();
        Ok((grid, start, goal))
    }

    pub fn rows(&self) -> usize {
        self.grid.height()
    }

    pub fn cols(&self) -> usize {
        self.grid.width()
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        self.grid.point_in_bounds(cell.into())
    }

    /// Fails with [PathError::OutOfBounds] if the cell is not on the grid.
    pub fn check_bounds(&self, cell: Cell) -> Result<()> {
        if self.in_bounds(cell) {
            Ok(())
        } else {
            Err(PathError::OutOfBounds {
                cell,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    fn checked_point(&self, cell: Cell) -> Result<Point> {
        self.check_bounds(cell).map(|_| cell.into())
    }

    /// [false] iff the cell is an obstacle.
    pub fn is_passable(&self, cell: Cell) -> Result<bool> {
        self.is_obstacle(cell).map(|blocked| !blocked)
    }

    pub fn is_obstacle(&self, cell: Cell) -> Result<bool> {
        self.checked_point(cell).map(|p| self.grid.get_point(p))
    }

    /// In bounds and not an obstacle.
    pub fn can_move_to(&self, cell: Cell) -> bool {
        self.is_passable(cell).unwrap_or(false)
    }

    /// Marks or clears an obstacle. Setting the current state again changes nothing. Clearing a
    /// cell joins its component with those of its passable neighbours, while placing an obstacle
    /// can split a component, so the components are flagged as dirty instead.
    pub fn set_obstacle(&mut self, cell: Cell, blocked: bool) -> Result<()> {
        let p = self.checked_point(cell)?;
        if self.grid.get_point(p) == blocked {
            return Ok(());
        }
        self.grid.set_point(p, blocked);
        if blocked {
            self.components_dirty = true;
        } else {
            let p_ix = self.grid.get_ix_point(&p);
            for n in self.neighbors(cell) {
                let n_ix = self.grid.get_ix_point(&n.into());
                self.components.union(p_ix, n_ix);
            }
        }
        Ok(())
    }

    /// Flips the obstacle state of a cell and returns whether it is now an obstacle.
    pub fn toggle_obstacle(&mut self, cell: Cell) -> Result<bool> {
        let blocked = !self.is_obstacle(cell)?;
        self.set_obstacle(cell, blocked)?;
        Ok(blocked)
    }

    pub fn clear_obstacles(&mut self) {
        self.grid = BoolGrid::new(self.cols(), self.rows(), false);
        self.generate_components();
    }

    fn cells(&self) -> impl Iterator<Item = Cell> {
        let (rows, cols) = (self.rows() as i32, self.cols() as i32);
        (0..rows).flat_map(move |r| (0..cols).map(move |c| Cell::new(r, c)))
    }

    /// All obstacles in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells()
            .filter(move |&cell| self.grid.get_point(cell.into()))
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles().count()
    }

    /// The in-bounds, passable cells of the 8-neighbourhood of `cell`, in row-major order. The
    /// cell itself is not filtered, so this also works for an obstacle cell; a cell outside the
    /// grid has no neighbours.
    pub fn neighbors(&self, cell: Cell) -> SmallVec<[Cell; 8]> {
        if !self.in_bounds(cell) {
            return SmallVec::new();
        }
        let point: Point = cell.into();
        let mut neighbors = point
            .moore_neighborhood_smallvec()
            .into_iter()
            .map(Cell::from)
            .filter(|&n| self.can_move_to(n))
            .collect::<SmallVec<[Cell; 8]>>();
        neighbors.sort_unstable();
        neighbors
    }

    /// Retrieves the component id a given [Cell] belongs to.
    pub fn get_component(&self, cell: Cell) -> Result<usize> {
        self.checked_point(cell)
            .map(|p| self.components.find(self.grid.get_ix_point(&p)))
    }

    /// Whether placed obstacles may have split components since they were last generated.
    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    /// Checks if start and goal are passable and on the same component. Only meaningful while
    /// the components are not dirty.
    pub fn reachable(&self, start: Cell, goal: Cell) -> bool {
        self.can_move_to(start)
            && self.can_move_to(goal)
            && self.components.equiv(
                self.grid.get_ix_point(&start.into()),
                self.grid.get_ix_point(&goal.into()),
            )
    }

    pub fn unreachable(&self, start: Cell, goal: Cell) -> bool {
        !self.reachable(start, goal)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            debug!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable grid neighbours to the same
    /// components. Only the forward half of the neighbourhood needs to be visited.
    pub fn generate_components(&mut self) {
        let w = self.grid.width;
        let h = self.grid.height;
        info!("Generating connected components for {}x{} grid", h, w);
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let point = Point::new(x, y);
                if self.grid.get_point(point) {
                    continue;
                }
                let parent_ix = self.grid.get_ix_point(&point);
                for p in [
                    Point::new(x + 1, y),
                    Point::new(x - 1, y + 1),
                    Point::new(x, y + 1),
                    Point::new(x + 1, y + 1),
                ] {
                    if self.grid.point_in_bounds(p) && !self.grid.get_point(p) {
                        let ix = self.grid.get_ix_point(&p);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for GridModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.grid.height as i32 {
            let line: String = (0..self.grid.width as i32)
                .map(|x| if self.grid.get(x, y) { '#' } else { '.' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
