use core::fmt;
use grid_util::point::Point;

/// A `(row, col)` coordinate on the grid. Coordinates are signed so that they map directly onto
/// a [Point] with `x = col` and `y = row`; [GridModel](crate::GridModel) rejects anything outside
/// of it.
///
/// The derived ordering is lexicographic on `(row, col)`, which is also the tie-breaking order
/// used by the search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// Whether the two cells are distinct and at most one step apart on each axis.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self != other && self.chebyshev_distance(other) <= 1
    }

    /// Straight-line distance between cell centres.
    pub fn euclidean_distance(&self, other: &Cell) -> f64 {
        let d_row = self.row as f64 - other.row as f64;
        let d_col = self.col as f64 - other.col as f64;
        (d_row * d_row + d_col * d_col).sqrt()
    }

    /// Number of king moves between two cells on an empty grid.
    pub fn chebyshev_distance(&self, other: &Cell) -> i32 {
        (self.row - other.row)
            .abs()
            .max((self.col - other.col).abs())
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Cell {
        Cell::new(row, col)
    }
}

impl From<Cell> for (i32, i32) {
    fn from(cell: Cell) -> (i32, i32) {
        (cell.row, cell.col)
    }
}

impl From<Cell> for Point {
    fn from(cell: Cell) -> Point {
        Point::new(cell.col, cell.row)
    }
}

impl From<Point> for Cell {
    fn from(point: Point) -> Cell {
        Cell::new(point.y, point.x)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
