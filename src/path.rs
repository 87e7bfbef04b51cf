use crate::cell::Cell;
use crate::grid::GridModel;
use core::fmt;
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use itertools::Itertools;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

const NO_PARENT: usize = usize::MAX;

/// Predecessor table of a search. Every discovered cell is stored once, together with the index
/// of the cell that currently gives it its best known step count and that step count itself.
/// Storing parents as indices into the same map keeps the chain compact.
#[derive(Clone, Debug, Default)]
pub struct CameFrom {
    entries: FxIndexMap<Cell, (usize, u32)>,
}

impl CameFrom {
    /// A table containing only the start cell, which has no predecessor and a step count of 0.
    pub fn new(start: Cell) -> CameFrom {
        let mut entries = FxIndexMap::default();
        entries.insert(start, (NO_PARENT, 0));
        CameFrom { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.entries.contains_key(cell)
    }

    /// Best known step count from the start.
    pub fn g_score(&self, cell: &Cell) -> Option<u32> {
        self.entries.get(cell).map(|&(_, g)| g)
    }

    pub fn predecessor(&self, cell: &Cell) -> Option<Cell> {
        self.entries
            .get(cell)
            .and_then(|&(parent, _)| self.entries.get_index(parent))
            .map(|(p, _)| *p)
    }

    pub(crate) fn index_of(&self, cell: &Cell) -> Option<usize> {
        self.entries.get_index_of(cell)
    }

    pub(crate) fn get_index(&self, index: usize) -> Option<(Cell, u32)> {
        self.entries.get_index(index).map(|(c, &(_, g))| (*c, g))
    }

    /// Records `parent` as predecessor of `cell` if the cell is new or `g` improves on its step
    /// count, returning the index of the cell in that case.
    pub(crate) fn improve(&mut self, cell: Cell, parent: usize, g: u32) -> Option<usize> {
        match self.entries.entry(cell) {
            Vacant(e) => {
                let index = e.index();
                e.insert((parent, g));
                Some(index)
            }
            Occupied(mut e) => {
                if g < e.get().1 {
                    e.insert((parent, g));
                    Some(e.index())
                } else {
                    None
                }
            }
        }
    }
}

/// Follows the predecessors of `goal` back to the cell without one and returns the chain in
/// start-to-goal order. A goal without an entry yields the single-cell path `[goal]`.
pub fn reconstruct(came_from: &CameFrom, goal: Cell) -> Path {
    let mut cells: Vec<Cell> = match came_from.index_of(&goal) {
        Some(index) => std::iter::successors(Some(index), |&i| {
            came_from
                .entries
                .get_index(i)
                .map(|(_, &(parent, _))| parent)
                .filter(|&p| p != NO_PARENT)
        })
        .filter_map(|i| came_from.entries.get_index(i).map(|(c, _)| *c))
        .collect(),
        None => vec![goal],
    };
    cells.reverse();
    Path { cells }
}

/// An ordered sequence of cells from start to goal, both included.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    pub fn goal(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, a path holds at least its start cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves, one less than the number of cells.
    pub fn steps(&self) -> usize {
        self.cells.len() - 1
    }

    /// The cells strictly between start and goal, i.e. the ones a display marks as path.
    pub fn interior(&self) -> &[Cell] {
        if self.cells.len() <= 2 {
            &[]
        } else {
            &self.cells[1..self.cells.len() - 1]
        }
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }

    pub fn into_vec(self) -> Vec<Cell> {
        self.cells
    }

    /// Checks that the path stays on the grid, only makes single king moves and, apart from its
    /// endpoints, avoids obstacles.
    pub fn is_valid_on(&self, grid: &GridModel) -> bool {
        let last = self.cells.len() - 1;
        self.cells.iter().enumerate().all(|(i, c)| {
            grid.is_passable(*c)
                .map_or(false, |passable| passable || i == 0 || i == last)
        }) && self.cells.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
    }
}

impl IntoIterator for Path {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.cells.iter().join(" -> "))
    }
}
