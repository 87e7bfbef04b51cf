//! Error types for grid searches

use crate::cell::Cell;
use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("cell {cell} lies outside the {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },

    #[error("no path found from {start} to {goal}")]
    NoPathFound { start: Cell, goal: Cell },

    #[error("search was cancelled")]
    Cancelled,

    #[error("search exceeded its time limit")]
    TimedOut,

    #[error("search gave up after expanding {limit} nodes")]
    ExpansionLimit { limit: usize },
}

impl PathError {
    /// True for errors caused by the caller handing in bad coordinates or dimensions, as
    /// opposed to outcomes of the search itself.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PathError::InvalidInput(_) | PathError::OutOfBounds { .. }
        )
    }

    /// True if the goal was shown to be unreachable.
    pub fn is_no_path(&self) -> bool {
        matches!(self, PathError::NoPathFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, PathError>;
