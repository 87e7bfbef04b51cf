//! A* search over a [GridModel] with uniform step cost and 8-connected movement.
//!
//! The frontier is a binary heap with lazy deletion: a cell that is re-scored while open is
//! pushed again, and outdated entries are dropped when they surface. Predecessors and step counts
//! live in a single [CameFrom] table.
use crate::cell::Cell;
use crate::config::{CancelToken, SearchConfig};
use crate::error::{PathError, Result};
use crate::grid::GridModel;
use crate::path::{reconstruct, CameFrom, Path};
use crate::STEP_COST;
use fxhash::FxHashSet;
use log::{debug, info, trace, warn};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

struct SmallestCostHolder {
    estimated_cost: f64,
    cost: u32,
    cell: Cell,
    index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap: lowest estimate first, ties go to the lexicographically
        // smallest cell and then to the cheaper entry
        other
            .estimated_cost
            .total_cmp(&self.estimated_cost)
            .then_with(|| other.cell.cmp(&self.cell))
            .then_with(|| other.cost.cmp(&self.cost))
    }
}

/// Outcome of a successful search.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub path: Path,
    /// Number of steps from start to goal.
    pub cost: u32,
    /// Number of cells moved to the closed set, the goal included.
    pub expanded: usize,
}

#[derive(Clone, Debug, Default)]
pub struct AstarSolver {
    pub config: SearchConfig,
    cancel: Option<CancelToken>,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver::default()
    }

    pub fn with_config(config: SearchConfig) -> AstarSolver {
        AstarSolver {
            config,
            cancel: None,
        }
    }

    /// Makes every search of this solver poll `token` once per expanded cell.
    pub fn with_cancel_token(mut self, token: CancelToken) -> AstarSolver {
        self.cancel = Some(token);
        self
    }

    /// Computes a path from start to goal, see [search](Self::search).
    pub fn solve(&self, grid: &GridModel, start: Cell, goal: Cell) -> Result<Path> {
        self.search(grid, start, goal).map(|solution| solution.path)
    }

    /// Runs A* from `start` to `goal`. Both cells must lie on the grid, otherwise the call fails
    /// with [PathError::InvalidInput] naming the offending endpoint. Neither is required to
    /// be passable: the start always takes part in the search, while a blocked goal can only be
    /// reached when it coincides with the start.
    pub fn search(&self, grid: &GridModel, start: Cell, goal: Cell) -> Result<Solution> {
        for (role, cell) in [("start", start), ("goal", goal)] {
            if !grid.in_bounds(cell) {
                return Err(PathError::InvalidInput(format!(
                    "{role} {cell} lies outside the {}x{} grid",
                    grid.rows(),
                    grid.cols()
                )));
            }
        }
        if !grid.can_move_to(start) {
            warn!("Start {} is an obstacle, searching from it anyway", start);
        }
        if !grid.can_move_to(goal) {
            warn!("Goal {} is an obstacle", goal);
        }
        if start != goal
            && self.config.use_components
            && !grid.components_dirty()
            && grid.can_move_to(start)
            && grid.unreachable(start, goal)
        {
            debug!("{} is not reachable from {}", goal, start);
            return Err(PathError::NoPathFound { start, goal });
        }

        let deadline = self.config.time_limit.map(|limit| Instant::now() + limit);
        let heuristic = |cell: &Cell| self.config.heuristic.estimate(cell, &goal);

        let mut came_from = CameFrom::new(start);
        let mut closed: FxHashSet<Cell> = FxHashSet::default();
        let mut to_see = BinaryHeap::new();
        to_see.push(SmallestCostHolder {
            estimated_cost: heuristic(&start),
            cost: 0,
            cell: start,
            index: 0,
        });
        let mut expanded = 0;

        while let Some(SmallestCostHolder {
            cost, cell, index, ..
        }) = to_see.pop()
        {
            // A cell may sit in the heap several times if a cheaper way to it was found later;
            // only the cheapest entry is expanded.
            if closed.contains(&cell) {
                continue;
            }
            if came_from.get_index(index).map_or(true, |(_, g)| cost > g) {
                continue;
            }
            self.check_limits(expanded, deadline)?;
            closed.insert(cell);
            expanded += 1;
            trace!("Expanding {} (g = {})", cell, cost);

            if cell == goal {
                let path = reconstruct(&came_from, goal);
                info!(
                    "Found path from {} to {} with {} steps after expanding {} cells",
                    start, goal, cost, expanded
                );
                return Ok(Solution {
                    path,
                    cost,
                    expanded,
                });
            }

            for neighbor in grid.neighbors(cell) {
                if closed.contains(&neighbor) {
                    continue;
                }
                let tentative = cost + STEP_COST;
                if let Some(n_index) = came_from.improve(neighbor, index, tentative) {
                    to_see.push(SmallestCostHolder {
                        estimated_cost: tentative as f64 + heuristic(&neighbor),
                        cost: tentative,
                        cell: neighbor,
                        index: n_index,
                    });
                }
            }
        }
        info!(
            "No path from {} to {}, open set exhausted after expanding {} cells",
            start, goal, expanded
        );
        Err(PathError::NoPathFound { start, goal })
    }

    fn check_limits(&self, expanded: usize, deadline: Option<Instant>) -> Result<()> {
        if self.cancel.as_ref().map_or(false, CancelToken::is_cancelled) {
            warn!("Search cancelled after expanding {} cells", expanded);
            return Err(PathError::Cancelled);
        }
        if deadline.map_or(false, |d| Instant::now() >= d) {
            warn!("Search timed out after expanding {} cells", expanded);
            return Err(PathError::TimedOut);
        }
        if let Some(limit) = self.config.max_expansions {
            if expanded >= limit {
                warn!("Search reached its limit of {} expansions", limit);
                return Err(PathError::ExpansionLimit { limit });
            }
        }
        Ok(())
    }
}
