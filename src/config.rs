use crate::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Estimate of the remaining number of steps from a cell to the goal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Heuristic {
    /// Straight-line distance. Since a diagonal step costs 1 this can exceed the true number of
    /// remaining steps, so paths are valid but not always the shortest.
    #[default]
    Euclidean,
    /// `max(|dr|, |dc|)`, the exact step count on an empty grid. Admissible and consistent for
    /// uniform-cost 8-connected movement, so the returned path has the minimum number of steps.
    Chebyshev,
}

impl Heuristic {
    pub fn estimate(&self, from: &Cell, goal: &Cell) -> f64 {
        match self {
            Heuristic::Euclidean => from.euclidean_distance(goal),
            Heuristic::Chebyshev => from.chebyshev_distance(goal) as f64,
        }
    }
}

/// Settings for [AstarSolver](crate::AstarSolver). The default reproduces a plain A* search with
/// the Euclidean heuristic and no limits.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    pub heuristic: Heuristic,
    /// Consult the grid's connected components before searching, if they are up to date.
    pub use_components: bool,
    pub max_expansions: Option<usize>,
    pub time_limit: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            heuristic: Heuristic::Euclidean,
            use_components: true,
            max_expansions: None,
            time_limit: None,
        }
    }
}

impl SearchConfig {
    /// A configuration that always returns a path with the minimum number of steps.
    pub fn optimal() -> SearchConfig {
        SearchConfig::default().with_heuristic(Heuristic::Chebyshev)
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> SearchConfig {
        self.heuristic = heuristic;
        self
    }

    pub fn with_components(mut self, use_components: bool) -> SearchConfig {
        self.use_components = use_components;
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> SearchConfig {
        self.max_expansions = Some(limit);
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> SearchConfig {
        self.time_limit = Some(limit);
        self
    }
}

/// Shared flag for aborting a running search from another thread. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Clears the flag so the token can be reused for the next search.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristics_on_diagonal() {
        let a = Cell::new(0, 0);
        let b = Cell::new(4, 4);
        assert_eq!(Heuristic::Chebyshev.estimate(&a, &b), 4.0);
        assert!((Heuristic::Euclidean.estimate(&a, &b) - 32f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn cancel_token_is_shared() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!token.is_cancelled());
        clone.cancel();
        assert!(token.is_cancelled());
        token.reset();
        assert!(!clone.is_cancelled());
    }
}
