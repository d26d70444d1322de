use log::{error, info};
use num_bigint::BigInt;
use num_rational::BigRational;

use crate::puzzle::constants::{MAX_DEPTH, PRUNE_THRESHOLD, TARGET};
use crate::puzzle::errors::PuzzleError;
use crate::puzzle::problem::Point24;
use crate::puzzle::state::PuzzleState;
use crate::puzzle::validation::validate_numbers;
use crate::search::{SearchConfig, SearchStats, Strategy, TreeSearch};

/// Configuration for the 24-point solver
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    pub target: BigRational,
    pub max_depth: usize,
    pub prune_threshold: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            target: BigRational::from_integer(BigInt::from(TARGET)),
            max_depth: MAX_DEPTH,
            prune_threshold: PRUNE_THRESHOLD,
        }
    }
}

/// A solved hand together with how the search got there
#[derive(Debug, Clone)]
pub struct Solution {
    pub expression: String,
    /// One expression per combination step, root first
    pub steps: Vec<String>,
    pub depth: usize,
    pub stats: SearchStats,
}

/// Solves 24-point hands with a Tree-of-Thoughts search
pub struct Point24Solver {
    engine: TreeSearch<Point24>,
}

impl Point24Solver {
    pub fn new(config: SolverConfig) -> Self {
        let engine = TreeSearch::new(
            Point24::new(config.target),
            SearchConfig {
                max_depth: config.max_depth,
                prune_threshold: config.prune_threshold,
            },
        );
        Self { engine }
    }

    pub fn target(&self) -> &BigRational {
        self.engine.problem().target()
    }

    pub fn search_config(&self) -> &SearchConfig {
        self.engine.config()
    }

    /// Find an expression over `numbers` that evaluates exactly to the target
    ///
    /// # Errors
    ///
    /// Returns an error if `numbers` does not hold exactly four entries or if
    /// `strategy` is not `"bfs"` or `"dfs"`. An unsolvable hand is `Ok(None)`.
    pub fn solve(&self, numbers: &[i64], strategy: &str) -> Result<Option<String>, PuzzleError> {
        Ok(self
            .solve_traced(numbers, strategy)?
            .map(|solution| solution.expression))
    }

    /// Like [`solve`](Self::solve), but also reports the steps and search counters
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve).
    pub fn solve_traced(
        &self,
        numbers: &[i64],
        strategy: &str,
    ) -> Result<Option<Solution>, PuzzleError> {
        validate_numbers(numbers)?;
        let strategy: Strategy = strategy.parse()?;
        Ok(self.solve_with(numbers, strategy))
    }

    pub(crate) fn solve_with(&self, numbers: &[i64], strategy: Strategy) -> Option<Solution> {
        info!("Solving {:?} with {} search", numbers, strategy);

        let outcome = self
            .engine
            .run(PuzzleState::from_numbers(numbers), strategy);
        let Some(goal) = outcome.goal else {
            info!("No solution for {:?}", numbers);
            return None;
        };

        let expression = answer_of(&goal.state)?.to_string();
        Some(Solution {
            expression,
            steps: goal.path(),
            depth: goal.depth,
            stats: outcome.stats,
        })
    }
}

/// The expression carried by a goal state
///
/// `Point24::is_goal` only accepts single-value states, so the fallback arm is an
/// internal invariant violation rather than an unsolvable hand.
fn answer_of(state: &PuzzleState) -> Option<&str> {
    match state.values() {
        [value] => Some(value.expression.as_str()),
        values => {
            error!(
                "Goal state holds {} values instead of one: {}",
                values.len(),
                state
            );
            debug_assert_eq!(values.len(), 1, "goal state must hold exactly one value");
            None
        }
    }
}

impl Default for Point24Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
