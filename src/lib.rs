//! tot24 - Tree-of-Thoughts search applied to the 24-point puzzle
//!
//! A generic search engine ([`search`]) explores a state space through an injected
//! [`Problem`]. The [`puzzle`] module plugs the 24-point game into it: four numbers
//! are combined pairwise with `+`, `-`, `*` and `/` using exact rational arithmetic
//! until a single value equal to 24 remains.

pub mod expression;
pub mod puzzle;
pub mod search;
pub mod survey;

// Re-export the main public API
pub use expression::{Expression, ExpressionError};
pub use puzzle::{Point24, Point24Solver, PuzzleError, Solution, SolverConfig};
pub use search::{Node, Problem, SearchConfig, SearchError, Strategy, TreeSearch};
pub use survey::{SurveyReport, survey};

/// Find an expression over four numbers that evaluates exactly to 24
///
/// This is a convenience function that creates a default solver and runs one search.
///
/// # Arguments
///
/// * `numbers` - Exactly four integers, conventionally card values 1 to 13
/// * `strategy` - `"bfs"` or `"dfs"`
///
/// # Returns
///
/// * `Ok(Some(String))` - An expression such as `(8/(3-(8/3)))`
/// * `Ok(None)` - If the hand cannot make 24
/// * `Err(PuzzleError)` - If the input or strategy is invalid
///
/// # Errors
///
/// This function will return an error if:
/// * `numbers` does not contain exactly four entries
/// * `strategy` is neither `"bfs"` nor `"dfs"`
///
/// # Examples
///
/// ```
/// use tot24::solve_24;
///
/// match solve_24(&[3, 3, 8, 8], "bfs") {
///     Ok(Some(expr)) => println!("Found: {}", expr),
///     Ok(None) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve_24(numbers: &[i64], strategy: &str) -> Result<Option<String>, PuzzleError> {
    Point24Solver::default().solve(numbers, strategy)
}
