//! The 24-point game expressed as a search [`Problem`](crate::search::Problem)

pub mod constants;
mod errors;
mod operations;
mod problem;
mod solver;
mod state;
mod validation;

pub use errors::PuzzleError;
pub use operations::combine;
pub use problem::{Point24, StateKey};
pub use solver::{Point24Solver, Solution, SolverConfig};
pub use state::{PuzzleState, Value};
pub use validation::validate_numbers;

#[cfg(test)]
mod tests;
