//! Solve every hand in a card range and count how many reach the target
//!
//! Each hand gets its own single-threaded search; hands are spread across rayon's
//! thread pool since no state is shared between searches.

use log::info;
use rayon::prelude::*;

use crate::puzzle::constants::CARD_COUNT;
use crate::puzzle::{Point24Solver, PuzzleError};
use crate::search::Strategy;

pub type Hand = [i64; CARD_COUNT];

/// Outcome of solving every hand in a range
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyReport {
    pub hands: usize,
    pub solvable: usize,
    /// Hands with no solution, in ascending order
    pub unsolvable: Vec<Hand>,
}

/// All non-decreasing hands `a <= b <= c <= d` drawn from `min..=max`
pub fn enumerate_hands(min: i64, max: i64) -> Vec<Hand> {
    let mut hands = Vec::new();
    for a in min..=max {
        for b in a..=max {
            for c in b..=max {
                for d in c..=max {
                    hands.push([a, b, c, d]);
                }
            }
        }
    }
    hands
}

/// # Errors
///
/// Returns an error if `strategy` is not `"bfs"` or `"dfs"`; no hand is solved in
/// that case.
pub fn survey(
    solver: &Point24Solver,
    min: i64,
    max: i64,
    strategy: &str,
) -> Result<SurveyReport, PuzzleError> {
    let strategy: Strategy = strategy.parse()?;
    let hands = enumerate_hands(min, max);
    info!(
        "Surveying {} hands in {}..={} with {} search",
        hands.len(),
        min,
        max,
        strategy
    );

    let mut unsolvable: Vec<Hand> = hands
        .par_iter()
        .filter(|hand| solver.solve_with(hand.as_slice(), strategy).is_none())
        .copied()
        .collect();
    unsolvable.sort_unstable();

    let report = SurveyReport {
        hands: hands.len(),
        solvable: hands.len() - unsolvable.len(),
        unsolvable,
    };
    info!(
        "Survey finished: {} of {} hands solvable",
        report.solvable, report.hands
    );
    Ok(report)
}
