use log::debug;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive};

use crate::puzzle::constants::{DENOMINATOR_WEIGHT, DISTANCE_WEIGHT, TARGET};
use crate::puzzle::operations::combine;
use crate::puzzle::state::PuzzleState;
use crate::search::Problem;

/// Sorted (numerator, denominator) pairs of a state's magnitudes
pub type StateKey = Vec<(BigInt, BigInt)>;

/// The 24-point game: combine values pairwise until one equals the target
#[derive(Debug, Clone)]
pub struct Point24 {
    target: BigRational,
}

impl Point24 {
    pub fn new(target: BigRational) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &BigRational {
        &self.target
    }
}

impl Default for Point24 {
    fn default() -> Self {
        Self::new(BigRational::from_integer(BigInt::from(TARGET)))
    }
}

impl Problem for Point24 {
    type State = PuzzleState;
    type Key = StateKey;

    fn expand(&self, state: &PuzzleState) -> Vec<(PuzzleState, String)> {
        let values = state.values();
        let mut successors = Vec::new();

        for (i, a) in values.iter().enumerate() {
            for (j, b) in values.iter().enumerate().skip(i + 1) {
                let rest: Vec<_> = values
                    .iter()
                    .enumerate()
                    .filter(|&(k, _)| k != i && k != j)
                    .map(|(_, value)| value.clone())
                    .collect();

                for combined in combine(a, b) {
                    let action = combined.expression.clone();
                    let mut next = rest.clone();
                    next.push(combined);
                    successors.push((PuzzleState::new(next), action));
                }
            }
        }

        debug!("Expanded {} into {} successors", state, successors.len());
        successors
    }

    /// Blend closeness to the target with how tidy the fractions are
    fn evaluate(&self, state: &PuzzleState) -> f64 {
        let values = state.values();

        let Some(distance) = values
            .iter()
            .map(|value| (&value.magnitude - &self.target).abs())
            .min()
        else {
            return 0.0;
        };
        let distance_score = (BigRational::one() + distance)
            .recip()
            .to_f64()
            .unwrap_or(0.0);

        let denominator_score = values
            .iter()
            .map(|value| value.magnitude.denom())
            .max()
            .and_then(|den| den.to_f64())
            .map_or(0.0, |den| 1.0 / (1.0 + den));

        let score = DISTANCE_WEIGHT * distance_score + DENOMINATOR_WEIGHT * denominator_score;
        score.clamp(0.0, 1.0)
    }

    fn is_goal(&self, state: &PuzzleState) -> bool {
        matches!(state.values(), [only] if only.magnitude == self.target)
    }

    fn key(&self, state: &PuzzleState) -> StateKey {
        let mut pairs: StateKey = state
            .values()
            .iter()
            .map(|value| {
                (
                    value.magnitude.numer().clone(),
                    value.magnitude.denom().clone(),
                )
            })
            .collect();
        pairs.sort();
        pairs
    }
}
