use log::{debug, warn};

use crate::puzzle::constants::CARD_COUNT;
use crate::puzzle::errors::PuzzleError;

/// # Errors
///
/// Returns an error unless exactly four numbers are supplied. Values outside the
/// usual 1..=13 card range are accepted.
pub fn validate_numbers(numbers: &[i64]) -> Result<(), PuzzleError> {
    debug!("Validating hand: {:?}", numbers);

    if numbers.len() != CARD_COUNT {
        warn!(
            "Hand has {} numbers, expected {}: {:?}",
            numbers.len(),
            CARD_COUNT,
            numbers
        );
        return Err(PuzzleError::InvalidInput {
            expected: CARD_COUNT,
            actual: numbers.len(),
        });
    }

    Ok(())
}
